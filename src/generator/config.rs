/*
config.rs

Copyright 2025 The Fillpath developers

This file is part of Fillpath.

Fillpath is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option)
any later version.

Fillpath is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
details.

You should have received a copy of the GNU General Public License along
with Fillpath. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Static per-difficulty generation parameters.
//!
//! The table values are part of the level-bank contract: the bundled
//! levels were generated with them, so changing a value changes the
//! boards that players reproduce from a given seed.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Level difficulty.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl Difficulty {
    /// Return the difficulty for the given level counter of the player's
    /// progression.
    ///
    /// The progression is a coarse three-tier threshold: the first twenty
    /// levels are easy, the next twenty are medium, and everything after
    /// that is hard.
    pub fn from_level(current_level: usize) -> Self {
        if current_level < 20 {
            Difficulty::Easy
        } else if current_level < 40 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}

/// Generation parameters for one difficulty.
#[derive(Debug, Clone)]
pub struct DifficultyConfig {
    /// Width and height of the grid.
    pub grid_size: usize,

    /// Lower bound for the number of numbered cells. Must be at least 2,
    /// since the spacing formula divides by `dot_count - 1`.
    pub min_dot_count: usize,

    /// Upper bound (inclusive) for the number of numbered cells.
    pub max_dot_count: usize,

    /// Informational minimum spacing between numbered cells. The spacing
    /// formula does not enforce it; the field is carried because the
    /// bundled tables have it.
    pub min_spacing: usize,

    /// Informational retry budget carried from the bundled tables. The
    /// path search uses its own default bound.
    pub retry_attempts: usize,

    /// Target number of walls. Boards may end up with fewer walls when
    /// the placement loop runs out of attempts.
    pub wall_count: usize,

    /// On easy boards, each placement attempt only proceeds with this
    /// probability, which makes easy boards sparser than their nominal
    /// wall count.
    pub wall_probability: f64,

    /// The difficulty this configuration belongs to.
    pub difficulty: Difficulty,
}

const EASY: DifficultyConfig = DifficultyConfig {
    grid_size: 6,
    min_dot_count: 3,
    max_dot_count: 7,
    min_spacing: 2,
    retry_attempts: 100,
    wall_count: 4,
    wall_probability: 0.2,
    difficulty: Difficulty::Easy,
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    grid_size: 8,
    min_dot_count: 4,
    max_dot_count: 8,
    min_spacing: 4,
    retry_attempts: 100,
    wall_count: 9,
    wall_probability: 0.4,
    difficulty: Difficulty::Medium,
};

const HARD: DifficultyConfig = DifficultyConfig {
    grid_size: 10,
    min_dot_count: 7,
    max_dot_count: 7,
    min_spacing: 8,
    retry_attempts: 100,
    wall_count: 16,
    wall_probability: 0.5,
    difficulty: Difficulty::Hard,
};

/// Return the static configuration for the given difficulty.
pub fn config(difficulty: Difficulty) -> &'static DifficultyConfig {
    match difficulty {
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
    }
}
