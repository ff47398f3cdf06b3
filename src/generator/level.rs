/*
level.rs

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

//! Level values and the renderer-ready formatted representation.
//!
//! A [`Level`] is the terminal output of the generation pipeline. It is
//! an immutable value: once produced it is handed to the game layer and
//! never touched by the generator again.
//!
//! The board renderer indexes walls by cell and side rather than by cell
//! pair, so a second representation exists: [`FormattedLevel`] flattens
//! the numbered cells to `(row, col, number)` triples and expands each
//! wall into two directional `(row, col, side)` entries. The expansion is
//! pure and lossless, and the side ordinals are a bit-for-bit contract
//! with the renderer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::FromRepr;

use super::config::Difficulty;
use super::grid::Cell;
use super::numbering::NumberedCell;
use super::walls::Wall;

/// Side of a cell, as the ordinal codes the board renderer keys off.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum WallSide {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

/// A complete, solvable level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub grid_size: usize,
    pub numbered_cells: Vec<NumberedCell>,
    pub difficulty: Difficulty,
    pub solution_path: Vec<Cell>,
    pub seed: u64,
    pub walls: Vec<Wall>,
}

/// A level re-expressed the way the board renderer consumes it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedLevel {
    pub grid_size: usize,
    /// `(row, col, number)` triples.
    pub numbers: Vec<(usize, usize, usize)>,
    pub difficulty: Difficulty,
    pub solution_path: Vec<Cell>,
    pub seed: u64,
    /// `(row, col, side)` triples, two per wall, with the side ordinals
    /// of [`WallSide`].
    pub walls: Vec<(usize, usize, u8)>,
}

impl Level {
    /// Re-express the level for the board renderer.
    ///
    /// Each wall expands into one entry per cell of the blocked edge:
    /// the wall between a cell and its right neighbor becomes a `Right`
    /// side on the first cell and a `Left` side on the neighbor, and
    /// likewise for vertical walls.
    pub fn format(&self) -> FormattedLevel {
        let numbers: Vec<(usize, usize, usize)> = self
            .numbered_cells
            .iter()
            .map(|c| (c.row, c.col, c.number))
            .collect();

        let mut walls: Vec<(usize, usize, u8)> = Vec::with_capacity(self.walls.len() * 2);
        for wall in &self.walls {
            let (c1, c2) = (wall.cell1, wall.cell2);
            if c1.row == c2.row {
                if c1.col < c2.col {
                    walls.push((c1.row, c1.col, WallSide::Right as u8));
                    walls.push((c2.row, c2.col, WallSide::Left as u8));
                } else {
                    walls.push((c1.row, c1.col, WallSide::Left as u8));
                    walls.push((c2.row, c2.col, WallSide::Right as u8));
                }
            } else if c1.col == c2.col {
                if c1.row < c2.row {
                    walls.push((c1.row, c1.col, WallSide::Bottom as u8));
                    walls.push((c2.row, c2.col, WallSide::Top as u8));
                } else {
                    walls.push((c1.row, c1.col, WallSide::Top as u8));
                    walls.push((c2.row, c2.col, WallSide::Bottom as u8));
                }
            }
        }

        FormattedLevel {
            grid_size: self.grid_size,
            numbers,
            difficulty: self.difficulty,
            solution_path: self.solution_path.clone(),
            seed: self.seed,
            walls,
        }
    }

    /// Return the set of blocked edges as normalized cell pairs.
    pub fn blocked_edges(&self) -> HashSet<(Cell, Cell)> {
        self.walls.iter().map(Wall::normalized).collect()
    }
}

impl FormattedLevel {
    /// Reconstruct the set of blocked edges from the directional side
    /// entries, as normalized cell pairs. Inverse of the wall expansion
    /// in [`Level::format`].
    pub fn blocked_edges(&self) -> HashSet<(Cell, Cell)> {
        let mut edges: HashSet<(Cell, Cell)> = HashSet::with_capacity(self.walls.len() / 2);

        for &(row, col, side) in &self.walls {
            let Some(side) = WallSide::from_repr(side) else {
                continue;
            };
            let cell: Cell = Cell::new(row, col);
            let other: Cell = match side {
                WallSide::Top if row > 0 => Cell::new(row - 1, col),
                WallSide::Bottom => Cell::new(row + 1, col),
                WallSide::Left if col > 0 => Cell::new(row, col - 1),
                WallSide::Right => Cell::new(row, col + 1),
                _ => continue,
            };
            edges.insert(if cell < other {
                (cell, other)
            } else {
                (other, cell)
            });
        }
        edges
    }
}
