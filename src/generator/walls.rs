/*
walls.rs

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

//! Place blocking walls on a solved board.
//!
//! A wall blocks the edge between two adjacent cells. Walls are placed
//! after the solution path and the numbered cells exist, and a candidate
//! wall is rejected when it would:
//!
//! * sit between two cells that are consecutive on the solution path,
//!   which would make the known solution unsolvable,
//! * touch a numbered cell, which would conflict with the fixed
//!   waypoints,
//! * duplicate a wall that is already placed, in either orientation.
//!
//! The placement loop is bounded. A board may end up with fewer walls
//! than the configured target, which is legal and not retried.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::config::{Difficulty, DifficultyConfig};
use super::grid::Cell;
use super::numbering::NumberedCell;
use super::path::Path;
use super::seeded_random::SeededRandom;

/// A blocked edge between two adjacent cells. The pair is unordered:
/// a wall between `a` and `b` is the same wall as one between `b` and
/// `a`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Wall {
    pub cell1: Cell,
    pub cell2: Cell,
}

impl Wall {
    /// Whether this wall blocks the edge between the two given cells,
    /// in either orientation.
    pub fn matches(&self, cell1: Cell, cell2: Cell) -> bool {
        (self.cell1 == cell1 && self.cell2 == cell2)
            || (self.cell1 == cell2 && self.cell2 == cell1)
    }

    /// Return the wall's cell pair with the lesser cell first, for
    /// order-independent comparisons.
    pub fn normalized(&self) -> (Cell, Cell) {
        if self.cell1 < self.cell2 {
            (self.cell1, self.cell2)
        } else {
            (self.cell2, self.cell1)
        }
    }
}

/// Place up to `config.wall_count` walls on the board.
///
/// The sampling loop draws a random cell and a random edge direction on
/// each attempt and keeps the candidate if it passes all the rejection
/// rules. The direction flag keeps the historical 1-in-3 right-wall
/// versus 2-in-3 bottom-wall weighting of the bundled banks.
pub fn place_walls(
    grid_size: usize,
    path: &Path,
    numbered_cells: &[NumberedCell],
    config: &DifficultyConfig,
    rnd: &mut SeededRandom,
) -> Vec<Wall> {
    let mut walls: Vec<Wall> = Vec::with_capacity(config.wall_count);

    // Path index of each cell, to detect path-consecutive pairs.
    let positions: HashMap<Cell, usize> = path
        .get()
        .iter()
        .enumerate()
        .map(|(i, c)| (*c, i))
        .collect();
    let numbered: HashSet<Cell> = numbered_cells.iter().map(|n| n.cell()).collect();

    let max_attempts: usize = grid_size * grid_size * 4;
    let mut attempts: usize = 0;

    while walls.len() < config.wall_count && attempts < max_attempts {
        attempts += 1;

        // Easy boards stay sparse: most attempts are skipped outright.
        if config.difficulty == Difficulty::Easy && rnd.next() > config.wall_probability {
            continue;
        }

        let row: usize = rnd.next_int(0, grid_size - 1);
        let col: usize = rnd.next_int(0, grid_size - 1);
        let direction: usize = rnd.next_int(0, 2);

        let (cell1, cell2) = if direction < 1 {
            // Right wall.
            if col + 1 >= grid_size {
                continue;
            }
            (Cell::new(row, col), Cell::new(row, col + 1))
        } else {
            // Bottom wall.
            if row + 1 >= grid_size {
                continue;
            }
            (Cell::new(row, col), Cell::new(row + 1, col))
        };

        if blocks_solution(cell1, cell2, &positions)
            || numbered.contains(&cell1)
            || numbered.contains(&cell2)
            || walls.iter().any(|w| w.matches(cell1, cell2))
        {
            continue;
        }
        walls.push(Wall { cell1, cell2 });
    }

    if walls.len() < config.wall_count {
        debug!(
            "Placed {} walls out of the {} requested after {} attempts",
            walls.len(),
            config.wall_count,
            attempts
        );
    }
    walls
}

/// Whether the two cells are consecutive on the solution path, so that a
/// wall between them would block the intended route.
fn blocks_solution(cell1: Cell, cell2: Cell, positions: &HashMap<Cell, usize>) -> bool {
    match (positions.get(&cell1), positions.get(&cell2)) {
        (Some(p1), Some(p2)) => p1.abs_diff(*p2) == 1,
        _ => false,
    }
}
