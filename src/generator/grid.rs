/*
grid.rs

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

//! Cells and adjacency in the level grid.
//!
//! The grid itself is never materialized: a level grid is the implicit
//! `grid_size x grid_size` coordinate space, and the generator tracks
//! visited state with sets of [`Cell`] values.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::path::Path;

/// Row and column offsets of the four direct neighbors, in the order top,
/// bottom, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell of the grid. Cells are plain coordinate values with no identity
/// beyond their position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Serialize a [`Cell`] object as a `[row, col]` pair, the positional
/// format used by the bundled level files.
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.row, self.col).serialize(serializer)
    }
}

/// Deserialize a [`Cell`] object from a `[row, col]` pair.
impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (row, col): (usize, usize) = Deserialize::deserialize(deserializer)?;
        Ok(Cell { row, col })
    }
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the other cell is a direct (4-directional) neighbor of this
    /// cell.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

/// Return the in-bounds direct neighbors of the given cell, in the fixed
/// top, bottom, left, right order.
pub fn neighbors(cell: Cell, grid_size: usize) -> Vec<Cell> {
    let mut result: Vec<Cell> = Vec::with_capacity(4);

    for (dr, dc) in DIRECTIONS {
        let row: isize = cell.row as isize + dr;
        let col: isize = cell.col as isize + dc;
        if row >= 0 && row < grid_size as isize && col >= 0 && col < grid_size as isize {
            result.push(Cell::new(row as usize, col as usize));
        }
    }
    result
}

/// Return the in-bounds direct neighbors of the given cell that are not
/// yet part of the path.
pub fn unvisited_neighbors(cell: Cell, grid_size: usize, path: &Path) -> Vec<Cell> {
    neighbors(cell, grid_size)
        .into_iter()
        .filter(|c| !path.contains(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_manhattan_distance_one() {
        let cell: Cell = Cell::new(2, 2);

        assert!(cell.is_adjacent(&Cell::new(1, 2)));
        assert!(cell.is_adjacent(&Cell::new(3, 2)));
        assert!(cell.is_adjacent(&Cell::new(2, 1)));
        assert!(cell.is_adjacent(&Cell::new(2, 3)));
        assert!(!cell.is_adjacent(&Cell::new(2, 2)));
        assert!(!cell.is_adjacent(&Cell::new(1, 1)));
        assert!(!cell.is_adjacent(&Cell::new(0, 2)));
    }

    #[test]
    fn neighbors_clipped_at_the_borders() {
        assert_eq!(
            neighbors(Cell::new(0, 0), 3),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(
            neighbors(Cell::new(2, 2), 3),
            vec![Cell::new(1, 2), Cell::new(2, 1)]
        );
        assert_eq!(neighbors(Cell::new(1, 1), 3).len(), 4);
        assert_eq!(neighbors(Cell::new(0, 0), 1).len(), 0);
    }

    #[test]
    fn unvisited_neighbors_skip_path_cells() {
        let mut path: Path = Path::new(9);

        path.push(Cell::new(0, 1));
        path.push(Cell::new(1, 0));
        assert_eq!(unvisited_neighbors(Cell::new(0, 0), 3, &path), vec![]);
        assert_eq!(
            unvisited_neighbors(Cell::new(1, 1), 3, &path),
            vec![Cell::new(2, 1), Cell::new(1, 2)]
        );
    }

    #[test]
    fn cell_serializes_as_positional_pair() {
        let cell: Cell = Cell::new(3, 5);
        let json: String = serde_json::to_string(&cell).expect("serializing a cell");

        assert_eq!(json, "[3,5]");
        let back: Cell = serde_json::from_str(&json).expect("deserializing a cell");
        assert_eq!(back, cell);
    }
}
