/*
path.rs

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

//! Path over the level grid.

use std::collections::HashSet;

use super::grid::Cell;

/// Ordered sequence of cells.
///
/// A complete solution path visits every cell of the grid exactly once,
/// with every consecutive pair of cells 4-adjacent.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Cell>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Cell>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object with room for the given number of cells.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
            visited: HashSet::with_capacity(num_cells),
        }
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Cell) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) {
        if let Some(c) = self.path.pop() {
            self.visited.remove(&c);
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the cells of the path in order.
    pub fn get(&self) -> &[Cell] {
        &self.path
    }

    /// Return the first cell in the path.
    pub fn first(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn last(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Consume the path and return the cell sequence.
    pub fn into_cells(self) -> Vec<Cell> {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_track_membership() {
        let mut path: Path = Path::new(4);

        assert!(path.is_empty());
        path.push(Cell::new(0, 0));
        path.push(Cell::new(0, 1));
        assert_eq!(path.len(), 2);
        assert!(path.contains(Cell::new(0, 1)));
        assert_eq!(path.first(), Some(Cell::new(0, 0)));
        assert_eq!(path.last(), Some(Cell::new(0, 1)));

        path.pop();
        assert!(!path.contains(Cell::new(0, 1)));
        assert_eq!(path.last(), Some(Cell::new(0, 0)));
    }

    #[test]
    fn pop_on_empty_path_is_a_no_op() {
        let mut path: Path = Path::new(0);

        path.pop();
        assert!(path.is_empty());
        assert_eq!(path.first(), None);
        assert_eq!(path.last(), None);
    }

    #[test]
    fn equality_compares_the_sequence_only() {
        let mut path1: Path = Path::new(2);
        let mut path2: Path = Path::new(8);

        path1.push(Cell::new(1, 1));
        path2.push(Cell::new(1, 1));
        assert_eq!(path1, path2);

        path2.push(Cell::new(1, 2));
        assert_ne!(path1, path2);
    }
}
