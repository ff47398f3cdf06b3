/*
hamiltonian.rs

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

//! Generate a random Hamiltonian path over the grid.
//!
//! The search is a randomized depth-first search with backtracking,
//! guided by Warnsdorff's heuristic: always prefer extending the path
//! to the neighbor with the fewest remaining unvisited neighbors, which
//! avoids painting the search into early dead ends. Ties are broken by a
//! seeded shuffle, so the whole search is deterministic for a given seed.
//!
//! Walls do not exist at this stage. They are placed after a full path
//! exists and are never allowed to contradict it.

use log::debug;
use std::time::Instant;

use super::grid::{self, Cell};
use super::path::Path;
use super::seeded_random::SeededRandom;

/// Default bound on failed branches before the search gives up.
pub const DEFAULT_MAX_RETRIES: usize = 1000;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PathError {
    /// The search space is exhausted without finding a path.
    NoPath,

    /// The retry budget is exhausted. The caller can retry with a fresh
    /// seed.
    RetriesExceeded,
}

/// Hamiltonian path search over a square grid.
pub struct HamiltonianSearch {
    /// Width and height of the grid.
    grid_size: usize,

    /// Number of cells in the grid.
    total: usize,

    /// Bound on failed branches before the search gives up.
    pub max_retries: usize,

    /// Number of failed branches so far.
    retries: usize,

    /// Memoized count of unvisited neighbors, indexed by
    /// `row * grid_size + col`. An entry is invalidated for a cell and
    /// its four neighbors whenever a cell is pushed or popped.
    neighbor_counts: Vec<Option<u8>>,

    /// Number of search steps it took to generate the last path.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last path.
    pub duration: f32,

    /// Time when the search started. Used to compute the
    /// [`HamiltonianSearch::duration`].
    start: Instant,
}

impl HamiltonianSearch {
    /// Create the object for a `grid_size x grid_size` grid.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            total: grid_size * grid_size,
            max_retries: DEFAULT_MAX_RETRIES,
            retries: 0,
            neighbor_counts: Vec::new(),
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a random Hamiltonian path. The starting cell
    /// is drawn from the given random source.
    ///
    /// # Errors
    ///
    /// The method returns an error if no path is found within the retry
    /// budget. The error is retryable: rerunning the pipeline with a
    /// fresh seed is the expected recovery, not a fatal condition.
    pub fn generate(&mut self, rnd: &mut SeededRandom) -> Result<Path, PathError> {
        self.iteration = 0;
        self.retries = 0;
        self.duration = 0.0;
        self.start = Instant::now();
        self.neighbor_counts = vec![None; self.total];

        if self.grid_size == 0 {
            return Err(PathError::NoPath);
        }

        let start_cell: Cell = Cell::new(
            rnd.next_int(0, self.grid_size - 1),
            rnd.next_int(0, self.grid_size - 1),
        );
        debug!(
            "Starting cell = ({}, {})  Grid size = {}",
            start_cell.row, start_cell.col, self.grid_size
        );

        let mut path: Path = Path::new(self.total);
        path.push(start_cell);

        let res: Result<(), PathError> = self.find_path(start_cell, &mut path, rnd);
        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Retries = {}  Duration = {}",
            self.iteration, self.retries, self.duration
        );
        res.map(|()| path)
    }

    /// Recursively extend the path from the current cell.
    fn find_path(
        &mut self,
        current: Cell,
        path: &mut Path,
        rnd: &mut SeededRandom,
    ) -> Result<(), PathError> {
        if path.len() == self.total {
            return Ok(());
        }
        self.iteration += 1;

        let mut neighbors: Vec<Cell> = grid::unvisited_neighbors(current, self.grid_size, path);

        // Dead end with an incomplete path: backtrack immediately.
        if neighbors.is_empty() {
            debug!(
                "    Back: cell ({}, {}) has no unvisited neighbor",
                current.row, current.col
            );
            return Err(PathError::NoPath);
        }

        // Warnsdorff's rule: try the most constrained neighbor first.
        // The shuffle before the stable sort breaks ties randomly, which
        // keeps the search from getting stuck in local patterns.
        rnd.shuffle(&mut neighbors);
        let mut candidates: Vec<(Cell, u8)> = neighbors
            .into_iter()
            .map(|c| {
                let count: u8 = self.neighbor_count(c, path);
                (c, count)
            })
            .collect();
        candidates.sort_by_key(|&(_, count)| count);

        for (next, _) in candidates {
            path.push(next);
            self.invalidate_counts(next);

            match self.find_path(next, path, rnd) {
                Ok(()) => return Ok(()),
                Err(PathError::RetriesExceeded) => return Err(PathError::RetriesExceeded),
                Err(PathError::NoPath) => {
                    path.pop();
                    self.invalidate_counts(next);
                    self.retries += 1;
                    if self.retries >= self.max_retries {
                        debug!("Retry budget ({}) exhausted", self.max_retries);
                        return Err(PathError::RetriesExceeded);
                    }
                }
            }
        }
        Err(PathError::NoPath)
    }

    /// Return the number of unvisited neighbors of the given cell,
    /// memoized until a push or a pop invalidates the entry.
    fn neighbor_count(&mut self, cell: Cell, path: &Path) -> u8 {
        let index: usize = cell.row * self.grid_size + cell.col;

        match self.neighbor_counts[index] {
            Some(count) => count,
            None => {
                let count: u8 = grid::unvisited_neighbors(cell, self.grid_size, path).len() as u8;
                self.neighbor_counts[index] = Some(count);
                count
            }
        }
    }

    /// Invalidate the memoized neighbor counts of the given cell and of
    /// its four neighbors.
    fn invalidate_counts(&mut self, cell: Cell) {
        self.neighbor_counts[cell.row * self.grid_size + cell.col] = None;
        for n in grid::neighbors(cell, self.grid_size) {
            self.neighbor_counts[n.row * self.grid_size + n.col] = None;
        }
    }
}
