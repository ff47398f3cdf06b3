/*
numbering.rs

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

//! Place the numbered cells along the solution path.
//!
//! The numbered cells are the waypoints the player must reach in
//! increasing order. They are evenly spaced along the path, except that
//! the last one is always pinned to the path's true terminal cell: the
//! puzzle is only completable if the final waypoint is where the path
//! ends. The pin can leave an uneven trailing gap. The bundled level
//! banks were generated with this rule, so it must not be "fixed" to
//! even spacing.

use log::debug;

use super::config::DifficultyConfig;
use super::grid::Cell;
use super::path::Path;
use super::seeded_random::SeededRandom;
use serde::{Deserialize, Serialize};

/// A cell that carries an ordinal label.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct NumberedCell {
    pub row: usize,
    pub col: usize,
    pub number: usize,
}

impl NumberedCell {
    /// Return the grid cell this label sits on.
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

/// Select the numbered cells for a complete solution path.
///
/// The number of cells is drawn from the configured range. The cells
/// are numbered `1..=dot_count` in path order.
///
/// # Panics
///
/// Panics if the configured dot-count range allows fewer than two
/// numbered cells. The static tables guarantee at least two; anything
/// else is a programmer error, not a runtime condition.
pub fn place_numbers(
    path: &Path,
    config: &DifficultyConfig,
    rnd: &mut SeededRandom,
) -> Vec<NumberedCell> {
    assert!(
        config.min_dot_count >= 2,
        "the dot-count range must allow at least two numbered cells"
    );

    let dot_count: usize = rnd.next_int(config.min_dot_count, config.max_dot_count);
    let cells: &[Cell] = path.get();
    let spacing: usize = (cells.len() - 1) / (dot_count - 1);
    debug!("Dot count = {dot_count}  Spacing = {spacing}");

    let mut numbered: Vec<NumberedCell> = Vec::with_capacity(dot_count);
    for i in 0..dot_count - 1 {
        let cell: Cell = cells[i * spacing];
        numbered.push(NumberedCell {
            row: cell.row,
            col: cell.col,
            number: i + 1,
        });
    }

    // The last waypoint is always the path terminus, wherever the
    // arithmetic sequence would have landed.
    let last: Cell = cells[cells.len() - 1];
    numbered.push(NumberedCell {
        row: last.row,
        col: last.col,
        number: dot_count,
    });
    numbered
}
