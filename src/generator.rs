/*
generator.rs

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

//! Generate random levels.
//!
//! Generation is a pipeline that flows strictly downward, and every stage
//! draws from the same [`seeded_random::SeededRandom`] source so that a
//! level is fully reproducible from its seed:
//!
//! * The [`config::DifficultyConfig`] table fixes the grid size, the
//!   number of waypoints, and the wall budget for the requested
//!   difficulty.
//!
//! * A [`hamiltonian::HamiltonianSearch`] object finds a random path that
//!   visits every cell of the grid exactly once. The search is a
//!   depth-first backtracking search guided by Warnsdorff's heuristic.
//!   If the search exhausts its retry budget, then it returns an error.
//!   This error is retryable: the assembler restarts the whole pipeline
//!   with a fresh seed.
//!
//! * The [`numbering::place_numbers`] function picks evenly spaced cells
//!   along the path and assigns the ordinal labels shown to the player.
//!
//! * The [`walls::place_walls`] function adds blocking edges between
//!   adjacent cells, rejecting any wall that would sever the solution
//!   path or touch a numbered cell.
//!
//! * The [`assembler::generate_level`] function orchestrates the stages
//!   and retries with a fresh seed on failure. It returns a complete
//!   [`level::Level`] value, or an error after too many failed attempts.

pub mod assembler;
pub mod config;
pub mod grid;
pub mod hamiltonian;
pub mod level;
pub mod numbering;
pub mod path;
pub mod seeded_random;
pub mod walls;
