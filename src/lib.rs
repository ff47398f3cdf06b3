/*
lib.rs

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

//! Procedural generator for numbered-path grid puzzles.
//!
//! A level is a square grid holding one hidden solution: a single
//! self-avoiding path that visits every cell exactly once. Some of the
//! cells along the path carry ordinal numbers that the player must reach
//! in increasing order, and walls block some edges between adjacent cells
//! without ever contradicting the solution.
//!
//! The [`generator::assembler::generate_level`] function is the main entry
//! point. Given a [`generator::config::Difficulty`] and an optional seed,
//! it returns a fully validated [`generator::level::Level`] value, or an
//! error when the bounded retry loop is exhausted.
//!
//! The `fillpath` binary drives the same pipeline to produce the level
//! banks that ship with the game as static JSON data.

pub mod cli_options;
pub mod generator;

pub use generator::assembler::{
    DEFAULT_MAX_ATTEMPTS, EntropySource, GenerateError, SystemEntropy, daily_seed,
    generate_daily_level, generate_level, generate_random_level,
};
pub use generator::config::Difficulty;
pub use generator::level::{FormattedLevel, Level, WallSide};
