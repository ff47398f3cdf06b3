/*
cli_options.rs

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

//! Process command-line options.
//!
//! The `fillpath` binary is the offline half of the pipeline: it
//! generates batches of levels and writes them as the JSON banks that
//! ship with the game as static data. The game never generates a level
//! bank at runtime; it only consumes these files.
//!
//! # Examples
//!
//! Generate a reproducible bank of one hundred easy levels:
//!
//! ```text
//! $ fillpath -f easy -c 100 -s 1000 -o easy.json
//! ```
//!
//! Inspect a single raw level on stdout, with search tracing:
//!
//! ```text
//! $ fillpath -f hard -c 1 --raw --debug
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use std::collections::HashSet;

use crate::generator::assembler::{self, DEFAULT_MAX_ATTEMPTS};
use crate::generator::config::Difficulty;
use crate::generator::grid::Cell;
use crate::generator::level::{FormattedLevel, Level};
use crate::generator::walls::Wall;

/// Build level banks for the game's bundled static data.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Difficulty level of the generated levels
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed of the first level; level `i` of the bank uses `seed + i`,
    /// making the whole bank reproducible
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit raw level records instead of the renderer-ready format
    #[arg(short, long, default_value_t = false)]
    raw: bool,

    /// Write the JSON bank to the file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print some statistics after generating the levels
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options and run the bank generation.
///
/// Return the process exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut levels: Vec<Level> = Vec::with_capacity(args.count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;

    for i in 0..args.count {
        debug!("Generating level {i}");
        let seed: Option<u64> = args.seed.map(|s| s + i as u64);
        let start: Instant = Instant::now();

        match assembler::generate_level(args.difficulty, seed, DEFAULT_MAX_ATTEMPTS) {
            Ok(level) => {
                let duration: f32 = start.elapsed().as_secs_f32();
                total += duration;
                if duration > max {
                    max = duration;
                }
                verify(&level);
                levels.push(level);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }

    let json: String = if args.raw {
        serde_json::to_string_pretty(&levels)
    } else {
        let formatted: Vec<FormattedLevel> = levels.iter().map(Level::format).collect();
        serde_json::to_string_pretty(&formatted)
    }
    .expect("Cannot serialize the level bank");

    match &args.output {
        Some(path) => {
            let file: File = match File::create(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Error: cannot create {}: {e}", path.display());
                    return 1;
                }
            };
            let mut writer: BufWriter<File> = BufWriter::new(file);
            if let Err(e) = writer.write_all(json.as_bytes()) {
                eprintln!("Error: cannot write {}: {e}", path.display());
                return 1;
            }
        }
        None => println!("{json}"),
    }

    // Print some stats
    if args.summary {
        eprintln!(
            "
        levels = {}
    total time = {}s
  average time = {}s
      max time = {}s",
            levels.len(),
            total,
            total / args.count as f32,
            max
        );
    }
    0
}

/// Re-verify a generated level before it enters a bank.
///
/// The generator upholds these invariants by construction; a violation
/// here is a bug, and shipping a broken bank would be worse than
/// aborting, so the checks panic.
fn verify(level: &Level) {
    let total: usize = level.grid_size * level.grid_size;

    if level.solution_path.len() != total {
        eprintln!(
            "Wrong length: {} instead of {}: {:?}",
            level.solution_path.len(),
            total,
            level.solution_path
        );
        panic!("Bug: wrong length for the generated path");
    }

    let mut p = level.solution_path.clone();
    p.sort_unstable();
    p.dedup();
    if p.len() != total {
        eprintln!("Duplicated cells in path: {:?}", level.solution_path);
        panic!("Bug: duplicated cells in generated path");
    }

    for pair in level.solution_path.windows(2) {
        if !pair[0].is_adjacent(&pair[1]) {
            eprintln!("Disconnected cells {:?} and {:?}", pair[0], pair[1]);
            panic!("Bug: generated path is not connected");
        }
    }

    let numbered: HashSet<Cell> = level.numbered_cells.iter().map(|n| n.cell()).collect();
    for wall in &level.walls {
        if !wall.cell1.is_adjacent(&wall.cell2) {
            eprintln!("Wall between non-adjacent cells: {wall:?}");
            panic!("Bug: wall between non-adjacent cells");
        }
        if numbered.contains(&wall.cell1) || numbered.contains(&wall.cell2) {
            eprintln!("Wall touches a numbered cell: {wall:?}");
            panic!("Bug: wall touches a numbered cell");
        }
        for pair in level.solution_path.windows(2) {
            if wall.matches(pair[0], pair[1]) {
                eprintln!("Wall blocks the solution path: {wall:?}");
                panic!("Bug: wall blocks the solution path");
            }
        }
    }

    let mut edges: Vec<(Cell, Cell)> = level.walls.iter().map(Wall::normalized).collect();
    edges.sort_unstable();
    edges.dedup();
    if edges.len() != level.walls.len() {
        eprintln!("Duplicated walls: {:?}", level.walls);
        panic!("Bug: duplicated walls");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::assembler::generate_level;
    use crate::generator::numbering::NumberedCell;

    /// A minimal legal 3x3 level to corrupt in the verification tests.
    fn tiny_level() -> Level {
        Level {
            grid_size: 3,
            numbered_cells: vec![
                NumberedCell {
                    row: 0,
                    col: 0,
                    number: 1,
                },
                NumberedCell {
                    row: 2,
                    col: 2,
                    number: 2,
                },
            ],
            difficulty: Difficulty::Easy,
            solution_path: vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(1, 1),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
            ],
            seed: 1,
            walls: Vec::new(),
        }
    }

    #[test]
    #[should_panic(expected = "wall touches a numbered cell")]
    fn verification_rejects_walls_on_numbered_cells() {
        let mut level: Level = tiny_level();

        // (0, 0) carries number 1, and sits at path index 0 while
        // (1, 0) sits at index 5, so only the numbered-cell rule fires.
        level.walls.push(Wall {
            cell1: Cell::new(0, 0),
            cell2: Cell::new(1, 0),
        });
        verify(&level);
    }

    #[test]
    #[should_panic(expected = "duplicated walls")]
    fn verification_rejects_duplicate_walls() {
        let mut level: Level = tiny_level();

        // (0, 1) and (1, 1) are neither path-consecutive nor numbered,
        // so the wall is legal on its own; only its duplicate is not.
        level.walls.push(Wall {
            cell1: Cell::new(0, 1),
            cell2: Cell::new(1, 1),
        });
        level.walls.push(Wall {
            cell1: Cell::new(1, 1),
            cell2: Cell::new(0, 1),
        });
        verify(&level);
    }

    #[test]
    fn generated_levels_pass_verification() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let level: Level =
                generate_level(difficulty, Some(4242), DEFAULT_MAX_ATTEMPTS).expect("level");

            verify(&level);
        }
    }

    #[test]
    fn bank_serializes_as_a_json_array() {
        let level: Level =
            generate_level(Difficulty::Easy, Some(55), DEFAULT_MAX_ATTEMPTS).expect("level");
        let bank: Vec<FormattedLevel> = vec![level.format()];
        let json: String = serde_json::to_string(&bank).expect("serializing a bank");

        assert!(json.starts_with('['));
        let back: Vec<FormattedLevel> = serde_json::from_str(&json).expect("deserializing a bank");
        assert_eq!(back, bank);
    }
}
