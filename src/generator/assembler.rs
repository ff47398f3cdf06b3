/*
assembler.rs

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

//! Assemble complete levels from the pipeline stages.
//!
//! One generation attempt runs path search, numbering, and wall placement
//! in order. A failed path search is a retryable event: the assembler
//! draws a fresh seed from its entropy source and restarts the whole
//! pipeline. Only when `max_attempts` attempts are exhausted does the
//! failure surface to the caller, and in that case no partial level is
//! ever returned.

use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt;

use super::config::{self, Difficulty, DifficultyConfig};
use super::hamiltonian::HamiltonianSearch;
use super::level::Level;
use super::numbering;
use super::path::Path;
use super::seeded_random::SeededRandom;
use super::walls;

/// Default number of full pipeline attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Source of fresh seeds for the retry loop.
///
/// Keeping this behind a trait lets tests supply deterministic reseed
/// sequences where production draws from the process entropy.
pub trait EntropySource {
    /// Return a fresh seed.
    fn next_seed(&mut self) -> u64;
}

/// Production entropy source, backed by the process random number
/// generator.
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn next_seed(&mut self) -> u64 {
        rand::rng().random()
    }
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// All pipeline attempts failed.
    Exhausted {
        /// Number of attempts that were made.
        attempts: usize,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::Exhausted { attempts } => {
                write!(f, "failed to generate level after {attempts} attempts")
            }
        }
    }
}

impl Error for GenerateError {}

/// Generate a level for the given difficulty.
///
/// When `seed` is provided, the first attempt is fully deterministic.
/// Retries always draw fresh seeds from the system entropy.
///
/// # Errors
///
/// The function returns [`GenerateError::Exhausted`] when `max_attempts`
/// pipeline attempts all failed to find a solution path.
pub fn generate_level(
    difficulty: Difficulty,
    seed: Option<u64>,
    max_attempts: usize,
) -> Result<Level, GenerateError> {
    generate_with_config(
        config::config(difficulty),
        seed,
        max_attempts,
        &mut SystemEntropy,
    )
}

/// Generate a level from an explicit configuration and entropy source.
///
/// [`generate_level`] is this function with the static table and the
/// system entropy plugged in.
pub fn generate_with_config(
    cfg: &DifficultyConfig,
    seed: Option<u64>,
    max_attempts: usize,
    entropy: &mut dyn EntropySource,
) -> Result<Level, GenerateError> {
    let mut real_seed: u64 = match seed {
        Some(s) => s,
        None => entropy.next_seed(),
    };
    let mut attempts: usize = 0;

    while attempts < max_attempts {
        let mut rnd: SeededRandom = SeededRandom::new(real_seed);
        let mut search: HamiltonianSearch = HamiltonianSearch::new(cfg.grid_size);

        match search.generate(&mut rnd) {
            Ok(path) => {
                debug!(
                    "Path found for seed {real_seed}: iterations = {}  duration = {}s",
                    search.iteration, search.duration
                );
                return Ok(assemble(cfg, path, real_seed, &mut rnd));
            }
            Err(e) => {
                attempts += 1;
                debug!("Path search failed for seed {real_seed} ({e:?}), attempt {attempts}");
                real_seed = entropy.next_seed();
            }
        }
    }
    Err(GenerateError::Exhausted {
        attempts: max_attempts,
    })
}

/// Run the numbering and wall stages on a complete path and build the
/// level value.
fn assemble(cfg: &DifficultyConfig, path: Path, seed: u64, rnd: &mut SeededRandom) -> Level {
    let numbered_cells = numbering::place_numbers(&path, cfg, rnd);
    let walls = walls::place_walls(cfg.grid_size, &path, &numbered_cells, cfg, rnd);

    Level {
        grid_size: cfg.grid_size,
        numbered_cells,
        difficulty: cfg.difficulty,
        solution_path: path.into_cells(),
        seed,
        walls,
    }
}

/// Return the seed for the daily level of the given date.
///
/// The formula uses a zero-based month, matching the seeds the bundled
/// daily boards were generated with.
pub fn daily_seed(date: NaiveDate) -> u64 {
    (date.day() + date.month0() * 31) as u64 + date.year() as u64 * 365
}

/// Generate today's daily level.
///
/// The seed derives from the calendar date and the difficulty is fixed
/// to easy, so every player sees the same board on a given date.
pub fn generate_daily_level() -> Result<Level, GenerateError> {
    let today: NaiveDate = Local::now().date_naive();
    generate_level(Difficulty::Easy, Some(daily_seed(today)), DEFAULT_MAX_ATTEMPTS)
}

/// Generate a level with an unspecified, entropy-based seed.
pub fn generate_random_level(difficulty: Difficulty) -> Result<Level, GenerateError> {
    generate_level(difficulty, None, DEFAULT_MAX_ATTEMPTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Cell;
    use std::collections::HashSet;

    /// Entropy source that returns a scripted sequence and counts the
    /// draws.
    struct CountingEntropy {
        calls: usize,
    }

    impl EntropySource for CountingEntropy {
        fn next_seed(&mut self) -> u64 {
            self.calls += 1;
            self.calls as u64
        }
    }

    fn assert_valid(level: &Level) {
        let cfg = config::config(level.difficulty);
        let total: usize = level.grid_size * level.grid_size;

        assert_eq!(level.grid_size, cfg.grid_size);

        // Hamiltonian completeness: every cell exactly once.
        assert_eq!(level.solution_path.len(), total);
        let unique: HashSet<Cell> = level.solution_path.iter().copied().collect();
        assert_eq!(unique.len(), total);

        // Connectivity.
        for pair in level.solution_path.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }

        // Numbering: consecutive labels from 1, strictly increasing in
        // path order, last one pinned to the path terminus.
        assert!(
            (cfg.min_dot_count..=cfg.max_dot_count).contains(&level.numbered_cells.len())
        );
        let mut previous_index: Option<usize> = None;
        for (i, n) in level.numbered_cells.iter().enumerate() {
            assert_eq!(n.number, i + 1);
            let index: usize = level
                .solution_path
                .iter()
                .position(|c| *c == n.cell())
                .expect("numbered cell on the path");
            if let Some(p) = previous_index {
                assert!(index > p);
            }
            previous_index = Some(index);
        }
        let last = level.numbered_cells.last().expect("at least two numbers");
        assert_eq!(
            last.cell(),
            *level.solution_path.last().expect("non-empty path")
        );

        // Walls: adjacent pairs, never path-consecutive, never on a
        // numbered cell, no duplicates.
        let numbered: HashSet<Cell> = level.numbered_cells.iter().map(|n| n.cell()).collect();
        for wall in &level.walls {
            assert!(wall.cell1.is_adjacent(&wall.cell2));
            assert!(!numbered.contains(&wall.cell1));
            assert!(!numbered.contains(&wall.cell2));
            for pair in level.solution_path.windows(2) {
                assert!(!wall.matches(pair[0], pair[1]));
            }
        }
        assert_eq!(level.blocked_edges().len(), level.walls.len());
        assert!(level.walls.len() <= cfg.wall_count);
    }

    #[test]
    fn easy_seed_42_regression_vector() {
        let level: Level = generate_level(Difficulty::Easy, Some(42), DEFAULT_MAX_ATTEMPTS)
            .expect("level for seed 42");

        assert_eq!(level.seed, 42);
        assert_eq!(level.grid_size, 6);
        assert_eq!(level.solution_path.len(), 36);
        assert!((3..=7).contains(&level.numbered_cells.len()));
        assert!(level.walls.len() <= 4);
        assert_valid(&level);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        // Scripted entropy keeps the runs identical even if the first
        // seed were to need a retry.
        let cfg = config::config(Difficulty::Easy);
        let level1: Level =
            generate_with_config(cfg, Some(777), 5, &mut CountingEntropy { calls: 0 })
                .expect("level");
        let level2: Level =
            generate_with_config(cfg, Some(777), 5, &mut CountingEntropy { calls: 0 })
                .expect("level");

        assert_eq!(level1, level2);
    }

    #[test]
    fn all_difficulties_produce_valid_levels() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let level: Level = generate_level(difficulty, Some(2024), DEFAULT_MAX_ATTEMPTS)
                .unwrap_or_else(|e| panic!("level for {difficulty}: {e}"));

            assert_eq!(level.difficulty, difficulty);
            assert_valid(&level);
        }
    }

    #[test]
    fn formatted_levels_round_trip_their_walls() {
        let level: Level = generate_level(Difficulty::Medium, Some(31337), DEFAULT_MAX_ATTEMPTS)
            .expect("level");
        let formatted = level.format();

        assert_eq!(formatted.walls.len(), level.walls.len() * 2);
        assert_eq!(formatted.blocked_edges(), level.blocked_edges());
    }

    #[test]
    fn daily_seed_formula() {
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date");

        // 30 + 7 * 31 + 2026 * 365
        assert_eq!(daily_seed(date), 739_737);
    }

    #[test]
    fn daily_seed_is_stable_for_a_date() {
        let date: NaiveDate = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        let seed: u64 = daily_seed(date);

        let cfg = config::config(Difficulty::Easy);
        let level1: Level =
            generate_with_config(cfg, Some(seed), 5, &mut CountingEntropy { calls: 0 })
                .expect("level");
        let level2: Level =
            generate_with_config(cfg, Some(seed), 5, &mut CountingEntropy { calls: 0 })
                .expect("level");
        assert_eq!(level1, level2);
    }

    #[test]
    fn daily_level_is_easy_and_valid() {
        let level: Level = generate_daily_level().expect("daily level");

        assert_eq!(level.difficulty, Difficulty::Easy);
        assert_valid(&level);
    }

    #[test]
    fn random_level_is_valid() {
        let level: Level = generate_random_level(Difficulty::Easy).expect("random level");

        assert_valid(&level);
    }

    #[test]
    fn exhaustion_raises_after_exactly_max_attempts() {
        // A zero-size grid can never hold a path, so every attempt fails
        // deterministically.
        let cfg = DifficultyConfig {
            grid_size: 0,
            ..config::config(Difficulty::Easy).clone()
        };
        let mut entropy = CountingEntropy { calls: 0 };

        let result = generate_with_config(&cfg, Some(1), 5, &mut entropy);
        assert_eq!(result, Err(GenerateError::Exhausted { attempts: 5 }));
        // One reseed per failed attempt; the initial seed was provided.
        assert_eq!(entropy.calls, 5);
    }

    #[test]
    fn exhaustion_error_message() {
        let error = GenerateError::Exhausted { attempts: 5 };

        assert_eq!(error.to_string(), "failed to generate level after 5 attempts");
    }
}
