//! Core data structures for grid puzzles.
//!
//! This crate provides the character grid shared by the word-search puzzles and
//! the scanners that count patterns on it.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`grid`]: A grid of characters built from newline-separated text
//!    - [`position`]: `(row, col)` cell coordinates
//!    - [`direction`]: The eight compass directions used for straight-line reads
//!    - [`text`]: The line splitting shared by every puzzle input
//!
//! 2. **Scanners** - Pure, read-only pattern counters over a [`Grid`]
//!    - [`scan`]: The [`Scanner`] trait with [`LinearWordScanner`] and
//!      [`CrossPatternScanner`]
//!
//! [`Scanner`]: scan::Scanner
//! [`LinearWordScanner`]: scan::LinearWordScanner
//! [`CrossPatternScanner`]: scan::CrossPatternScanner
//!
//! # Examples
//!
//! ```
//! use advent_core::{
//!     Grid,
//!     scan::{CrossPatternScanner, LinearWordScanner, Scanner as _},
//! };
//!
//! let grid = Grid::parse("M.S\n.A.\nM.S\n");
//!
//! assert_eq!(CrossPatternScanner::new().scan(&grid, "MAS"), 1);
//! assert_eq!(LinearWordScanner::new().scan(&grid, "MAS"), 2);
//! ```

pub mod direction;
pub mod grid;
pub mod position;
pub mod scan;
pub mod text;

// Re-export commonly used types
pub use self::{direction::Direction, grid::Grid, position::Position};
