//! Game rules for freestyle Gomoku
//!
//! This module implements the rule set the search relies on:
//! - Legal move enumeration (any empty cell)
//! - Win detection (five or more in a row through the last move)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::available_moves;
pub use win::{check_win, run_length, winning_line};
