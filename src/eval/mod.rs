//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions:
//! - [`line`]: measures the run through a stone along one axis
//! - [`patterns`]: turns a run's length and open ends into points
//! - [`heuristic`]: sums those points over the whole board

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_board};
pub use line::{scan_line, LineScan};
pub use patterns::{is_decisive, line_score, PatternScore};
