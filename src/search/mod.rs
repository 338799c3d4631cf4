//! Search module for Gomoku AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning over speculative, self-restoring moves

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
