//! Boggle Solver
//!
//! Word-grid game engine: a letter trie built from a five-letter word list,
//! frequency-weighted board generation, move validation for traced paths, and
//! an exhaustive depth-first solver.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use boggle_solver::core::Board;
//! use boggle_solver::engine::Solver;
//! use boggle_solver::wordlists::loader::embedded_dictionary;
//!
//! let index = embedded_dictionary().unwrap();
//! let board: Board = "apple/zzzzz/stone/zzzzz/zzzzz".parse().unwrap();
//!
//! let words = Solver::new(&board, index.trie()).solve();
//! println!("{} words: {words:?}", words.len());
//! ```

// Core domain types
pub mod core;

// Trie and letter frequencies
pub mod dictionary;

// Board generation, move checking and solving
pub mod engine;

// Board settings shared by the commands
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
