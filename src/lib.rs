//! Letterle
//!
//! A daily single-letter guessing game: one hidden letter per calendar day,
//! proximity feedback for every guess, and persistent statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use letterle::clock::FixedClock;
//! use letterle::config::GameConfig;
//! use letterle::core::Status;
//! use letterle::game::GameStore;
//! use letterle::storage::MemoryStorage;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let now = chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z").unwrap();
//! let mut store = GameStore::new(
//!     MemoryStorage::new(),
//!     FixedClock(now),
//!     StdRng::seed_from_u64(7),
//!     GameConfig::default(),
//! );
//! store.start().unwrap();
//!
//! let answer = store.session().answer.as_char();
//! store.guess(answer).unwrap();
//! assert_eq!(store.session().status, Status::Complete);
//! assert_eq!(store.session().history, vec![1]);
//! ```

// Alphabet and keyboard layout
pub mod alphabet;

// Time source and day boundaries
pub mod clock;

// Game settings
pub mod config;

// Core domain types and the reducer
pub mod core;

// Session lifecycle
pub mod game;

// Derived statistics and share text
pub mod stats;

// Persistence
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
