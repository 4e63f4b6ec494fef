// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the chunkwise grouping library.
//!
//! This crate provides the fixture types and error-injection helpers used by
//! the workspace test suites. It is designed for use in development and
//! testing only, not for production code.
//!
//! # Key Types
//!
//! ## `Person`
//!
//! The canonical grouping fixture, carrying a name and a surname:
//!
//! ```rust
//! use chunkwise_test_utils::test_data::{person_mario_rossi, two_families};
//!
//! let mario = person_mario_rossi();
//! assert_eq!(mario.surname, "Rossi");
//!
//! // Five Rossi followed by three Bianchi
//! assert_eq!(two_families().len(), 8);
//! ```
//!
//! ## Error injection
//!
//! [`failing_sink`] and [`failing_rule`] build callbacks that fail at a
//! chosen position, for testing that a grouping call aborts immediately and
//! keeps already-delivered groups delivered.

pub mod error_injection;
pub mod person;
pub mod test_data;

pub use error_injection::{failing_rule, failing_sink};
pub use person::Person;
