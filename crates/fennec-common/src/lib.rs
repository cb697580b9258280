//! Common utilities for the Fennec selector compiler.
//!
//! This crate provides shared infrastructure used by the compiler crates:
//! - **Warning System** - colored terminal output for selector features
//!   that compile to a never-matching expression

pub mod warning;
