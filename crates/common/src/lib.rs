//! Shared error plumbing used across all build-skill crates.

pub mod error;
pub mod io;

pub use {
    error::FromMessage,
    io::{IoFailure, classify_io_error},
};
