//! Core types and trait definitions for the survey backend.
//!
//! This crate has no HTTP or database dependencies.
//! The store, API and server crates all depend on it.

pub mod error;
pub mod record;
pub mod report;
pub mod seed;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
