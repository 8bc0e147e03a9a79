// src/models/mod.rs

//! Domain models for the username prober.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod platform;
mod profile;

// Re-export all public types
pub use config::{Config, PathsConfig, ProberConfig};
pub use platform::{Catalog, PlatformSpec, USERNAME_PLACEHOLDER};
pub use profile::{ProfileResult, Status};
