//! Shared types, errors, and configuration for the donation journal extension.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe record references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, BatchPolicy};
pub use error::{AppError, AppResult};
