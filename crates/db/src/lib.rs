//! Record store for journals and accounts.
//!
//! This crate provides:
//! - An account repository implementing the account lookup capability
//! - A journal repository whose write paths run the donation account checks
//!
//! Writes are all-or-nothing: a failed check leaves stored records untouched.

pub mod repositories;

pub use repositories::{AccountRepository, JournalRepository};
