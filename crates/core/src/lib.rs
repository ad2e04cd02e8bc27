//! Donation account rules for accounting journals.
//!
//! This crate contains pure business logic with ZERO persistence dependencies.
//! Journals reference accounts by ID; every rule reads accounts through
//! [`account::AccountLookup`].
//!
//! # Modules
//!
//! - `account` - Ledger accounts and the lookup capability
//! - `journal` - Donation fields on journals, their validation and selection filter

pub mod account;
pub mod journal;

pub use account::{Account, AccountLookup, AccountType};
pub use journal::{DonationField, Journal, JournalError, JournalUpdate};
