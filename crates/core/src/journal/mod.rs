//! Donation accounts on accounting journals.
//!
//! This module implements the journal-side donation configuration:
//! - Journal records with the two optional donation account references
//! - Field metadata (labels, help texts, the sibling field)
//! - Validation run whenever a donation field changes
//! - Company consistency checks for referenced accounts
//! - The selection filter offering eligible accounts to users

pub mod domain;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use domain::{DonationAccountFilter, check_company, eligible_accounts};
pub use error::JournalError;
pub use types::{DonationField, Journal, JournalUpdate};
pub use validation::{check_each, validate_donation_accounts, validate_journal};
