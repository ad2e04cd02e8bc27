//! Ledger accounts as seen by journal configuration.
//!
//! - Account records and their type classification
//! - The lookup capability used to resolve account references

pub mod lookup;
pub mod types;

pub use lookup::AccountLookup;
pub use types::{Account, AccountType};
