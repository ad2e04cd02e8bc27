//! Repository implementations for record access.

pub mod account;
pub mod journal;

pub use account::AccountRepository;
pub use journal::JournalRepository;
