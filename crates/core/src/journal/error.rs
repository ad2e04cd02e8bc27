//! Journal error types.
//!
//! Every validation failure is a permanent configuration error: it aborts
//! the pending write and must be corrected by the user. Nothing here is retryable.

use donation_shared::AppError;
use donation_shared::types::{AccountId, JournalId};
use thiserror::Error;

use super::types::DonationField;

/// Errors raised while configuring donation accounts on journals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    // ========== Validation Errors ==========
    /// A donation account is not reconciliable.
    #[error(
        "The {field} of journal '{journal}' must be reconciliable, \
         but the account '{account}' is not reconciliable."
    )]
    DonationAccountNotReconcilable {
        /// The offending field.
        field: DonationField,
        /// Journal display name.
        journal: String,
        /// Account display name.
        account: String,
    },

    /// The debit order donation account is not a receivable account.
    #[error(
        "The Donation by Debit Order Account of journal '{journal}' must be a receivable account, \
         but the account '{account}' is configured with type '{account_type}'."
    )]
    DebitOrderAccountNotReceivable {
        /// Journal display name.
        journal: String,
        /// Account display name.
        account: String,
        /// Label of the account's actual type.
        account_type: String,
    },

    /// A donation field references an account that does not exist.
    #[error("The {field} of journal '{journal}' references unknown account {account_id}")]
    DonationAccountNotFound {
        /// The offending field.
        field: DonationField,
        /// Journal display name.
        journal: String,
        /// The dangling reference.
        account_id: AccountId,
    },

    /// A donation account belongs to another company than the journal.
    #[error(
        "The {field} of journal '{journal}' must belong to the journal's company, \
         but the account '{account}' belongs to another company."
    )]
    CompanyMismatch {
        /// The offending field.
        field: DonationField,
        /// Journal display name.
        journal: String,
        /// Account display name.
        account: String,
    },

    /// Several journals failed validation in one write.
    #[error("{}", join_messages(.0))]
    Batch(Vec<JournalError>),

    // ========== Store Errors ==========
    /// Journal not found.
    #[error("Journal not found: {0}")]
    JournalNotFound(JournalId),

    /// A journal with this ID is already stored.
    #[error("Journal already exists: {0}")]
    JournalAlreadyExists(JournalId),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account cannot be deleted while a journal uses it for donations.
    #[error("Account '{account}' is used as {field} of journal '{journal}' and cannot be deleted")]
    AccountInUse {
        /// Account display name.
        account: String,
        /// Journal display name.
        journal: String,
        /// The referencing field.
        field: DonationField,
    },
}

fn join_messages(errors: &[JournalError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl JournalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DonationAccountNotReconcilable { .. } => "DONATION_ACCOUNT_NOT_RECONCILABLE",
            Self::DebitOrderAccountNotReceivable { .. } => "DEBIT_ORDER_ACCOUNT_NOT_RECEIVABLE",
            Self::DonationAccountNotFound { .. } => "DONATION_ACCOUNT_NOT_FOUND",
            Self::CompanyMismatch { .. } => "DONATION_ACCOUNT_COMPANY_MISMATCH",
            Self::Batch(_) => "DONATION_VALIDATION_FAILED",
            Self::JournalNotFound(_) => "JOURNAL_NOT_FOUND",
            Self::JournalAlreadyExists(_) => "JOURNAL_ALREADY_EXISTS",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountInUse { .. } => "ACCOUNT_IN_USE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::DonationAccountNotReconcilable { .. }
            | Self::DebitOrderAccountNotReceivable { .. }
            | Self::DonationAccountNotFound { .. }
            | Self::CompanyMismatch { .. }
            | Self::Batch(_) => 400,

            // 404 Not Found
            Self::JournalNotFound(_) | Self::AccountNotFound(_) => 404,

            // 409 Conflict
            Self::JournalAlreadyExists(_) | Self::AccountInUse { .. } => 409,
        }
    }

    /// Returns true if this error is a validation failure on a journal.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.http_status_code() == 400
    }

    /// Returns the individual errors, flattening a batch.
    #[must_use]
    pub fn violations(&self) -> Vec<&JournalError> {
        match self {
            Self::Batch(errors) => errors.iter().flat_map(JournalError::violations).collect(),
            other => vec![other],
        }
    }
}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        match err.http_status_code() {
            400 => Self::Validation(err.to_string()),
            404 => Self::NotFound(err.to_string()),
            409 => Self::Conflict(err.to_string()),
            _ => Self::Internal(err.to_string()),
        }
    }
}
