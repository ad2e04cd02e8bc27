//! Journal domain types.

use donation_shared::types::{AccountId, CompanyId, JournalId};
use serde::{Deserialize, Serialize};

/// One of the two donation account references a journal can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationField {
    /// Transfer account for donations received by credit transfer.
    CreditTransfer,
    /// Transfer account for donations collected by debit order.
    DebitOrder,
}

impl DonationField {
    /// Both fields, in validation order.
    pub const ALL: [Self; 2] = [Self::CreditTransfer, Self::DebitOrder];

    /// Returns the field name on the journal record.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditTransfer => "donation_account_id",
            Self::DebitOrder => "donation_debit_order_account_id",
        }
    }

    /// Returns the user-facing field label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditTransfer => "Donation by Credit Transfer Account",
            Self::DebitOrder => "Donation by Debit Order Account",
        }
    }

    /// Returns the help text shown next to the field.
    #[must_use]
    pub fn help(&self) -> &'static str {
        match self {
            Self::CreditTransfer => {
                "Transfer account for donations received by credit transfer. \
                 Leave empty if you don't receive donations on this bank account."
            }
            Self::DebitOrder => {
                "Transfer account for donations by debit order. \
                 Leave empty if you don't handle donations by debit order on this bank account. \
                 This account must be a receivable account, \
                 otherwise the debit order will not work."
            }
        }
    }

    /// Returns the sibling donation field.
    #[must_use]
    pub fn other(&self) -> Self {
        match self {
            Self::CreditTransfer => Self::DebitOrder,
            Self::DebitOrder => Self::CreditTransfer,
        }
    }

    /// Returns true if the referenced account must be receivable.
    #[must_use]
    pub fn requires_receivable(&self) -> bool {
        matches!(self, Self::DebitOrder)
    }
}

impl std::fmt::Display for DonationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An accounting journal (e.g., a bank account) with its donation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Unique identifier.
    pub id: JournalId,
    /// Journal name, used as its display name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Company owning the journal.
    pub company_id: CompanyId,
    /// Default account of the journal.
    pub default_account_id: Option<AccountId>,
    /// Suspense account for bank statement lines.
    pub suspense_account_id: Option<AccountId>,
    /// Outstanding receipts account.
    pub payment_credit_account_id: Option<AccountId>,
    /// Outstanding payments account.
    pub payment_debit_account_id: Option<AccountId>,
    /// Donations received by credit transfer. `None` disables the channel.
    pub donation_account_id: Option<AccountId>,
    /// Donations collected by debit order. `None` disables the channel.
    pub donation_debit_order_account_id: Option<AccountId>,
}

impl Journal {
    /// Creates a journal with no accounts configured.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>, company_id: CompanyId) -> Self {
        Self {
            id: JournalId::new(),
            name: name.into(),
            code: code.into(),
            company_id,
            default_account_id: None,
            suspense_account_id: None,
            payment_credit_account_id: None,
            payment_debit_account_id: None,
            donation_account_id: None,
            donation_debit_order_account_id: None,
        }
    }

    /// Name shown to users.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Returns the account referenced by a donation field.
    #[must_use]
    pub fn donation_account(&self, field: DonationField) -> Option<AccountId> {
        match field {
            DonationField::CreditTransfer => self.donation_account_id,
            DonationField::DebitOrder => self.donation_debit_order_account_id,
        }
    }

    /// Sets or clears a donation field.
    pub fn set_donation_account(&mut self, field: DonationField, account_id: Option<AccountId>) {
        match field {
            DonationField::CreditTransfer => self.donation_account_id = account_id,
            DonationField::DebitOrder => self.donation_debit_order_account_id = account_id,
        }
    }

    /// Accounts that may not be chosen for `field`: the journal's own
    /// accounts and the current value of the sibling donation field.
    #[must_use]
    pub fn reserved_accounts(&self, field: DonationField) -> Vec<AccountId> {
        [
            self.default_account_id,
            self.suspense_account_id,
            self.payment_credit_account_id,
            self.payment_debit_account_id,
            self.donation_account(field.other()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Returns a copy stored under `id`.
    ///
    /// Donation accounts are not carried over to the copy.
    #[must_use]
    pub fn duplicate(&self, id: JournalId) -> Self {
        Self {
            id,
            name: format!("{} (copy)", self.name),
            donation_account_id: None,
            donation_debit_order_account_id: None,
            ..self.clone()
        }
    }

    /// Applies an update, returning the candidate record.
    #[must_use]
    pub fn apply(&self, update: &JournalUpdate) -> Self {
        let mut next = self.clone();
        if let Some(name) = &update.name {
            next.name.clone_from(name);
        }
        if let Some(account_id) = update.donation_account_id {
            next.donation_account_id = account_id;
        }
        if let Some(account_id) = update.donation_debit_order_account_id {
            next.donation_debit_order_account_id = account_id;
        }
        next
    }
}

/// Changes to a journal.
///
/// For donation fields the outer `Option` says whether the field is written,
/// the inner one whether it is set or cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalUpdate {
    /// New journal name.
    pub name: Option<String>,
    /// New credit transfer donation account.
    pub donation_account_id: Option<Option<AccountId>>,
    /// New debit order donation account.
    pub donation_debit_order_account_id: Option<Option<AccountId>>,
}

impl JournalUpdate {
    /// Update writing one donation field.
    #[must_use]
    pub fn donation(field: DonationField, account_id: Option<AccountId>) -> Self {
        let mut update = Self::default();
        match field {
            DonationField::CreditTransfer => update.donation_account_id = Some(account_id),
            DonationField::DebitOrder => update.donation_debit_order_account_id = Some(account_id),
        }
        update
    }

    /// Returns true if the update writes either donation field.
    #[must_use]
    pub fn touches_donation_fields(&self) -> bool {
        self.donation_account_id.is_some() || self.donation_debit_order_account_id.is_some()
    }
}
