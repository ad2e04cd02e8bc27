//! Account domain types.

use donation_shared::types::{AccountId, CompanyId};
use serde::{Deserialize, Serialize};

/// Account type classification.
///
/// Only `Receivable` carries meaning for donation rules, but the full
/// set is kept so error messages can name whatever type an account has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Amounts owed to the organization.
    Receivable,
    /// Amounts the organization owes.
    Payable,
    /// Bank and cash.
    Liquidity,
    /// Current assets.
    CurrentAssets,
    /// Current liabilities.
    CurrentLiabilities,
    /// Equity.
    Equity,
    /// Income.
    Income,
    /// Expenses.
    Expense,
    /// Anything else.
    Other,
}

impl AccountType {
    /// All account types, in display order.
    pub const ALL: [Self; 9] = [
        Self::Receivable,
        Self::Payable,
        Self::Liquidity,
        Self::CurrentAssets,
        Self::CurrentLiabilities,
        Self::Equity,
        Self::Income,
        Self::Expense,
        Self::Other,
    ];

    /// Parse an account type from its internal code.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "receivable" => Some(Self::Receivable),
            "payable" => Some(Self::Payable),
            "liquidity" => Some(Self::Liquidity),
            "current_assets" => Some(Self::CurrentAssets),
            "current_liabilities" => Some(Self::CurrentLiabilities),
            "equity" => Some(Self::Equity),
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Returns the internal code of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Receivable => "receivable",
            Self::Payable => "payable",
            Self::Liquidity => "liquidity",
            Self::CurrentAssets => "current_assets",
            Self::CurrentLiabilities => "current_liabilities",
            Self::Equity => "equity",
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Other => "other",
        }
    }

    /// Returns the user-facing label of the type.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Receivable => "Receivable",
            Self::Payable => "Payable",
            Self::Liquidity => "Bank and Cash",
            Self::CurrentAssets => "Current Assets",
            Self::CurrentLiabilities => "Current Liabilities",
            Self::Equity => "Equity",
            Self::Income => "Income",
            Self::Expense => "Expenses",
            Self::Other => "Other",
        }
    }

    /// Returns true for receivable accounts.
    #[must_use]
    pub fn is_receivable(&self) -> bool {
        matches!(self, Self::Receivable)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A ledger account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account code (e.g., "4111").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Company owning the account.
    pub company_id: CompanyId,
    /// Type classification.
    pub account_type: AccountType,
    /// Whether offsetting entries on this account can be matched.
    pub reconcile: bool,
    /// Deprecated accounts can no longer be selected.
    pub deprecated: bool,
}

impl Account {
    /// Creates an active, non-reconciliable account with a fresh ID.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        company_id: CompanyId,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: AccountId::new(),
            code: code.into(),
            name: name.into(),
            company_id,
            account_type,
            reconcile: false,
            deprecated: false,
        }
    }

    /// Sets the reconcile flag.
    #[must_use]
    pub fn reconcilable(mut self, reconcile: bool) -> Self {
        self.reconcile = reconcile;
        self
    }

    /// Sets the deprecated flag.
    #[must_use]
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Name shown to users: code followed by name.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.code.clone()
        } else {
            format!("{} {}", self.code, self.name)
        }
    }

    /// Returns true if the account may be offered as a donation account
    /// on a journal of `company_id`.
    #[must_use]
    pub fn is_selectable_for(&self, company_id: CompanyId) -> bool {
        self.reconcile && !self.deprecated && self.company_id == company_id
    }
}
