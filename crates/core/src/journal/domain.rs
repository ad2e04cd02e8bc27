//! Which accounts a donation field may reference.
//!
//! The selection filter narrows the accounts offered to users; the company
//! check is enforced on every write.

use donation_shared::types::{AccountId, CompanyId};
use serde::Serialize;

use super::error::JournalError;
use super::types::{DonationField, Journal};
use super::validation::resolve;
use crate::account::{Account, AccountLookup};

/// Selection filter for one donation field of one journal.
///
/// Matches reconciliable, non-deprecated accounts of the journal's company
/// that are not already used by the journal, restricted to receivable
/// accounts for the debit order field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationAccountFilter {
    /// Field being filled.
    pub field: DonationField,
    /// Company the account must belong to.
    pub company_id: CompanyId,
    /// Accounts that may not be chosen.
    pub excluded: Vec<AccountId>,
    /// Whether only receivable accounts qualify.
    pub require_receivable: bool,
}

impl DonationAccountFilter {
    /// Builds the filter from the journal's current values.
    #[must_use]
    pub fn for_field(journal: &Journal, field: DonationField) -> Self {
        Self {
            field,
            company_id: journal.company_id,
            excluded: journal.reserved_accounts(field),
            require_receivable: field.requires_receivable(),
        }
    }

    /// Returns true if `account` may be offered for the field.
    #[must_use]
    pub fn matches(&self, account: &Account) -> bool {
        account.is_selectable_for(self.company_id)
            && (!self.require_receivable || account.account_type.is_receivable())
            && !self.excluded.contains(&account.id)
    }
}

/// Lists the accounts that may be chosen for `field` on `journal`.
pub fn eligible_accounts<'a, I>(
    journal: &Journal,
    field: DonationField,
    accounts: I,
) -> Vec<&'a Account>
where
    I: IntoIterator<Item = &'a Account>,
{
    let filter = DonationAccountFilter::for_field(journal, field);
    accounts
        .into_iter()
        .filter(|account| filter.matches(account))
        .collect()
}

/// Checks that every donation account belongs to the journal's company.
///
/// # Errors
///
/// Returns an error for the first donation field whose account is unknown
/// or owned by another company.
pub fn check_company<L>(journal: &Journal, accounts: &L) -> Result<(), JournalError>
where
    L: AccountLookup + ?Sized,
{
    for field in DonationField::ALL {
        if let Some(account) = resolve(journal, field, accounts)?
            && account.company_id != journal.company_id
        {
            return Err(JournalError::CompanyMismatch {
                field,
                journal: journal.display_name().to_string(),
                account: account.display_name(),
            });
        }
    }
    Ok(())
}
