//! Donation account validation.
//!
//! Runs whenever a journal's donation fields are written. The check is
//! read-only over account attributes, so re-running it on a valid journal
//! never fails.

use donation_shared::BatchPolicy;

use super::error::JournalError;
use super::types::{DonationField, Journal};
use crate::account::{Account, AccountLookup};

/// Validates the donation accounts of a single journal.
///
/// Checks, in order, stopping at the first violation:
/// 1. The credit transfer account, if set, is reconciliable.
/// 2. The debit order account, if set, is reconciliable.
/// 3. The debit order account, if set, is a receivable account.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_journal<L>(journal: &Journal, accounts: &L) -> Result<(), JournalError>
where
    L: AccountLookup + ?Sized,
{
    if let Some(account) = resolve(journal, DonationField::CreditTransfer, accounts)?
        && !account.reconcile
    {
        return Err(not_reconcilable(journal, DonationField::CreditTransfer, account));
    }

    if let Some(account) = resolve(journal, DonationField::DebitOrder, accounts)? {
        if !account.reconcile {
            return Err(not_reconcilable(journal, DonationField::DebitOrder, account));
        }
        if !account.account_type.is_receivable() {
            return Err(JournalError::DebitOrderAccountNotReceivable {
                journal: journal.display_name().to_string(),
                account: account.display_name(),
                account_type: account.account_type.label().to_string(),
            });
        }
    }

    Ok(())
}

/// Validates the donation accounts of every journal in a write.
///
/// Each journal is checked independently. With [`BatchPolicy::FailFast`]
/// the first failing journal's error is returned; with
/// [`BatchPolicy::CollectAll`] every failing journal contributes one error,
/// wrapped in [`JournalError::Batch`] when there is more than one.
///
/// # Errors
///
/// Returns an error if any journal violates a donation account rule.
pub fn validate_donation_accounts<'a, I, L>(
    journals: I,
    accounts: &L,
    policy: BatchPolicy,
) -> Result<(), JournalError>
where
    I: IntoIterator<Item = &'a Journal>,
    L: AccountLookup + ?Sized,
{
    check_each(journals, policy, |journal| validate_journal(journal, accounts))
}

/// Runs `check` on every journal of a write and reports failures per `policy`.
///
/// Each journal contributes at most one error. With [`BatchPolicy::FailFast`]
/// the first error is returned as is; with [`BatchPolicy::CollectAll`] all
/// errors are returned, wrapped in [`JournalError::Batch`] when there are
/// several.
///
/// # Errors
///
/// Returns an error if `check` fails for any journal.
pub fn check_each<'a, I, F>(
    journals: I,
    policy: BatchPolicy,
    mut check: F,
) -> Result<(), JournalError>
where
    I: IntoIterator<Item = &'a Journal>,
    F: FnMut(&Journal) -> Result<(), JournalError>,
{
    let mut failures = Vec::new();

    for journal in journals {
        if let Err(err) = check(journal) {
            match policy {
                BatchPolicy::FailFast => return Err(err),
                BatchPolicy::CollectAll => failures.push(err),
            }
        }
    }

    match failures.len() {
        0 => Ok(()),
        1 => Err(failures.remove(0)),
        _ => Err(JournalError::Batch(failures)),
    }
}

/// Resolves the account behind a donation field; `None` when the field is empty.
pub(crate) fn resolve<'l, L>(
    journal: &Journal,
    field: DonationField,
    accounts: &'l L,
) -> Result<Option<&'l Account>, JournalError>
where
    L: AccountLookup + ?Sized,
{
    let Some(account_id) = journal.donation_account(field) else {
        return Ok(None);
    };

    accounts
        .account(account_id)
        .map(Some)
        .ok_or_else(|| JournalError::DonationAccountNotFound {
            field,
            journal: journal.display_name().to_string(),
            account_id,
        })
}

fn not_reconcilable(journal: &Journal, field: DonationField, account: &Account) -> JournalError {
    JournalError::DonationAccountNotReconcilable {
        field,
        journal: journal.display_name().to_string(),
        account: account.display_name(),
    }
}
