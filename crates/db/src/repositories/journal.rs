//! Journal repository.
//!
//! Every path that writes a donation field runs the donation account checks
//! against the candidate records before anything is stored.

use std::collections::HashMap;

use donation_core::account::{Account, AccountType};
use donation_core::journal::{
    DonationField, Journal, JournalError, JournalUpdate, check_company, check_each,
    eligible_accounts, validate_journal,
};
use donation_shared::types::{AccountId, JournalId};
use donation_shared::{AppConfig, BatchPolicy};
use tracing::{debug, info, warn};

use super::account::AccountRepository;

/// In-memory journals together with the accounts they reference.
#[derive(Debug, Clone, Default)]
pub struct JournalRepository {
    accounts: AccountRepository,
    journals: HashMap<JournalId, Journal>,
    policy: BatchPolicy,
}

impl JournalRepository {
    /// Creates an empty repository using `policy` for multi-journal writes.
    #[must_use]
    pub fn new(policy: BatchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Creates an empty repository configured from `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.validation.batch_policy)
    }

    /// Reporting policy for multi-journal writes.
    #[must_use]
    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    /// Read access to the chart of accounts.
    #[must_use]
    pub fn accounts(&self) -> &AccountRepository {
        &self.accounts
    }

    /// Inserts or replaces an account.
    pub fn insert_account(&mut self, account: Account) -> AccountId {
        debug!(account_id = %account.id, code = %account.code, "Storing account");
        self.accounts.insert(account)
    }

    /// Deletes an account that no journal uses for donations.
    ///
    /// # Errors
    ///
    /// Returns `AccountInUse` while a donation field references the account,
    /// `AccountNotFound` if it does not exist.
    pub fn delete_account(&mut self, id: AccountId) -> Result<Account, JournalError> {
        let account = self
            .accounts
            .find_by_id(id)
            .ok_or(JournalError::AccountNotFound(id))?;

        if let Some((journal, field)) = self.donation_reference(id) {
            let err = JournalError::AccountInUse {
                account: account.display_name(),
                journal: journal.display_name().to_string(),
                field,
            };
            warn!(
                account_id = %id,
                journal_id = %journal.id,
                error_code = err.error_code(),
                "Account deletion refused"
            );
            return Err(err);
        }

        self.accounts
            .remove(id)
            .ok_or(JournalError::AccountNotFound(id))
    }

    /// Finds a journal by ID.
    #[must_use]
    pub fn find_by_id(&self, id: JournalId) -> Option<&Journal> {
        self.journals.get(&id)
    }

    /// Lists all journals ordered by name.
    #[must_use]
    pub fn list(&self) -> Vec<&Journal> {
        let mut journals: Vec<_> = self.journals.values().collect();
        journals.sort_by(|a, b| a.name.cmp(&b.name));
        journals
    }

    /// Stores a new journal after checking its donation accounts.
    ///
    /// # Errors
    ///
    /// Returns `JournalAlreadyExists` if the ID is taken, otherwise the first
    /// donation account violation of the journal.
    pub fn create(&mut self, journal: Journal) -> Result<JournalId, JournalError> {
        if self.journals.contains_key(&journal.id) {
            let err = JournalError::JournalAlreadyExists(journal.id);
            warn!(
                journal_id = %journal.id,
                error_code = err.error_code(),
                "Journal create refused"
            );
            return Err(err);
        }
        self.check(&journal)?;

        let id = journal.id;
        info!(journal_id = %id, name = %journal.name, "Journal created");
        self.journals.insert(id, journal);
        Ok(id)
    }

    /// Applies `update` to a journal.
    ///
    /// Donation checks run only when the update writes a donation field.
    ///
    /// # Errors
    ///
    /// Returns `JournalNotFound` or the first donation account violation;
    /// the stored journal is left unchanged on error.
    pub fn update(
        &mut self,
        id: JournalId,
        update: &JournalUpdate,
    ) -> Result<&Journal, JournalError> {
        let current = self
            .journals
            .get(&id)
            .ok_or(JournalError::JournalNotFound(id))?;
        let candidate = current.apply(update);

        if update.touches_donation_fields() {
            self.check(&candidate)?;
        } else {
            debug!(journal_id = %id, "No donation field written, skipping donation checks");
        }

        info!(
            journal_id = %id,
            donation_account_id = ?candidate.donation_account_id,
            donation_debit_order_account_id = ?candidate.donation_debit_order_account_id,
            "Journal updated"
        );
        Ok(self.journals.entry(id).insert_entry(candidate).into_mut())
    }

    /// Applies several updates as one write.
    ///
    /// All journals whose donation fields are written are validated
    /// together under the repository's [`BatchPolicy`]; nothing is stored
    /// unless every check passes.
    ///
    /// # Errors
    ///
    /// Returns `JournalNotFound` for an unknown ID, otherwise the validation
    /// failure(s) as reported by the policy.
    pub fn update_many(
        &mut self,
        updates: &[(JournalId, JournalUpdate)],
    ) -> Result<(), JournalError> {
        // Later updates of the same journal build on earlier ones.
        let mut staged: Vec<(Journal, bool)> = Vec::with_capacity(updates.len());
        for (id, update) in updates {
            let touched = update.touches_donation_fields();
            match staged.iter().position(|(journal, _)| journal.id == *id) {
                Some(index) => {
                    let slot = &mut staged[index];
                    slot.0 = slot.0.apply(update);
                    slot.1 |= touched;
                }
                None => {
                    let current = self
                        .journals
                        .get(id)
                        .ok_or(JournalError::JournalNotFound(*id))?;
                    staged.push((current.apply(update), touched));
                }
            }
        }

        let to_check: Vec<&Journal> = staged
            .iter()
            .filter(|(_, touched)| *touched)
            .map(|(journal, _)| journal)
            .collect();

        let checked = check_each(to_check.iter().copied(), self.policy, |journal| {
            self.donation_checks(journal)
        });
        if let Err(err) = checked {
            warn!(
                journals = to_check.len(),
                error_code = err.error_code(),
                %err,
                "Journal batch rejected"
            );
            return Err(err);
        }

        info!(journals = staged.len(), "Journal batch written");
        for (journal, _) in staged {
            self.journals.insert(journal.id, journal);
        }
        Ok(())
    }

    /// Copies a journal under a new ID. Donation accounts are not copied.
    ///
    /// # Errors
    ///
    /// Returns `JournalNotFound` if the source journal does not exist.
    pub fn copy(&mut self, id: JournalId) -> Result<JournalId, JournalError> {
        let source = self
            .journals
            .get(&id)
            .ok_or(JournalError::JournalNotFound(id))?;

        let copy = source.duplicate(JournalId::new());
        let copy_id = copy.id;
        info!(source_id = %id, journal_id = %copy_id, "Journal copied");
        self.journals.insert(copy_id, copy);
        Ok(copy_id)
    }

    /// Accounts that may be offered for `field` on a journal, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns `JournalNotFound` if the journal does not exist.
    pub fn eligible_accounts(
        &self,
        id: JournalId,
        field: DonationField,
    ) -> Result<Vec<&Account>, JournalError> {
        let journal = self
            .journals
            .get(&id)
            .ok_or(JournalError::JournalNotFound(id))?;
        Ok(eligible_accounts(
            journal,
            field,
            self.accounts.list_for_company(journal.company_id),
        ))
    }

    /// Journals collecting debit order donations on an account of `account_type`.
    #[must_use]
    pub fn debit_order_journals(&self, account_type: AccountType) -> Vec<&Journal> {
        self.list()
            .into_iter()
            .filter(|journal| {
                journal
                    .donation_debit_order_account_id
                    .and_then(|id| self.accounts.find_by_id(id))
                    .is_some_and(|account| account.account_type == account_type)
            })
            .collect()
    }

    /// Donation rules first, then company consistency.
    fn donation_checks(&self, journal: &Journal) -> Result<(), JournalError> {
        validate_journal(journal, &self.accounts)
            .and_then(|()| check_company(journal, &self.accounts))
    }

    fn check(&self, journal: &Journal) -> Result<(), JournalError> {
        let result = self.donation_checks(journal);
        if let Err(err) = &result {
            warn!(
                journal_id = %journal.id,
                error_code = err.error_code(),
                %err,
                "Journal write rejected"
            );
        }
        result
    }

    fn donation_reference(&self, account_id: AccountId) -> Option<(&Journal, DonationField)> {
        self.journals.values().find_map(|journal| {
            DonationField::ALL
                .into_iter()
                .find(|field| journal.donation_account(*field) == Some(account_id))
                .map(|field| (journal, field))
        })
    }
}
