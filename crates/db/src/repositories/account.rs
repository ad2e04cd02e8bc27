//! Account repository.

use std::collections::HashMap;

use donation_core::account::{Account, AccountLookup};
use donation_shared::types::{AccountId, CompanyId};

/// In-memory chart of accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountRepository {
    accounts: HashMap<AccountId, Account>,
}

impl AccountRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an account.
    pub fn insert(&mut self, account: Account) -> AccountId {
        let id = account.id;
        self.accounts.insert(id, account);
        id
    }

    /// Finds an account by ID.
    #[must_use]
    pub fn find_by_id(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Lists accounts of a company ordered by code.
    #[must_use]
    pub fn list_for_company(&self, company_id: CompanyId) -> Vec<&Account> {
        let mut accounts: Vec<_> = self
            .accounts
            .values()
            .filter(|account| account.company_id == company_id)
            .collect();
        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        accounts
    }

    /// Removes an account. Callers check references first.
    pub(crate) fn remove(&mut self, id: AccountId) -> Option<Account> {
        self.accounts.remove(&id)
    }

    /// Number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no account is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountLookup for AccountRepository {
    fn account(&self, id: AccountId) -> Option<&Account> {
        self.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use donation_core::account::AccountType;

    #[test]
    fn test_insert_and_find() {
        let mut repo = AccountRepository::new();
        assert!(repo.is_empty());

        let company = CompanyId::new();
        let id = repo.insert(Account::new("1067", "Donations", company, AccountType::Other));

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.account(id).map(Account::display_name), Some("1067 Donations".to_string()));
        assert!(repo.find_by_id(AccountId::new()).is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut repo = AccountRepository::new();
        let account = Account::new("1067", "Donations", CompanyId::new(), AccountType::Other);
        let id = repo.insert(account.clone());
        repo.insert(account.reconcilable(true));

        assert_eq!(repo.len(), 1);
        assert!(repo.find_by_id(id).is_some_and(|a| a.reconcile));
    }

    #[test]
    fn test_list_for_company_sorted() {
        let mut repo = AccountRepository::new();
        let company = CompanyId::new();
        repo.insert(Account::new("4112", "Customers", company, AccountType::Receivable));
        repo.insert(Account::new("1067", "Donations", company, AccountType::Other));
        repo.insert(Account::new("2000", "Elsewhere", CompanyId::new(), AccountType::Other));

        let codes: Vec<_> = repo
            .list_for_company(company)
            .into_iter()
            .map(|a| a.code.as_str())
            .collect();
        assert_eq!(codes, vec!["1067", "4112"]);
    }

    #[test]
    fn test_remove() {
        let mut repo = AccountRepository::new();
        let account = Account::new("1067", "Donations", CompanyId::new(), AccountType::Other);
        let id = repo.insert(account);
        assert!(repo.remove(id).is_some());
        assert!(repo.remove(id).is_none());
    }
}
