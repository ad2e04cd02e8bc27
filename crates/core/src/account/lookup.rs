//! Account resolution capability.

use std::collections::HashMap;

use donation_shared::types::AccountId;

use super::types::Account;

/// Resolves account references held by journals.
///
/// Journals store `AccountId`s only; rules read account attributes through
/// this trait so they stay independent of where accounts are kept.
pub trait AccountLookup {
    /// Returns the account with the given ID, if it exists.
    fn account(&self, id: AccountId) -> Option<&Account>;
}

impl AccountLookup for HashMap<AccountId, Account> {
    fn account(&self, id: AccountId) -> Option<&Account> {
        self.get(&id)
    }
}

impl AccountLookup for [Account] {
    fn account(&self, id: AccountId) -> Option<&Account> {
        self.iter().find(|account| account.id == id)
    }
}

impl AccountLookup for Vec<Account> {
    fn account(&self, id: AccountId) -> Option<&Account> {
        self.as_slice().account(id)
    }
}

impl<T: AccountLookup + ?Sized> AccountLookup for &T {
    fn account(&self, id: AccountId) -> Option<&Account> {
        (**self).account(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountType;
    use donation_shared::types::CompanyId;

    #[test]
    fn test_map_lookup() {
        let account = Account::new("1067", "Donations", CompanyId::new(), AccountType::Other);
        let id = account.id;
        let accounts: HashMap<_, _> = [(id, account)].into_iter().collect();

        assert_eq!(accounts.account(id).map(|a| a.code.as_str()), Some("1067"));
        assert!(accounts.account(AccountId::new()).is_none());
    }

    #[test]
    fn test_slice_lookup() {
        let company = CompanyId::new();
        let accounts = vec![
            Account::new("1067", "Donations", company, AccountType::Other),
            Account::new("4111", "Customers", company, AccountType::Receivable),
        ];
        let id = accounts[1].id;

        assert_eq!(accounts.account(id).map(|a| a.code.as_str()), Some("4111"));
        assert!((&accounts).account(AccountId::new()).is_none());
    }
}
