//! Property-based tests for donation account validation.

use std::collections::HashMap;

use donation_shared::BatchPolicy;
use donation_shared::types::{AccountId, CompanyId};
use proptest::prelude::*;

use super::error::JournalError;
use super::types::{DonationField, Journal};
use super::validation::{validate_donation_accounts, validate_journal};
use crate::account::{Account, AccountType};

/// Strategy to generate any account type.
fn account_type_strategy() -> impl Strategy<Value = AccountType> {
    proptest::sample::select(AccountType::ALL.to_vec())
}

/// Strategy to generate any account type except receivable.
fn non_receivable_strategy() -> impl Strategy<Value = AccountType> {
    account_type_strategy().prop_filter("non-receivable", |t| !t.is_receivable())
}

/// Optional account attributes: (type, reconcile, deprecated).
fn maybe_account() -> impl Strategy<Value = Option<(AccountType, bool, bool)>> {
    proptest::option::of((account_type_strategy(), any::<bool>(), any::<bool>()))
}

/// Builds a journal plus the accounts it references.
fn build(
    credit: Option<(AccountType, bool, bool)>,
    debit: Option<(AccountType, bool, bool)>,
) -> (Journal, HashMap<AccountId, Account>) {
    let company = CompanyId::new();
    let mut journal = Journal::new("Bank", "BNK1", company);
    let mut accounts = HashMap::new();

    let fields = [
        (DonationField::CreditTransfer, credit),
        (DonationField::DebitOrder, debit),
    ];
    for (field, attrs) in fields {
        if let Some((account_type, reconcile, deprecated)) = attrs {
            let account = Account::new("1067", "Donations", company, account_type)
                .reconcilable(reconcile)
                .deprecated(deprecated);
            journal.set_donation_account(field, Some(account.id));
            accounts.insert(account.id, account);
        }
    }

    (journal, accounts)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// With no credit transfer account, that field never causes a failure.
    #[test]
    fn prop_unset_credit_transfer_never_fails_on_that_field(debit in maybe_account()) {
        let (journal, accounts) = build(None, debit);
        if let Err(err) = validate_journal(&journal, &accounts) {
            let is_credit_transfer_error = matches!(
                err,
                JournalError::DonationAccountNotReconcilable {
                    field: DonationField::CreditTransfer,
                    ..
                }
            );
            prop_assert!(!is_credit_transfer_error);
        }
    }

    /// A non-reconciliable credit transfer account always fails, naming journal and account.
    #[test]
    fn prop_non_reconcilable_credit_transfer_fails(
        account_type in account_type_strategy(),
        deprecated in any::<bool>(),
        debit in maybe_account(),
    ) {
        let (journal, accounts) = build(Some((account_type, false, deprecated)), debit);
        let err = validate_journal(&journal, &accounts).unwrap_err();
        prop_assert!(
            matches!(
                err,
                JournalError::DonationAccountNotReconcilable {
                    field: DonationField::CreditTransfer,
                    ..
                }
            ),
            "expected credit transfer error, got: {:?}",
            err
        );
        let message = err.to_string();
        prop_assert!(message.contains("'Bank'"));
        prop_assert!(message.contains("'1067 Donations'"));
    }

    /// A reconciliable debit order account of any other type fails with its type label.
    #[test]
    fn prop_non_receivable_debit_order_fails(account_type in non_receivable_strategy()) {
        let (journal, accounts) = build(None, Some((account_type, true, false)));
        let err = validate_journal(&journal, &accounts).unwrap_err();
        prop_assert_eq!(
            err,
            JournalError::DebitOrderAccountNotReceivable {
                journal: "Bank".to_string(),
                account: "1067 Donations".to_string(),
                account_type: account_type.label().to_string(),
            }
        );
    }

    /// Reconciliable accounts with a receivable debit order account always pass.
    #[test]
    fn prop_valid_configuration_passes(
        credit_type in account_type_strategy(),
        set_credit in any::<bool>(),
        set_debit in any::<bool>(),
    ) {
        let credit = set_credit.then_some((credit_type, true, false));
        let debit = set_debit.then_some((AccountType::Receivable, true, false));
        let (journal, accounts) = build(credit, debit);
        prop_assert!(validate_journal(&journal, &accounts).is_ok());
    }

    /// Validation is read-only: repeating it gives the same outcome.
    #[test]
    fn prop_validation_is_idempotent(credit in maybe_account(), debit in maybe_account()) {
        let (journal, accounts) = build(credit, debit);
        let first = validate_journal(&journal, &accounts);
        for _ in 0..3 {
            prop_assert_eq!(&validate_journal(&journal, &accounts), &first);
        }
    }

    /// Any failing journal makes the whole write fail under either policy.
    #[test]
    fn prop_batch_fails_iff_some_journal_fails(
        configs in proptest::collection::vec((maybe_account(), maybe_account()), 0..6),
        collect_all in any::<bool>(),
    ) {
        let built: Vec<_> = configs.into_iter().map(|(c, d)| build(c, d)).collect();
        let mut accounts = HashMap::new();
        let mut journals = Vec::new();
        for (journal, owned) in built {
            accounts.extend(owned);
            journals.push(journal);
        }

        let any_invalid = journals.iter().any(|j| validate_journal(j, &accounts).is_err());
        let policy = if collect_all { BatchPolicy::CollectAll } else { BatchPolicy::FailFast };
        let result = validate_donation_accounts(&journals, &accounts, policy);
        prop_assert_eq!(result.is_err(), any_invalid);

        if collect_all {
            let failing = journals
                .iter()
                .filter(|j| validate_journal(j, &accounts).is_err())
                .count();
            let reported = result.as_ref().err().map_or(0, |err| err.violations().len());
            prop_assert_eq!(reported, failing);
        }
    }
}
