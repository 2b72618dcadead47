//! End-to-end bookkeeping scenarios across accounts, cards, and branches.

use bancosim_core::{transfer, Account, Branch, FixedIds};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn deposit_withdraw_reject_sequence() {
    // Start at 0, deposit 500, withdraw 200, then fail to withdraw 2000.
    let mut account = Account::new("Lucas", "111.222.333-44", 1234, 4321);
    assert_eq!(account.balance(), dec!(0));

    account.deposit(dec!(500));
    assert_eq!(account.balance(), dec!(500));

    account.withdraw(dec!(200)).expect("within limit");
    assert_eq!(account.balance(), dec!(300));
    assert_eq!(account.overdraft_limit(), dec!(-1000));

    assert!(account.withdraw(dec!(2000)).is_err());
    assert_eq!(account.balance(), dec!(300));
    assert_eq!(account.transactions().len(), 2);
}

#[test]
fn deposits_sum_and_history_is_ordered() {
    let mut account = Account::new("Lucas", "111.222.333-44", 1234, 4321);
    let amounts = [dec!(10), dec!(250.75), dec!(0.25), dec!(-5), dec!(100)];

    for amount in amounts {
        account.deposit(amount);
    }

    let expected: Decimal = amounts.iter().copied().sum();
    assert_eq!(account.balance(), expected);
    assert_eq!(account.transactions().len(), amounts.len());

    let stamps: Vec<_> = account
        .transactions()
        .iter()
        .map(|t| t.timestamp())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn transfer_is_all_or_nothing() {
    let mut lucas = Account::new("Lucas", "111.222.333-44", 1234, 4321);
    let mut maria = Account::new("Maria", "555.666.777-88", 1234, 8765);
    lucas.deposit(dec!(500));

    transfer(&mut lucas, &mut maria, dec!(150)).expect("within limit");
    assert_eq!(lucas.balance(), dec!(350));
    assert_eq!(maria.balance(), dec!(150));

    assert!(transfer(&mut lucas, &mut maria, dec!(10_000)).is_err());
    assert_eq!(lucas.balance(), dec!(350));
    assert_eq!(maria.balance(), dec!(150));
}

#[test]
fn card_lifecycle_on_account() {
    let mut account = Account::new("Lucas", "111.222.333-44", 1234, 4321);
    let mut ids = FixedIds::default();

    let card = account.issue_card(&mut ids);
    assert_eq!(card.access_code(), "1234");

    card.set_access_code("4563").expect("valid code");
    assert!(card.set_access_code("senha").is_err());
    assert_eq!(card.access_code(), "4563");

    // The account keeps the issued card; the card points back by number only.
    assert_eq!(account.cards().len(), 1);
    assert_eq!(account.cards()[0].account_number(), 4321);
}

#[test]
fn premium_branch_client_examples() {
    let mut ids = FixedIds::default();
    let mut premium = Branch::premium("31-9888-8888", "00.111.222/0001-44", &mut ids);

    premium
        .add_client("Rico", "555.666.777-88", dec!(2_000_000))
        .expect("above the minimum");
    assert!(premium
        .add_client("Joe", "111.222.333-44", dec!(2000))
        .is_err());

    assert_eq!(premium.clients().len(), 1);
    assert_eq!(premium.clients()[0].name, "Rico");
}

#[test]
fn loan_ledger_keeps_reserve_untouched() {
    let mut ids = FixedIds::default();
    let mut branch = Branch::standard("31-9999-9999", "00.111.222/0001-33", &mut ids);
    let before = branch.reserve();

    branch
        .record_loan(dec!(999_999), "111.222.333-44", dec!(0.015))
        .expect("strictly below the reserve");

    assert_eq!(branch.loans().len(), 1);
    assert_eq!(branch.reserve(), before);
}

#[test]
fn virtual_branch_external_float() {
    let mut branch =
        Branch::virtual_branch("www.bancovirtual.com", "00.111.222/0001-55", "31-9777-7777");

    branch.deposit_to_external(dec!(50_000)).expect("virtual");
    branch.withdraw_from_external(dec!(20_000)).expect("virtual");

    assert_eq!(branch.reserve(), dec!(970_000));
    assert_eq!(branch.external_balance(), Some(dec!(30_000)));
    assert!(!branch.check_reserve().is_healthy());
}
