//! The demonstration scenario: wires accounts, cards, and the three branch
//! kinds together and prints the reports along the way.

use anyhow::Result;
use bancosim_core::{transfer, Account, Branch, IdSource};
use bancosim_reports::{
    balance_line, history, reserve_report, BranchReport, JsonExporter, ReportExporter,
    StatementReport, TextExporter,
};
use rust_decimal::Decimal;

pub fn run(ids: &mut dyn IdSource) -> Result<()> {
    // Accounts
    let mut lucas = Account::new("Lucas", "111.222.333-44", 1234, 4321);
    let mut maria = Account::new("Maria", "555.666.777-88", 1234, 8765);

    lucas.deposit(Decimal::from(500));
    println!("{}", balance_line(&lucas));

    lucas.withdraw(Decimal::from(200))?;
    println!("{}", history(&lucas));

    // A rejected withdrawal leaves the account untouched
    if let Err(err) = lucas.withdraw(Decimal::from(2000)) {
        println!("Withdrawal rejected: {}", err);
        println!("{}", balance_line(&lucas));
    }

    transfer(&mut lucas, &mut maria, Decimal::from(100))?;
    println!("{}", balance_line(&lucas));
    println!("{}", balance_line(&maria));

    // Card bound to Lucas's account
    let card = lucas.issue_card(ids);
    card.set_access_code("4563")?;
    println!("Card access code: {}", card.access_code());
    if let Err(err) = card.set_access_code("senha") {
        println!("Access code rejected: {}", err);
    }

    // Branches
    let mut standard = Branch::standard("31-9999-9999", "00.111.222/0001-33", ids);
    let mut premium = Branch::premium("31-9888-8888", "00.111.222/0001-44", ids);
    let mut virtual_branch =
        Branch::virtual_branch("www.bancovirtual.com", "00.111.222/0001-55", "31-9777-7777");

    standard.add_client("Lucas", "111.222.333-44", Decimal::from(5000))?;
    premium.add_client("Rico", "555.666.777-88", Decimal::from(2_000_000))?;
    if let Err(err) = premium.add_client("Joe", "111.222.333-44", Decimal::from(2000)) {
        println!("Client rejected: {}", err);
    }

    standard.record_loan(Decimal::from(500_000), "111.222.333-44", "0.02".parse()?)?;

    println!("{}", reserve_report(&standard));
    println!("{}", reserve_report(&premium));
    println!("{}", reserve_report(&virtual_branch));

    // Move funds through the virtual branch's external balance
    virtual_branch.deposit_to_external(Decimal::from(50_000))?;
    virtual_branch.withdraw_from_external(Decimal::from(20_000))?;
    println!("{}", reserve_report(&virtual_branch));

    // Final snapshots
    let text = TextExporter::new();
    println!("{}", text.export(&StatementReport::from_account(&lucas)));
    println!("{}", text.export(&StatementReport::from_account(&maria)));
    for branch in [&standard, &premium, &virtual_branch] {
        println!("{}", text.export(&BranchReport::from_branch(branch)));
    }

    let json = JsonExporter::new();
    println!("{}", json.export(&BranchReport::from_branch(&virtual_branch)));

    tracing::info!("demo scenario complete");
    Ok(())
}
