mod menu;

use std::env;

use anyhow::Result;

use secure_bank::{export, Account, Customer};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "demo" {
        // Scripted walkthrough
        run_demo()?;
    } else {
        // Interactive mode (default)
        menu::run()?;
    }

    Ok(())
}

/// Walk every core operation once, narrating as it goes.
fn run_demo() -> Result<()> {
    println!("🏦 SecureBank Demo - Scripted walkthrough");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut customer = Customer::new(
        1,
        "Ada".to_string(),
        "Lovelace".to_string(),
        "ada@example.com".to_string(),
    );
    println!(
        "\n✓ Customer {} created: {} {}",
        customer.customer_id(),
        customer.first_name(),
        customer.last_name()
    );

    customer.open_account(Account::checking(100))?;
    customer.open_account(Account::savings(200))?;
    println!("✓ Opened Checking account 100 and Savings account 200");

    // Deposit, then a withdrawal that crosses into overdraft.
    {
        let checking = customer.get_account_mut(100).expect("account just opened");
        checking.deposit(100.0)?;
        println!("✓ Deposited $100 -> checking balance ${}", checking.balance());

        checking.withdraw(150.0)?;
        println!(
            "✓ Withdrew $150 (one-time overdraft fee charged) -> balance ${}",
            checking.balance()
        );
    }

    // A withdrawal the policy rejects; the balance does not move.
    {
        let checking = customer.get_account_mut(100).expect("account just opened");
        if let Err(e) = checking.withdraw(10_000.0) {
            println!("✓ Rejected as expected: {}", e);
        }
        println!("✓ Balance unchanged at ${}", checking.balance());
    }

    // Fund the savings account and let it earn interest.
    {
        let savings = customer.get_account_mut(200).expect("account just opened");
        savings.deposit(100.0)?;
        if let Some(interest) = savings.apply_interest() {
            println!(
                "✓ Applied ${} interest -> savings balance ${}",
                interest,
                savings.balance()
            );
        }
    }

    // Transfer between the two accounts, addressed by ID.
    customer.transfer(200, 100, 50.0)?;
    println!(
        "✓ Transferred $50 savings -> checking: savings ${}, checking ${}",
        customer.get_account(200).expect("account just opened").balance(),
        customer.get_account(100).expect("account just opened").balance()
    );

    // Statements: one CSV row per transaction.
    for account_id in [100, 200] {
        let account = customer.get_account(account_id).expect("account just opened");
        println!("\n📄 Statement for account {}:", account_id);
        print!("{}", export::statement_string(account)?);
    }

    // Full ledger state in its external representation.
    println!("\n📊 Final ledger state:");
    println!("{}", serde_json::to_string_pretty(&customer)?);

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Demo complete");

    Ok(())
}
