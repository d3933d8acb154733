// 🏧 Interactive Menu - stdin collaborator around the ledger core
//
// All prompting, retrying, and printing lives here; the core only
// returns typed errors. Rejected input is re-asked, rejected operations
// are reported and the loop continues.

use std::io::{self, Write};

use anyhow::Result;

use secure_bank::{export, Account, Customer};

// ============================================================================
// INPUT HELPERS
// ============================================================================

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Re-ask until the input parses as a whole number.
fn read_u32(label: &str) -> Result<u32> {
    loop {
        match prompt(label)?.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a whole number."),
        }
    }
}

/// Re-ask until the input is non-empty (and alphabetic, when required).
fn read_string(label: &str, alpha_only: bool) -> Result<String> {
    loop {
        let input = prompt(label)?;
        if input.is_empty() {
            println!("Invalid input. Input cannot be empty.");
        } else if alpha_only && !input.chars().all(|c| c.is_alphabetic()) {
            println!("Invalid input. Input must contain only letters.");
        } else {
            return Ok(input);
        }
    }
}

/// Prompt for an amount; `'e'` cancels and returns `None`.
fn read_amount(label: &str) -> Result<Option<f64>> {
    loop {
        let input = prompt(&format!("{} (or 'e' to cancel): ", label))?;
        if input.eq_ignore_ascii_case("e") {
            println!("Transaction canceled.");
            return Ok(None);
        }

        match input.parse::<f64>() {
            Ok(amount) => return Ok(Some(amount)),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

// ============================================================================
// CUSTOMER AND ACCOUNT CREATION
// ============================================================================

fn create_customer() -> Result<Customer> {
    let customer_id = read_u32("Enter Customer ID: ")?;
    let first_name = read_string("Enter First Name: ", true)?;
    let last_name = read_string("Enter Last Name: ", true)?;
    let email = read_string("Enter Email: ", false)?;

    Ok(Customer::new(customer_id, first_name, last_name, email))
}

/// Account IDs must be unique within the customer; re-ask until an
/// unused one is given.
fn read_unused_account_id(customer: &Customer, label: &str) -> Result<u32> {
    loop {
        let account_id = read_u32(label)?;
        if customer.get_account(account_id).is_some() {
            println!("Account ID {} is already taken. Please try again.", account_id);
            continue;
        }
        return Ok(account_id);
    }
}

fn open_account_flow(customer: &mut Customer) -> Result<()> {
    loop {
        println!("What type of account do you want to create?");
        let answer = read_string("Savings or Checking? (s/c): ", false)?.to_lowercase();

        let account = match answer.as_str() {
            "s" => Account::savings(read_unused_account_id(
                customer,
                "Enter Savings Account ID: ",
            )?),
            "c" => Account::checking(read_unused_account_id(
                customer,
                "Enter Checking Account ID: ",
            )?),
            _ => {
                println!("Invalid input! Enter 's' or 'c'");
                continue;
            }
        };

        let account_id = account.account_id();
        let kind = account.kind().as_str();
        match customer.open_account(account) {
            Ok(()) => println!("✓ {} Account (ID: {}) opened successfully!", kind, account_id),
            Err(e) => println!("Error: {}", e),
        }
        return Ok(());
    }
}

// ============================================================================
// ACCOUNT OPERATIONS
// ============================================================================

fn process_deposit(account: &mut Account) -> Result<()> {
    loop {
        let amount = match read_amount("Enter deposit amount")? {
            Some(amount) => amount,
            None => return Ok(()),
        };

        match account.deposit(amount) {
            Ok(()) => {
                println!("✓ Deposit of ${} successful!", amount);
                return Ok(());
            }
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn process_withdrawal(account: &mut Account) -> Result<()> {
    loop {
        let amount = match read_amount("Enter withdrawal amount")? {
            Some(amount) => amount,
            None => return Ok(()),
        };

        match account.withdraw(amount) {
            Ok(()) => {
                println!("✓ Withdrawal of ${} successful!", amount);
                return Ok(());
            }
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn process_transfer(customer: &mut Customer, from_id: u32) -> Result<()> {
    if customer.account_count() <= 1 {
        println!("There's no account to transfer to! You only have one account!");
        return Ok(());
    }

    println!("----Transfer----");
    println!("Available Accounts:");
    for account in customer.accounts() {
        println!(
            "Account ID: {} ({})",
            account.account_id(),
            account.kind().as_str()
        );
    }

    loop {
        let to_id = read_u32("Enter destination account ID: ")?;

        // Fail fast on a bad target before prompting for an amount.
        match (customer.get_account(from_id), customer.get_account(to_id)) {
            (Some(from), Some(to)) => {
                if let Err(e) = from.validate_transfer_target(to) {
                    println!("Error: {}", e);
                    continue;
                }
            }
            _ => {
                println!("Destination account not found.");
                continue;
            }
        }

        loop {
            let amount = match read_amount("Enter transfer amount")? {
                Some(amount) => amount,
                None => return Ok(()),
            };

            match customer.transfer(from_id, to_id, amount) {
                Ok(()) => {
                    println!("✓ Transfer of ${} successful!", amount);
                    return Ok(());
                }
                Err(e) => println!("Error: {}", e),
            }
        }
    }
}

fn show_history(account: &Account) {
    let history = account.history();
    if history.is_empty() {
        println!("No transaction history available.");
        return;
    }

    println!("Transaction History:");
    for tx in &history {
        println!("{}", tx);
    }
}

fn apply_interest(account: &mut Account) {
    match account.apply_interest() {
        Some(interest) if interest > 0.0 => println!("✓ Interest of ${} applied!", interest),
        Some(_) => println!("No interest to apply on a non-positive balance."),
        None => println!("Only savings accounts earn interest."),
    }
}

// ============================================================================
// MENU LOOPS
// ============================================================================

fn account_manager(customer: &mut Customer, account_id: u32) -> Result<()> {
    loop {
        let (kind, is_savings) = match customer.get_account(account_id) {
            Some(account) => (account.kind().as_str(), account.is_savings()),
            None => return Ok(()),
        };

        println!("----Account Manager----");
        println!("Account ID: {}", account_id);
        println!("Account Type: {}", kind);
        println!("1. Deposit");
        println!("2. Withdraw");
        println!("3. Transfer");
        println!("4. View Transaction History");
        println!("5. View Balance");
        if is_savings {
            println!("6. Apply Interest");
        }
        println!("7. Export Statement (CSV)");
        println!("8. Exit");

        match read_u32("Enter your choice: ")? {
            1 => {
                if let Some(account) = customer.get_account_mut(account_id) {
                    process_deposit(account)?;
                }
            }
            2 => {
                if let Some(account) = customer.get_account_mut(account_id) {
                    process_withdrawal(account)?;
                }
            }
            3 => process_transfer(customer, account_id)?,
            4 => {
                if let Some(account) = customer.get_account(account_id) {
                    show_history(account);
                }
            }
            5 => {
                if let Some(account) = customer.get_account(account_id) {
                    println!("Current Balance: ${}", account.balance());
                }
            }
            6 => {
                if let Some(account) = customer.get_account_mut(account_id) {
                    apply_interest(account);
                }
            }
            7 => {
                if let Some(account) = customer.get_account(account_id) {
                    print!("{}", export::statement_string(account)?);
                }
            }
            8 => {
                println!("Exiting account manager...");
                return Ok(());
            }
            _ => println!("Invalid choice!"),
        }
    }
}

fn choose_account(customer: &Customer) -> Result<Option<u32>> {
    if customer.account_count() == 0 {
        println!("No accounts available, please create one first!");
        return Ok(None);
    }

    println!("Available Accounts:");
    for account in customer.accounts() {
        println!(
            "Account ID: {} ({})",
            account.account_id(),
            account.kind().as_str()
        );
    }

    let account_id = read_u32("Enter Account ID: ")?;
    if customer.get_account(account_id).is_none() {
        println!("Account ID not found.");
        return Ok(None);
    }

    Ok(Some(account_id))
}

/// Top-level interactive loop.
pub fn run() -> Result<()> {
    println!("********Welcome to SecureBank!********");

    let mut customer = loop {
        let answer = prompt("Do you want to apply for an account? (y/n): ")?.to_lowercase();
        match answer.as_str() {
            "y" => break create_customer()?,
            "n" => {
                println!("Exiting SecureBank...");
                return Ok(());
            }
            _ => println!("Invalid input! Enter 'y' or 'n'"),
        }
    };

    loop {
        println!("----Customer Choices----");
        println!("1. Open an account");
        println!("2. Choose an account to use");
        println!("3. Exit");

        match read_u32("Enter your choice: ")? {
            1 => open_account_flow(&mut customer)?,
            2 => {
                if let Some(account_id) = choose_account(&customer)? {
                    account_manager(&mut customer, account_id)?;
                }
            }
            3 => {
                println!("Exiting SecureBank...");
                return Ok(());
            }
            _ => println!("Invalid choice!"),
        }
    }
}
