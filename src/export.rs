// 📄 Statement Export - Account history as CSV
//
// The core defines no file format; the natural external representation
// is one row per transaction with fields `type,amount,timestamp`, and
// that is exactly what this module writes. Read-side collaborator only.

use std::io::Write;

use anyhow::Result;

use crate::entities::Account;

/// Write an account's full history as CSV to `writer`, oldest first.
pub fn write_statement<W: Write>(account: &Account, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["type", "amount", "timestamp"])?;

    for tx in account.history() {
        csv_writer.write_record([
            tx.kind().as_str().to_string(),
            tx.amount().to_string(),
            tx.timestamp().to_rfc3339(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Statement as an in-memory string; the menu prints this to stdout.
pub fn statement_string(account: &Account) -> Result<String> {
    let mut buffer = Vec::new();
    write_statement(account, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_rows_match_history() {
        let mut account = Account::savings(1);
        account.deposit(100.0).unwrap();
        account.withdraw(25.0).unwrap();

        let statement = statement_string(&account).unwrap();
        let lines: Vec<&str> = statement.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "type,amount,timestamp");
        assert!(lines[1].starts_with("DEPOSIT,100,"));
        assert!(lines[2].starts_with("WITHDRAW,25,"));
    }

    #[test]
    fn test_empty_history_writes_header_only() {
        let account = Account::checking(1);
        let statement = statement_string(&account).unwrap();

        assert_eq!(statement.lines().count(), 1);
        assert_eq!(statement.lines().next().unwrap(), "type,amount,timestamp");
    }
}
