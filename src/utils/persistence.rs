use std::{fs, path::Path};

use crate::{domain::Expense, errors::ExpenseError};

/// Writes the expense snapshot to disk atomically by staging to a temporary file.
pub fn save_expenses_to_file(expenses: &[Expense], path: &Path) -> Result<(), ExpenseError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(expenses)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads an expense snapshot from disk, returning structured errors on failure.
pub fn load_expenses_from_file(path: &Path) -> Result<Vec<Expense>, ExpenseError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
