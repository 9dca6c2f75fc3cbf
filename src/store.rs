//! In-memory expense collection for a single owner.
//!
//! Stands in for the remote store's local cache: a single writer mutates it
//! and hands immutable snapshots to the analytics layer. Records are kept
//! newest first, matching the feed order consumers expect.

use tracing::debug;

use crate::domain::Expense;
use crate::errors::ExpenseError;

#[derive(Debug, Clone)]
pub struct ExpenseStore {
    owner_id: String,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            expenses: Vec::new(),
        }
    }

    /// Builds a store from an existing collection, rejecting records that
    /// belong to another owner.
    pub fn with_expenses(
        owner_id: impl Into<String>,
        expenses: Vec<Expense>,
    ) -> Result<Self, ExpenseError> {
        let owner_id = owner_id.into();
        if let Some(foreign) = expenses.iter().find(|e| e.owner_id != owner_id) {
            return Err(ExpenseError::InvalidInput(format!(
                "expense {} belongs to owner {}, not {}",
                foreign.id, foreign.owner_id, owner_id
            )));
        }
        Ok(Self { owner_id, expenses })
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Owned copy of the collection for the analytics layer to read while
    /// the store keeps taking writes.
    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    pub fn add(&mut self, expense: Expense) -> Result<(), ExpenseError> {
        if expense.owner_id != self.owner_id {
            return Err(ExpenseError::InvalidInput(format!(
                "expense {} belongs to owner {}, not {}",
                expense.id, expense.owner_id, self.owner_id
            )));
        }
        debug!(id = %expense.id, name = %expense.name, "adding expense");
        self.expenses.insert(0, expense);
        Ok(())
    }

    /// Replaces the stored record with the same id, preserving `id`,
    /// `owner_id`, and `created_at` from the original.
    pub fn update(&mut self, expense: Expense) -> Result<(), ExpenseError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == expense.id)
            .ok_or_else(|| ExpenseError::UnknownExpense(expense.id.clone()))?;
        let existing = &self.expenses[index];
        let mut updated = expense;
        updated.owner_id = existing.owner_id.clone();
        updated.created_at = existing.created_at;
        debug!(id = %updated.id, "updating expense");
        self.expenses[index] = updated;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Expense, ExpenseError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::UnknownExpense(id.to_string()))?;
        debug!(id, "removing expense");
        Ok(self.expenses.remove(index))
    }
}
