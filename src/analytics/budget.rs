//! Budget-progress arithmetic and record-age statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Expense;

/// Spend-versus-budget figures for one month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetProgress {
    /// Budget left for the month; negative when over budget.
    pub remaining: f64,
    /// Spent-to-budget ratio, clamped to [0, 2] for bounded chart scaling.
    pub progress_ratio: f64,
}

impl BudgetProgress {
    /// Computes progress against a monthly budget.
    ///
    /// A budget of zero or less is treated as 1 so the ratio stays defined;
    /// values above 1.0 signal over-budget, capped at 200%.
    pub fn compute(total_spent: f64, monthly_budget: f64) -> Self {
        let budget = if monthly_budget <= 0.0 {
            1.0
        } else {
            monthly_budget
        };
        Self {
            remaining: budget - total_spent,
            progress_ratio: (total_spent / budget).clamp(0.0, 2.0),
        }
    }
}

/// All-time statistics over an expense collection.
///
/// The daily average divides by days since the oldest record was captured
/// (`created_at`, not `expense_date`), with a one-day floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LifetimeStats {
    pub expense_count: usize,
    pub total_spent: f64,
    pub daily_average: f64,
}

impl LifetimeStats {
    pub fn collect(expenses: &[Expense], now: DateTime<Utc>) -> Self {
        if expenses.is_empty() {
            return Self {
                expense_count: 0,
                total_spent: 0.0,
                daily_average: 0.0,
            };
        }
        let total_spent: f64 = expenses.iter().map(|e| e.amount).sum();
        let oldest = expenses
            .iter()
            .map(|e| e.created_at)
            .min()
            .unwrap_or(now);
        let days = (now - oldest).num_days().max(1);
        Self {
            expense_count: expenses.len(),
            total_spent,
            daily_average: total_spent / days as f64,
        }
    }
}
