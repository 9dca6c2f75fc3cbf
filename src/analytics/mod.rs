//! Spending aggregation and budget arithmetic over expense collections.

pub mod budget;
pub mod spending;

pub use budget::{BudgetProgress, LifetimeStats};
pub use spending::{MonthlyReport, SpendingAnalytics, DEFAULT_RECENT_LIMIT};
