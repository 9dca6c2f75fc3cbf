//! Month-scoped aggregation over a caller-supplied expense collection.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::calendar::Calendar;
use crate::domain::Expense;

/// Default number of entries in the recent-activity list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Aggregated figures for one calendar month, bundled for dashboards.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub total_spent: f64,
    pub by_category: HashMap<String, f64>,
    pub daily_spending: HashMap<NaiveDate, f64>,
    pub recent_expenses: Vec<Expense>,
    pub daily_average: f64,
}

/// Stateless aggregation over expense collections.
///
/// Every operation is a pure function of the supplied expenses, reference
/// timestamp, and [`Calendar`]; nothing here reads global state or performs
/// I/O. Callers supply a collection already filtered to a single owner.
pub struct SpendingAnalytics;

impl SpendingAnalytics {
    /// Sum of amounts for expenses whose `expense_date` falls in the same
    /// calendar month as `reference`. Zero when nothing matches.
    pub fn total_for_month(
        expenses: &[Expense],
        reference: DateTime<Utc>,
        calendar: &Calendar,
    ) -> f64 {
        let month = calendar.month_of(reference);
        expenses
            .iter()
            .filter(|e| calendar.month_of(e.expense_date) == month)
            .map(|e| e.amount)
            .sum()
    }

    /// Month total grouped by display category.
    ///
    /// The grouping key is [`Expense::display_category`], so two `Other`
    /// expenses with different custom names land in different groups, and
    /// unnamed `Other` expenses share the literal "Other" group.
    pub fn spending_by_category_for_month(
        expenses: &[Expense],
        reference: DateTime<Utc>,
        calendar: &Calendar,
    ) -> HashMap<String, f64> {
        let month = calendar.month_of(reference);
        let mut totals: HashMap<String, f64> = HashMap::new();
        for expense in expenses
            .iter()
            .filter(|e| calendar.month_of(e.expense_date) == month)
        {
            *totals.entry(expense.display_category()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Up to `limit` matching-month expenses, most recent first.
    ///
    /// The sort is stable, so expenses sharing a timestamp keep their
    /// relative order from the input collection. `limit == 0` yields an
    /// empty list.
    pub fn recent_expenses_for_month(
        expenses: &[Expense],
        reference: DateTime<Utc>,
        limit: usize,
        calendar: &Calendar,
    ) -> Vec<Expense> {
        let month = calendar.month_of(reference);
        let mut matching: Vec<Expense> = expenses
            .iter()
            .filter(|e| calendar.month_of(e.expense_date) == month)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.expense_date.cmp(&a.expense_date));
        matching.truncate(limit);
        matching
    }

    /// Month total bucketed by calendar day.
    ///
    /// Days without expenses are absent from the map; callers rendering a
    /// full month range fill the gaps themselves.
    pub fn daily_spending_for_month(
        expenses: &[Expense],
        reference: DateTime<Utc>,
        calendar: &Calendar,
    ) -> HashMap<NaiveDate, f64> {
        let month = calendar.month_of(reference);
        let mut daily: HashMap<NaiveDate, f64> = HashMap::new();
        for expense in expenses
            .iter()
            .filter(|e| calendar.month_of(e.expense_date) == month)
        {
            *daily.entry(calendar.day_of(expense.expense_date)).or_insert(0.0) += expense.amount;
        }
        daily
    }

    /// All month-scoped figures in one pass, plus the daily average.
    ///
    /// For the month containing `now` the average divides by days elapsed so
    /// far; for any other month, by the month's full day count.
    pub fn monthly_report(
        expenses: &[Expense],
        reference: DateTime<Utc>,
        now: DateTime<Utc>,
        calendar: &Calendar,
    ) -> MonthlyReport {
        let total_spent = Self::total_for_month(expenses, reference, calendar);
        let days = if calendar.same_month(reference, now) {
            calendar.day_of_month(now).max(1)
        } else {
            calendar.days_in_month(reference).max(1)
        };
        MonthlyReport {
            total_spent,
            by_category: Self::spending_by_category_for_month(expenses, reference, calendar),
            daily_spending: Self::daily_spending_for_month(expenses, reference, calendar),
            recent_expenses: Self::recent_expenses_for_month(
                expenses,
                reference,
                DEFAULT_RECENT_LIMIT,
                calendar,
            ),
            daily_average: total_spent / f64::from(days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseCategory;
    use chrono::TimeZone;

    fn on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new("user-1", "Groceries", 20.0, ExpenseCategory::Food)
                .with_expense_date(on(2024, 1, 5)),
            Expense::new("user-1", "Dinner out", 30.0, ExpenseCategory::Food)
                .with_expense_date(on(2024, 1, 20)),
            Expense::new("user-1", "Birthday card", 10.0, ExpenseCategory::Other)
                .with_custom_category_name("Gift")
                .with_expense_date(on(2024, 1, 10)),
            Expense::new("user-1", "Odds and ends", 5.0, ExpenseCategory::Other)
                .with_expense_date(on(2024, 2, 1)),
        ]
    }

    #[test]
    fn total_only_counts_the_reference_month() {
        let expenses = sample_expenses();
        let calendar = Calendar::utc();
        let total = SpendingAnalytics::total_for_month(&expenses, on(2024, 1, 15), &calendar);
        assert_eq!(total, 60.0);
    }

    #[test]
    fn category_breakdown_groups_by_display_label() {
        let expenses = sample_expenses();
        let calendar = Calendar::utc();
        let by_category =
            SpendingAnalytics::spending_by_category_for_month(&expenses, on(2024, 1, 15), &calendar);

        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category["Food & Dining"], 50.0);
        assert_eq!(by_category["Gift"], 10.0);
    }

    #[test]
    fn category_values_sum_to_month_total() {
        let expenses = sample_expenses();
        let calendar = Calendar::utc();
        let reference = on(2024, 1, 15);

        let total = SpendingAnalytics::total_for_month(&expenses, reference, &calendar);
        let by_category =
            SpendingAnalytics::spending_by_category_for_month(&expenses, reference, &calendar);
        assert_eq!(by_category.values().sum::<f64>(), total);
    }

    #[test]
    fn unnamed_other_expenses_share_the_literal_label() {
        let calendar = Calendar::utc();
        let expenses = vec![
            Expense::new("user-1", "Misc A", 3.0, ExpenseCategory::Other)
                .with_expense_date(on(2024, 1, 2)),
            Expense::new("user-1", "Misc B", 4.0, ExpenseCategory::Other)
                .with_custom_category_name("")
                .with_expense_date(on(2024, 1, 3)),
            Expense::new("user-1", "Present", 7.0, ExpenseCategory::Other)
                .with_custom_category_name("Gift")
                .with_expense_date(on(2024, 1, 4)),
        ];
        let by_category =
            SpendingAnalytics::spending_by_category_for_month(&expenses, on(2024, 1, 15), &calendar);

        assert_eq!(by_category["Other"], 7.0);
        assert_eq!(by_category["Gift"], 7.0);
    }

    #[test]
    fn recent_expenses_sorted_descending_and_truncated() {
        let expenses = sample_expenses();
        let calendar = Calendar::utc();
        let recent = SpendingAnalytics::recent_expenses_for_month(
            &expenses,
            on(2024, 1, 15),
            2,
            &calendar,
        );

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].name, "Dinner out");
        assert_eq!(recent[1].name, "Birthday card");
    }

    #[test]
    fn recent_expenses_with_zero_limit_is_empty() {
        let expenses = sample_expenses();
        let calendar = Calendar::utc();
        let recent =
            SpendingAnalytics::recent_expenses_for_month(&expenses, on(2024, 1, 15), 0, &calendar);
        assert!(recent.is_empty());
    }

    #[test]
    fn recent_expenses_keep_input_order_for_equal_timestamps() {
        let calendar = Calendar::utc();
        let when = on(2024, 1, 10);
        let expenses = vec![
            Expense::new("user-1", "First", 1.0, ExpenseCategory::Food).with_expense_date(when),
            Expense::new("user-1", "Second", 2.0, ExpenseCategory::Food).with_expense_date(when),
            Expense::new("user-1", "Third", 3.0, ExpenseCategory::Food).with_expense_date(when),
        ];
        let recent =
            SpendingAnalytics::recent_expenses_for_month(&expenses, when, 10, &calendar);
        let names: Vec<&str> = recent.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn daily_spending_buckets_by_day_and_omits_empty_days() {
        let expenses = sample_expenses();
        let calendar = Calendar::utc();
        let daily =
            SpendingAnalytics::daily_spending_for_month(&expenses, on(2024, 1, 15), &calendar);

        assert_eq!(daily.len(), 3);
        assert_eq!(daily[&NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()], 20.0);
        assert_eq!(daily[&NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()], 10.0);
        assert_eq!(daily[&NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()], 30.0);
        assert_eq!(
            daily.values().sum::<f64>(),
            SpendingAnalytics::total_for_month(&expenses, on(2024, 1, 15), &calendar)
        );
    }

    #[test]
    fn same_day_expenses_merge_into_one_bucket() {
        let calendar = Calendar::utc();
        let expenses = vec![
            Expense::new("user-1", "Breakfast", 8.0, ExpenseCategory::Food)
                .with_expense_date(Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap()),
            Expense::new("user-1", "Supper", 22.0, ExpenseCategory::Food)
                .with_expense_date(Utc.with_ymd_and_hms(2024, 1, 5, 20, 30, 0).unwrap()),
        ];
        let daily =
            SpendingAnalytics::daily_spending_for_month(&expenses, on(2024, 1, 15), &calendar);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[&NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()], 30.0);
    }

    #[test]
    fn empty_collection_yields_zero_and_empty_everywhere() {
        let calendar = Calendar::utc();
        let reference = on(2024, 1, 15);
        let expenses: Vec<Expense> = Vec::new();

        assert_eq!(
            SpendingAnalytics::total_for_month(&expenses, reference, &calendar),
            0.0
        );
        assert!(
            SpendingAnalytics::spending_by_category_for_month(&expenses, reference, &calendar)
                .is_empty()
        );
        assert!(
            SpendingAnalytics::recent_expenses_for_month(&expenses, reference, 5, &calendar)
                .is_empty()
        );
        assert!(
            SpendingAnalytics::daily_spending_for_month(&expenses, reference, &calendar).is_empty()
        );
    }

    #[test]
    fn monthly_report_averages_over_elapsed_days_for_current_month() {
        let expenses = sample_expenses();
        let calendar = Calendar::utc();
        let reference = on(2024, 1, 15);

        let current = SpendingAnalytics::monthly_report(&expenses, reference, on(2024, 1, 20), &calendar);
        assert_eq!(current.total_spent, 60.0);
        assert_eq!(current.daily_average, 3.0);

        let past = SpendingAnalytics::monthly_report(&expenses, reference, on(2024, 3, 1), &calendar);
        assert_eq!(past.daily_average, 60.0 / 31.0);
        assert_eq!(past.recent_expenses.len(), 3);
    }
}
