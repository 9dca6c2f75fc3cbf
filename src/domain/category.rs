//! Expense categories and their presentation metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of categories an expense can be filed under.
///
/// Serializes as the display label, which is also the value the original
/// document store kept on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    #[serde(rename = "Food & Dining")]
    Food,
    Transportation,
    Shopping,
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    Bills,
    Healthcare,
    Travel,
    Other,
}

/// Icon and color names used when rendering a category.
///
/// Purely cosmetic; aggregation only ever consumes the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl ExpenseCategory {
    /// Every category, in presentation order.
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Shopping,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Bills,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Travel,
        ExpenseCategory::Other,
    ];

    /// Human-readable label shown for this category.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food & Dining",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Bills => "Bills & Utilities",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn style(&self) -> CategoryStyle {
        match self {
            ExpenseCategory::Food => CategoryStyle {
                icon: "fork.knife.circle.fill",
                color: "orange",
            },
            ExpenseCategory::Transportation => CategoryStyle {
                icon: "car.circle.fill",
                color: "blue",
            },
            ExpenseCategory::Shopping => CategoryStyle {
                icon: "bag.circle.fill",
                color: "pink",
            },
            ExpenseCategory::Entertainment => CategoryStyle {
                icon: "tv.circle.fill",
                color: "purple",
            },
            ExpenseCategory::Bills => CategoryStyle {
                icon: "bolt.circle.fill",
                color: "yellow",
            },
            ExpenseCategory::Healthcare => CategoryStyle {
                icon: "cross.case.circle.fill",
                color: "red",
            },
            ExpenseCategory::Travel => CategoryStyle {
                icon: "airplane.circle.fill",
                color: "green",
            },
            ExpenseCategory::Other => CategoryStyle {
                icon: "ellipsis.circle.fill",
                color: "gray",
            },
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
