//! Domain types representing recorded expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::ExpenseCategory;
use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// A single recorded spending event belonging to one owner.
///
/// `id`, `owner_id`, and `created_at` are fixed at construction; the edit
/// flow replaces the remaining fields wholesale. `expense_date` is when the
/// spend happened and drives all month/day aggregation; `created_at` is when
/// the record was captured and only feeds record-age statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "StoredExpense")]
pub struct Expense {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expense_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Wire shape of a stored expense. Early records predate `expenseDate`, so
/// decoding falls back to `createdAt` when it is missing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredExpense {
    id: String,
    owner_id: String,
    name: String,
    amount: f64,
    category: ExpenseCategory,
    #[serde(default)]
    custom_category_name: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    expense_date: Option<DateTime<Utc>>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "photoURL")]
    photo_url: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

impl From<StoredExpense> for Expense {
    fn from(stored: StoredExpense) -> Self {
        Self {
            id: stored.id,
            owner_id: stored.owner_id,
            name: stored.name,
            amount: stored.amount,
            category: stored.category,
            custom_category_name: stored.custom_category_name,
            created_at: stored.created_at,
            expense_date: stored.expense_date.unwrap_or(stored.created_at),
            description: stored.description,
            photo_url: stored.photo_url,
            location: stored.location,
        }
    }
}

impl Expense {
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            name: name.into(),
            amount,
            category,
            custom_category_name: None,
            created_at: now,
            expense_date: now,
            description: None,
            photo_url: None,
            location: None,
        }
    }

    pub fn with_expense_date(mut self, expense_date: DateTime<Utc>) -> Self {
        self.expense_date = expense_date;
        self
    }

    pub fn with_custom_category_name(mut self, name: impl Into<String>) -> Self {
        self.custom_category_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Label the expense is grouped and shown under: the custom name when the
    /// category is `Other` and a non-empty custom name was given, otherwise
    /// the category's own label.
    pub fn display_category(&self) -> String {
        if self.category == ExpenseCategory::Other {
            if let Some(custom) = self.custom_category_name.as_deref() {
                if !custom.is_empty() {
                    return custom.to_string();
                }
            }
        }
        self.category.label().to_string()
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.display_category())
    }
}
