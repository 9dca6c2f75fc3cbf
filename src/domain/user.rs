//! Owner profile and budget settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Default monthly budget assigned to new profiles.
pub const DEFAULT_MONTHLY_BUDGET: f64 = 1000.0;

/// Profile of the user owning an expense collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub username: String,
    pub monthly_budget: f64,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            created_at: Utc::now(),
        }
    }

    pub fn with_monthly_budget(mut self, monthly_budget: f64) -> Self {
        self.monthly_budget = monthly_budget;
        self
    }
}

impl Identifiable for UserProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for UserProfile {
    fn name(&self) -> &str {
        &self.username
    }
}

impl Displayable for UserProfile {
    fn display_label(&self) -> String {
        format!("{} <{}>", self.username, self.email)
    }
}
