#![doc(test(attr(deny(warnings))))]

//! Budgeteer Core offers the expense domain model and spending-analytics
//! primitives that power higher level expense-tracking workflows and UIs.

pub mod analytics;
pub mod calendar;
pub mod domain;
pub mod errors;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budgeteer Core tracing initialized.");
    });
}
