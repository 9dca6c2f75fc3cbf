pub mod category;
pub mod common;
pub mod expense;
pub mod user;

pub use category::{CategoryStyle, ExpenseCategory};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use expense::Expense;
pub use user::UserProfile;
