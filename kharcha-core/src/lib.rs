//! kharcha-core: domain types shared by the voice parser and its callers

pub mod category;
pub mod expense;

pub use category::{Category, CategoryMatch, default_categories};
pub use expense::{ExpenseDraft, ParsedExpense};
