//! Parser output and the draft entry callers pre-fill from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::CategoryMatch;

/// Best-effort extraction from one spoken utterance.
///
/// Absence of a signal is a `None` field, never an error: voice input is
/// unreliable by nature and downstream UI decides how to react.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedExpense {
    /// Strictly positive when present
    pub amount: Option<f64>,
    /// ISO-like currency code, detected in text or the caller's default
    pub currency: Option<String>,
    /// Best category above the acceptance floor, if any
    pub category_match: Option<CategoryMatch>,
    /// The original transcript, unmodified, for audit/troubleshooting
    pub raw_text: String,
}

impl ParsedExpense {
    /// True when nothing at all was extracted from the utterance.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.currency.is_none() && self.category_match.is_none()
    }
}

/// A pre-filled expense-entry form, awaiting user confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseDraft {
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    /// The transcript, kept as the entry note
    pub note: String,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    /// Build a draft from a parse result, stamped with the entry date.
    pub fn from_parsed(parsed: &ParsedExpense, date: NaiveDate) -> Self {
        Self {
            amount: parsed.amount,
            currency: parsed.currency.clone(),
            category_id: parsed.category_match.as_ref().map(|m| m.id.clone()),
            category_name: parsed.category_match.as_ref().map(|m| m.name.clone()),
            note: parsed.raw_text.clone(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, CategoryMatch};

    #[test]
    fn test_is_empty() {
        let parsed = ParsedExpense {
            amount: None,
            currency: None,
            category_match: None,
            raw_text: "".to_string(),
        };
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_draft_from_parsed() {
        let cat = Category::new("c1", "Food & Groceries");
        let parsed = ParsedExpense {
            amount: Some(450.0),
            currency: Some("INR".to_string()),
            category_match: Some(CategoryMatch::new(&cat, 0.9)),
            raw_text: "Spent 450 rupees on groceries".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let draft = ExpenseDraft::from_parsed(&parsed, date);
        assert_eq!(draft.amount, Some(450.0));
        assert_eq!(draft.category_id.as_deref(), Some("c1"));
        assert_eq!(draft.note, "Spent 450 rupees on groceries");
        assert_eq!(draft.date, date);
    }
}
