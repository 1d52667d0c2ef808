//! The orchestrator: one transcript in, one `ParsedExpense` out.

use kharcha_core::{Category, ParsedExpense};

use crate::amount::extract_amount;
use crate::currency::extract_currency;
use crate::matcher::match_category;

/// Parse one utterance into amount, currency, and category.
///
/// Pure composition over the three extractors. Never fails: empty or
/// gibberish input yields `None` fields, and the caller decides what a
/// missing amount means for the user. `default_currency` fills in only
/// when the text itself carries no currency signal.
pub fn parse_voice_expense(
    text: &str,
    categories: &[Category],
    default_currency: Option<&str>,
) -> ParsedExpense {
    ParsedExpense {
        amount: extract_amount(text),
        currency: extract_currency(text)
            .map(str::to_string)
            .or_else(|| default_currency.map(str::to_string)),
        category_match: match_category(text, categories),
        raw_text: text.to_string(),
    }
}
