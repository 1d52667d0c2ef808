//! End-to-end transcript scenarios through the full parse pipeline,
//! plus the invariants every extractor must hold for arbitrary input.

use kharcha_core::{Category, default_categories};
use kharcha_voice::{
    extract_amount, extract_currency, match_category, parse_voice_expense,
};

fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("c1", "Food & Groceries"),
        Category::new("c2", "Travel & Transportation"),
    ]
}

#[test]
fn test_scenario_rupees_groceries() {
    let parsed = parse_voice_expense("Spent 450 rupees on groceries", &sample_categories(), None);
    assert_eq!(parsed.amount, Some(450.0));
    assert_eq!(parsed.currency.as_deref(), Some("INR"));
    let m = parsed.category_match.expect("groceries should match");
    assert_eq!(m.id, "c1");
    assert_eq!(m.name, "Food & Groceries");
    assert!(m.confidence >= 0.8);
    assert_eq!(parsed.raw_text, "Spent 450 rupees on groceries");
}

#[test]
fn test_scenario_word_amount_uber() {
    let parsed = parse_voice_expense("fifty dollars for uber", &sample_categories(), None);
    assert_eq!(parsed.amount, Some(50.0));
    assert_eq!(parsed.currency.as_deref(), Some("USD"));
    let m = parsed.category_match.unwrap();
    assert_eq!(m.name, "Travel & Transportation");
    assert_eq!(m.confidence, 0.8); // "uber" is exactly 4 chars
}

#[test]
fn test_scenario_netflix_subscription() {
    let categories = default_categories();
    let parsed = parse_voice_expense("netflix subscription", &categories, None);
    assert_eq!(parsed.amount, None);
    let m = parsed.category_match.unwrap();
    assert_eq!(m.name, "Subscriptions");
    assert_eq!(m.confidence, 0.9);
}

#[test]
fn test_scenario_no_amount_detected() {
    let parsed = parse_voice_expense("groceries", &sample_categories(), None);
    // caller surfaces "couldn't understand clearly" for the missing amount
    assert_eq!(parsed.amount, None);
    assert!(parsed.category_match.is_some());
}

#[test]
fn test_scenario_overlapping_synonyms_stable() {
    let categories = vec![
        Category::new("u1", "Utilities"),
        Category::new("u2", "Water & Electricity"),
    ];
    let first = parse_voice_expense("electricity bill 200", &categories, None);
    for _ in 0..10 {
        let again = parse_voice_expense("electricity bill 200", &categories, None);
        assert_eq!(again, first);
    }
    assert_eq!(first.amount, Some(200.0));
    assert_eq!(first.category_match.unwrap().id, "u1");
}

#[test]
fn test_symbol_beats_keyword_ambiguity() {
    let parsed = parse_voice_expense("₹500 for groceries", &sample_categories(), Some("USD"));
    assert_eq!(parsed.currency.as_deref(), Some("INR"));
    assert_eq!(parsed.amount, Some(500.0));
}

#[test]
fn test_empty_transcript() {
    let parsed = parse_voice_expense("", &default_categories(), None);
    assert!(parsed.is_empty());
    assert_eq!(parsed.raw_text, "");
}

// Invariant sweeps over deliberately messy transcripts

const NOISY_INPUTS: &[&str] = &[
    "",
    "   ",
    "uh spent like 450 on um groceries",
    "1,234.56 rent",
    "5k furniture ₹",
    "twenty five dollars for lunch",
    "asdf qwer zxcv",
    "!!!???",
    "0 dollars",
    "-300 refund",
    "9999999999999 crore",
    "lakh lakh lakh",
    "paid Rs. 50 for chai and 2,000 for books",
];

#[test]
fn test_amount_is_none_or_positive_finite() {
    for text in NOISY_INPUTS {
        if let Some(amount) = extract_amount(text) {
            assert!(amount.is_finite(), "non-finite for {text:?}");
            assert!(amount > 0.0, "non-positive for {text:?}");
        }
    }
}

#[test]
fn test_currency_is_none_or_known_code() {
    let codes = kharcha_voice::currency::supported_codes();
    for text in NOISY_INPUTS {
        if let Some(code) = extract_currency(text) {
            assert!(codes.contains(&code), "unknown code {code} for {text:?}");
        }
    }
}

#[test]
fn test_match_is_none_or_from_caller_list() {
    let categories = default_categories();
    for text in NOISY_INPUTS {
        if let Some(m) = match_category(text, &categories) {
            assert!(
                categories.iter().any(|c| c.id == m.id && c.name == m.name),
                "synthesized category for {text:?}"
            );
            assert!((0.6..=1.0).contains(&m.confidence));
        }
    }
}

#[test]
fn test_exact_name_dominates_synonyms() {
    // "shopping" is both a category name and a synonym elsewhere; the
    // exact name must win at exactly 1.0 regardless of list order
    let categories = vec![
        Category::new("c1", "Bills & Utilities"),
        Category::new("c2", "Shopping"),
    ];
    let m = match_category("shopping bill 300", &categories).unwrap();
    assert_eq!(m.id, "c2");
    assert_eq!(m.confidence, 1.0);
}
