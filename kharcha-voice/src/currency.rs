//! Currency detection via a static pattern table.
//!
//! Each currency carries symbol glyphs (case-sensitive, checked against the
//! original text) and keyword regexes (word-bounded, checked against the
//! lowercased text). Table order is the tie-break: the first entry with any
//! matching pattern wins.

use regex::Regex;
use std::sync::LazyLock;

/// (code, symbol glyphs, keyword regex bodies — wrapped in \b...\b at compile)
const CURRENCY_PATTERNS: &[(&str, &[&str], &[&str])] = &[
    ("INR", &["₹"], &["rupees?", "rs\\.?", "inr", "paise?"]),
    ("USD", &["$"], &["dollars?", "bucks?", "usd"]),
    ("EUR", &["€"], &["euros?", "eur"]),
    ("GBP", &["£"], &["pounds?", "quid", "gbp"]),
    ("JPY", &["¥", "円"], &["yen", "jpy"]),
    ("CNY", &["元"], &["yuan", "renminbi", "rmb", "cny"]),
    ("AED", &["د.إ"], &["dirhams?", "aed"]),
    ("SAR", &["﷼"], &["riyals?", "sar"]),
    ("CAD", &["C$"], &["cad"]),
    ("AUD", &["A$"], &["aud"]),
    ("SGD", &["S$"], &["sgd"]),
    ("BDT", &["৳"], &["taka", "bdt"]),
    ("LKR", &[], &["lkr"]),
    ("NPR", &[], &["npr"]),
    ("KRW", &["₩"], &["krw"]),
    ("THB", &["฿"], &["baht", "thb"]),
    ("VND", &["₫"], &["dong", "vnd"]),
    ("IDR", &[], &["rupiah", "idr"]),
    ("PHP", &["₱"], &["pesos?", "php"]),
    ("RUB", &["₽"], &["rub(?:les?)?"]),
    ("TRY", &["₺"], &["lira"]),
    ("BRL", &["R$"], &["reais", "brl"]),
    ("ZAR", &[], &["rand", "zar"]),
    ("CHF", &[], &["francs?", "chf"]),
];

struct CurrencyEntry {
    code: &'static str,
    symbols: &'static [&'static str],
    keywords: Vec<Regex>,
}

static CURRENCY_TABLE: LazyLock<Vec<CurrencyEntry>> = LazyLock::new(|| {
    CURRENCY_PATTERNS
        .iter()
        .map(|&(code, symbols, keywords)| CurrencyEntry {
            code,
            symbols,
            keywords: keywords
                .iter()
                .map(|kw| Regex::new(&format!(r"\b(?:{kw})\b")).unwrap())
                .collect(),
        })
        .collect()
});

/// Detect a currency code in free text, or None.
///
/// Symbols are matched verbatim ("₹500" → INR); keywords are matched
/// case-insensitively with word boundaries so "rs" never fires inside
/// "dollars".
pub fn extract_currency(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    for entry in CURRENCY_TABLE.iter() {
        if entry.symbols.iter().any(|sym| text.contains(sym)) {
            return Some(entry.code);
        }
        if entry.keywords.iter().any(|re| re.is_match(&lower)) {
            return Some(entry.code);
        }
    }
    None
}

/// All codes the extractor can ever return, in table order.
pub fn supported_codes() -> Vec<&'static str> {
    CURRENCY_PATTERNS.iter().map(|&(code, _, _)| code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_glyph() {
        assert_eq!(extract_currency("₹500 for groceries"), Some("INR"));
        assert_eq!(extract_currency("$20 coffee"), Some("USD"));
        assert_eq!(extract_currency("€9.99 subscription"), Some("EUR"));
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(extract_currency("Spent 450 Rupees on groceries"), Some("INR"));
        assert_eq!(extract_currency("fifty dollars for uber"), Some("USD"));
        assert_eq!(extract_currency("ten QUID for the pub"), Some("GBP"));
    }

    #[test]
    fn test_rs_abbreviation_needs_boundary() {
        assert_eq!(extract_currency("rs 200 chai"), Some("INR"));
        assert_eq!(extract_currency("Rs. 200 chai"), Some("INR"));
        // "rs" inside "dollars" must not trip the INR entry
        assert_eq!(extract_currency("twenty dollars"), Some("USD"));
    }

    #[test]
    fn test_table_order_breaks_symbol_ambiguity() {
        // "$" belongs to USD before the C$/A$/S$ entries
        assert_eq!(extract_currency("$100"), Some("USD"));
        assert_eq!(extract_currency("C$100"), Some("USD"));
    }

    #[test]
    fn test_no_currency() {
        assert_eq!(extract_currency("spent 450 on groceries"), None);
        assert_eq!(extract_currency(""), None);
    }

    #[test]
    fn test_result_always_in_table() {
        let codes = supported_codes();
        for text in ["₹5", "5 baht", "5 pesos", "5 taka", "5 francs"] {
            let code = extract_currency(text).unwrap();
            assert!(codes.contains(&code), "{code} missing from table");
        }
    }
}
