//! Amount extraction from a transcript.
//!
//! Two strategies tried in priority order, first hit wins:
//! 1. numeric literals ("450", "1,234.56", "5k") — dominant in real usage
//! 2. English number words ("twenty five", "two lakh") — fallback for
//!    amounts the speech engine transcribed as words rather than digits
//!
//! The word fallback deliberately skips cents/decimal words; spoken
//! fractional amounts are rare enough in this domain not to matter.

use regex::Regex;
use std::sync::LazyLock;

/// Comma-grouped decimal literal ("1,234.56") or plain digits ("450", "12.5")
static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?").unwrap());

/// Digits immediately followed by a k/K shorthand ("5k", "2.5k")
static K_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d(?:[\d,]*\d)?(?:\.\d+)?k\b").unwrap());

type Strategy = fn(&str) -> Option<f64>;

/// Priority order matters: the literal scan is far more trustworthy than
/// word folding, so it always wins when both would produce a value.
const STRATEGIES: &[Strategy] = &[numeric_literal, spoken_number_words];

/// Extract a single positive amount from free text, or None.
pub fn extract_amount(text: &str) -> Option<f64> {
    STRATEGIES.iter().find_map(|strategy| strategy(text))
}

fn numeric_literal(text: &str) -> Option<f64> {
    let m = NUMERIC_RE.find(text)?;
    let parsed: f64 = m.as_str().replace(',', "").parse().ok()?;
    let value = if K_SUFFIX_RE.is_match(text) {
        parsed * 1000.0
    } else {
        parsed
    };
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Fold recognized number words left-to-right with short-scale rules:
/// a multiplier >= 1000 closes out the current run into the total, a
/// multiplier >= 100 scales the current run, everything else adds into it.
fn spoken_number_words(text: &str) -> Option<f64> {
    let lower = text.to_lowercase();
    let mut total = 0.0;
    let mut current = 0.0;
    let mut found = false;

    for raw in lower.split_whitespace() {
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
        let Some(value) = number_word(word) else {
            continue;
        };
        found = true;
        if value >= 1000.0 {
            current = if current == 0.0 { value } else { current * value };
            total += current;
            current = 0.0;
        } else if value >= 100.0 {
            current = if current == 0.0 { value } else { current * value };
        } else {
            current += value;
        }
    }
    total += current;

    (found && total > 0.0).then_some(total)
}

fn number_word(word: &str) -> Option<f64> {
    let value = match word {
        "zero" => 0.0,
        "one" => 1.0,
        "two" => 2.0,
        "three" => 3.0,
        "four" => 4.0,
        "five" => 5.0,
        "six" => 6.0,
        "seven" => 7.0,
        "eight" => 8.0,
        "nine" => 9.0,
        "ten" => 10.0,
        "eleven" => 11.0,
        "twelve" => 12.0,
        "thirteen" => 13.0,
        "fourteen" => 14.0,
        "fifteen" => 15.0,
        "sixteen" => 16.0,
        "seventeen" => 17.0,
        "eighteen" => 18.0,
        "nineteen" => 19.0,
        "twenty" => 20.0,
        "thirty" => 30.0,
        "forty" => 40.0,
        "fifty" => 50.0,
        "sixty" => 60.0,
        "seventy" => 70.0,
        "eighty" => 80.0,
        "ninety" => 90.0,
        "hundred" => 100.0,
        "thousand" => 1000.0,
        // Indian numbering scale, common in the supported languages
        "lakh" | "lac" | "lakhs" => 100_000.0,
        "million" => 1_000_000.0,
        "crore" | "crores" => 10_000_000.0,
        _ => return None,
    };
    Some(value)
}
