//! Fuzzy category matching with tiered confidence levels.
//!
//! Four tiers, strongest first:
//!   1.0  exact category-name containment (short-circuits everything)
//!   0.9  synonym phrase containment, synonym longer than 4 chars
//!   0.8  synonym phrase containment, synonym of 4 chars or fewer
//!   0.7  prefix overlap between an input word (len >= 4) and a synonym
//!   0.6  input word (len >= 3) appearing inside a synonym
//!
//! A single running best is kept with a strict greater-than replacement
//! rule, so ties go to the first candidate found in caller order. Anything
//! below the 0.6 floor is discarded rather than surfaced as a guess.

use kharcha_core::{Category, CategoryMatch};

const CONF_EXACT_NAME: f64 = 1.0;
const CONF_SYNONYM_LONG: f64 = 0.9;
const CONF_SYNONYM_SHORT: f64 = 0.8;
const CONF_PREFIX: f64 = 0.7;
const CONF_PARTIAL_WORD: f64 = 0.6;
const ACCEPT_FLOOR: f64 = 0.6;

/// Lowercase synonym phrases per canonical category name.
///
/// Keys cover the built-in category set plus the alternate names users
/// commonly rename categories to. A category whose name is absent here
/// still matches through exact name containment.
const CATEGORY_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "food & groceries",
        &[
            "food", "grocery", "groceries", "lunch", "dinner", "breakfast", "snacks", "meal",
            "restaurant", "swiggy", "zomato", "vegetables", "fruits", "milk", "chai", "coffee",
            "tea", "pizza", "burger", "biryani",
        ],
    ),
    (
        "travel & transportation",
        &[
            "travel", "transport", "uber", "ola", "taxi", "cab", "auto", "rickshaw", "bus",
            "train", "metro", "flight", "petrol", "diesel", "fuel", "parking", "toll",
        ],
    ),
    (
        "bills & utilities",
        &[
            "bill", "bills", "electricity", "water", "gas", "internet", "wifi", "broadband",
            "recharge", "mobile", "phone", "utility", "utilities", "postpaid", "prepaid",
        ],
    ),
    (
        "shopping",
        &[
            "shopping", "clothes", "shoes", "amazon", "flipkart", "myntra", "mall", "dress",
            "shirt", "jeans", "electronics", "gadget",
        ],
    ),
    (
        "entertainment",
        &[
            "movie", "movies", "cinema", "concert", "game", "games", "party", "outing", "show",
            "tickets",
        ],
    ),
    (
        "health & fitness",
        &[
            "doctor", "medicine", "medicines", "pharmacy", "hospital", "gym", "fitness", "yoga",
            "health", "medical", "clinic", "checkup",
        ],
    ),
    (
        "subscriptions",
        &[
            "subscription", "netflix", "spotify", "prime", "hotstar", "youtube", "membership",
            "plan", "renewal",
        ],
    ),
    (
        "rent & housing",
        &[
            "rent", "housing", "maintenance", "landlord", "apartment", "flat", "lease", "deposit",
        ],
    ),
    (
        "education",
        &[
            "education", "school", "college", "tuition", "course", "books", "fees", "exam",
            "class", "coaching",
        ],
    ),
    (
        "personal care",
        &["salon", "haircut", "spa", "cosmetics", "grooming", "barber", "parlour"],
    ),
    ("others", &["misc", "miscellaneous", "other", "random"]),
    // Alternate names users rename the defaults to
    ("utilities", &["electricity", "water", "gas", "power", "bill", "internet"]),
    ("water & electricity", &["electricity", "water", "power"]),
    ("transport", &["uber", "taxi", "bus", "train", "fuel", "petrol"]),
    ("groceries", &["grocery", "vegetables", "supermarket", "kirana"]),
    ("dining", &["restaurant", "lunch", "dinner", "cafe"]),
];

fn synonyms_for(name_lower: &str) -> Option<&'static [&'static str]> {
    CATEGORY_SYNONYMS
        .iter()
        .find(|(canonical, _)| *canonical == name_lower)
        .map(|(_, synonyms)| *synonyms)
}

/// Replace the running best only on strictly higher confidence.
fn consider(best: &mut Option<CategoryMatch>, category: &Category, confidence: f64) {
    let replace = best
        .as_ref()
        .is_none_or(|current| confidence > current.confidence);
    if replace {
        *best = Some(CategoryMatch::new(category, confidence));
    }
}

/// Find the best-matching category for a transcript, or None when nothing
/// clears the acceptance floor. The result always references one of the
/// supplied categories.
pub fn match_category(text: &str, categories: &[Category]) -> Option<CategoryMatch> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let mut best: Option<CategoryMatch> = None;

    for category in categories {
        let name_lower = category.name.to_lowercase();

        // Exact name containment is the highest-trust signal and
        // short-circuits every other candidate.
        if !name_lower.is_empty() && lower.contains(&name_lower) {
            return Some(CategoryMatch::new(category, CONF_EXACT_NAME));
        }

        let Some(synonyms) = synonyms_for(&name_lower) else {
            continue;
        };

        for synonym in synonyms {
            if lower.contains(synonym) {
                let confidence = if synonym.len() > 4 {
                    CONF_SYNONYM_LONG
                } else {
                    CONF_SYNONYM_SHORT
                };
                consider(&mut best, category, confidence);
            }

            for word in &words {
                if word.len() >= 3 && synonym.contains(word) {
                    consider(&mut best, category, CONF_PARTIAL_WORD);
                }
                if word.len() >= 4 && (word.starts_with(synonym) || synonym.starts_with(word)) {
                    consider(&mut best, category, CONF_PREFIX);
                }
            }
        }
    }

    best.filter(|m| m.confidence >= ACCEPT_FLOOR)
}
