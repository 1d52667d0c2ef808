//! Spending categories as the parser sees them: caller-owned, transient,
//! never created or mutated by the matching code.

use serde::{Deserialize, Serialize};

/// A spending category supplied by the caller for one parse call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Opaque identifier, owned by the caller (a record-store key, usually)
    pub id: String,
    /// Human-readable label ("Food & Groceries")
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A matched category plus how strongly the matcher believes it.
///
/// `confidence` is a heuristic score in [0.6, 1.0], not a calibrated
/// probability. The id/name always reference one of the categories the
/// caller passed in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMatch {
    pub id: String,
    pub name: String,
    pub confidence: f64,
}

impl CategoryMatch {
    pub fn new(category: &Category, confidence: f64) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            confidence,
        }
    }
}

/// The built-in category set the synonym table is keyed against.
///
/// Callers with their own categories pass those instead; this set exists so
/// the CLI and fresh installs have something sensible out of the box.
pub fn default_categories() -> Vec<Category> {
    [
        ("food-groceries", "Food & Groceries"),
        ("travel-transport", "Travel & Transportation"),
        ("bills-utilities", "Bills & Utilities"),
        ("shopping", "Shopping"),
        ("entertainment", "Entertainment"),
        ("health-fitness", "Health & Fitness"),
        ("subscriptions", "Subscriptions"),
        ("rent-housing", "Rent & Housing"),
        ("education", "Education"),
        ("personal-care", "Personal Care"),
        ("others", "Others"),
    ]
    .into_iter()
    .map(|(id, name)| Category::new(id, name))
    .collect()
}
