//! Specialty taxonomy model
//!
//! A specialty is one node of the taxonomy tree physicians are tagged with.
//! `parent == 0` marks a root; the parent link is fixed at creation and
//! never changes afterwards, so cycles cannot form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SLUG_INVALID: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// A taxonomy term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    /// Term id
    pub term_id: u64,

    /// Display name
    pub name: String,

    /// URL-safe identifier derived from the name at creation
    pub slug: String,

    /// Parent term id, 0 for roots
    pub parent: u64,
}

impl Specialty {
    /// Create a new term with a slug derived from its name
    pub fn new(term_id: u64, name: &str, parent: u64) -> Self {
        Self {
            term_id,
            name: name.to_string(),
            slug: slugify(name),
            parent,
        }
    }

    /// Whether the term sits at the top of the tree
    pub fn is_root(&self) -> bool {
        self.parent == 0
    }

    /// Rename the term; the slug stays stable so existing links keep working
    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

/// Derive a URL-safe slug from a display name
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    SLUG_INVALID
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
