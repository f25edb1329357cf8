//! Specialty tree assembly
//!
//! Turns the flat term list the store returns into the rooted forest the
//! admin panel and directory dropdowns consume. Pure and synchronous.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::specialty::Specialty;

static NUMERIC_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#(\d+);").unwrap());

/// One node of the assembled specialty forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyNode {
    /// Term id
    pub id: u64,
    /// Display name, HTML entities decoded
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Child terms, in input order
    pub children: Vec<SpecialtyNode>,
}

/// Assemble the term forest from a flat list.
///
/// A term whose parent id is 0, points at itself, or names a term absent
/// from the input becomes a root; that last case covers children orphaned
/// by a parent deletion and is deliberate, not an error. Input order is
/// preserved for roots and for each child list, and every input term
/// appears exactly once in the output.
pub fn build_tree(terms: &[Specialty]) -> Vec<SpecialtyNode> {
    let known: HashMap<u64, &Specialty> = terms.iter().map(|t| (t.term_id, t)).collect();

    let mut roots: Vec<u64> = Vec::new();
    let mut children_of: HashMap<u64, Vec<u64>> = HashMap::new();

    for term in terms {
        if term.parent != 0 && term.parent != term.term_id && known.contains_key(&term.parent) {
            children_of.entry(term.parent).or_default().push(term.term_id);
        } else {
            roots.push(term.term_id);
        }
    }

    roots
        .into_iter()
        .map(|id| assemble(id, &known, &children_of))
        .collect()
}

fn assemble(
    id: u64,
    known: &HashMap<u64, &Specialty>,
    children_of: &HashMap<u64, Vec<u64>>,
) -> SpecialtyNode {
    let term = known[&id];
    let children = children_of
        .get(&id)
        .map(|ids| {
            ids.iter()
                .map(|child| assemble(*child, known, children_of))
                .collect()
        })
        .unwrap_or_default();

    SpecialtyNode {
        id: term.term_id,
        name: decode_entities(&term.name),
        slug: term.slug.clone(),
        children,
    }
}

/// Decode the HTML entities stored names may carry.
///
/// Named entities first, `&amp;` last so an escaped entity decodes one
/// level only; decimal numeric references resolve to their character.
pub fn decode_entities(name: &str) -> String {
    let decoded = name
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ");

    let decoded = NUMERIC_ENTITY.replace_all(&decoded, |caps: &regex::Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    decoded.replace("&amp;", "&")
}
