//! Identifier classification
//!
//! Maps an identifier to the type name a locator searches for:
//! `service_a` becomes `ServiceA`, `billing/invoice_item` becomes
//! `Billing::InvoiceItem`, and names already in that form come back unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use ruse_domain::constants::{IDENTIFIER_PATH_SEPARATOR, NAMESPACE_SEPARATOR};

/// Leading run of lowercase letters and digits
static LEADING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]*").expect("Invalid regex"));

/// A `_` or `/` delimiter followed by the segment it introduces
static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:_|(/))([a-zA-Z0-9]*)").expect("Invalid regex"));

/// Convert an identifier into a type name
pub fn classify(term: &str) -> String {
    let head_end = LEADING_WORD.find(term).map_or(0, |m| m.end());
    let head = capitalize(&term[..head_end]);
    let string = format!("{head}{}", &term[head_end..]);

    let joined = SEGMENT.replace_all(&string, |caps: &Captures<'_>| {
        let path = caps.get(1).map_or("", |m| m.as_str());
        format!("{path}{}", capitalize(&caps[2]))
    });

    joined.replace(IDENTIFIER_PATH_SEPARATOR, NAMESPACE_SEPARATOR)
}

/// Upper-case the first character and lower-case the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
