//! Derivation and validation of C identifiers.

use alloc::string::String;

/// Derives a valid C identifier from `name`, usually a file name.
///
/// Every character outside of `[A-Za-z0-9_]` is replaced by `_`, so `logo.icon-set.png` becomes
/// `logo_icon_set_png`. If the result would start with a digit, or `name` is empty, a leading `_`
/// is added.
pub fn derive_identifier(name: &str) -> String {
    let mut identifier = String::with_capacity(name.len() + 1);

    if name.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        identifier.push('_');
    }

    identifier.extend(name.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));

    identifier
}

/// Returns `true` if `name` is a valid C identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
