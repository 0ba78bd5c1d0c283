//! Identifier casing shared by type names, file names and member names.
//!
//! Both conversions are idempotent, so an import path computed from a
//! normalized name always matches the file name the emitter writes.

/// Upper-case the first character, leave the rest untouched.
///
/// `user` → `User`, `userProfile` → `UserProfile`, `User` → `User`.
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            first.to_uppercase().chain(chars).collect()
        }
        _ => s.to_string(),
    }
}

/// Lower-case an identifier for use as a file or member name.
///
/// - already starts lower-case → unchanged
/// - every letter upper-case (`ID`, `URL2`) → fully lower-cased
/// - otherwise only the first character is lower-cased (`FirstName` → `firstName`)
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };

    if first.is_lowercase() {
        return s.to_string();
    }

    let all_caps = !s.chars().any(|c| c.is_alphabetic() && c.is_lowercase());
    if all_caps {
        return s.to_lowercase();
    }

    first.to_lowercase().chain(chars).collect()
}
