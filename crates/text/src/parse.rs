use crate::caps::{CapStyle, capitalize};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref USERNAME_DISALLOWED: Regex = Regex::new("[^a-z0-9_]").unwrap();
}

const USERNAME_MAX_LEN: usize = 20;

/// A person's name split into its components
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullName {
    /// Everything before the first whitespace
    pub first: String,
    /// Everything after the first whitespace
    pub last: String,
}

impl FullName {
    /// Returns the initials of the two name components
    pub fn initials(&self) -> Option<(char, char)> {
        Some((self.first.chars().next()?, self.last.chars().next()?))
    }
}

/// Splits a full name at the first whitespace
///
/// Surrounding whitespace is ignored. Returns `None` unless both components
/// end up non-empty — a single bare name has no 'last' half to make up.
pub fn parse_full_name(input: &str) -> Option<FullName> {
    let (first, last) = input.trim().split_once(char::is_whitespace)?;
    let last = last.trim_start();

    if first.is_empty() || last.is_empty() {
        return None;
    }

    Some(FullName {
        first: first.to_string(),
        last: last.to_string(),
    })
}

/// An email address split into its components
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailParts {
    /// Everything before the `@`
    pub user: String,
    /// Everything after the `@`
    pub domain: String,
}

impl EmailParts {
    /// Returns the domain's top-level part, if the domain has a dot
    pub fn tld(&self) -> Option<&str> {
        self.domain.rsplit_once('.').map(|(_, tld)| tld)
    }
}

/// Splits an email address at the first `@`
///
/// Returns `None` unless both sides of the `@` are non-empty.
pub fn parse_email(input: &str) -> Option<EmailParts> {
    let (user, domain) = input.trim().split_once('@')?;

    if user.is_empty() || domain.is_empty() {
        return None;
    }

    Some(EmailParts {
        user: user.to_string(),
        domain: domain.to_string(),
    })
}

/// Normalizes a username into its canonical form
///
/// Trims, lowercases, strips everything outside `[a-z0-9_]`, and caps the
/// result at 20 chars.
pub fn sanitize_username(input: &str) -> String {
    let lowered: String = input.trim().chars().flat_map(char::to_lowercase).collect();
    let mut cleaned = USERNAME_DISALLOWED.replace_all(&lowered, "").into_owned();
    cleaned.truncate(USERNAME_MAX_LEN);
    cleaned
}

/// Formats a username for display: trimmed, first grapheme uppercased,
/// remainder lowercased
pub fn format_username(input: &str) -> String {
    capitalize(input.trim(), CapStyle::First)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_split_at_the_first_whitespace() {
        let name = parse_full_name("Ada Lovelace").unwrap();
        assert_eq!(name.first, "Ada");
        assert_eq!(name.last, "Lovelace");
        assert_eq!(name.initials(), Some(('A', 'L')));

        let full = parse_full_name("Ada King Lovelace").unwrap();
        assert_eq!(full.last, "King Lovelace");

        assert_eq!(parse_full_name("Ada"), None);
        assert_eq!(parse_full_name("   "), None);
    }

    #[test]
    fn emails_split_at_the_at_sign() {
        let email = parse_email("ada@example.co.uk").unwrap();
        assert_eq!(email.user, "ada");
        assert_eq!(email.domain, "example.co.uk");
        assert_eq!(email.tld(), Some("uk"));

        assert_eq!(parse_email("@example.com"), None);
        assert_eq!(parse_email("ada@"), None);
        assert_eq!(parse_email("no-at-sign"), None);
    }

    #[test]
    fn usernames_are_sanitized() {
        assert_eq!(sanitize_username("  ShOnJoY  "), "shonjoy");
        assert_eq!(sanitize_username("Mx. O'Brien-99"), "mxobrien99");
        assert_eq!(
            sanitize_username("a_very_long_username_indeed"),
            "a_very_long_username"
        );
    }

    #[test]
    fn usernames_are_formatted() {
        assert_eq!(format_username("  ShOnJoY  "), "Shonjoy");
        assert_eq!(format_username(""), "");
    }
}
