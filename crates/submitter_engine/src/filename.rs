use chrono::{DateTime, SecondsFormat, Utc};

/// Normalizes a user name for use inside a file name.
///
/// Spaces and hyphens become `_`, apostrophes are removed, and the result is
/// lower-cased. Characters that are never valid in a file name also become
/// `_`. Applying it twice gives the same result as applying it once.
pub fn sanitize_user_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '\'')
        .map(|c| {
            if c == ' ' || c == '-' || is_forbidden(c) {
                '_'
            } else {
                c
            }
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// UTC timestamp in RFC 3339 form with microseconds and a `Z` designator.
pub fn utc_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `{timestamp}__{sanitized_user}__{original_name}.txt`
pub fn submission_filename(at: DateTime<Utc>, user_name: &str, original_name: &str) -> String {
    format!(
        "{}__{}__{}.txt",
        utc_timestamp(at),
        sanitize_user_name(user_name),
        original_name
    )
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
