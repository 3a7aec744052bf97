//! Mention-token extraction and substitution.
//!
//! Request bodies may embed quoted `"@user(name)"` placeholders in place of
//! numeric lookup-field values. Extraction finds every placeholder; once each
//! name has been resolved to a site user ID, substitution swaps the quoted
//! placeholder for the bare number.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a quoted `"@user(...)"` placeholder, tolerating a missing closing
/// quote.
static MENTION_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""@user\(([\w\W]+?)\)"?"#).unwrap());

/// Identifier scan applied inside a matched token. The second hit is the
/// identity name; the first is the `@user` marker itself. Both passes are a
/// fixed wire contract, not interchangeable with a single capture group.
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9\-_@.]+").unwrap());

/// A mention placeholder discovered in a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Full matched substring, used verbatim as the replacement key.
    pub token: String,
    /// Identity name extracted from the parenthesised segment.
    pub name: String,
}

/// Scan `body` for mention placeholders, left to right.
///
/// A body without placeholders yields an empty vec; callers treat that as
/// "nothing to resolve".
pub fn extract_mentions(body: &str) -> Vec<Mention> {
    MENTION_TOKEN_REGEX
        .find_iter(body)
        .filter_map(|matched| {
            let token = matched.as_str();
            let name = IDENTIFIER_REGEX.find_iter(token).nth(1)?;
            Some(Mention {
                token: token.to_string(),
                name: name.as_str().to_string(),
            })
        })
        .collect()
}

/// Replace each resolved mention's token with its numeric user ID.
///
/// Substitutions run in resolution order over the accumulating text, each
/// replacing only the first occurrence of its token. The ID lands unquoted,
/// turning the placeholder string into a numeric lookup-field value.
pub fn apply_resolutions(body: String, resolutions: &[(Mention, i64)]) -> String {
    resolutions.iter().fold(body, |text, (mention, id)| {
        text.replacen(mention.token.as_str(), &id.to_string(), 1)
    })
}
