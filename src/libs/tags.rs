//! Tag normalization.
//!
//! Tags are stored in the `tasks` table as a single comma-joined text column.
//! The canonical form is lowercase, trimmed, deduplicated and sorted, so that
//! `"Work; urgent,work"` and `["URGENT", "work"]` both end up as
//! `"urgent,work"`. The empty set is stored as SQL NULL, never as an empty
//! string. Normalization is idempotent.

/// Normalizes a sequence of tag-like values into the canonical sorted set.
///
/// Each value may itself contain `,`- or `;`-separated tags, so a single
/// free-form string and a list of strings go through the same path. Empty
/// pieces are dropped.
pub fn normalize<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = values
        .into_iter()
        .flat_map(|value| {
            value
                .as_ref()
                .replace(';', ",")
                .split(',')
                .map(|piece| piece.trim().to_lowercase())
                .collect::<Vec<_>>()
        })
        .filter(|tag| !tag.is_empty())
        .collect();

    tags.sort();
    tags.dedup();
    tags
}

/// Normalizes a single free-form tag string (`"Work, urgent; home"`).
pub fn normalize_str(raw: &str) -> Vec<String> {
    normalize([raw])
}

/// Converts a canonical tag set into its stored column value.
///
/// The empty set maps to `None` so downstream storage writes NULL.
pub fn to_stored(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(","))
    }
}

/// Splits a stored column value back into the canonical tag set.
pub fn from_stored(stored: Option<&str>) -> Vec<String> {
    match stored {
        Some(raw) => raw.split(',').filter(|tag| !tag.is_empty()).map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// True when the canonical set `tags` contains `tag` (compared in lowercase).
///
/// Containment is exact per tag name: "art" does not match "cart".
pub fn contains(tags: &[String], tag: &str) -> bool {
    let needle = tag.trim().to_lowercase();
    tags.iter().any(|t| *t == needle)
}
