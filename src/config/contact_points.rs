//! Contact-point accumulation
//!
//! Contact points arrive as comma-separated strings, possibly spread over
//! several calls. Accumulation is cumulative: each call appends its tokens to
//! the list built up so far, while an input with no address content at all
//! clears the whole list.

use log::debug;
use serde::{Deserialize, Deserializer};

/// Merge a raw comma-separated contact-point string into an accumulated list.
///
/// The returned list replaces `current` wholesale:
///
/// - If `raw` contains nothing but commas and whitespace (the empty string
///   included), the result is empty. This is the designated reset: everything
///   accumulated so far is discarded.
/// - Otherwise the result is `current` followed by every comma-separated
///   token of `raw` that is non-empty after trimming, in left-to-right order.
///   Leading, trailing and consecutive commas produce no entries.
///
/// No deduplication: the same address supplied twice, in one call or across
/// calls, appears twice. Downstream connection attempts follow list order, so
/// both order and multiplicity are preserved exactly as supplied.
///
/// Every input is accepted; noisy input degrades to either a clear or a
/// filtered append.
pub fn merge_contact_points(current: &[String], raw: &str) -> Vec<String> {
    // Input with no address content at all is the reset operation.
    if raw.chars().all(|c| c == ',' || c.is_whitespace()) {
        if !current.is_empty() {
            debug!("Clearing {} accumulated contact point(s)", current.len());
        }
        return Vec::new();
    }

    let mut points = current.to_vec();
    points.extend(
        raw.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string),
    );

    debug!(
        "Accumulated contact points: {} total after merging {:?}",
        points.len(),
        raw
    );
    points
}

/// Accepted JSON shapes for the `contact_points` field
#[derive(Deserialize)]
#[serde(untagged)]
enum ContactPointsInput {
    Raw(String),
    List(Vec<String>),
}

/// Custom deserializer for contact points
///
/// Accepts either a single comma-separated string or a list of strings; both
/// run through [`merge_contact_points`] so layered configuration obeys the
/// same normalization as programmatic input.
pub(crate) fn deserialize_contact_points<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match ContactPointsInput::deserialize(deserializer)? {
        ContactPointsInput::Raw(raw) => Ok(merge_contact_points(&[], &raw)),
        ContactPointsInput::List(items) => Ok(items
            .iter()
            .fold(Vec::new(), |acc, item| merge_contact_points(&acc, item))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(points: &[&str]) -> Vec<String> {
        points.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_simple_split() {
        let points = merge_contact_points(&[], "127.0.0.1,127.0.0.2,127.0.0.3");
        assert_eq!(points, list(&["127.0.0.1", "127.0.0.2", "127.0.0.3"]));
    }

    #[test]
    fn test_extra_commas() {
        let points = merge_contact_points(&[], ",,,,127.0.0.1,,,,127.0.0.2,127.0.0.3,,,,");
        assert_eq!(points, list(&["127.0.0.1", "127.0.0.2", "127.0.0.3"]));
    }

    #[test]
    fn test_extra_whitespace() {
        let points = merge_contact_points(
            &[],
            "   ,\r\n,  ,   ,  127.0.0.1 ,,,  ,\t127.0.0.2,127.0.0.3,  \t\n, ,,   ",
        );
        assert_eq!(points, list(&["127.0.0.1", "127.0.0.2", "127.0.0.3"]));
    }

    #[test]
    fn test_trimming_is_whitespace_insensitive() {
        assert_eq!(
            merge_contact_points(&[], " a , b "),
            merge_contact_points(&[], "a,b"),
        );
    }

    #[test]
    fn test_empty_input_clears() {
        let accumulated = list(&["127.0.0.1", "127.0.0.2"]);
        assert!(merge_contact_points(&accumulated, "").is_empty());
    }

    #[test]
    fn test_noise_only_input_clears() {
        // Only delimiters and whitespace is a full clear, not zero appends.
        let accumulated = list(&["127.0.0.1"]);
        assert!(merge_contact_points(&accumulated, ",,, , ,").is_empty());
        assert!(merge_contact_points(&accumulated, " \t\r\n ").is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let cleared = merge_contact_points(&list(&["127.0.0.1"]), "");
        assert!(cleared.is_empty());
        assert!(merge_contact_points(&cleared, "").is_empty());
    }

    #[test]
    fn test_successive_calls_accumulate() {
        let mut points = Vec::new();
        for raw in ["127.0.0.1", "127.0.0.2", "127.0.0.3"] {
            points = merge_contact_points(&points, raw);
        }
        assert_eq!(points, list(&["127.0.0.1", "127.0.0.2", "127.0.0.3"]));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let points = merge_contact_points(&list(&["127.0.0.1"]), "127.0.0.1,127.0.0.1");
        assert_eq!(points, list(&["127.0.0.1", "127.0.0.1", "127.0.0.1"]));
    }

    #[test]
    fn test_order_is_preserved() {
        let points = merge_contact_points(&list(&["10.0.0.2"]), "10.0.0.1,10.0.0.3");
        assert_eq!(points, list(&["10.0.0.2", "10.0.0.1", "10.0.0.3"]));
    }
}
