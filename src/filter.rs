use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // one or more blank lines, \s also swallows the \r of CRLF feeds
    static ref BLOCK_SEPARATOR: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref EXCLUDED_SUMMARY: Regex = Regex::new(r"(?im)SUMMARY:.*FALSE\s*$").unwrap();
}

/// Drops every blank-line-delimited block whose `SUMMARY` line ends with `FALSE`
/// and joins the rest back with a blank line.
///
/// This is a text transform, not an iCalendar parser: blocks that do not match
/// are passed through untouched, however malformed.
pub fn filter_events(ical: &str) -> String {
    BLOCK_SEPARATOR
        .split(ical)
        .filter(|block| !EXCLUDED_SUMMARY.is_match(block))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// Number of blocks filter_events would drop, for metrics
pub fn count_removed(ical: &str) -> usize {
    BLOCK_SEPARATOR
        .split(ical)
        .filter(|block| EXCLUDED_SUMMARY.is_match(block))
        .count()
}
