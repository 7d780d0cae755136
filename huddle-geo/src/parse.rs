//! Parse free-text home addresses into a city and a state.
//!
//! Two shapes are recognised, tried in order:
//!
//! - comma form, `"Hanover, NH"` or `"Portland, Maine, USA"`: the first
//!   segment is the city and the second the state;
//! - space form, `"Austin TX"`: the last token is the state and everything
//!   before it is the city.
//!
//! Country suffixes (`USA`, `United States`) are removed before either
//! shape is tried.

use huddle_core::StateCode;
use once_cell::sync::Lazy;
use regex::Regex;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static COUNTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:USA|United States)\b").expect("valid country pattern")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static DOUBLE_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*,").expect("valid comma pattern"));

const QUOTES: [char; 4] = ['"', '\'', '\u{201c}', '\u{201d}'];

/// City and state extracted from a home address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHome {
    /// Normalised city name, original casing preserved.
    pub city: String,
    /// Recognised state.
    pub state: StateCode,
}

/// Strip country names and tidy whitespace and stray commas.
///
/// # Examples
/// ```
/// use huddle_geo::clean_home;
///
/// assert_eq!(clean_home("  Boston,  MA,  USA "), "Boston, MA,");
/// assert_eq!(clean_home("Austin,, TX"), "Austin, TX");
/// ```
#[must_use]
pub fn clean_home(raw: &str) -> String {
    let without_country = COUNTRY.replace_all(raw.trim(), "");
    let single_spaced = WHITESPACE.replace_all(&without_country, " ");
    DOUBLE_COMMA
        .replace_all(&single_spaced, ",")
        .trim()
        .to_owned()
}

/// Normalise a city fragment.
///
/// Whitespace runs collapse to one space and a single surrounding quote
/// character is removed from each end. Returns `None` when nothing is left.
#[must_use]
pub fn normalize_city(raw: &str) -> Option<String> {
    let collapsed: &str = &WHITESPACE.replace_all(raw.trim(), " ");
    let unquoted_start = collapsed.strip_prefix(QUOTES).unwrap_or(collapsed);
    let unquoted = unquoted_start
        .strip_suffix(QUOTES)
        .unwrap_or(unquoted_start)
        .trim();
    (!unquoted.is_empty()).then(|| unquoted.to_owned())
}

/// Parse a home address into a city and state.
///
/// # Examples
/// ```
/// use huddle_geo::parse_home;
///
/// let parsed = parse_home("New York NY").expect("space form parses");
/// assert_eq!(parsed.city, "New York");
/// assert_eq!(parsed.state.as_str(), "NY");
/// assert!(parse_home("Nowhereville, ZZ").is_none());
/// ```
#[must_use]
pub fn parse_home(raw: &str) -> Option<ParsedHome> {
    let cleaned = clean_home(raw);
    parse_comma_form(&cleaned).or_else(|| parse_space_form(&cleaned))
}

fn parse_comma_form(cleaned: &str) -> Option<ParsedHome> {
    if !cleaned.contains(',') {
        return None;
    }
    let mut segments = cleaned
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty());
    let city = segments.next().and_then(normalize_city)?;
    let state = segments.next().and_then(StateCode::parse)?;
    Some(ParsedHome { city, state })
}

fn parse_space_form(cleaned: &str) -> Option<ParsedHome> {
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let (last, leading) = tokens.split_last()?;
    if leading.is_empty() {
        return None;
    }
    let state = StateCode::parse(last)?;
    let city = normalize_city(&leading.join(" "))?;
    Some(ParsedHome { city, state })
}
