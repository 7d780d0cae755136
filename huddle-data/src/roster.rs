//! Import and export member rosters as JSON.
//!
//! Rosters come in two shapes. The stored shape is a serialised
//! [`MemberProfile`] array. The seed shape is the raw export the program
//! hands out: role flags sit at the top level (`"dev": true`) or under
//! `roles`, flags may be strings such as `"yes"`, identifiers may be `_id`
//! or absent, and the class year may be a number. [`parse_roster`] accepts
//! both, skipping entries it cannot use.

use std::io::Write;

use camino::Utf8Path;
use huddle_core::{HomeLocation, MemberProfile, Role, Roles};
use log::warn;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::RosterError;

/// Read and parse the roster at `path`.
///
/// # Errors
/// Returns [`RosterError`] when the file cannot be read or does not hold a
/// JSON array.
pub fn load_roster(path: &Utf8Path) -> Result<Vec<MemberProfile>, RosterError> {
    let text = huddle_fs::read_to_string(path).map_err(|source| RosterError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster(&text, path)
}

/// Parse roster JSON. `origin` names the source in errors and logs.
///
/// Entries that are not objects or have no name are skipped with a warning.
/// Members without an `id` or `_id` are identified by their array index.
///
/// # Errors
/// Returns [`RosterError::Parse`] for malformed JSON and
/// [`RosterError::NotAnArray`] when the top level is not an array.
///
/// # Examples
/// ```
/// use camino::Utf8Path;
/// use huddle_core::Role;
/// use huddle_data::parse_roster;
///
/// let json = r#"[{"name": "Ada", "dev": "yes", "year": 2026}, {"nickname": "?"}]"#;
/// let members = parse_roster(json, Utf8Path::new("seed.json")).expect("roster parses");
/// assert_eq!(members.len(), 1);
/// assert_eq!(members[0].id, "0");
/// assert_eq!(members[0].year.as_deref(), Some("2026"));
/// assert!(members[0].roles.has(Role::Developer));
/// ```
pub fn parse_roster(text: &str, origin: &Utf8Path) -> Result<Vec<MemberProfile>, RosterError> {
    let value: Value = serde_json::from_str(text).map_err(|source| RosterError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    let Value::Array(entries) = value else {
        return Err(RosterError::NotAnArray {
            path: origin.to_path_buf(),
        });
    };
    Ok(entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| member_from_entry(index, entry, origin))
        .collect())
}

/// Write `members` to `path` as pretty-printed JSON in the stored shape.
///
/// Missing parent directories are created.
///
/// # Errors
/// Returns [`RosterError`] when serialisation or the write fails.
pub fn write_roster(path: &Utf8Path, members: &[MemberProfile]) -> Result<(), RosterError> {
    let mut bytes = serde_json::to_vec_pretty(members).map_err(|source| RosterError::Serialise {
        path: path.to_path_buf(),
        source,
    })?;
    bytes.push(b'\n');
    let write_error = |source: std::io::Error| RosterError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = huddle_fs::create_file(path).map_err(write_error)?;
    file.write_all(&bytes).map_err(write_error)?;
    file.flush().map_err(write_error)
}

fn member_from_entry(index: usize, entry: &Value, origin: &Utf8Path) -> Option<MemberProfile> {
    let Some(fields) = entry.as_object() else {
        warn!("skipping roster entry {index} in {origin}: not an object");
        return None;
    };
    let Some(name) = text(fields.get("name")) else {
        warn!("skipping roster entry {index} in {origin}: missing name");
        return None;
    };
    let id = identifier(fields).unwrap_or_else(|| index.to_string());

    Some(MemberProfile {
        email: text(fields.get("email")),
        year: text_or_number(fields.get("year")),
        major: text(fields.get("major")),
        minor: text(fields.get("minor")),
        roles: roles(fields),
        home: text(fields.get("home")),
        picture: text(fields.get("picture")),
        home_location: home_location(fields, index, origin),
        ..MemberProfile::new(id, name)
    })
}

fn identifier(fields: &Map<String, Value>) -> Option<String> {
    ["id", "_id"]
        .into_iter()
        .filter_map(|key| fields.get(key))
        .find_map(|value| match value {
            Value::String(id) => Some(id.trim().to_owned()).filter(|id| !id.is_empty()),
            Value::Number(id) => Some(id.to_string()),
            // Mongo extended JSON: {"$oid": "..."}
            Value::Object(wrapped) => text(wrapped.get("$oid")),
            _ => None,
        })
}

fn roles(fields: &Map<String, Value>) -> Roles {
    let nested = fields.get("roles").and_then(Value::as_object);
    let mut roles = Roles::default();
    for role in Role::ALL {
        let flat = fields.get(role.as_str()).filter(|value| !value.is_null());
        let flag = flat.or_else(|| nested.and_then(|inner| inner.get(role.as_str())));
        roles.set(role, flag.is_some_and(truthy));
    }
    roles
}

fn home_location(fields: &Map<String, Value>, index: usize, origin: &Utf8Path) -> HomeLocation {
    let Some(stored) = fields.get("homeLocation").filter(|value| !value.is_null()) else {
        return HomeLocation::default();
    };
    HomeLocation::deserialize(stored).unwrap_or_else(|err| {
        warn!("ignoring homeLocation of roster entry {index} in {origin}: {err}");
        HomeLocation::default()
    })
}

/// Interpret a loosely typed flag: `true`, `1`, or one of the strings
/// `true`, `yes`, `y`, `1` in any case.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() == Some(1.0),
        Value::String(flag) => matches!(
            flag.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
        _ => false,
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

fn text_or_number(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Number(number)) => Some(number.to_string()),
        other => text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_core::LocationSource;
    use rstest::rstest;

    fn parse(json: &str) -> Vec<MemberProfile> {
        parse_roster(json, Utf8Path::new("test.json")).expect("roster parses")
    }

    #[rstest]
    #[case(r#"true"#, true)]
    #[case(r#"1"#, true)]
    #[case(r#"1.0"#, true)]
    #[case(r#"" Yes ""#, true)]
    #[case(r#""y""#, true)]
    #[case(r#""TRUE""#, true)]
    #[case(r#""1""#, true)]
    #[case(r#"false"#, false)]
    #[case(r#"0"#, false)]
    #[case(r#"2"#, false)]
    #[case(r#""no""#, false)]
    #[case(r#""""#, false)]
    #[case(r#"null"#, false)]
    #[case(r#"[true]"#, false)]
    fn tolerant_flags(#[case] json: &str, #[case] expected: bool) {
        let value: Value = serde_json::from_str(json).expect("valid json");
        assert_eq!(truthy(&value), expected);
    }

    #[test]
    fn flat_flags_take_precedence_over_nested() {
        let members = parse(
            r#"[{"name": "Ada", "dev": false, "des": null,
                 "roles": {"dev": true, "des": "yes", "mentor": 1}}]"#,
        );
        let roles = members[0].roles;
        assert!(!roles.has(Role::Developer));
        assert!(roles.has(Role::Designer));
        assert!(roles.has(Role::Mentor));
        assert!(!roles.has(Role::ProductManager));
    }

    #[test]
    fn identifiers_fall_back_in_order() {
        let members = parse(
            r#"[
                {"id": "a1", "_id": "ignored", "name": "A"},
                {"_id": {"$oid": "65f0c0ffee"}, "name": "B"},
                {"_id": 17, "name": "C"},
                {"id": "  ", "name": "D"}
            ]"#,
        );
        let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a1", "65f0c0ffee", "17", "3"]);
    }

    #[test]
    fn unusable_entries_are_skipped() {
        let members = parse(r#"[42, "Ada", {"name": "  "}, {"email": "x@y"}, {"name": "Lin"}]"#);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Lin");
        assert_eq!(members[0].id, "4");
    }

    #[test]
    fn stored_home_location_survives_import() {
        let members = parse(
            r#"[{"name": "Ada", "home": "Lyme, NH", "homeLocation": {
                "raw": "Lyme, NH", "city": "Lyme", "state": "NH",
                "lat": 43.1939, "lng": -71.5724, "source": "state_centroid_fallback"}}]"#,
        );
        assert_eq!(
            members[0].home_location.source(),
            LocationSource::StateCentroidFallback
        );
    }

    #[test]
    fn inconsistent_home_location_is_dropped() {
        let members = parse(
            r#"[{"name": "Ada", "homeLocation": {"lat": 1.0, "source": "none"}}]"#,
        );
        assert_eq!(members[0].home_location, HomeLocation::default());
    }

    #[rstest]
    #[case("{}")]
    #[case("null")]
    #[case(r#"{"members": []}"#)]
    fn top_level_must_be_an_array(#[case] json: &str) {
        let err = parse_roster(json, Utf8Path::new("x.json")).expect_err("not an array");
        assert!(matches!(err, RosterError::NotAnArray { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_roster("[{", Utf8Path::new("x.json")).expect_err("malformed");
        assert!(matches!(err, RosterError::Parse { .. }));
        assert!(err.to_string().contains("x.json"));
    }
}
