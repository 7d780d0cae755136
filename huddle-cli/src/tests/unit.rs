//! Focused unit tests covering CLI configuration validation.

use super::helpers::Workspace;
use super::*;
use crate::directory::{HometownsArgs, HometownsConfig, StatesArgs, execute_states};
use crate::enrich::{EnrichArgs, EnrichConfig, default_output};
use crate::inputs::{member_query, require_existing};
use crate::locate::{LocateArgs, LocateConfig};
use crate::similar::{SimilarArgs, SimilarConfig};
use camino::{Utf8Path, Utf8PathBuf};
use huddle_core::{HOMETOWN_POINTS_LIMIT, MemberProfile, Role};
use huddle_geo::DEFAULT_CITIES_PATH;
use rstest::rstest;

#[rstest]
#[case(None, Some("roster.json"), ARG_MEMBER_ID, ENV_SIMILAR_MEMBER_ID)]
#[case(Some("  "), Some("roster.json"), ARG_MEMBER_ID, ENV_SIMILAR_MEMBER_ID)]
#[case(Some("m1"), None, ARG_ROSTER, ENV_SIMILAR_ROSTER)]
fn similar_without_required_fields_errors(
    #[case] member_id: Option<&str>,
    #[case] roster: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = SimilarArgs {
        member_id: member_id.map(str::to_owned),
        roster: roster.map(Utf8PathBuf::from),
        ..SimilarArgs::default()
    };
    let err = SimilarConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, ARG_ROSTER, ENV_ENRICH_ROSTER)]
#[case(Some("roster.json"), ARG_CITIES, ENV_ENRICH_CITIES)]
fn enrich_without_required_fields_errors(
    #[case] roster: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = EnrichArgs {
        roster: roster.map(Utf8PathBuf::from),
        ..EnrichArgs::default()
    };
    let err = EnrichConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case("data/team.json", "data/team.enriched.json")]
#[case("team", "team.enriched.json")]
#[case("/srv/rosters/2026.json", "/srv/rosters/2026.enriched.json")]
fn enrich_output_defaults_beside_roster(#[case] roster: &str, #[case] expected: &str) {
    assert_eq!(default_output(Utf8Path::new(roster)), Utf8PathBuf::from(expected));
}

#[rstest]
fn explicit_enrich_output_is_kept() {
    let args = EnrichArgs {
        roster: Some("team.json".into()),
        cities: Some("cities.csv".into()),
        output: Some("out/members.json".into()),
    };
    let config = EnrichConfig::try_from(args).expect("complete config");
    assert_eq!(config.output, Utf8PathBuf::from("out/members.json"));
}

#[rstest]
fn locate_defaults_cities_path() {
    let config = LocateConfig::from(LocateArgs {
        home: Some("Hanover, NH".into()),
        cities: None,
    });
    assert_eq!(config.cities, Utf8PathBuf::from(DEFAULT_CITIES_PATH));
}

#[rstest]
fn require_existing_reports_missing_files() {
    let workspace = Workspace::new();
    let missing = workspace.root().join("absent.json");
    let err = require_existing(&missing, ARG_ROSTER).expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_ROSTER);
            assert_eq!(path, missing);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn require_existing_rejects_directories() {
    let workspace = Workspace::new();
    let err = require_existing(workspace.root(), ARG_CITIES).expect_err("directory rejected");
    assert!(matches!(
        err,
        CliError::MissingSourceFile {
            field: ARG_CITIES,
            ..
        }
    ));
}

#[rstest]
fn require_existing_accepts_files() {
    let workspace = Workspace::new();
    require_existing(&workspace.roster(), ARG_ROSTER).expect("roster exists");
}

#[rstest]
fn member_query_parses_role_and_trims_year() {
    let query = member_query(Some(" dev "), Some(" 2026 ")).expect("valid filters");
    let ada = MemberProfile::new("1", "Ada")
        .with_role(Role::Developer)
        .with_year("2026");
    let ben = MemberProfile::new("2", "Ben").with_year("2026");
    assert!(query.matches(&ada));
    assert!(!query.matches(&ben));
}

#[rstest]
fn member_query_ignores_blank_year() {
    let query = member_query(None, Some("   ")).expect("valid filters");
    assert!(query.matches(&MemberProfile::new("1", "Ada")));
}

#[rstest]
fn member_query_rejects_unknown_roles() {
    let err = member_query(Some("captain"), None).expect_err("unknown role");
    match err {
        CliError::InvalidRole(source) => assert_eq!(source.given, "captain"),
        other => panic!("expected InvalidRole, found {other:?}"),
    }
}

#[rstest]
#[case(None, HOMETOWN_POINTS_LIMIT.default_limit())]
#[case(Some(0), HOMETOWN_POINTS_LIMIT.default_limit())]
#[case(Some(25), 25)]
#[case(Some(10_000), HOMETOWN_POINTS_LIMIT.max_limit())]
fn hometowns_limit_is_clamped(#[case] limit: Option<i64>, #[case] expected: usize) {
    let args = HometownsArgs {
        roster: Some("roster.json".into()),
        limit,
        ..HometownsArgs::default()
    };
    let config = HometownsConfig::try_from(args).expect("valid config");
    assert_eq!(config.query.limit, expected);
    assert!(config.query.require_coordinates);
}

#[rstest]
fn hometowns_can_include_unlocated_members() {
    let args = HometownsArgs {
        roster: Some("roster.json".into()),
        include_unlocated: true,
        ..HometownsArgs::default()
    };
    let config = HometownsConfig::try_from(args).expect("valid config");
    assert!(!config.query.require_coordinates);
}

#[rstest]
fn states_without_roster_errors() {
    let err = execute_states(StatesArgs::default()).expect_err("missing roster");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ROSTER);
            assert_eq!(env, ENV_STATES_ROSTER);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(&["huddle", "similar", "m1", "--roster", "team.json", "--limit", "-3"])]
#[case(&["huddle", "hometowns", "--roster", "team.json", "--include-unlocated"])]
#[case(&["huddle", "locate", "Hanover, NH"])]
#[case(&["huddle", "stats", "--roster", "team.json"])]
fn command_lines_parse(#[case] argv: &[&str]) {
    Cli::try_parse_from(argv).expect("command line should parse");
}

#[rstest]
fn unknown_subcommand_is_rejected() {
    let err = Cli::try_parse_from(["huddle", "teleport"]).expect_err("unknown subcommand");
    assert!(matches!(CliError::from(err), CliError::ArgumentParsing(_)));
}
