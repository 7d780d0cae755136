#![expect(
    clippy::expect_used,
    reason = "behaviour steps use expect to surface fixture errors"
)]
//! Behaviour coverage for roster import, enrichment and export.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use huddle_core::test_support::MemoryCityIndex;
use huddle_core::{LocationSource, MemberProfile};
use huddle_data::{EnrichSummary, RosterError, enrich_members, load_roster, write_roster};
use huddle_geo::HomeLocationResolver;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

const SEED_ROSTER: &str = r#"[
  {"_id": "m1", "name": "Ada", "dev": "yes", "year": 2026, "home": "Hanover, NH, USA"},
  {"_id": "m2", "name": "Grace", "roles": {"des": true}, "home": "Lyme NH"},
  {"_id": "m3", "name": "Lin", "home": "Somewhere abroad"}
]"#;

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 tempdir");
        Self { _dir: dir, root }
    }

    fn roster_path(&self) -> Utf8PathBuf {
        self.root.join("roster.json")
    }

    fn write(&self, contents: &str) {
        std::fs::write(self.roster_path(), contents).expect("write roster");
    }
}

#[derive(Default)]
struct RosterState {
    loaded: Option<Result<Vec<MemberProfile>, RosterError>>,
    summary: Option<EnrichSummary>,
}

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

#[fixture]
fn state() -> RefCell<RosterState> {
    RefCell::new(RosterState::default())
}

fn members(state: &RefCell<RosterState>) -> Vec<MemberProfile> {
    match state.borrow().loaded.as_ref() {
        Some(Ok(members)) => members.clone(),
        other => panic!("roster was not loaded: {other:?}"),
    }
}

#[given("a seed roster file with three members")]
fn given_seed_roster(#[from(workspace)] workspace: &Workspace) {
    workspace.write(SEED_ROSTER);
}

#[given("a roster file containing a JSON object")]
fn given_object_roster(#[from(workspace)] workspace: &Workspace) {
    workspace.write(r#"{"members": []}"#);
}

#[when("I load the roster")]
fn when_load(
    #[from(workspace)] workspace: &Workspace,
    #[from(state)] state: &RefCell<RosterState>,
) {
    state.borrow_mut().loaded = Some(load_roster(&workspace.roster_path()));
}

#[when("I enrich the roster against a table containing Hanover, NH")]
fn when_enrich(#[from(state)] state: &RefCell<RosterState>) {
    let resolver = HomeLocationResolver::new(
        MemoryCityIndex::new().with_city("Hanover", "NH", 43.7, -72.3),
    );
    let mut roster = members(state);
    let summary = enrich_members(&resolver, &mut roster);
    let mut current = state.borrow_mut();
    current.loaded = Some(Ok(roster));
    current.summary = Some(summary);
}

#[when("I write the roster and load it again")]
fn when_round_trip(
    #[from(workspace)] workspace: &Workspace,
    #[from(state)] state: &RefCell<RosterState>,
) {
    let path = workspace.root.join("out/enriched.json");
    write_roster(&path, &members(state)).expect("write roster");
    state.borrow_mut().loaded = Some(load_roster(&path));
}

#[then("the reloaded roster has 3 members")]
fn then_three(#[from(state)] state: &RefCell<RosterState>) {
    assert_eq!(members(state).len(), 3);
}

fn source_of(state: &RefCell<RosterState>, id: &str) -> LocationSource {
    members(state)
        .into_iter()
        .find(|member| member.id == id)
        .map(|member| member.home_location.source())
        .expect("member present")
}

#[then("member \"m1\" is an exact city match")]
fn then_m1(#[from(state)] state: &RefCell<RosterState>) {
    assert_eq!(source_of(state, "m1"), LocationSource::ExactCityMatch);
}

#[then("member \"m2\" falls back to the state centroid")]
fn then_m2(#[from(state)] state: &RefCell<RosterState>) {
    assert_eq!(source_of(state, "m2"), LocationSource::StateCentroidFallback);
}

#[then("the summary reports 1 matched, 1 fallback and 1 missing")]
fn then_summary(#[from(state)] state: &RefCell<RosterState>) {
    let current = state.borrow();
    let summary = current.summary.as_ref().expect("roster was enriched");
    assert_eq!(
        (summary.matched, summary.fallback, summary.missing, summary.total),
        (1, 1, 1, 3)
    );
    assert_eq!(summary.unmatched, ["Somewhere abroad"]);
}

#[then("loading fails because the roster is not an array")]
fn then_not_array(#[from(state)] state: &RefCell<RosterState>) {
    assert!(matches!(
        state.borrow().loaded,
        Some(Err(RosterError::NotAnArray { .. }))
    ));
}

#[scenario(path = "tests/features/roster.feature", index = 0)]
fn seed_roster_round_trip(workspace: Workspace, state: RefCell<RosterState>) {
    let _ = (workspace, state);
}

#[scenario(path = "tests/features/roster.feature", index = 1)]
fn object_roster_rejected(workspace: Workspace, state: RefCell<RosterState>) {
    let _ = (workspace, state);
}
