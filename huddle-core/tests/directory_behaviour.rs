#![expect(
    clippy::expect_used,
    reason = "behaviour steps use expect to surface fixture errors"
)]
//! Behaviour tests for directory search, hometown points and state counts.

use std::cell::RefCell;

use geo::Coord;
use huddle_core::{
    HomeLocation, HometownQuery, MemberProfile, MemberQuery, Role, StateCode, StateCount,
    home_state_counts, hometown_points,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

fn state(code: &str) -> StateCode {
    StateCode::from_abbreviation(code).expect("known state")
}

#[fixture]
fn members() -> RefCell<Vec<MemberProfile>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn found() -> RefCell<Vec<String>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn counts() -> RefCell<Vec<StateCount>> {
    RefCell::new(Vec::new())
}

#[given("a directory of four members")]
fn given_directory(#[from(members)] members: &RefCell<Vec<MemberProfile>>) {
    *members.borrow_mut() = vec![
        MemberProfile::new("1", "Ali Khan")
            .with_year("2026")
            .with_role(Role::Developer)
            .with_home_location(HomeLocation::exact_match(
                "Concord, NH",
                "Concord",
                state("NH"),
                Coord { x: -71.54, y: 43.21 },
            )),
        MemberProfile::new("2", "Bo Chen")
            .with_year("2025")
            .with_role(Role::Developer)
            .with_home_location(HomeLocation::centroid_fallback(
                "Nashua NH",
                "Nashua",
                state("NH"),
                Coord {
                    x: -71.5724,
                    y: 43.1939,
                },
            )),
        MemberProfile::new("3", "Cam Ortiz")
            .with_year("2026")
            .with_role(Role::Designer)
            .with_home_location(HomeLocation::parsed("Salem, OR", "Salem", state("OR"))),
        MemberProfile::new("4", "Lina Park").with_year("2026"),
    ];
}

#[when("I search for members named \"li\"")]
fn when_search_name(
    #[from(members)] members: &RefCell<Vec<MemberProfile>>,
    #[from(found)] found: &RefCell<Vec<String>>,
) {
    let members = members.borrow();
    let query = MemberQuery::new().with_name("li");
    *found.borrow_mut() = query.filter(&members).map(|m| m.id.clone()).collect();
}

#[when("I search for developers in the class of 2026")]
fn when_search_role_year(
    #[from(members)] members: &RefCell<Vec<MemberProfile>>,
    #[from(found)] found: &RefCell<Vec<String>>,
) {
    let members = members.borrow();
    let query = MemberQuery::new()
        .with_role(Role::Developer)
        .with_year("2026");
    *found.borrow_mut() = query.filter(&members).map(|m| m.id.clone()).collect();
}

#[when("I request hometown points")]
fn when_hometowns(
    #[from(members)] members: &RefCell<Vec<MemberProfile>>,
    #[from(found)] found: &RefCell<Vec<String>>,
) {
    let members = members.borrow();
    *found.borrow_mut() = hometown_points(&members, &HometownQuery::default())
        .into_iter()
        .map(|point| point.member_id)
        .collect();
}

#[when("I count home states")]
fn when_count_states(
    #[from(members)] members: &RefCell<Vec<MemberProfile>>,
    #[from(counts)] counts: &RefCell<Vec<StateCount>>,
) {
    let members = members.borrow();
    *counts.borrow_mut() = home_state_counts(&members, &MemberQuery::new());
}

#[then("the matching member ids are \"1,4\"")]
fn then_ids_one_four(#[from(found)] found: &RefCell<Vec<String>>) {
    assert_eq!(*found.borrow(), ["1", "4"]);
}

#[then("the matching member ids are \"1\"")]
fn then_ids_one(#[from(found)] found: &RefCell<Vec<String>>) {
    assert_eq!(*found.borrow(), ["1"]);
}

#[then("the matching member ids are \"1,2\"")]
fn then_ids_one_two(#[from(found)] found: &RefCell<Vec<String>>) {
    assert_eq!(*found.borrow(), ["1", "2"]);
}

#[then("the first state is \"NH\" with 2 members")]
fn then_first_state(#[from(counts)] counts: &RefCell<Vec<StateCount>>) {
    let counts = counts.borrow();
    let first = counts.first().expect("at least one state");
    assert_eq!(first.state.as_str(), "NH");
    assert_eq!(first.count, 2);
    assert_eq!(counts.len(), 2);
}

#[scenario(path = "tests/features/directory.feature", index = 0)]
fn search_by_name(
    members: RefCell<Vec<MemberProfile>>,
    found: RefCell<Vec<String>>,
    counts: RefCell<Vec<StateCount>>,
) {
    let _ = (members, found, counts);
}

#[scenario(path = "tests/features/directory.feature", index = 1)]
fn filter_by_role_and_year(
    members: RefCell<Vec<MemberProfile>>,
    found: RefCell<Vec<String>>,
    counts: RefCell<Vec<StateCount>>,
) {
    let _ = (members, found, counts);
}

#[scenario(path = "tests/features/directory.feature", index = 2)]
fn hometowns_need_coordinates(
    members: RefCell<Vec<MemberProfile>>,
    found: RefCell<Vec<String>>,
    counts: RefCell<Vec<StateCount>>,
) {
    let _ = (members, found, counts);
}

#[scenario(path = "tests/features/directory.feature", index = 3)]
fn count_home_states(
    members: RefCell<Vec<MemberProfile>>,
    found: RefCell<Vec<String>>,
    counts: RefCell<Vec<StateCount>>,
) {
    let _ = (members, found, counts);
}
