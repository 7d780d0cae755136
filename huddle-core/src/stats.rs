//! Aggregate counts over the member list.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{MemberProfile, Role};

/// Number of members holding each role, plus the member total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RoleCounts {
    /// Developers.
    pub dev: usize,
    /// Designers.
    pub des: usize,
    /// Product managers.
    pub pm: usize,
    /// Core team members.
    pub core: usize,
    /// Mentors.
    pub mentor: usize,
    /// All members, regardless of role.
    pub total: usize,
}

impl RoleCounts {
    /// Count for a single role.
    #[must_use]
    pub const fn get(&self, role: Role) -> usize {
        match role {
            Role::Developer => self.dev,
            Role::Designer => self.des,
            Role::ProductManager => self.pm,
            Role::CoreTeam => self.core,
            Role::Mentor => self.mentor,
        }
    }

    const fn slot(&mut self, role: Role) -> &mut usize {
        match role {
            Role::Developer => &mut self.dev,
            Role::Designer => &mut self.des,
            Role::ProductManager => &mut self.pm,
            Role::CoreTeam => &mut self.core,
            Role::Mentor => &mut self.mentor,
        }
    }
}

/// Count members per role.
#[must_use]
pub fn role_counts(members: &[MemberProfile]) -> RoleCounts {
    let mut counts = RoleCounts {
        total: members.len(),
        ..RoleCounts::default()
    };
    for role in members.iter().flat_map(|member| member.roles.iter()) {
        *counts.slot(role) += 1;
    }
    counts
}

/// Number of members sharing a major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorCount {
    /// Major name.
    pub major: String,
    /// Number of members.
    pub count: usize,
}

/// Count members per declared major.
///
/// Members without a major are skipped. Ordered by count, highest first,
/// with ties broken alphabetically.
#[must_use]
pub fn major_counts(members: &[MemberProfile]) -> Vec<MajorCount> {
    let mut ordered: Vec<MajorCount> = tally(members.iter().filter_map(MemberProfile::major))
        .into_iter()
        .map(|(major, count)| MajorCount {
            major: major.to_owned(),
            count,
        })
        .collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count));
    ordered
}

/// Number of members in a class year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassYearCount {
    /// Class year.
    pub year: String,
    /// Number of members.
    pub count: usize,
}

/// Count members per class year, ordered by year ascending.
#[must_use]
pub fn class_year_counts(members: &[MemberProfile]) -> Vec<ClassYearCount> {
    tally(members.iter().filter_map(MemberProfile::year))
        .into_iter()
        .map(|(year, count)| ClassYearCount {
            year: year.to_owned(),
            count,
        })
        .collect()
}

fn tally<'a>(values: impl Iterator<Item = &'a str>) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn members() -> Vec<MemberProfile> {
        vec![
            MemberProfile::new("1", "A")
                .with_major("Computer Science")
                .with_year("2026")
                .with_role(Role::Developer)
                .with_role(Role::Mentor),
            MemberProfile::new("2", "B")
                .with_major("Economics")
                .with_year("2025")
                .with_role(Role::Developer),
            MemberProfile::new("3", "C")
                .with_major("Computer Science")
                .with_year("2027"),
            MemberProfile::new("4", "D").with_major("Art History").with_year("2025"),
            MemberProfile::new("5", "E").with_role(Role::ProductManager),
        ]
    }

    #[rstest]
    fn counts_roles_and_total(members: Vec<MemberProfile>) {
        let counts = role_counts(&members);
        assert_eq!(counts.dev, 2);
        assert_eq!(counts.mentor, 1);
        assert_eq!(counts.get(Role::ProductManager), 1);
        assert_eq!(counts.des, 0);
        assert_eq!(counts.total, 5);
    }

    #[rstest]
    fn majors_sorted_by_count_then_name(members: Vec<MemberProfile>) {
        let majors: Vec<(String, usize)> = major_counts(&members)
            .into_iter()
            .map(|m| (m.major, m.count))
            .collect();
        assert_eq!(
            majors,
            vec![
                ("Computer Science".to_owned(), 2),
                ("Art History".to_owned(), 1),
                ("Economics".to_owned(), 1),
            ]
        );
    }

    #[rstest]
    fn class_years_sorted_ascending(members: Vec<MemberProfile>) {
        let years: Vec<(String, usize)> = class_year_counts(&members)
            .into_iter()
            .map(|y| (y.year, y.count))
            .collect();
        assert_eq!(
            years,
            vec![
                ("2025".to_owned(), 2),
                ("2026".to_owned(), 1),
                ("2027".to_owned(), 1),
            ]
        );
    }
}
