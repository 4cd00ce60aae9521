//! Baseline and candidate sets of profiles, and the keyword filters over them.

use crate::error::NoValidDataError;
use crate::profile::ProfileRecord;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// The attribute a yes/no question (and its filter) is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Company,
    Role,
    /// Education major. Filterable, but not used to generate questions.
    Major,
    /// Part of the full name. Filterable, but not used to generate questions.
    Name,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Role => "role",
            Self::Major => "major",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the full valid profile set and the subset still in play.
///
/// Candidates are kept as indices into the baseline, so the baseline is never
/// touched by filtering and membership is compared by identity.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    all: Vec<ProfileRecord>,
    remaining: Vec<usize>,
}

impl ProfileStore {
    /// Drop failed scrapes and keep the rest as the baseline.
    pub fn new(records: Vec<ProfileRecord>) -> Result<Self, NoValidDataError> {
        let total = records.len();
        let all: Vec<ProfileRecord> = records
            .into_iter()
            .filter(|record| !record.is_failed_scrape())
            .collect();

        if all.is_empty() {
            return Err(NoValidDataError { total });
        }

        debug!(total, valid = all.len(), "Built profile store");
        let remaining = (0..all.len()).collect();
        Ok(Self { all, remaining })
    }

    /// Every valid profile, in input order.
    pub fn all(&self) -> &[ProfileRecord] {
        &self.all
    }

    /// Profiles still consistent with the answers so far.
    pub fn remaining(&self) -> impl Iterator<Item = &ProfileRecord> + '_ {
        self.remaining.iter().map(|&idx| &self.all[idx])
    }

    /// Baseline indices of the remaining profiles.
    pub fn remaining_ids(&self) -> &[usize] {
        &self.remaining
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn remaining_names(&self) -> Vec<String> {
        self.remaining()
            .map(|record| record.display_name().to_string())
            .collect()
    }

    /// Keep the remaining profiles that match `keyword` on `field` (or, when
    /// `matches` is false, the ones that don't).
    ///
    /// Matching is case-insensitive substring containment. Absent values are
    /// treated as empty.
    pub fn apply_filter(&mut self, matches: bool, field: Field, keyword: &str) {
        let needle = keyword.to_lowercase();
        let before = self.remaining.len();
        let kept: Vec<usize> = self
            .remaining
            .iter()
            .copied()
            .filter(|&idx| record_matches(&self.all[idx], field, &needle) == matches)
            .collect();
        self.remaining = kept;
        debug!(
            %field,
            keyword,
            matches,
            before,
            after = self.remaining.len(),
            "Applied filter"
        );
    }

    /// Put every baseline profile back in play.
    pub fn reset_to_baseline(&mut self) {
        self.remaining = (0..self.all.len()).collect();
    }

    pub fn unique_companies(&self) -> Vec<String> {
        self.collect_unique(|record| {
            record
                .experiences
                .iter()
                .filter_map(|exp| exp.company.as_deref())
                .collect()
        })
    }

    pub fn unique_roles(&self) -> Vec<String> {
        self.collect_unique(|record| {
            record
                .experiences
                .iter()
                .filter_map(|exp| exp.role.as_deref())
                .collect()
        })
    }

    pub fn unique_majors(&self) -> Vec<String> {
        self.collect_unique(|record| {
            record
                .education
                .iter()
                .filter_map(|edu| edu.major.as_deref())
                .collect()
        })
    }

    /// Name parts longer than two characters, e.g. `["Lovelace", "Ada"]`.
    pub fn name_keywords(&self) -> Vec<String> {
        self.collect_unique(|record| {
            record
                .full_name
                .as_deref()
                .map(|name| {
                    name.split_whitespace()
                        .filter(|part| part.chars().count() > 2)
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    /// Distinct, trimmed, non-empty values, sorted.
    fn collect_unique<'a, F>(&'a self, values: F) -> Vec<String>
    where
        F: Fn(&'a ProfileRecord) -> Vec<&'a str>,
    {
        let mut unique = BTreeSet::new();
        for record in self.remaining() {
            for value in values(record) {
                let value = value.trim();
                if !value.is_empty() {
                    unique.insert(value.to_string());
                }
            }
        }
        unique.into_iter().collect()
    }
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.unwrap_or("").to_lowercase().contains(needle)
}

fn record_matches(record: &ProfileRecord, field: Field, needle: &str) -> bool {
    match field {
        Field::Company => record
            .experiences
            .iter()
            .any(|exp| contains_ci(exp.company.as_deref(), needle)),
        Field::Role => record
            .experiences
            .iter()
            .any(|exp| contains_ci(exp.role.as_deref(), needle)),
        Field::Major => record
            .education
            .iter()
            .any(|edu| contains_ci(edu.major.as_deref(), needle)),
        Field::Name => contains_ci(record.full_name.as_deref(), needle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileStore {
        ProfileStore::new(vec![
            ProfileRecord::named("Alice Smith")
                .with_experience("Acme Corp", "Software Engineer")
                .with_education("Computer Science", Some("Music")),
            ProfileRecord::named("Bob Jones")
                .with_experience("Globex", "Product Manager")
                .with_experience("Acme Corp", "Intern")
                .with_education("Economics", None),
            ProfileRecord::named("Cy")
                .with_experience("Initech", "  Engineer  ")
                .with_experience("", "")
                .with_education("Physics", None),
            ProfileRecord::named("Dana Scully"),
        ])
        .unwrap()
    }

    fn ids_after(store: &ProfileStore, matches: bool, field: Field, keyword: &str) -> Vec<usize> {
        let mut copy = store.clone();
        copy.apply_filter(matches, field, keyword);
        copy.remaining_ids().to_vec()
    }

    #[test]
    fn test_error_records_are_dropped() {
        let mut failed = ProfileRecord::named("Broken");
        failed.error = Some("timeout".into());
        let store = ProfileStore::new(vec![failed, ProfileRecord::named("Ok")]).unwrap();
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.remaining_names(), vec!["Ok"]);
    }

    #[test]
    fn test_all_error_records_fail_construction() {
        let records = (0..3)
            .map(|i| {
                let mut record = ProfileRecord::named(&format!("P{i}"));
                record.error = Some("Profile not found".into());
                record
            })
            .collect();
        assert_eq!(
            ProfileStore::new(records).unwrap_err(),
            NoValidDataError { total: 3 }
        );
    }

    #[test]
    fn test_empty_input_fails_construction() {
        assert_eq!(
            ProfileStore::new(Vec::new()).unwrap_err(),
            NoValidDataError { total: 0 }
        );
    }

    #[test]
    fn test_company_filter_is_case_insensitive_substring() {
        let store = sample();
        assert_eq!(ids_after(&store, true, Field::Company, "acme"), vec![0, 1]);
        assert_eq!(
            ids_after(&store, true, Field::Company, "ACME CORP"),
            vec![0, 1]
        );
        assert_eq!(ids_after(&store, false, Field::Company, "acme"), vec![2, 3]);
    }

    #[test]
    fn test_role_filter_matches_any_experience() {
        let store = sample();
        assert_eq!(ids_after(&store, true, Field::Role, "engineer"), vec![0, 2]);
        assert_eq!(ids_after(&store, true, Field::Role, "intern"), vec![1]);
    }

    #[test]
    fn test_extension_filters() {
        let store = sample();
        assert_eq!(ids_after(&store, true, Field::Major, "science"), vec![0]);
        assert_eq!(ids_after(&store, true, Field::Name, "JONES"), vec![1]);
        assert_eq!(
            ids_after(&store, false, Field::Major, "physics"),
            vec![0, 1, 3]
        );
    }

    #[test]
    fn test_filter_partitions_starting_set() {
        let store = sample();
        for (field, keyword) in [
            (Field::Company, "Acme"),
            (Field::Company, "Globex"),
            (Field::Role, "Engineer"),
            (Field::Role, "nobody-has-this"),
        ] {
            let yes = ids_after(&store, true, field, keyword);
            let no = ids_after(&store, false, field, keyword);
            assert!(yes.iter().all(|id| !no.contains(id)), "{field} {keyword}");

            let mut union: Vec<usize> = yes.iter().chain(no.iter()).copied().collect();
            union.sort_unstable();
            assert_eq!(union, store.remaining_ids(), "{field} {keyword}");

            // Applying the opposite answer on top of the first leaves nothing.
            let mut both = store.clone();
            both.apply_filter(true, field, keyword);
            both.apply_filter(false, field, keyword);
            assert_eq!(both.remaining_count(), 0);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let store = sample();
        for matches in [true, false] {
            let mut once = store.clone();
            once.apply_filter(matches, Field::Role, "engineer");
            let mut twice = once.clone();
            twice.apply_filter(matches, Field::Role, "engineer");
            assert_eq!(once.remaining_ids(), twice.remaining_ids());
        }
    }

    #[test]
    fn test_reset_restores_baseline() {
        let mut store = sample();
        store.apply_filter(true, Field::Company, "Globex");
        assert_eq!(store.remaining_count(), 1);
        store.apply_filter(true, Field::Company, "Initech");
        assert_eq!(store.remaining_count(), 0);
        store.reset_to_baseline();
        assert_eq!(store.remaining_ids(), &[0, 1, 2, 3]);
        assert_eq!(store.all().len(), 4);
    }

    #[test]
    fn test_unique_pools_are_trimmed_and_distinct() {
        let store = sample();
        assert_eq!(
            store.unique_companies(),
            vec!["Acme Corp", "Globex", "Initech"]
        );
        assert_eq!(
            store.unique_roles(),
            vec!["Engineer", "Intern", "Product Manager", "Software Engineer"]
        );
        assert_eq!(
            store.unique_majors(),
            vec!["Computer Science", "Economics", "Physics"]
        );
        assert_eq!(
            store.name_keywords(),
            vec!["Alice", "Bob", "Dana", "Jones", "Scully", "Smith"]
        );
    }

    #[test]
    fn test_unique_pools_follow_remaining_set() {
        let mut store = sample();
        store.apply_filter(true, Field::Company, "Globex");
        assert_eq!(store.unique_companies(), vec!["Acme Corp", "Globex"]);
        assert_eq!(store.unique_roles(), vec!["Intern", "Product Manager"]);
    }
}
