//! Profile records as written by the scraper, and the loader for the data file.
//!
//! Decoding is lenient: the scraper leaves fields out, writes `null`, or emits
//! the wrong type when a page looks unusual. None of that is an error here.
//! Text fields that are not strings decode as absent, list fields that are not
//! arrays decode as empty, and list elements that are not objects are skipped.
//! Only the top-level shape (a JSON array of objects) is enforced.

use crate::error::DataLoadError;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// One entry of a person's education history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub minor: Option<String>,
}

/// One entry of a person's work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

/// One person's public data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub linkedin_url: Option<String>,
    /// Name the scraper searched for, when it differs from what the page showed.
    #[serde(default, deserialize_with = "lenient::text")]
    pub search_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub experiences: Vec<ExperienceEntry>,
    /// Set when the scrape failed. The key's presence is what counts, so a
    /// `null` value still marks the record.
    #[serde(default, deserialize_with = "lenient::marker")]
    pub error: Option<String>,
}

impl ProfileRecord {
    /// Convenience constructor used by tests and fixtures.
    pub fn named(name: &str) -> Self {
        Self {
            full_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Builder-style helper that appends an experience entry.
    pub fn with_experience(mut self, company: &str, role: &str) -> Self {
        self.experiences.push(ExperienceEntry {
            company: Some(company.to_string()),
            role: Some(role.to_string()),
            description: None,
        });
        self
    }

    /// Builder-style helper that appends an education entry.
    pub fn with_education(mut self, major: &str, minor: Option<&str>) -> Self {
        self.education.push(EducationEntry {
            major: Some(major.to_string()),
            minor: minor.map(str::to_string),
        });
        self
    }

    pub fn is_failed_scrape(&self) -> bool {
        self.error.is_some()
    }

    /// Name to show the player. Falls back to `Unknown`.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown",
        }
    }

    /// `search_name`, if it is present and differs from the full name.
    pub fn distinct_search_name(&self) -> Option<&str> {
        let search = self.search_name.as_deref()?.trim();
        if search.is_empty() || Some(search) == self.full_name.as_deref().map(str::trim) {
            return None;
        }
        Some(search)
    }
}

/// Read and decode the profile data file.
///
/// Failed-scrape records are returned as well; `ProfileStore::new` drops them.
#[instrument]
pub fn load_profiles(path: &Path) -> Result<Vec<ProfileRecord>, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| DataLoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_profiles(&content).map_err(|err| match err {
        ParseFailure::Json(source) => DataLoadError::Malformed {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::NotAList => DataLoadError::NotAList {
            path: path.to_path_buf(),
        },
    })
}

enum ParseFailure {
    Json(serde_json::Error),
    NotAList,
}

fn parse_profiles(content: &str) -> Result<Vec<ProfileRecord>, ParseFailure> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(ParseFailure::Json)?;
    if !value.is_array() {
        return Err(ParseFailure::NotAList);
    }
    let records: Vec<ProfileRecord> = serde_json::from_value(value).map_err(ParseFailure::Json)?;
    debug!(count = records.len(), "Decoded profile records");
    Ok(records)
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn marker<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Some(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }
}
