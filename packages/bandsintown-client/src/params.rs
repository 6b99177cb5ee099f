//! Request parameters, artist identifiers and event date filters

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{BandsintownError, BandsintownResult};

/// Date format the API expects for single days and range bounds
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Query parameters for one request
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, ParamValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `overrides` on top of these parameters; `overrides` wins on collision
    pub fn merged_with(&self, overrides: &QueryParams) -> QueryParams {
        let mut merged = self.clone();
        for (key, value) in &overrides.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// How an artist is identified in the request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistIdentifier {
    /// Artist name, percent-encoded into the path
    Name(String),
    /// Facebook page ID, sent as `fbid_<id>`
    FacebookId(String),
    /// MusicBrainz ID, sent as `mbid_<id>`
    MusicBrainzId(String),
}

impl ArtistIdentifier {
    /// Render the identifier as a single encoded path segment
    pub fn to_path_segment(&self) -> BandsintownResult<String> {
        let (prefix, value) = match self {
            Self::Name(name) => ("", name),
            Self::FacebookId(id) => ("fbid_", id),
            Self::MusicBrainzId(id) => ("mbid_", id),
        };

        if value.trim().is_empty() {
            return Err(BandsintownError::InvalidInput(
                "artist identifier cannot be empty".to_string(),
            ));
        }

        Ok(format!("{}{}", prefix, urlencoding::encode(value)))
    }
}

impl From<&str> for ArtistIdentifier {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ArtistIdentifier {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for ArtistIdentifier {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

/// Event date filter for the events endpoint
///
/// Not validated client-side; the server answers `Invalid date format`
/// for strings it does not understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDate {
    /// Upcoming events only (server default)
    Upcoming,
    /// All events, past and upcoming
    All,
    /// Events on a single day
    On(NaiveDate),
    /// Events in an inclusive range of days
    Between(NaiveDate, NaiveDate),
    /// Sent verbatim
    Raw(String),
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::All => write!(f, "all"),
            Self::On(day) => write!(f, "{}", day.format(DATE_FORMAT)),
            Self::Between(start, end) => write!(
                f,
                "{},{}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            ),
            Self::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<&str> for EventDate {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for EventDate {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<NaiveDate> for EventDate {
    fn from(day: NaiveDate) -> Self {
        Self::On(day)
    }
}
