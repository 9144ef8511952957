//! Schedule entry and raw wire types

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::schedule::error::FetchError;

/// Date format used by the schedule document (e.g. "2015-09-08").
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The raw schedule document: raw version key (e.g. "v4" or "0.10") to its
/// unparsed metadata.
///
/// The schema is owned by the Node.js Release working group; this crate only
/// consumes it.
pub type RawSchedule = HashMap<String, RawScheduleEntry>;

/// One unparsed value of the raw schedule document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheduleEntry {
    pub start: String,
    pub end: String,
    pub lts: Option<String>,
    pub maintenance: Option<String>,
    pub codename: Option<String>,
}

/// The parsed schedule information for one Node.js release line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// The significant version number (e.g. "4", "0.12"), no leading "v".
    pub version: String,
    /// The date this release line is first released.
    pub start: NaiveDate,
    /// The date this release line reaches end of life.
    pub end: NaiveDate,
    /// The date this release line becomes LTS, if it has an LTS phase.
    pub lts: Option<NaiveDate>,
    /// The date this release line enters maintenance, if scheduled.
    pub maintenance: Option<NaiveDate>,
    /// The LTS codename, if applicable (e.g. "Argon").
    pub codename: Option<String>,
}

impl ScheduleEntry {
    /// Parses a raw document entry, normalizing the version key by stripping
    /// any leading "v".
    pub(crate) fn from_raw(key: &str, raw: RawScheduleEntry) -> Result<Self, FetchError> {
        let version = key.strip_prefix('v').unwrap_or(key).to_string();
        let start = parse_date(&version, "start", &raw.start)?;
        let end = parse_date(&version, "end", &raw.end)?;
        let lts = raw
            .lts
            .map(|value| parse_date(&version, "lts", &value))
            .transpose()?;
        let maintenance = raw
            .maintenance
            .map(|value| parse_date(&version, "maintenance", &value))
            .transpose()?;

        Ok(Self {
            version,
            start,
            end,
            lts,
            maintenance,
            codename: raw.codename,
        })
    }
}

fn parse_date(version: &str, field: &'static str, value: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| FetchError::InvalidDate {
        version: version.to_string(),
        field,
        value: value.to_string(),
        source,
    })
}
