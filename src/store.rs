//! Read-only lookup of observations by date.
//!
//! The table is built once from a fetched payload and never mutated, so a
//! shared `&BondYields` can be read from any number of threads.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::data::ValetClient;
use crate::date::{CanonicalDate, DateError};
use crate::domain::{BondYieldsData, GroupDetail, Observation, SeriesDetail, Terms, YieldSeries};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("invalid date format: {0}")]
    InvalidDate(#[from] DateError),
    /// Carries the canonical date that was looked up.
    #[error("no data for this date: {0}")]
    RecordNotFound(String),
}

/// Differences found when checking one dataset against another.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("data doesn't have the same count: {expected} vs {actual}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("date {0} is missing from the reference data")]
    MissingDate(String),
    #[error("values differ for {date} ({series_id}): {expected} vs {actual}")]
    ValueMismatch {
        date: String,
        series_id: &'static str,
        expected: String,
        actual: String,
    },
}

#[derive(Debug, Clone)]
pub struct BondYields {
    data: BondYieldsData,
    // canonical date -> index into `data.observations`
    by_date: HashMap<String, usize>,
}

impl BondYields {
    /// Index a decoded payload. A date seen twice keeps its last observation.
    pub fn new(data: BondYieldsData) -> Self {
        let by_date: HashMap<String, usize> = data
            .observations
            .iter()
            .enumerate()
            .map(|(idx, obs)| (obs.d.clone(), idx))
            .collect();

        if by_date.len() != data.observations.len() {
            debug!(
                observations = data.observations.len(),
                dates = by_date.len(),
                "duplicate observation dates collapsed"
            );
        }

        Self { data, by_date }
    }

    /// Fetch the group once and index it.
    pub fn fetch(client: &ValetClient) -> Result<Self, AppError> {
        let yields = Self::new(client.fetch_group()?);
        info!(dates = yields.len(), "indexed bond yield observations");
        Ok(yields)
    }

    /// Look up the observation for a date written in any accepted convention.
    pub fn observation_for_date(&self, raw: &str) -> Result<&Observation, LookupError> {
        let date = CanonicalDate::parse(raw)?;
        debug!(raw, canonical = %date, "observation lookup");
        self.observation(&date)
    }

    /// Look up an already-normalized date.
    pub fn observation(&self, date: &CanonicalDate) -> Result<&Observation, LookupError> {
        let key = date.to_string();
        self.get(&key).ok_or(LookupError::RecordNotFound(key))
    }

    pub fn group_detail(&self) -> &GroupDetail {
        &self.data.group_detail
    }

    pub fn terms(&self) -> &Terms {
        &self.data.terms
    }

    pub fn series_detail(&self) -> &SeriesDetail {
        &self.data.series_detail
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Earliest and latest observation dates.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        let first = self.by_date.keys().min()?;
        let last = self.by_date.keys().max()?;
        Some((first.as_str(), last.as_str()))
    }

    fn get(&self, date: &str) -> Option<&Observation> {
        self.by_date.get(date).map(|&idx| &self.data.observations[idx])
    }

    /// Check that `other` covers the same dates as `self` and that every
    /// value it does publish matches ours. Empty values in `other` are skipped.
    pub fn compare_with(&self, other: &BondYields) -> Result<(), ComparisonError> {
        if self.len() != other.len() {
            return Err(ComparisonError::CountMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let mut dates: Vec<&String> = other.by_date.keys().collect();
        dates.sort();

        for date in dates {
            let theirs = other.get(date).ok_or_else(|| ComparisonError::MissingDate(date.clone()))?;
            let ours = self.get(date).ok_or_else(|| ComparisonError::MissingDate(date.clone()))?;
            for series in YieldSeries::ALL {
                let expected = ours.value(series);
                let actual = theirs.value(series);
                if !actual.is_empty() && actual != expected {
                    return Err(ComparisonError::ValueMismatch {
                        date: date.clone(),
                        series_id: series.series_id(),
                        expected: expected.v.clone(),
                        actual: actual.v.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
