//! Shared domain types.
//!
//! These mirror the Valet `bond_yields_all` group payload field-for-field so the
//! response can be decoded directly with `serde`. Yield values stay as the text
//! Valet sends; an empty string means "no observation for that series".

use serde::{Deserialize, Serialize};

/// One of the eleven series in the `bond_yields_all` group.
///
/// The `Average*` series are average yields of Government of Canada bonds
/// grouped by term to maturity; the `Yield*` series are the benchmark bond
/// yields for a single term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YieldSeries {
    /// Average yield, 1 to 3 years (`CDN.AVG.1YTO3Y.AVG`).
    Average1To3Year,
    /// Average yield, 3 to 5 years.
    Average3To5Year,
    /// Average yield, 5 to 10 years.
    Average5To10Year,
    /// Average yield, over 10 years.
    AverageOver10Year,
    /// 2-year benchmark (`BD.CDN.2YR.DQ.YLD`).
    Yield2Year,
    /// 3-year benchmark.
    Yield3Year,
    /// 5-year benchmark.
    Yield5Year,
    /// 7-year benchmark.
    Yield7Year,
    /// 10-year benchmark.
    Yield10Year,
    /// Long-term benchmark (roughly 30 years).
    YieldLong,
    /// Real return bonds, long-term.
    YieldRrb,
}

impl YieldSeries {
    /// Every series, in the order they are printed.
    pub const ALL: [YieldSeries; 11] = [
        YieldSeries::Average1To3Year,
        YieldSeries::Average3To5Year,
        YieldSeries::Average5To10Year,
        YieldSeries::AverageOver10Year,
        YieldSeries::Yield2Year,
        YieldSeries::Yield3Year,
        YieldSeries::Yield5Year,
        YieldSeries::Yield7Year,
        YieldSeries::Yield10Year,
        YieldSeries::YieldLong,
        YieldSeries::YieldRrb,
    ];

    /// Valet series id, as used for the JSON keys.
    pub fn series_id(self) -> &'static str {
        match self {
            YieldSeries::Average1To3Year => "CDN.AVG.1YTO3Y.AVG",
            YieldSeries::Average3To5Year => "CDN.AVG.3YTO5Y.AVG",
            YieldSeries::Average5To10Year => "CDN.AVG.5YTO10Y.AVG",
            YieldSeries::AverageOver10Year => "CDN.AVG.OVER.10.AVG",
            YieldSeries::Yield2Year => "BD.CDN.2YR.DQ.YLD",
            YieldSeries::Yield3Year => "BD.CDN.3YR.DQ.YLD",
            YieldSeries::Yield5Year => "BD.CDN.5YR.DQ.YLD",
            YieldSeries::Yield7Year => "BD.CDN.7YR.DQ.YLD",
            YieldSeries::Yield10Year => "BD.CDN.10YR.DQ.YLD",
            YieldSeries::YieldLong => "BD.CDN.LONG.DQ.YLD",
            YieldSeries::YieldRrb => "BD.CDN.RRB.DQ.YLD",
        }
    }

    /// Short label for terminal output.
    pub fn short_label(self) -> &'static str {
        match self {
            YieldSeries::Average1To3Year => "avg 1-3y",
            YieldSeries::Average3To5Year => "avg 3-5y",
            YieldSeries::Average5To10Year => "avg 5-10y",
            YieldSeries::AverageOver10Year => "avg 10y+",
            YieldSeries::Yield2Year => "2y",
            YieldSeries::Yield3Year => "3y",
            YieldSeries::Yield5Year => "5y",
            YieldSeries::Yield7Year => "7y",
            YieldSeries::Yield10Year => "10y",
            YieldSeries::YieldLong => "long",
            YieldSeries::YieldRrb => "RRB",
        }
    }
}

/// Full group payload.
///
/// Every section is optional on the wire; a missing one decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondYieldsData {
    /// Group label/description/link (`groupDetail`).
    #[serde(default)]
    pub group_detail: GroupDetail,
    /// Terms-of-use link.
    #[serde(default)]
    pub terms: Terms,
    /// Metadata for each series (`seriesDetail`).
    #[serde(default)]
    pub series_detail: SeriesDetail,
    /// One entry per published business day, oldest first.
    #[serde(default)]
    pub observations: Vec<Observation>,
}

/// A single value cell: `{ "v": "2.57" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    /// Yield in percent as text, e.g. `"2.57"`; empty when absent.
    #[serde(default)]
    pub v: String,
}

impl Value {
    /// `true` when the series has no value for this date.
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }
}

/// All series values published for one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date, already `YYYY-MM-DD`.
    pub d: String,
    #[serde(rename = "CDN.AVG.1YTO3Y.AVG", default)]
    pub average_1_to_3_year: Value,
    #[serde(rename = "CDN.AVG.3YTO5Y.AVG", default)]
    pub average_3_to_5_year: Value,
    #[serde(rename = "CDN.AVG.5YTO10Y.AVG", default)]
    pub average_5_to_10_year: Value,
    #[serde(rename = "CDN.AVG.OVER.10.AVG", default)]
    pub average_over_10_year: Value,
    #[serde(rename = "BD.CDN.2YR.DQ.YLD", default)]
    pub yield_2_year: Value,
    #[serde(rename = "BD.CDN.3YR.DQ.YLD", default)]
    pub yield_3_year: Value,
    #[serde(rename = "BD.CDN.5YR.DQ.YLD", default)]
    pub yield_5_year: Value,
    #[serde(rename = "BD.CDN.7YR.DQ.YLD", default)]
    pub yield_7_year: Value,
    #[serde(rename = "BD.CDN.10YR.DQ.YLD", default)]
    pub yield_10_year: Value,
    #[serde(rename = "BD.CDN.LONG.DQ.YLD", default)]
    pub yield_long: Value,
    #[serde(rename = "BD.CDN.RRB.DQ.YLD", default)]
    pub yield_rrb: Value,
}

impl Observation {
    /// Value cell for `series`.
    pub fn value(&self, series: YieldSeries) -> &Value {
        match series {
            YieldSeries::Average1To3Year => &self.average_1_to_3_year,
            YieldSeries::Average3To5Year => &self.average_3_to_5_year,
            YieldSeries::Average5To10Year => &self.average_5_to_10_year,
            YieldSeries::AverageOver10Year => &self.average_over_10_year,
            YieldSeries::Yield2Year => &self.yield_2_year,
            YieldSeries::Yield3Year => &self.yield_3_year,
            YieldSeries::Yield5Year => &self.yield_5_year,
            YieldSeries::Yield7Year => &self.yield_7_year,
            YieldSeries::Yield10Year => &self.yield_10_year,
            YieldSeries::YieldLong => &self.yield_long,
            YieldSeries::YieldRrb => &self.yield_rrb,
        }
    }
}

/// Per-series metadata, keyed by series id in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDetail {
    #[serde(rename = "CDN.AVG.1YTO3Y.AVG", default)]
    pub average_1_to_3_year: Detail,
    #[serde(rename = "CDN.AVG.3YTO5Y.AVG", default)]
    pub average_3_to_5_year: Detail,
    #[serde(rename = "CDN.AVG.5YTO10Y.AVG", default)]
    pub average_5_to_10_year: Detail,
    #[serde(rename = "CDN.AVG.OVER.10.AVG", default)]
    pub average_over_10_year: Detail,
    #[serde(rename = "BD.CDN.2YR.DQ.YLD", default)]
    pub yield_2_year: Detail,
    #[serde(rename = "BD.CDN.3YR.DQ.YLD", default)]
    pub yield_3_year: Detail,
    #[serde(rename = "BD.CDN.5YR.DQ.YLD", default)]
    pub yield_5_year: Detail,
    #[serde(rename = "BD.CDN.7YR.DQ.YLD", default)]
    pub yield_7_year: Detail,
    #[serde(rename = "BD.CDN.10YR.DQ.YLD", default)]
    pub yield_10_year: Detail,
    #[serde(rename = "BD.CDN.LONG.DQ.YLD", default)]
    pub yield_long: Detail,
    #[serde(rename = "BD.CDN.RRB.DQ.YLD", default)]
    pub yield_rrb: Detail,
}

impl SeriesDetail {
    /// Metadata for `series`; empty if the payload did not describe it.
    pub fn detail(&self, series: YieldSeries) -> &Detail {
        match series {
            YieldSeries::Average1To3Year => &self.average_1_to_3_year,
            YieldSeries::Average3To5Year => &self.average_3_to_5_year,
            YieldSeries::Average5To10Year => &self.average_5_to_10_year,
            YieldSeries::AverageOver10Year => &self.average_over_10_year,
            YieldSeries::Yield2Year => &self.yield_2_year,
            YieldSeries::Yield3Year => &self.yield_3_year,
            YieldSeries::Yield5Year => &self.yield_5_year,
            YieldSeries::Yield7Year => &self.yield_7_year,
            YieldSeries::Yield10Year => &self.yield_10_year,
            YieldSeries::YieldLong => &self.yield_long,
            YieldSeries::YieldRrb => &self.yield_rrb,
        }
    }
}

/// Description of the whole group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetail {
    /// Human title, e.g. "Selected bond yields".
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Bank of Canada page describing the group.
    #[serde(default)]
    pub link: String,
}

/// Metadata for a single series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    /// Short name, e.g. "2 year".
    #[serde(default)]
    pub label: String,
    /// Long name as published.
    #[serde(default)]
    pub description: String,
    /// The axis the series is indexed by (always the observation date).
    #[serde(default)]
    pub dimension: Dimension,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    /// Observation field holding the index value (`"d"`).
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
}

/// Terms of use for the published data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terms {
    /// Terms-of-use page.
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_decodes_from_its_id() {
        for series in YieldSeries::ALL {
            let json = format!(r#"{{"d":"2022-05-24","{}":{{"v":"1.23"}}}}"#, series.series_id());
            let obs: Observation = serde_json::from_str(&json).unwrap();
            for other in YieldSeries::ALL {
                assert_eq!(obs.value(other).is_empty(), other != series, "{series:?} / {other:?}");
            }
        }
    }

    #[test]
    fn missing_series_decode_as_empty() {
        let obs: Observation =
            serde_json::from_str(r#"{"d":"2022-05-24","BD.CDN.2YR.DQ.YLD":{"v":"2.57"}}"#).unwrap();
        assert_eq!(obs.value(YieldSeries::Yield2Year).v, "2.57");
        assert!(obs.value(YieldSeries::YieldRrb).is_empty());
        assert!(obs.value(YieldSeries::Average1To3Year).is_empty());
    }
}
