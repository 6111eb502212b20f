//! Formatted terminal output.
//!
//! We keep formatting code in one place so output changes are localized and the
//! lookup code stays free of presentation concerns.

use chrono::NaiveDate;

use crate::domain::{Observation, SeriesDetail, YieldSeries};
use crate::store::BondYields;

/// Render one date's values as a table: short label, series id, value.
pub fn format_observation(obs: &Observation, detail: &SeriesDetail) -> String {
    let mut out = String::new();

    let weekday = NaiveDate::parse_from_str(&obs.d, "%Y-%m-%d")
        .map(|d| format!(" ({})", d.format("%a")))
        .unwrap_or_default();
    out.push_str(&format!("=== Bond yields for {}{} ===\n", obs.d, weekday));

    for series in YieldSeries::ALL {
        let value = obs.value(series);
        let shown = if value.is_empty() { "-" } else { value.v.as_str() };
        let label = &detail.detail(series).label;
        out.push_str(&format!(
            "{:<10} {:<22} {:>6}{}\n",
            series.short_label(),
            series.series_id(),
            shown,
            if label.is_empty() { String::new() } else { format!("  {label}") },
        ));
    }

    out
}

/// Render the group header, date coverage and series catalogue.
pub fn format_series(yields: &BondYields) -> String {
    let mut out = String::new();
    let group = yields.group_detail();

    out.push_str(&format!("=== {} ===\n", group.label));
    if !group.description.is_empty() {
        out.push_str(&format!("{}\n", group.description));
    }
    if !group.link.is_empty() {
        out.push_str(&format!("Link: {}\n", group.link));
    }
    if !yields.terms().url.is_empty() {
        out.push_str(&format!("Terms: {}\n", yields.terms().url));
    }
    match yields.date_range() {
        Some((first, last)) => out.push_str(&format!("Dates: {} ({first} .. {last})\n", yields.len())),
        None => out.push_str("Dates: none\n"),
    }

    out.push_str("\nSeries:\n");
    for series in YieldSeries::ALL {
        let detail = yields.series_detail().detail(series);
        out.push_str(&format!("{:<22} {}\n", series.series_id(), detail.description));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_group;
    use crate::data::valet::tests::FIXTURE;

    #[test]
    fn observation_table_lists_every_series() {
        let yields = BondYields::new(parse_group(FIXTURE).unwrap());
        let obs = yields.observation_for_date("2022-05-24").unwrap();
        let text = format_observation(obs, yields.series_detail());

        assert!(text.starts_with("=== Bond yields for 2022-05-24 (Tue) ===\n"));
        assert_eq!(text.lines().count(), 1 + YieldSeries::ALL.len());
        let two_year = text.lines().find(|l| l.contains("BD.CDN.2YR.DQ.YLD")).unwrap();
        assert!(two_year.contains("2.57"));
        assert!(two_year.ends_with("2 year"));
        let rrb = text.lines().find(|l| l.contains("BD.CDN.RRB.DQ.YLD")).unwrap();
        assert!(rrb.trim_end().ends_with('-'));
    }

    #[test]
    fn series_summary_includes_range() {
        let yields = BondYields::new(parse_group(FIXTURE).unwrap());
        let text = format_series(&yields);

        assert!(text.starts_with("=== Selected bond yields ===\n"));
        assert!(text.contains("Dates: 3 (2022-05-24 .. 2022-05-26)\n"));
        assert!(text.contains("Government of Canada benchmark bond yields - 10 year"));
    }
}
