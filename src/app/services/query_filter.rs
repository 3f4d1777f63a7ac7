//! Predicate-based selection over parsed position records
//!
//! All filters are pure: they borrow the collection, never reorder it and
//! return the retained records in source order.
//!
//! The fix time is never parsed as a date here. The date filter is a literal
//! prefix match and the month filter compares a fixed character window, so
//! callers must supply values in the same layout the source uses.

use std::collections::HashSet;
use std::iter;
use tracing::debug;

use crate::app::models::{PositionFilter, PositionRecord};
use crate::constants::{MONTH_TOKEN_OFFSET, MONTH_TOKEN_WIDTH};
use crate::{Error, Result};

/// Keep records whose fix time starts with `prefix`
pub fn filter_by_date_prefix(records: &[PositionRecord], prefix: &str) -> Vec<PositionRecord> {
    records
        .iter()
        .filter(|record| record.fix_time.starts_with(prefix))
        .cloned()
        .collect()
}

/// Keep records whose fix time carries `token` at the month offset
///
/// The compared window is the three characters starting at character
/// offset 6. Fix times too short to hold the window never match, and
/// neither does a token of any other width.
pub fn filter_by_month_token(records: &[PositionRecord], token: &str) -> Vec<PositionRecord> {
    if token.chars().count() != MONTH_TOKEN_WIDTH {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| month_window(&record.fix_time) == Some(token))
        .cloned()
        .collect()
}

/// Apply a [`PositionFilter`] to the collection
pub fn apply_filter(
    records: &[PositionRecord],
    filter: &PositionFilter,
) -> Result<Vec<PositionRecord>> {
    filter.validate()?;

    let selected = match filter {
        PositionFilter::None => records.to_vec(),
        PositionFilter::DatePrefix(prefix) => filter_by_date_prefix(records, prefix),
        PositionFilter::MonthToken(token) => filter_by_month_token(records, token),
    };

    debug!(
        "Filter {:?} kept {} of {} records",
        filter,
        selected.len(),
        records.len()
    );
    Ok(selected)
}

/// Apply a filter to a collection that may be absent
pub fn apply_filter_opt(
    records: Option<&[PositionRecord]>,
    filter: &PositionFilter,
) -> Result<Vec<PositionRecord>> {
    let records = records.ok_or_else(|| Error::invalid_input("no record collection supplied"))?;
    apply_filter(records, filter)
}

/// Distinct fix days in order of first appearance
///
/// A fix day is the fix time up to its first space.
pub fn distinct_fix_days(records: &[PositionRecord]) -> Vec<String> {
    let mut seen = HashSet::new();

    records
        .iter()
        .map(PositionRecord::fix_day)
        .filter(|day| seen.insert(*day))
        .map(str::to_string)
        .collect()
}

/// The month window of a fix time, if it is long enough to hold one
fn month_window(fix_time: &str) -> Option<&str> {
    let mut boundaries = fix_time
        .char_indices()
        .map(|(index, _)| index)
        .chain(iter::once(fix_time.len()));

    let start = boundaries.nth(MONTH_TOKEN_OFFSET)?;
    let end = boundaries.nth(MONTH_TOKEN_WIDTH - 1)?;
    Some(&fix_time[start..end])
}
