//! Individual CSV row parsing for position exports

use csv::ByteRecord;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{get_optional_field, get_required_field, parse_required_coordinate};
use crate::Result;
use crate::app::models::PositionRecord;
use crate::constants::columns;

/// Parse a single data row into a position record
///
/// Fields are decoded individually: an undecodable optional cell becomes
/// `None` and only an undecodable required cell rejects the row. `row` is the
/// 1-based data row number, used in error messages only.
pub fn parse_position_record(
    record: &ByteRecord,
    mapping: &ColumnMapping,
    row: usize,
) -> Result<PositionRecord> {
    let fix_time = get_required_field(record, mapping, columns::POSITION_FIX_TIME, row)?;
    let obs_time = get_required_field(record, mapping, columns::OBSERVATION_TIME, row)?;
    let lat = parse_required_coordinate(record, mapping, columns::LATITUDE, row)?;
    let lon = parse_required_coordinate(record, mapping, columns::LONGITUDE, row)?;

    Ok(PositionRecord::new(fix_time, obs_time, lat, lon).with_readings(
        get_optional_field(record, mapping, columns::BAROMETRIC_PRESSURE),
        get_optional_field(record, mapping, columns::SEA_SURFACE_TEMPERATURE),
        get_optional_field(record, mapping, columns::SUBMERGENCE),
    ))
}
