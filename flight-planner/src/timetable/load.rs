//! CSV timetable parsing.
//!
//! The input has a header row naming the columns
//! `flight_no, origin, destination, departure, arrival, base_price,
//! bag_price, bags_allowed`, in any order. Extra columns are ignored.
//! The whole load fails on the first bad record.

use std::io::Read;

use tracing::{debug, trace};

use super::TimetableError;
use crate::domain::{AirportCode, Flight, parse_timestamp};

/// Column names every timetable must carry.
pub const COLUMNS: [&str; 8] = [
    "flight_no",
    "origin",
    "destination",
    "departure",
    "arrival",
    "base_price",
    "bag_price",
    "bags_allowed",
];

/// Position of each required column in a record.
struct ColumnIndex([usize; 8]);

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, TimetableError> {
        let mut positions = [0usize; 8];
        for (slot, name) in positions.iter_mut().zip(COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| TimetableError::malformed(1, format!("missing column {name:?}")))?;
        }
        Ok(Self(positions))
    }
}

/// Read every flight from CSV data.
pub(super) fn read_flights<R: Read>(reader: R) -> Result<Vec<Flight>, TimetableError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut flights = Vec::new();
    let mut record = csv::StringRecord::new();

    while reader.read_record(&mut record).map_err(csv_error)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let flight = parse_record(&record, &columns)
            .map_err(|reason| TimetableError::malformed(line, reason))?;
        trace!(line, flight_no = %flight.flight_no, "Parsed flight");
        flights.push(flight);
    }

    debug!(flights = flights.len(), "Read timetable records");
    Ok(flights)
}

fn csv_error(err: csv::Error) -> TimetableError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    TimetableError::malformed(line, err.to_string())
}

fn parse_record(record: &csv::StringRecord, columns: &ColumnIndex) -> Result<Flight, String> {
    let field = |i: usize| required_field(record, columns, i);

    let flight_no = field(0)?;
    let origin = parse_airport(field(1)?, COLUMNS[1])?;
    let destination = parse_airport(field(2)?, COLUMNS[2])?;
    let departure = parse_timestamp(field(3)?).map_err(|e| e.to_string())?;
    let arrival = parse_timestamp(field(4)?).map_err(|e| e.to_string())?;
    let base_price = parse_price(field(5)?, COLUMNS[5])?;
    let bag_price = parse_price(field(6)?, COLUMNS[6])?;
    let bags_allowed = parse_count(field(7)?, COLUMNS[7])?;

    Flight::new(
        flight_no,
        origin,
        destination,
        departure,
        arrival,
        base_price,
        bag_price,
        bags_allowed,
    )
    .map_err(|e| format!("flight {flight_no}: {e}"))
}

fn required_field<'r>(
    record: &'r csv::StringRecord,
    columns: &ColumnIndex,
    i: usize,
) -> Result<&'r str, String> {
    match record.get(columns.0[i]) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("missing field {:?}", COLUMNS[i])),
    }
}

fn parse_airport(value: &str, column: &str) -> Result<AirportCode, String> {
    AirportCode::parse(value).map_err(|e| format!("{column} {value:?}: {e}"))
}

fn parse_price(value: &str, column: &str) -> Result<f64, String> {
    let price = value
        .parse::<f64>()
        .map_err(|e| format!("cannot parse {column} {value:?} as a number: {e}"))?;
    if !price.is_finite() {
        return Err(format!("{column} {value:?} is not a finite number"));
    }
    if price < 0.0 {
        return Err(format!("{column} {value:?} is negative"));
    }
    Ok(price)
}

fn parse_count(value: &str, column: &str) -> Result<u32, String> {
    let count = value
        .parse::<i64>()
        .map_err(|e| format!("cannot parse {column} {value:?} as an integer: {e}"))?;
    if count < 0 {
        return Err(format!("{column} {value:?} is negative"));
    }
    u32::try_from(count).map_err(|_| format!("{column} {value:?} is too large"))
}
