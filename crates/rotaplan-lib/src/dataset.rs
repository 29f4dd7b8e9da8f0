//! Loading of geocoded place records from CSV sources.
//!
//! The dataset is a flat CSV table with one row per place. Each row carries
//! the display name (`City`, `State`), decimal-degree coordinates, and a
//! comma-delimited `Neighbors` column listing the ids reachable from that
//! place. An optional `Index` column fixes the id explicitly; without it the
//! zero-based row position is used.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Raw place row as it appears in the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRecord {
    /// Explicit identifier; falls back to the row position when absent.
    #[serde(rename = "Index", default)]
    pub index: Option<u32>,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Comma-delimited neighbour ids; blank means no outgoing edges.
    #[serde(rename = "Neighbors", default)]
    pub neighbours: String,
}

/// Load place records from a local path or an `http(s)` URL.
pub fn load_records(source: &str) -> Result<Vec<PlaceRecord>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_records(source)
    } else {
        load_records_from_path(Path::new(source))
    }
}

/// Load place records from a CSV file on disk.
pub fn load_records_from_path(path: &Path) -> Result<Vec<PlaceRecord>> {
    let file = File::open(path)?;
    let records = read_records(file)?;
    debug!(count = records.len(), path = %path.display(), "loaded place records");
    Ok(records)
}

/// Fetch place records from a remote CSV file.
pub fn fetch_records(url: &str) -> Result<Vec<PlaceRecord>> {
    debug!(url, "fetching place records");
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    let records = read_records(body.as_bytes())?;
    debug!(count = records.len(), url, "fetched place records");
    Ok(records)
}

/// Parse place records from any CSV reader.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PlaceRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: PlaceRecord = row?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
City,State,Latitude,Longitude,Neighbors
Centro,MA,-7.5242,-46.0322,\"1,2\"
Trizidela,MA,-7.5301,-46.0401,0
Potosi,MA,-7.5180,-46.0255,0
";

    #[test]
    fn reads_rows_without_explicit_index() {
        let records = read_records(FIXTURE.as_bytes()).expect("parse fixture");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].city, "Centro");
        assert_eq!(records[0].index, None);
        assert_eq!(records[0].neighbours, "1,2");
    }

    #[test]
    fn reads_explicit_index_column() {
        let csv = "\
Index,City,State,Latitude,Longitude,Neighbors
10,Centro,MA,-7.5242,-46.0322,20
20,Trizidela,MA,-7.5301,-46.0401,10
";
        let records = read_records(csv.as_bytes()).expect("parse fixture");
        assert_eq!(records[0].index, Some(10));
        assert_eq!(records[1].index, Some(20));
    }

    #[test]
    fn blank_neighbour_column_is_allowed() {
        let csv = "\
City,State,Latitude,Longitude,Neighbors
Centro,MA,-7.5242,-46.0322,
";
        let records = read_records(csv.as_bytes()).expect("parse fixture");
        assert_eq!(records[0].neighbours, "");
    }
}
