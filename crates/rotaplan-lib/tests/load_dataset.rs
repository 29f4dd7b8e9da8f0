use std::io::Write;

use rotaplan_lib::{load_records, load_records_from_path, read_records, Error, Graph};
use tempfile::NamedTempFile;

const FIXTURE: &str = "\
City,State,Latitude,Longitude,Neighbors
Centro,MA,-7.5242,-46.0322,\"1,2\"
Trizidela,MA,-7.5301,-46.0401,\"0,2\"
Potosi,MA,-7.5180,-46.0255,\"0,1\"
";

fn fixture_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(FIXTURE.as_bytes()).expect("write fixture");
    file
}

#[test]
fn loads_records_from_disk_and_builds_a_graph() {
    let file = fixture_file();
    let records = load_records_from_path(file.path()).expect("load fixture");
    assert_eq!(records.len(), 3);

    let graph = Graph::from_records(&records).expect("graph builds");
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.neighbours(1).unwrap(), &[0, 2]);
    let coordinate = graph.coordinate(0).unwrap();
    assert!((coordinate.latitude - -7.5242).abs() < 1e-12);
    assert!((coordinate.longitude - -46.0322).abs() < 1e-12);
}

#[test]
fn load_records_treats_plain_arguments_as_paths() {
    let file = fixture_file();
    let records = load_records(&file.path().display().to_string()).expect("load fixture");
    assert_eq!(records.len(), 3);
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = load_records_from_path(std::path::Path::new("/nonexistent/places.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_neighbour_token_fails_graph_build() {
    let csv = "\
City,State,Latitude,Longitude,Neighbors
Centro,MA,-7.5242,-46.0322,\"1,abc\"
Trizidela,MA,-7.5301,-46.0401,0
";
    let records = read_records(csv.as_bytes()).expect("parse fixture");
    let err = Graph::from_records(&records).unwrap_err();
    match err {
        Error::InvalidNeighbourList { row, token } => {
            assert_eq!(row, 0);
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_coordinate_surfaces_csv_error() {
    let csv = "\
City,State,Latitude,Longitude,Neighbors
Centro,MA,not-a-number,-46.0322,
";
    let err = read_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Csv(_)));
}
