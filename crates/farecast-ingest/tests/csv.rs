//! Tests for CSV ingestion.

use farecast_ingest::{ensure_columns, peek_headers, read_trips_csv, write_features_csv};

#[test]
fn reads_headers_and_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trips.csv");
    std::fs::write(
        &path,
        "distance,cab_type,price\n1.5,Uber,10.0\n2.0,Lyft,12.5\n",
    )
    .unwrap();

    let headers = peek_headers(&path).unwrap();
    assert_eq!(headers, vec!["distance", "cab_type", "price"]);

    let df = read_trips_csv(&path).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);
    let distance = df.column("distance").unwrap().f64().unwrap();
    assert_eq!(distance.get(0), Some(1.5));
}

#[test]
fn ensure_columns_flags_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trips.csv");
    std::fs::write(&path, "distance,cab_type\n1.5,Uber\n").unwrap();

    assert!(ensure_columns(&path, &["distance"]).is_ok());
    let error = ensure_columns(&path, &["distance", "price"]).unwrap_err();
    assert!(error.to_string().contains("price"));
}

#[test]
fn missing_file_is_reported_with_path() {
    let error = read_trips_csv(std::path::Path::new("/nonexistent/trips.csv")).unwrap_err();
    assert!(error.to_string().contains("trips.csv"));
}

#[test]
fn round_trips_through_writer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trips.csv");
    std::fs::write(&path, "distance,price\n1.5,10.0\n").unwrap();

    let mut df = read_trips_csv(&path).unwrap();
    let out = dir.path().join("features.csv");
    write_features_csv(&mut df, &out).unwrap();

    let again = read_trips_csv(&out).unwrap();
    assert_eq!(again.height(), 1);
    assert_eq!(again.width(), 2);
}
