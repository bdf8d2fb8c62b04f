use gh_controls::ActuatorState;
use gh_log::{COLUMNS, CsvLogWriter, LogRecord, SwitchState};
use gh_sensors::Reading;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("gh_log_test").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn record(n: usize) -> LogRecord {
    let reading = Reading {
        temperature_c: 20.0 + n as f64,
        air_humidity_pct: 55.5,
        soil_moisture_pct: 40.0,
        luminosity_lux: 12000.0,
    };
    let state = ActuatorState {
        fan_on: n % 2 == 0,
        humidifier_on: false,
    };
    LogRecord::new(format!("2026-08-06 10:00:{:02}", n), &reading, state)
}

#[test]
fn header_written_exactly_once_across_flushes() {
    let dir = scratch_dir("header_once");
    let writer = CsvLogWriter::new(&dir, "log.csv").unwrap();

    writer.flush(&[record(0), record(1)]).unwrap();
    writer.flush(&[record(2)]).unwrap();
    writer.flush(&[record(3), record(4), record(5)]).unwrap();

    let content = std::fs::read_to_string(writer.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // one header + six data rows, no matter how many flushes produced them
    assert_eq!(lines.len(), 7);
    let header_count = lines
        .iter()
        .filter(|l| l.starts_with("timestamp,"))
        .count();
    assert_eq!(header_count, 1);
    assert_eq!(lines[0], COLUMNS.join(","));
}

#[test]
fn no_header_when_file_already_exists() {
    let dir = scratch_dir("existing_file");
    let writer = CsvLogWriter::new(&dir, "log.csv").unwrap();

    writer.flush(&[record(0)]).unwrap();
    assert!(writer.is_log_present());

    writer.flush(&[record(1)]).unwrap();

    let content = std::fs::read_to_string(writer.path()).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.lines().nth(1).unwrap().starts_with("2026-08-06 10:00:00"));
}

#[test]
fn column_order_is_fixed() {
    let dir = scratch_dir("column_order");
    let writer = CsvLogWriter::new(&dir, "log.csv").unwrap();

    let reading = Reading {
        temperature_c: 29.5,
        air_humidity_pct: 45.0,
        soil_moisture_pct: 62.3,
        luminosity_lux: 18250.0,
    };
    let state = ActuatorState {
        fan_on: true,
        humidifier_on: true,
    };
    writer
        .flush(&[LogRecord::new("2026-08-06 10:15:00".to_string(), &reading, state)])
        .unwrap();

    let content = std::fs::read_to_string(writer.path()).unwrap();
    assert_eq!(
        content.lines().nth(1).unwrap(),
        "2026-08-06 10:15:00,29.5,45.0,62.3,18250.0,ON,ON"
    );
}

#[test]
fn read_back_round_trips_records() {
    let dir = scratch_dir("round_trip");
    let writer = CsvLogWriter::new(&dir, "log.csv").unwrap();

    let records: Vec<LogRecord> = (0..5).map(record).collect();
    writer.flush(&records[..2]).unwrap();
    writer.flush(&records[2..]).unwrap();

    let loaded = writer.read_back().unwrap();
    assert_eq!(loaded, records);
    assert_eq!(loaded[0].fan_state, SwitchState::On);
    assert_eq!(loaded[1].fan_state, SwitchState::Off);
}

#[test]
fn directory_creation_is_idempotent() {
    let dir = scratch_dir("mkdir").join("nested/deeper");
    let first = CsvLogWriter::new(&dir, "log.csv").unwrap();
    let second = CsvLogWriter::new(&dir, "log.csv").unwrap();
    assert_eq!(first.path(), second.path());
    assert!(!first.is_log_present());
}
