use std::{env, fs, path::PathBuf, process};
use processing::{FilterConfig, PumpStats, SensorKind, SensorStream, Session};

use crate::error::AppError;
use crate::run;
use crate::output::MagnitudeLog;
use crate::recording::*;

#[test]
fn parses_rows_without_sensor_column_as_accelerometer() {
    let csv = "time_ms,x,y,z\n0,9.8,0.1,-0.2\n150, 0.0, 0.0 ,9.8\n";

    let mut recording = Recording::from_reader(csv.as_bytes()).unwrap();

    assert_eq!(recording.remaining(), 2);
    assert!(recording.has_accelerometer());
    recording.register().unwrap();
    let event = recording.next_event().unwrap().unwrap();
    assert_eq!(event.kind, SensorKind::Accelerometer);
    assert_eq!(event.sample.timestamp, 0);
    assert_eq!(event.sample.raw.x, 9.8);
    assert_eq!(event.sample.raw.z, -0.2);
}

#[test]
fn parses_sensor_names_and_codes() {
    let csv = "time_ms,x,y,z,sensor\n\
               0,1,2,3,accelerometer\n\
               1,1,2,3,Gyroscope\n\
               2,1,2,3,1\n\
               3,1,2,3,4\n";

    let mut recording = Recording::from_reader(csv.as_bytes()).unwrap();
    recording.register().unwrap();

    let mut kinds = Vec::new();
    while let Some(event) = recording.next_event().unwrap() {
        kinds.push(event.kind);
    }
    assert_eq!(kinds, [
        SensorKind::Accelerometer,
        SensorKind::Other(UNKNOWN_TYPE_CODE),
        SensorKind::Accelerometer,
        SensorKind::Other(4),
    ]);
}

#[test]
fn recording_without_accelerometer_rows_refuses_to_start() {
    let csv = "time_ms,x,y,z,sensor\n0,1,2,3,gyroscope\n";
    let recording = Recording::from_reader(csv.as_bytes()).unwrap();

    assert!(!recording.has_accelerometer());
    let err: AppError = Session::start(recording, FilterConfig::default()).err().unwrap().into();
    assert!(matches!(err, AppError::MissingAccelerometer));
}

#[test]
fn invalid_value_reports_line_and_field() {
    let csv = "time_ms,x,y,z\n0,1,2,3\n100,1,abc,3\n";

    let err = Recording::from_reader(csv.as_bytes()).err().unwrap();

    match err {
        AppError::InvalidField { line, field, value } => {
            assert_eq!(line, 3);
            assert_eq!(field, "y");
            assert_eq!(value, "abc");
        },
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn short_row_reports_missing_field() {
    let csv = "time_ms,x,y,z\n0,1,2\n";

    let err = Recording::from_reader(csv.as_bytes()).err().unwrap();

    assert!(matches!(err, AppError::MissingField { line: 2, field: "z" }));
}

#[test]
fn nothing_is_delivered_before_registering() {
    let csv = "time_ms,x,y,z\n0,1,2,3\n";
    let mut recording = Recording::from_reader(csv.as_bytes()).unwrap();

    assert!(recording.next_event().unwrap().is_none());
    assert_eq!(recording.remaining(), 1);
}

#[test]
fn replays_recording_into_magnitude_log() {
    let csv = "time_ms,x,y,z,sensor\n\
               0,3,4,0,accelerometer\n\
               20,50,50,50,gyroscope\n\
               50,3,4,0,accelerometer\n\
               150,3,4,0,accelerometer\n";
    let recording = Recording::from_reader(csv.as_bytes()).unwrap();

    let mut out = Vec::new();
    let mut display = Vec::new();
    {
        let mut sink = MagnitudeLog::new(&mut out, &mut display).unwrap();
        let config = FilterConfig::new(1.0, 100).unwrap();
        let mut session = Session::start(recording, config).unwrap();

        let stats = session.pump(&mut sink).unwrap();
        assert_eq!(stats, PumpStats { events: 4, skipped: 1, accepted: 2, dropped: 1 });

        session.stop();
        sink.finish().unwrap();
    }

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "time_ms,gravity,acceleration\n0,5,0\n150,5,0\n");

    let display = String::from_utf8(display).unwrap();
    assert_eq!(display, "gravity: 5 acceleration: 0\ngravity: 5 acceleration: 0\n");
}

/// Fresh directory under the system temp dir, unique per test and process.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("replay-{}-{}", process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn missing_recording_argument_is_a_usage_error() {
    assert!(matches!(run(&[]), Err(AppError::Usage)));
    assert!(matches!(run(&args(&["replay"])), Err(AppError::Usage)));
}

#[test]
fn writes_magnitudes_into_folder_named_after_recording() {
    let dir = scratch_dir("layout");
    let in_path = dir.join("walk.csv");
    fs::write(&in_path, "time_ms,x,y,z\n0,3,4,0\n50,3,4,0\n150,3,4,0\n").unwrap();
    let results = dir.join("results");

    let out_path = run(&args(&["replay", in_path.to_str().unwrap(), results.to_str().unwrap()])).unwrap();

    assert_eq!(out_path, results.join("walk").join("magnitudes.csv"));
    let written = fs::read_to_string(&out_path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("time_ms,gravity,acceleration"));

    let rows: Vec<Vec<f64>> = lines
        .map(|line| line.split(',').map(|value| value.parse().unwrap()).collect())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], 0.0);
    assert_eq!(rows[1][0], 150.0);

    // alpha = 0.3: gravity is 0.3 * 5 after the first sample, 0.51 * 5 after the second.
    assert!((rows[0][1] - 1.5).abs() < 1e-5, "{}", rows[0][1]);
    assert!((rows[0][2] - 3.5).abs() < 1e-5, "{}", rows[0][2]);
    assert!((rows[1][1] - 2.55).abs() < 1e-5, "{}", rows[1][1]);
    assert!((rows[1][2] - 2.45).abs() < 1e-5, "{}", rows[1][2]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn recording_without_accelerometer_writes_nothing() {
    let dir = scratch_dir("no-accel");
    let in_path = dir.join("desk.csv");
    fs::write(&in_path, "time_ms,x,y,z,sensor\n0,1,2,3,gyroscope\n200,1,2,3,gyroscope\n").unwrap();
    let results = dir.join("results");

    let result = run(&args(&["replay", in_path.to_str().unwrap(), results.to_str().unwrap()]));

    assert!(matches!(result, Err(AppError::MissingAccelerometer)));
    assert!(!results.join("desk").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn hidden_recording_name_is_refused() {
    let dir = scratch_dir("hidden");
    let in_path = dir.join(".csv");
    fs::write(&in_path, "time_ms,x,y,z\n0,3,4,0\n").unwrap();
    let results = dir.join("results");

    let result = run(&args(&["replay", in_path.to_str().unwrap(), results.to_str().unwrap()]));

    assert!(matches!(result, Err(AppError::InvalidPath(_))));
    assert!(!results.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unreadable_recording_is_an_io_error() {
    let dir = scratch_dir("missing");

    let result = run(&args(&["replay", dir.join("absent.csv").to_str().unwrap()]));

    assert!(matches!(result, Err(AppError::Io(_))));

    fs::remove_dir_all(&dir).unwrap();
}
