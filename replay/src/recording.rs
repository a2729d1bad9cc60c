use std::{collections::VecDeque, convert::Infallible, fs::File, io, path::Path, str::FromStr};

use math::Vector;
use processing::{Sample, SensorEvent, SensorKind, SensorStream};

use crate::error::AppError;

/// Platform type code of the accelerometer, used when a recording stores numeric sensor types.
pub const ACCELEROMETER_TYPE_CODE: u16 = 1;

/// Type code given to sensors that are recorded by name but are not the accelerometer.
pub const UNKNOWN_TYPE_CODE: u16 = u16::MAX;

/// A sensor recording loaded from CSV, replayed as if it was a live sensor stream.
///
/// Expected columns are `time_ms,x,y,z` with an optional `sensor` column naming the source of
/// each row. Rows without a sensor name are accelerometer readings.
///
pub struct Recording
{
    events: VecDeque<SensorEvent>,
    listening: bool,
}

impl Recording
{
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let sensor_column = reader.headers()?
            .iter()
            .position(|header| header.eq_ignore_ascii_case("sensor"));

        let mut events = VecDeque::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |pos| pos.line());

            let kind = match sensor_column.and_then(|column| record.get(column)) {
                Some(name) => parse_kind(name),
                None => SensorKind::Accelerometer,
            };
            let timestamp = parse_field(&record, 0, "time_ms", line)?;
            let axes: [f32; 3] = [
                parse_field(&record, 1, "x", line)?,
                parse_field(&record, 2, "y", line)?,
                parse_field(&record, 3, "z", line)?,
            ];

            events.push_back(SensorEvent { kind, sample: Sample::new(timestamp, Vector::from(axes)) });
        }

        log::info!("Loaded {} sensor events", events.len());
        Ok(Recording { events, listening: false })
    }

    /// Events not yet delivered.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

fn parse_kind(name: &str) -> SensorKind {
    if name.is_empty() || name.eq_ignore_ascii_case("accelerometer") {
        return SensorKind::Accelerometer;
    }
    match name.parse::<u16>() {
        Ok(ACCELEROMETER_TYPE_CODE) => SensorKind::Accelerometer,
        Ok(code) => SensorKind::Other(code),
        Err(_) => SensorKind::Other(UNKNOWN_TYPE_CODE),
    }
}

fn parse_field<T: FromStr>(record: &csv::StringRecord, index: usize, field: &'static str, line: u64) -> Result<T, AppError> {
    let value = record.get(index).ok_or(AppError::MissingField { line, field })?;
    value.parse().map_err(|_| AppError::InvalidField { line, field, value: value.to_string() })
}

impl SensorStream for Recording
{
    type Error = Infallible;

    fn has_accelerometer(&self) -> bool {
        self.events.iter().any(|event| event.kind == SensorKind::Accelerometer)
    }

    fn register(&mut self) -> Result<(), Self::Error> {
        self.listening = true;
        Ok(())
    }

    fn unregister(&mut self) {
        self.listening = false;
        log::debug!("Recording unregistered with {} events left", self.events.len());
    }

    fn next_event(&mut self) -> Result<Option<SensorEvent>, Self::Error> {
        if !self.listening {
            return Ok(None);
        }
        Ok(self.events.pop_front())
    }
}
