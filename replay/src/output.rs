use std::io::Write;

use processing::{FilterOutput, MagnitudeSink, Sample};

use crate::error::AppError;

/// Shows both magnitudes of every accepted update on `display` and records them to a CSV file
/// with the columns `time_ms,gravity,acceleration`.
///
pub struct MagnitudeLog<W: Write, O: Write>
{
    csv: csv::Writer<W>,
    display: O,
}

impl<W: Write, O: Write> MagnitudeLog<W, O>
{
    pub fn new(out: W, display: O) -> Result<Self, AppError> {
        let mut csv = csv::Writer::from_writer(out);
        csv.write_record(["time_ms", "gravity", "acceleration"])?;
        Ok(MagnitudeLog { csv, display })
    }

    pub fn finish(&mut self) -> Result<(), AppError> {
        self.csv.flush()?;
        self.display.flush()?;
        Ok(())
    }
}

impl<W: Write, O: Write> MagnitudeSink for MagnitudeLog<W, O>
{
    type Error = AppError;

    fn show(&mut self, sample: &Sample, output: &FilterOutput) -> Result<(), Self::Error> {
        writeln!(
            self.display,
            "gravity: {} acceleration: {}",
            output.gravity_magnitude, output.linear_magnitude
        )?;
        self.csv.write_record(&[
            sample.timestamp.to_string(),
            output.gravity_magnitude.to_string(),
            output.linear_magnitude.to_string(),
        ])?;
        Ok(())
    }
}
