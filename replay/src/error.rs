use std::{convert::Infallible, error::Error, fmt, io};

use processing::SessionError;


#[derive(Debug)]
pub enum AppError
{
    Usage,
    InvalidPath(String),
    Io(io::Error),
    Csv(csv::Error),
    MissingField { line: u64, field: &'static str },
    InvalidField { line: u64, field: &'static str, value: String },
    MissingAccelerometer,
}

impl Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "Usage: replay <recording.csv> [results-dir]"),
            Self::InvalidPath(path) => write!(f, "Cannot derive a result name from {}", path),
            Self::Io(err) => write!(f, "I/O error: {}", err),
            Self::Csv(err) => write!(f, "CSV error: {}", err),
            Self::MissingField { line, field } => write!(f, "Line {}: missing field {}", line, field),
            Self::InvalidField { line, field, value } => {
                write!(f, "Line {}: invalid {} value {:?}", line, field, value)
            },
            Self::MissingAccelerometer => write!(f, "...you don't have an accelerometer"),
        }
    }
}

impl From<io::Error> for AppError
{
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError
{
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<Infallible> for AppError
{
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

impl<S: Into<AppError>, K: Into<AppError>> From<SessionError<S, K>> for AppError
{
    fn from(err: SessionError<S, K>) -> Self {
        match err {
            SessionError::MissingAccelerometer => AppError::MissingAccelerometer,
            SessionError::Stream(err) => err.into(),
            SessionError::Sink(err) => err.into(),
        }
    }
}
