use std::{env, fs::{self, File}, io, path::{Path, PathBuf}, process::ExitCode};
use processing::{FilterConfig, Session};

mod error;
mod output;
mod recording;

#[cfg(test)]
mod tests;

use error::AppError;
use output::MagnitudeLog;
use recording::Recording;

static RESULTS_DIR: &str = "analysis";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        },
    }
}

/// Replays the recording named in `args[1]` and returns the path of the written results.
///
fn run(args: &[String]) -> Result<PathBuf, AppError> {
    if args.len() < 2 {
        return Err(AppError::Usage);
    }

    // Every input CSV file gets its own folder in the results directory. Hidden names (e.g. a
    // file called `.csv`) are refused.
    let in_path = Path::new(&args[1]);
    let name = in_path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty() && !stem.starts_with('.'))
        .ok_or_else(|| AppError::InvalidPath(in_path.display().to_string()))?;
    let out_dir = Path::new(args.get(2).map_or(RESULTS_DIR, String::as_str)).join(name);

    // Open the input CSV file and listen to it like to a live sensor.
    let recording = Recording::from_path(in_path)?;
    let mut session = Session::start(recording, FilterConfig::default())?;

    fs::create_dir_all(&out_dir)?;
    let out_path = out_dir.join("magnitudes.csv");
    let out_file = File::create(&out_path)?;
    let mut sink = MagnitudeLog::new(out_file, io::stdout().lock())?;

    let stats = session.pump(&mut sink)?;
    log::info!(
        "{} events, {} from other sensors, {} accepted, {} throttled (filter counted {}/{})",
        stats.events, stats.skipped, stats.accepted, stats.dropped,
        session.filter().accepted, session.filter().dropped
    );
    log::debug!("{} events left undelivered", session.stream().remaining());
    session.stop();
    sink.finish()?;

    log::info!("Results written to {}", out_path.display());
    Ok(out_path)
}
