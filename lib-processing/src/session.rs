use core::{convert::Infallible, error::Error, fmt};
use crate::*;

/// Type of the sensor an event originates from. Only accelerometer events are fed to the filter.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind
{
    Accelerometer,

    /// Any other sensor, identified by a host specific type code.
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorEvent
{
    pub kind: SensorKind,
    pub sample: Sample,
}

impl SensorEvent {
    pub const fn accelerometer(sample: Sample) -> Self {
        SensorEvent { kind: SensorKind::Accelerometer, sample }
    }
}

/// Source of sensor events provided by the host, e.g. the platform's sensor service or a
/// recording.
///
pub trait SensorStream
{
    type Error;

    /// Is there an accelerometer this stream can deliver readings from?
    fn has_accelerometer(&self) -> bool;

    /// Start delivering events.
    fn register(&mut self) -> Result<(), Self::Error>;

    /// Stop delivering events. Called exactly once for every successful `register`.
    fn unregister(&mut self);

    /// Next pending event, or `None` if there is nothing to process right now.
    fn next_event(&mut self) -> Result<Option<SensorEvent>, Self::Error>;
}

impl<T: SensorStream + ?Sized> SensorStream for &mut T {
    type Error = T::Error;

    fn has_accelerometer(&self) -> bool {
        (**self).has_accelerometer()
    }

    fn register(&mut self) -> Result<(), Self::Error> {
        (**self).register()
    }

    fn unregister(&mut self) {
        (**self).unregister()
    }

    fn next_event(&mut self) -> Result<Option<SensorEvent>, Self::Error> {
        (**self).next_event()
    }
}

/// Consumer of the filter results, e.g. a display. Gets every accepted update.
///
pub trait MagnitudeSink
{
    type Error;

    fn show(&mut self, sample: &Sample, output: &FilterOutput) -> Result<(), Self::Error>;
}

#[derive(Debug)]
pub enum SessionError<S, K = Infallible>
{
    /// The host has no accelerometer, the session refuses to start.
    MissingAccelerometer,
    Stream(S),
    Sink(K),
}

impl<S: fmt::Debug + fmt::Display, K: fmt::Debug + fmt::Display> Error for SessionError<S, K> {}

impl<S: fmt::Display, K: fmt::Display> fmt::Display for SessionError<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingAccelerometer => write!(f, "No accelerometer available"),
            Self::Stream(err) => write!(f, "Sensor stream error: {}", err),
            Self::Sink(err) => write!(f, "Output error: {}", err),
        }
    }
}

/// Counts of what happened during one [`Session::pump`] call.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats
{
    /// Every event taken from the stream.
    pub events: usize,

    /// Events from sensors other than the accelerometer.
    pub skipped: usize,

    /// Accelerometer samples that produced an output.
    pub accepted: usize,

    /// Accelerometer samples throttled by the filter.
    pub dropped: usize,
}

/// An active subscription to a sensor stream together with the filter state belonging to it.
///
/// The stream is registered by [`Session::start`] and unregistered when the session is stopped
/// or dropped, whichever comes first. The filter state lives exactly as long as the session.
///
pub struct Session<S: SensorStream>
{
    stream: S,
    filter: GravityFilter,
    registered: bool,
}

impl<S: SensorStream> Session<S>
{
    pub fn start(mut stream: S, config: FilterConfig) -> Result<Self, SessionError<S::Error>> {
        if !stream.has_accelerometer() {
            log::error!("You don't have an accelerometer, not starting");
            return Err(SessionError::MissingAccelerometer);
        }

        stream.register().map_err(SessionError::Stream)?;
        log::info!("Listening to accelerometer");

        Ok(Session {
            stream,
            filter: GravityFilter::new(config),
            registered: true,
        })
    }

    /// Process every pending event and push each accepted result to `sink`. Returns once the
    /// stream has no more events.
    ///
    pub fn pump<K: MagnitudeSink>(&mut self, sink: &mut K) -> Result<PumpStats, SessionError<S::Error, K::Error>> {
        let mut stats = PumpStats::default();

        while let Some(event) = self.stream.next_event().map_err(SessionError::Stream)? {
            stats.events += 1;

            if event.kind != SensorKind::Accelerometer {
                stats.skipped += 1;
                continue;
            }

            match self.filter.update(event.sample) {
                Some(output) => {
                    stats.accepted += 1;
                    sink.show(&event.sample, &output).map_err(SessionError::Sink)?;
                },
                None => stats.dropped += 1,
            }
        }

        Ok(stats)
    }

    #[inline]
    pub fn filter(&self) -> &GravityFilter {
        &self.filter
    }

    #[inline]
    pub fn stream(&self) -> &S {
        &self.stream
    }

    /// Unregisters from the stream and discards the filter state.
    ///
    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.registered {
            self.registered = false;
            self.stream.unregister();
            log::info!("Stopped listening to accelerometer");
        }
    }
}

impl<S: SensorStream> Drop for Session<S> {
    fn drop(&mut self) {
        self.release();
    }
}
