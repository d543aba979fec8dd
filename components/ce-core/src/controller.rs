use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::InputPin;
use embedded_io_async::Write;

use crate::input::Line;
use crate::report::{MAX_LINES, StatusRecord};

/// Nominal cadence: one record every 50 ms, 20 per second.
pub const CYCLE_PERIOD: Duration = Duration::from_millis(50);

#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    NoLines,
    TooManyLines { max: usize, actual: usize },
    ZeroPeriod,
}

pub struct Runner<P: InputPin, Stream: Write, const N: usize> {
    lines: [Line<P>; N],
    stream: Stream,
    period: Duration,
}

pub fn new<P: InputPin, Stream: Write, const N: usize>(
    lines: [Line<P>; N],
    stream: Stream,
    period: Duration,
) -> Result<Runner<P, Stream, N>, ConfigError> {
    if N == 0 {
        return Err(ConfigError::NoLines);
    }
    if N > MAX_LINES {
        return Err(ConfigError::TooManyLines { max: MAX_LINES, actual: N });
    }
    if period.as_ticks() == 0 {
        return Err(ConfigError::ZeroPeriod);
    }
    Ok(Runner { lines, stream, period })
}

impl<P: InputPin, Stream: Write, const N: usize> Runner<P, Stream, N> {
    /// Sample, derive, emit and advance at a fixed cadence until `shutdown`
    /// is raised. The signal is checked once per cycle boundary; the
    /// inter-cycle sleep itself is a plain time delay.
    pub async fn run<M: RawMutex>(mut self, shutdown: &Signal<M, ()>) {
        info!("Controller started: {} lines, {} ms cycle", N, self.period.as_millis());
        loop {
            if shutdown.try_take().is_some() {
                info!("Controller stopped");
                return;
            }
            let cycle_start = Instant::now();
            self.run_cycle().await;
            // an overrun cycle starts the next one immediately, no catch-up
            Timer::at(cycle_start + self.period).await;
        }
    }

    async fn run_cycle(&mut self) {
        for line in &mut self.lines {
            line.sample();
        }
        let mut record = StatusRecord::new();
        for line in &self.lines {
            // capacity bounded by the constructor check
            let _ = record.push(line.output_bit());
        }
        let encoded = record.encode();
        match self.stream.write(encoded.as_bytes()).await {
            Ok(written) if written < encoded.len() => {
                warn!("Partial record write ({}/{}) => rest dropped", written, encoded.len());
            }
            Ok(_) => {
                trace!("CTRL.TX> {}", encoded.as_str().trim_end());
            }
            Err(_e) => {
                warn!("Record write failed => record dropped");
            }
        }
        for line in &mut self.lines {
            line.advance();
        }
    }
}
