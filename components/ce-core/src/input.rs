use embedded_hal::digital::InputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportMode {
    /// Report the level every cycle: 1 while active.
    Level,
    /// Report 1 only on the cycle of an inactive-to-active transition.
    Edge,
}

/// One sampled input line. `previous` is `None` until the first cycle has
/// completed, afterwards it is always the `current` of the cycle before.
pub struct Line<P: InputPin> {
    pin: P,
    polarity: Polarity,
    mode: ReportMode,
    current: bool,
    previous: Option<bool>,
}

impl<P: InputPin> Line<P> {
    pub fn new(pin: P, polarity: Polarity, mode: ReportMode) -> Self {
        Line {
            pin,
            polarity,
            mode,
            current: false,
            previous: None,
        }
    }

    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    pub(crate) fn sample(&mut self) {
        match self.pin.is_high() {
            Ok(level) => {
                self.current = match self.polarity {
                    Polarity::ActiveHigh => level,
                    Polarity::ActiveLow => !level,
                };
            }
            Err(_e) => {
                // keep the last known level
                warn!("Line read error => keep last level");
            }
        }
    }

    pub(crate) fn output_bit(&self) -> bool {
        match self.mode {
            ReportMode::Level => self.current,
            // no edge on the very first cycle, there is no previous sample
            ReportMode::Edge => self.current && self.previous == Some(false),
        }
    }

    // must run strictly after output_bit, edge derivation reads the pre-update value
    pub(crate) fn advance(&mut self) {
        self.previous = Some(self.current);
    }
}
