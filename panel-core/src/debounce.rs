use embedded_hal::digital::InputPin;

/// A stable level change accepted by the [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Button went down. On active-low wiring this is the falling edge.
    Pressed,
    Released,
}

/// Time based switch debouncer.
///
/// The raw level has to stay unchanged for `interval_ms` before it replaces
/// the stable level. Every bounce restarts the interval, so a burst of
/// transitions collapses into a single edge and glitches shorter than the
/// interval are dropped.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    interval_ms: u64,
    stable: bool,
    raw: bool,
    raw_since_ms: u64,
}

impl Debouncer {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            stable: false,
            raw: false,
            raw_since_ms: 0,
        }
    }

    /// Feed a raw sample taken at `now_ms`.
    ///
    /// Returns the edge if this sample completed a stable change.
    pub fn update(&mut self, pressed: bool, now_ms: u64) -> Option<Edge> {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_since_ms = now_ms;
        }

        if self.raw == self.stable {
            return None;
        }

        if now_ms.saturating_sub(self.raw_since_ms) < self.interval_ms {
            return None;
        }

        self.stable = self.raw;
        Some(if self.stable {
            Edge::Pressed
        } else {
            Edge::Released
        })
    }

    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

/// Active-low push button with a debouncer attached.
pub struct DebouncedButton<P> {
    pin: P,
    debouncer: Debouncer,
}

impl<P: InputPin> DebouncedButton<P> {
    /// The pin must already be configured as an input with pull-up.
    pub fn new(pin: P, interval_ms: u64) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(interval_ms),
        }
    }

    /// Sample the pin and report whether a debounced press happened since
    /// the previous poll.
    pub fn poll(&mut self, now_ms: u64) -> Result<bool, P::Error> {
        let pressed = self.pin.is_low()?;
        Ok(self.debouncer.update(pressed, now_ms) == Some(Edge::Pressed))
    }

    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }
}
