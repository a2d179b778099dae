use embedded_hal::digital::{OutputPin, PinState};

use crate::display::DisplayMode;
use crate::{NUM_CHANNELS, NUM_LEDS};

/// Nine-bit LED image. Bit `i` drives LED `i`: bits 0-3 are the relay
/// indicators, bits 4-8 the status group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedField(u16);

impl LedField {
    pub const MASK: u16 = (1 << NUM_LEDS) - 1;
    pub const OFF: LedField = LedField(0);
    pub const ALL: LedField = LedField(Self::MASK);

    pub const fn new(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_on(self, index: usize) -> bool {
        index < NUM_LEDS && self.0 & (1 << index) != 0
    }

    pub fn compose(relays: &[bool; NUM_CHANNELS], mode: DisplayMode) -> Self {
        let indicators = relays
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(0u16, |acc, (i, _)| acc | 1 << i);
        Self::new(indicators | (mode.status_mask() as u16) << NUM_CHANNELS)
    }
}

/// The panel LEDs, active high.
pub struct LedBank<O> {
    pins: [O; NUM_LEDS],
}

impl<O: OutputPin> LedBank<O> {
    pub fn new(pins: [O; NUM_LEDS]) -> Self {
        Self { pins }
    }

    /// Out of range indices are ignored.
    pub fn set(&mut self, index: usize, on: bool) -> Result<(), O::Error> {
        match self.pins.get_mut(index) {
            Some(pin) => pin.set_state(PinState::from(on)),
            None => Ok(()),
        }
    }

    /// Write all nine LEDs from a bit field.
    pub fn write_field(&mut self, field: LedField) -> Result<(), O::Error> {
        for (i, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(PinState::from(field.is_on(i)))?;
        }
        Ok(())
    }

    /// Write only the status group from a display mode.
    pub fn write_status(&mut self, mode: DisplayMode) -> Result<(), O::Error> {
        let mask = mode.status_mask();
        for (i, pin) in self.pins[NUM_CHANNELS..].iter_mut().enumerate() {
            pin.set_state(PinState::from(mask & (1 << i) != 0))?;
        }
        Ok(())
    }
}
