use embedded_hal::digital::{OutputPin, PinState};

use crate::{INVERTED_RELAY, NUM_CHANNELS};

/// A single relay output.
pub struct Relay<O> {
    pin: O,
    inverted: bool,
}

impl<O: OutputPin> Relay<O> {
    pub fn new(pin: O) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Relay that is energized by driving its pin low.
    pub fn inverted(pin: O) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn write(&mut self, on: bool) -> Result<(), O::Error> {
        self.pin.set_state(PinState::from(on != self.inverted))
    }
}

/// The four panel relays together with their logical state.
pub struct RelayBank<O> {
    relays: [Relay<O>; NUM_CHANNELS],
    state: [bool; NUM_CHANNELS],
}

impl<O: OutputPin> RelayBank<O> {
    /// Wraps the relay pins in index order. The relay at
    /// [`INVERTED_RELAY`] is driven active low.
    pub fn new(pins: [O; NUM_CHANNELS], defaults: [bool; NUM_CHANNELS]) -> Self {
        let mut i = 0;
        let relays = pins.map(|pin| {
            let relay = if i == INVERTED_RELAY {
                Relay::inverted(pin)
            } else {
                Relay::new(pin)
            };
            i += 1;
            relay
        });

        Self {
            relays,
            state: defaults,
        }
    }

    pub fn state(&self, index: usize) -> Option<bool> {
        self.state.get(index).copied()
    }

    pub fn states(&self) -> [bool; NUM_CHANNELS] {
        self.state
    }

    /// Out of range indices are ignored.
    pub fn set(&mut self, index: usize, on: bool) -> Result<(), O::Error> {
        let Some(relay) = self.relays.get_mut(index) else {
            return Ok(());
        };
        self.state[index] = on;
        relay.write(on)
    }

    /// Flip a relay and return its new state, or `None` for a bad index.
    pub fn toggle(&mut self, index: usize) -> Result<Option<bool>, O::Error> {
        let Some(on) = self.state(index).map(|on| !on) else {
            return Ok(None);
        };
        self.set(index, on)?;
        Ok(Some(on))
    }

    /// Drive every relay pin from the stored state.
    pub fn apply(&mut self) -> Result<(), O::Error> {
        for (relay, on) in self.relays.iter_mut().zip(self.state) {
            relay.write(on)?;
        }
        Ok(())
    }
}
