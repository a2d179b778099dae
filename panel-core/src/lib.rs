//! Hardware-independent logic for the CNC control panel.
//!
//! Everything here is generic over the `embedded-hal` digital traits so it can
//! run on the RP2040 and be unit tested on the host.

#![cfg_attr(not(test), no_std)]

pub mod chase;
pub mod debounce;
pub mod display;
pub mod leds;
pub mod panel;
pub mod relay;

#[cfg(test)]
pub(crate) mod mock;

pub use chase::ChaseFrames;
pub use debounce::{DebouncedButton, Debouncer, Edge};
pub use display::DisplayMode;
pub use leds::{LedBank, LedField};
pub use panel::{Panel, PanelStatus, PollReport};
pub use relay::{Relay, RelayBank};

/// Number of push buttons, relays and relay indicator LEDs.
pub const NUM_CHANNELS: usize = 4;

/// Number of status LEDs driven by the display mode.
pub const NUM_STATUS_LEDS: usize = 5;

/// Total number of LEDs on the panel: one indicator per relay plus the status group.
pub const NUM_LEDS: usize = NUM_CHANNELS + NUM_STATUS_LEDS;

/// The button that cycles the display mode in addition to toggling its relay.
pub const AUX4_BUTTON: usize = 3;

/// The relay whose physical output is wired active-low.
pub const INVERTED_RELAY: usize = 2;
