// Button polling period of the control loop.
pub const POLL_INTERVAL_MS: u64 = 5; // ms

// A button level has to hold this long before it is accepted.
pub const DEBOUNCE_MS: u64 = 20; // ms

// Time each frame of the power-on LED chase stays lit.
pub const CHASE_STEP_MS: u64 = 60; // ms

// Relay states after reset, in button order X, Y, Z, AUX4.
pub const DEFAULT_RELAY_STATE: [bool; panel_core::NUM_CHANNELS] = [false, false, false, false];

// The hardware watchdog resets the MCU if it is not fed within this time.
pub const WATCHDOG_TIMEOUT_MS: u64 = 8_000; // ms

// How often the supervisor feeds the watchdog and logs the panel status.
pub const STATUS_LOG_INTERVAL_MS: u64 = 1_000; // ms

pub const FW_VERSION_STR: &str = env!("CARGO_PKG_VERSION");
