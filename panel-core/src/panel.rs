use embedded_hal::digital::{InputPin, OutputPin};

use crate::debounce::DebouncedButton;
use crate::display::DisplayMode;
use crate::leds::{LedBank, LedField};
use crate::relay::RelayBank;
use crate::{AUX4_BUTTON, NUM_CHANNELS, NUM_LEDS};

/// Snapshot of the panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelStatus {
    pub relays: [bool; NUM_CHANNELS],
    pub mode: DisplayMode,
}

impl PanelStatus {
    pub fn led_field(&self) -> LedField {
        LedField::compose(&self.relays, self.mode)
    }
}

/// What a single [`Panel::poll`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport {
    pub toggled: [bool; NUM_CHANNELS],
    pub mode_changed: bool,
}

impl PollReport {
    pub fn is_empty(&self) -> bool {
        !self.mode_changed && !self.toggled.iter().any(|t| *t)
    }
}

/// The control panel: buttons, relays, indicator and status LEDs.
///
/// Button `i` toggles relay `i` and its indicator LED `i`. The AUX4 button
/// additionally advances the display mode of the status LEDs.
pub struct Panel<B, O> {
    buttons: [DebouncedButton<B>; NUM_CHANNELS],
    relays: RelayBank<O>,
    leds: LedBank<O>,
    mode: DisplayMode,
}

impl<B, O> Panel<B, O>
where
    B: InputPin,
    O: OutputPin<Error = B::Error>,
{
    pub fn new(
        buttons: [DebouncedButton<B>; NUM_CHANNELS],
        relays: RelayBank<O>,
        leds: LedBank<O>,
    ) -> Self {
        Self {
            buttons,
            relays,
            leds,
            mode: DisplayMode::default(),
        }
    }

    /// Drive every output from the current state.
    pub fn init(&mut self) -> Result<(), B::Error> {
        self.relays.apply()?;
        self.leds.write_field(self.status().led_field())
    }

    /// Poll all buttons once and act on debounced presses.
    pub fn poll(&mut self, now_ms: u64) -> Result<PollReport, B::Error> {
        let mut report = PollReport::default();

        for i in 0..NUM_CHANNELS {
            if !self.buttons[i].poll(now_ms)? {
                continue;
            }
            self.toggle_relay(i)?;
            report.toggled[i] = true;

            if i == AUX4_BUTTON {
                self.cycle_mode()?;
                report.mode_changed = true;
            }
        }

        Ok(report)
    }

    /// Set a relay and mirror the logical state onto its indicator LED.
    pub fn set_relay(&mut self, index: usize, on: bool) -> Result<(), B::Error> {
        if index >= NUM_CHANNELS {
            return Ok(());
        }
        self.relays.set(index, on)?;
        self.leds.set(index, on)
    }

    pub fn toggle_relay(&mut self, index: usize) -> Result<Option<bool>, B::Error> {
        let Some(on) = self.relays.toggle(index)? else {
            return Ok(None);
        };
        self.leds.set(index, on)?;
        Ok(Some(on))
    }

    /// Advance to the next display mode and redraw the status LEDs.
    pub fn cycle_mode(&mut self) -> Result<DisplayMode, B::Error> {
        self.mode = self.mode.next();
        self.leds.write_status(self.mode)?;
        Ok(self.mode)
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn status(&self) -> PanelStatus {
        PanelStatus {
            relays: self.relays.states(),
            mode: self.mode,
        }
    }

    /// Write a raw LED image, e.g. a startup chase frame. The next
    /// [`Panel::init`] restores the state image.
    pub fn show(&mut self, field: LedField) -> Result<(), B::Error> {
        self.leds.write_field(field)
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.buttons
            .get(index)
            .is_some_and(|button| button.is_pressed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INVERTED_RELAY;
    use crate::mock::{MockPin, pins};

    const DEBOUNCE_MS: u64 = 10;

    struct Rig {
        panel: Panel<MockPin, MockPin>,
        buttons: Vec<MockPin>,
        relays: Vec<MockPin>,
        leds: Vec<MockPin>,
        now: u64,
    }

    impl Rig {
        fn new(defaults: [bool; NUM_CHANNELS]) -> Self {
            let (button_pins, buttons) = pins::<NUM_CHANNELS>(true);
            let (relay_pins, relays) = pins::<NUM_CHANNELS>(false);
            let (led_pins, leds) = pins::<NUM_LEDS>(false);

            let mut panel = Panel::new(
                button_pins.map(|pin| DebouncedButton::new(pin, DEBOUNCE_MS)),
                RelayBank::new(relay_pins, defaults),
                LedBank::new(led_pins),
            );
            panel.init().unwrap();

            Self {
                panel,
                buttons,
                relays,
                leds,
                now: 0,
            }
        }

        fn run(&mut self, ms: u64) -> Vec<PollReport> {
            let mut reports = Vec::new();
            for _ in 0..ms {
                self.now += 1;
                let report = self.panel.poll(self.now).unwrap();
                if !report.is_empty() {
                    reports.push(report);
                }
            }
            reports
        }

        fn click(&mut self, index: usize) -> Vec<PollReport> {
            self.buttons[index].set_level(false);
            let mut reports = self.run(3 * DEBOUNCE_MS);
            self.buttons[index].set_level(true);
            reports.extend(self.run(3 * DEBOUNCE_MS));
            reports
        }

        fn lit(&self) -> Vec<bool> {
            self.leds.iter().map(|p| p.is_set_high()).collect()
        }
    }

    #[test]
    fn init_drives_defaults() {
        let rig = Rig::new([true, false, false, true]);

        assert!(rig.relays[0].is_set_high());
        assert!(!rig.relays[1].is_set_high());
        assert!(rig.relays[INVERTED_RELAY].is_set_high());
        assert!(rig.relays[3].is_set_high());
        assert_eq!(
            rig.lit(),
            [true, false, false, true, false, false, false, false, false]
        );
    }

    #[test]
    fn each_press_toggles_once() {
        let mut rig = Rig::new([false; NUM_CHANNELS]);

        let reports = rig.click(0);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].toggled, [true, false, false, false]);
        assert_eq!(rig.panel.status().relays, [true, false, false, false]);

        rig.click(0);
        assert_eq!(rig.panel.status().relays, [false; NUM_CHANNELS]);
    }

    #[test]
    fn bouncy_press_toggles_once() {
        let mut rig = Rig::new([false; NUM_CHANNELS]);

        for level in [false, true, false, true, false] {
            rig.buttons[1].set_level(level);
            rig.run(2);
        }
        let reports = rig.run(5 * DEBOUNCE_MS);
        assert_eq!(reports.len(), 1);
        assert_eq!(rig.panel.status().relays, [false, true, false, false]);

        for level in [true, false, true] {
            rig.buttons[1].set_level(level);
            rig.run(2);
        }
        assert!(rig.run(5 * DEBOUNCE_MS).is_empty());
        assert_eq!(rig.panel.status().relays, [false, true, false, false]);
    }

    #[test]
    fn inverted_relay_keeps_led_logical() {
        let mut rig = Rig::new([false; NUM_CHANNELS]);
        assert!(rig.relays[INVERTED_RELAY].is_set_high());
        assert!(!rig.leds[INVERTED_RELAY].is_set_high());

        rig.click(INVERTED_RELAY);
        assert!(rig.panel.status().relays[INVERTED_RELAY]);
        assert!(!rig.relays[INVERTED_RELAY].is_set_high());
        assert!(rig.leds[INVERTED_RELAY].is_set_high());
    }

    #[test]
    fn aux4_toggles_relay_and_cycles_mode() {
        let mut rig = Rig::new([false; NUM_CHANNELS]);

        let reports = rig.click(AUX4_BUTTON);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].mode_changed);
        assert_eq!(rig.panel.mode(), DisplayMode::Pattern1);
        assert_eq!(
            rig.lit(),
            [false, false, false, true, true, false, true, false, true]
        );

        let mut modes = Vec::new();
        for _ in 0..4 {
            rig.click(AUX4_BUTTON);
            modes.push(rig.panel.mode().index());
        }
        assert_eq!(modes, [2, 3, 0, 1]);
        assert!(rig.panel.status().relays[AUX4_BUTTON]);
    }

    #[test]
    fn other_buttons_leave_mode_alone() {
        let mut rig = Rig::new([false; NUM_CHANNELS]);

        for i in 0..AUX4_BUTTON {
            let reports = rig.click(i);
            assert!(!reports[0].mode_changed);
        }
        assert_eq!(rig.panel.mode(), DisplayMode::Off);
        assert_eq!(rig.panel.status().relays, [true, true, true, false]);
    }

    #[test]
    fn show_then_init_restores_state() {
        let mut rig = Rig::new([false, true, false, false]);

        rig.panel.show(LedField::ALL).unwrap();
        assert!(rig.lit().iter().all(|on| *on));

        rig.panel.init().unwrap();
        assert_eq!(rig.lit(), rig_field_bits(rig.panel.status()));
    }

    fn rig_field_bits(status: PanelStatus) -> Vec<bool> {
        let field = status.led_field();
        (0..NUM_LEDS).map(|i| field.is_on(i)).collect()
    }

    #[test]
    fn programmatic_set_mirrors_led() {
        let mut rig = Rig::new([false; NUM_CHANNELS]);

        rig.panel.set_relay(3, true).unwrap();
        assert!(rig.relays[3].is_set_high());
        assert!(rig.leds[3].is_set_high());

        rig.panel.set_relay(NUM_CHANNELS, true).unwrap();
        assert_eq!(rig.panel.toggle_relay(NUM_CHANNELS), Ok(None));
        assert_eq!(rig.panel.status().relays, [false, false, false, true]);
    }
}
