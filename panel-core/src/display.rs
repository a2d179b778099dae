/// Display mode of the status LED group, cycled by the AUX4 button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    #[default]
    Off,
    Pattern1,
    Pattern2,
    Pattern3,
}

impl DisplayMode {
    pub const COUNT: u8 = 4;

    pub const fn index(self) -> u8 {
        match self {
            DisplayMode::Off => 0,
            DisplayMode::Pattern1 => 1,
            DisplayMode::Pattern2 => 2,
            DisplayMode::Pattern3 => 3,
        }
    }

    /// Out of range values wrap around.
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => DisplayMode::Off,
            1 => DisplayMode::Pattern1,
            2 => DisplayMode::Pattern2,
            _ => DisplayMode::Pattern3,
        }
    }

    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Bit pattern for the five status LEDs, bit 0 = first status LED.
    pub const fn status_mask(self) -> u8 {
        match self {
            DisplayMode::Off => 0b00000,
            DisplayMode::Pattern1 => 0b10101,
            DisplayMode::Pattern2 => 0b01010,
            DisplayMode::Pattern3 => 0b11111,
        }
    }
}
