use crate::NUM_LEDS;
use crate::leds::LedField;

/// Frames of the power-on LED chase.
///
/// Lights LED 0 through LED 8 one at a time, runs back down to LED 0 and
/// finishes with every LED off.
#[derive(Debug, Clone)]
pub struct ChaseFrames {
    step: usize,
}

impl ChaseFrames {
    /// Up, down without repeating the top LED, then the dark frame.
    pub const LEN: usize = 2 * NUM_LEDS;

    pub const fn new() -> Self {
        Self { step: 0 }
    }
}

impl Default for ChaseFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ChaseFrames {
    type Item = LedField;

    fn next(&mut self) -> Option<LedField> {
        let step = self.step;
        let frame = match step {
            s if s < NUM_LEDS => LedField::new(1 << s),
            s if s < Self::LEN - 1 => LedField::new(1 << (Self::LEN - 2 - s)),
            s if s == Self::LEN - 1 => LedField::OFF,
            _ => return None,
        };
        self.step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = Self::LEN.saturating_sub(self.step);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ChaseFrames {}
