use std::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Test pin whose level is shared between the test and the code under test.
#[derive(Clone, Default)]
pub struct MockPin {
    high: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MockPin {
    pub fn new(high: bool) -> Self {
        let pin = Self::default();
        pin.high.set(high);
        pin
    }

    pub fn is_set_high(&self) -> bool {
        self.high.get()
    }

    pub fn set_level(&self, high: bool) {
        self.high.set(high);
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

/// Creates `N` pins plus test-side handles to them.
pub fn pins<const N: usize>(high: bool) -> ([MockPin; N], Vec<MockPin>) {
    let pins: [MockPin; N] = core::array::from_fn(|_| MockPin::new(high));
    let handles = pins.iter().cloned().collect();
    (pins, handles)
}
