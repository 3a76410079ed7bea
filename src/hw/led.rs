// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status LEDs on the Nucleo board.
//!
//! The green LED shows the firmware is running; the red LED is lit while the last control cycle
//! ended in a [`crate::Fault`] and cleared by the next clean one.

use stm32f7xx_hal::gpio::{self, Output, PushPull};

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct Led<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
    active: ActiveLevel,
    is_on: bool,
}

impl<const P: char, const N: u8> Led<P, N> {
    /// Wrap `pin`, starting OFF.
    pub fn new(mut pin: gpio::Pin<P, N, Output<PushPull>>, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low(),
            ActiveLevel::Low => pin.set_high(),
        }
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Drive the LED logically ON (true) or OFF (false). Skips the GPIO write if unchanged.
    pub fn set(&mut self, on: bool) {
        if on == self.is_on {
            return;
        }
        let high = matches!(self.active, ActiveLevel::High) == on;
        if high {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }
}
