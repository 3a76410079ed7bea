// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the Nucleo-F767ZI motor lab board.
//!
//! | Signal | Pin | Notes |
//! | ------ | --- | ----- |
//! | Console TX/RX | PD8 / PD9 | USART3, ST-LINK virtual COM port |
//! | Motor forward | PA2 | TIM2_CH3 (AF1) |
//! | Motor reverse | PA3 | TIM2_CH4 (AF1) |
//! | CdS divider | PC0 | ADC1_IN10 (Arduino A1) |
//! | Light button | PC13 | User button B1, active high |
//! | Time button | PC11 | External push button to GND, active low |

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, gpiod, Alternate, Analog, Floating, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

/// ADC1 channel wired to [`SensorPins::cds`].
pub const CDS_CHANNEL: u8 = 10;

pub struct BoardPins {
    pub leds: Leds,
    pub usart3: Usart3Pins,
    pub motor: MotorPins,
    pub sensor: SensorPins,
    pub buttons: ButtonPins,
}

pub struct Leds {
    pub green: gpiob::PB0<Output<PushPull>>, // LD1
    pub red: gpiob::PB14<Output<PushPull>>, // LD3
}

pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

pub struct MotorPins {
    pub forward: gpioa::PA2<Alternate<1>>,
    pub reverse: gpioa::PA3<Alternate<1>>,
}

pub struct SensorPins {
    pub cds: gpioc::PC0<Analog>,
}

pub struct ButtonPins {
    pub light: gpioc::PC13<Input<Floating>>,
    pub time: gpioc::PC11<Input<PullUp>>,
}

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpioc: pac::GPIOC, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();

        Self {
            leds: Leds {
                green: gpiob.pb0.into_push_pull_output(),
                red: gpiob.pb14.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            motor: MotorPins {
                forward: gpioa.pa2.into_alternate::<1>(),
                reverse: gpioa.pa3.into_alternate::<1>(),
            },

            sensor: SensorPins {
                cds: gpioc.pc0.into_analog(),
            },

            buttons: ButtonPins {
                // B1 has an external pull-down on the Nucleo
                light: gpioc.pc13.into_floating_input(),
                time: gpioc.pc11.into_pull_up_input(),
            },
        }
    }
}
