// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-channel motor PWM on TIM2 using direct PAC register access.
//!
//! TIM2 counts at [`PWM_TICK_HZ`] with ARR = [`PWM_ARR`], giving a 1 kHz period of 1000 ticks.
//! CH3 (PA2) drives the forward input of the H-bridge, CH4 (PA3) the reverse input; both run in
//! PWM mode 1 with compare preload so a new duty takes effect at the next update event.
//!
//! Each channel implements `embedded_hal::pwm::SetDutyCycle` with a maximum duty of ARR + 1, so
//! `set_duty_cycle_percent(p)` writes `p * (ARR + 1) / 100` to the compare register.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use stm32f7xx_hal::{
    gpio::{gpioa, Alternate},
    pac,
};

use crate::config::{PWM_ARR, PWM_TICK_HZ};

/// Configured TIM2 owning the two output pins.
pub struct Tim2Pwm {
    tim: pac::TIM2,
    pins: (gpioa::PA2<Alternate<1>>, gpioa::PA3<Alternate<1>>),
}

impl Tim2Pwm {
    /// Configure TIM2 CH3/CH4 for PWM and start the counter with both outputs at 0 %.
    ///
    /// `timclk_hz` is the APB1 timer clock feeding TIM2.
    pub fn new(
        tim2: pac::TIM2,
        pins: (gpioa::PA2<Alternate<1>>, gpioa::PA3<Alternate<1>>),
        timclk_hz: u32,
    ) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Tick and period
        let psc = (timclk_hz / PWM_TICK_HZ).saturating_sub(1);
        tim.psc.write(|w| unsafe { w.bits(psc) });
        tim.arr.write(|w| unsafe { w.bits(PWM_ARR) });

        // CH3/CH4: PWM mode 1 (OCxM = 110) with preload (OCxPE)
        tim.ccmr2_output().modify(|r, w| unsafe {
            w.bits(r.bits() | (0b110 << 12) | (1 << 11) | (0b110 << 4) | (1 << 3))
        });

        // Start at 0 %
        tim.ccr3.write(|w| unsafe { w.bits(0) });
        tim.ccr4.write(|w| unsafe { w.bits(0) });

        // Enable CH3 (CC3E) and CH4 (CC4E) outputs
        tim.ccer
            .modify(|r, w| unsafe { w.bits(r.bits() | (1 << 8) | (1 << 12)) });

        // Load shadow registers, then auto-reload preload + enable
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.arpe().set_bit().cen().set_bit());

        Self { tim, pins }
    }

    /// Split into the forward (CH3) and reverse (CH4) channels.
    pub fn split(self) -> (PwmChannel<3>, PwmChannel<4>) {
        (PwmChannel { _p: () }, PwmChannel { _p: () })
    }

    /// Stop the counter and release the timer and pins.
    pub fn free(self) -> (pac::TIM2, (gpioa::PA2<Alternate<1>>, gpioa::PA3<Alternate<1>>)) {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        (self.tim, self.pins)
    }
}

/// One TIM2 compare channel (3 or 4). Only obtainable from [`Tim2Pwm::split`].
pub struct PwmChannel<const CH: u8> {
    _p: (),
}

impl<const CH: u8> ErrorType for PwmChannel<CH> {
    type Error = Infallible;
}

impl<const CH: u8> SetDutyCycle for PwmChannel<CH> {
    fn max_duty_cycle(&self) -> u16 {
        (PWM_ARR + 1) as u16
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        // Each channel only touches its own compare register.
        let tim = unsafe { &*pac::TIM2::ptr() };
        match CH {
            3 => tim.ccr3.write(|w| unsafe { w.bits(duty as u32) }),
            _ => tim.ccr4.write(|w| unsafe { w.bits(duty as u32) }),
        }
        Ok(())
    }
}
