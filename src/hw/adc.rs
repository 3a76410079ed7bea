// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Basic ADC support for STM32F7 using direct PAC register access.
//!
//! Thin wrapper around ADC1 bound to one channel and its analog pin, split into start / poll / read so the caller
//! can bound the end-of-conversion wait.
//!
//! Example:
//! ```ignore
//! let mut cds = Adc::adc1(dp.ADC1, pins.sensor.cds, CDS_CHANNEL);
//! let value = cds.sample(SENSOR_POLL_LIMIT)?;
//! ```

use stm32f7xx_hal::pac;

use crate::drivers::LightSensor;

/// Generic ADC wrapper over a PAC ADCx peripheral, bound to a single channel.
///
/// `PIN` is the analog input feeding that channel, held so it cannot be reconfigured.
pub struct Adc<ADC, PIN> {
    adc: ADC,
    pin: PIN,
    channel: u8,
}

impl<ADC, PIN> Adc<ADC, PIN> {
    #[inline]
    pub fn channel(&self) -> u8 {
        self.channel
    }

    #[inline]
    pub fn free(self) -> (ADC, PIN) {
        (self.adc, self.pin)
    }
}

fn configure_common() {
    let common = unsafe { &*pac::ADC_COMMON::ptr() };

    // ADC prescaler: PCLK2 / 4
    common.ccr.modify(|_, w| w.adcpre().div4());
}

fn init_basic_adc(adc: &pac::adc1::RegisterBlock) {
    // Power off to configure
    adc.cr2.modify(|_, w| w.adon().clear_bit());

    // 12-bit, right-aligned, software trigger
    adc.cr1.modify(|_, w| w.res().bits(0b00));
    adc.cr2.modify(|_, w| {
        w.cont().clear_bit();
        w.align().right();
        w.exten().disabled();
        w
    });

    // Power on
    adc.cr2.modify(|_, w| w.adon().set_bit());
}

/// Select `channel` as the single regular conversion, with the longest sample time.
fn select_channel(adc: &pac::adc1::RegisterBlock, channel: u8) {
    let channel = channel & 0x1F;

    // 480 cycles: the CdS divider has a high source impedance
    if channel <= 9 {
        let shift = 3 * channel as u32;
        adc.smpr2
            .modify(|r, w| unsafe { w.bits(r.bits() | (0b111 << shift)) });
    } else if channel <= 18 {
        let shift = 3 * (channel as u32 - 10);
        adc.smpr1
            .modify(|r, w| unsafe { w.bits(r.bits() | (0b111 << shift)) });
    }

    // Sequence length = 1 conversion
    adc.sqr1.modify(|_, w| w.l().bits(0));

    // Set channel
    adc.sqr3.modify(|_, w| unsafe { w.sq1().bits(channel) });
}

impl<PIN> Adc<pac::ADC1, PIN> {
    /// Create and initialize ADC1 for single conversions on `channel`, which `pin` is wired to.
    pub fn adc1(adc1: pac::ADC1, pin: PIN, channel: u8) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        configure_common();
        init_basic_adc(&adc1);
        select_channel(&adc1, channel);

        Self {
            adc: adc1,
            pin,
            channel,
        }
    }
}

impl<PIN> LightSensor for Adc<pac::ADC1, PIN> {
    fn start(&mut self) {
        self.adc.cr2.modify(|_, w| w.swstart().set_bit());
    }

    fn is_ready(&mut self) -> bool {
        self.adc.sr.read().eoc().bit_is_set()
    }

    fn read(&mut self) -> u16 {
        // Reading DR clears EOC
        self.adc.dr.read().data().bits() as u16
    }
}
