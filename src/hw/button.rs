// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Edge-triggered mode buttons on EXTI lines.
//!
//! Each button carries the trigger code it reports (`1` = light, `2` = time). The EXTI handler
//! calls [`Button::poll`] on every button sharing the vector; the one whose pending bit is set
//! clears it and posts its code to the [`ButtonInbox`].

use stm32f7xx_hal::{
    gpio::{self, Edge, ExtiPin, Input},
    pac,
    rcc::APB2,
};

use crate::input::ButtonInbox;

pub struct Button<const P: char, const N: u8, PULL> {
    pin: gpio::Pin<P, N, Input<PULL>>,
    code: u8,
}

impl<const P: char, const N: u8, PULL> Button<P, N, PULL>
where
    gpio::Pin<P, N, Input<PULL>>: ExtiPin,
{
    /// Route `pin` to its EXTI line and fire on `edge`.
    pub fn new(
        mut pin: gpio::Pin<P, N, Input<PULL>>,
        code: u8,
        edge: Edge,
        syscfg: &mut pac::SYSCFG,
        exti: &mut pac::EXTI,
        apb2: &mut APB2,
    ) -> Self {
        pin.make_interrupt_source(syscfg, apb2);
        pin.trigger_on_edge(exti, edge);
        pin.enable_interrupt(exti);
        Self { pin, code }
    }

    #[inline]
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Service a pending edge. Returns `true` if this button fired.
    pub fn poll(&mut self, inbox: &ButtonInbox) -> bool {
        if !self.pin.check_interrupt() {
            return false;
        }
        self.pin.clear_interrupt_pending_bit();
        inbox.post(self.code);
        true
    }
}
