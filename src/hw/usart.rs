// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer for the debug console.
//!
//! - `Usart` wraps the TX half and implements `core::fmt::Write`, so status lines can be written
//!   with `write!`. Include `\r` (CR) in line endings for the terminal.
//! - `UsartRx` wraps the RX half and is driven from the RXNE interrupt, publishing every received
//!   byte into a [`SerialInbox`].
//!
//! To access the terminal on the host machine, connect to the ST-LINK USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Rx, Tx},
};

use crate::input::SerialInbox;

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new(tx: Tx<U>) -> Self {
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}

/// Receive half of the console, serviced from the USART interrupt.
pub struct UsartRx<U: Instance> {
    rx: Rx<U>,
}

impl<U: Instance> UsartRx<U> {
    pub fn new(rx: Rx<U>) -> Self {
        Self { rx }
    }

    /// Read the received byte (if any) and publish it. Call from the USART interrupt.
    ///
    /// Reading the data register clears RXNE; framing/overrun errors are dropped.
    #[inline]
    pub fn on_interrupt(&mut self, inbox: &SerialInbox) {
        if let Ok(byte) = self.rx.read() {
            inbox.post(byte);
        }
    }
}
