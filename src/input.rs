// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Inboxes shared between interrupt handlers and the main loop.
//!
//! Each inbox holds at most one pending event. The interrupt side overwrites it with `post`, the
//! main loop reads and clears it in a single atomic swap with `take`. An event arriving before the
//! previous one was taken replaces it, so at most one event is lost per loop iteration and no
//! event is ever handled twice.

use core::sync::atomic::{AtomicU16, AtomicU8, Ordering};

/// Bit 8 marks a pending byte in [`SerialInbox`].
const RX_PENDING: u16 = 1 << 8;

/// Last byte received on the console UART.
pub struct SerialInbox {
    slot: AtomicU16,
}

impl SerialInbox {
    pub const fn new() -> Self {
        Self {
            slot: AtomicU16::new(0),
        }
    }

    /// Publish a received byte (interrupt context).
    #[inline]
    pub fn post(&self, byte: u8) {
        self.slot.store(RX_PENDING | byte as u16, Ordering::Release);
    }

    /// Take the pending byte, if any, clearing the flag.
    #[inline]
    pub fn take(&self) -> Option<u8> {
        let raw = self.slot.swap(0, Ordering::AcqRel);
        (raw & RX_PENDING != 0).then_some(raw as u8)
    }
}

impl Default for SerialInbox {
    fn default() -> Self {
        Self::new()
    }
}

/// Last button code raised by the EXTI handler. Code 0 means "nothing pending".
pub struct ButtonInbox {
    code: AtomicU8,
}

impl ButtonInbox {
    pub const fn new() -> Self {
        Self {
            code: AtomicU8::new(0),
        }
    }

    /// Publish a button code (interrupt context). Code 0 is ignored.
    #[inline]
    pub fn post(&self, code: u8) {
        if code != 0 {
            self.code.store(code, Ordering::Release);
        }
    }

    /// Take the pending code, if any, clearing the flag.
    #[inline]
    pub fn take(&self) -> Option<u8> {
        match self.code.swap(0, Ordering::AcqRel) {
            0 => None,
            code => Some(code),
        }
    }
}

impl Default for ButtonInbox {
    fn default() -> Self {
        Self::new()
    }
}

/// Console receive inbox, fed by the USART interrupt.
pub static SERIAL_INBOX: SerialInbox = SerialInbox::new();

/// Mode button inbox, fed by the EXTI interrupt.
pub static BUTTON_INBOX: ButtonInbox = ButtonInbox::new();
