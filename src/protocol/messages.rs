// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Commands accepted on the serial console and the button trigger codes.
//!
//! The console protocol is plain ASCII, one byte per command, case-sensitive.

// Console bytes
pub const CMD_FORWARD: u8 = b'F';
pub const CMD_REVERSE: u8 = b'R';
pub const CMD_STOP: u8 = b'S';

// Button trigger codes
pub const TRIGGER_LIGHT: u8 = 1;
pub const TRIGGER_TIME: u8 = 2;

/// Console commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set the manual power level (0..=9).
    Power(u8),
    Forward,
    Reverse,
    Stop,
}

impl Command {
    /// Whether the command is only honoured in MANUAL mode.
    #[inline]
    pub fn is_manual_only(&self) -> bool {
        matches!(self, Command::Power(_) | Command::Stop)
    }
}

/// Mode toggle requests raised by the push buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// MANUAL <-> LIGHT_CONTROL
    Light,
    /// MANUAL <-> TIME_CONTROL
    Time,
}
