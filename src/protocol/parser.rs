// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Decoding of raw console bytes and button codes.
//!
//! Every command is a single byte, so there is no framing state to keep; unknown bytes are
//! dropped silently.

use crate::protocol::messages::*;

/// Decode one console byte. Returns `None` for bytes outside the command set.
pub fn parse_command(byte: u8) -> Option<Command> {
    match byte {
        b'0'..=b'9' => Some(Command::Power(byte - b'0')),
        CMD_FORWARD => Some(Command::Forward),
        CMD_REVERSE => Some(Command::Reverse),
        CMD_STOP => Some(Command::Stop),
        _ => None,
    }
}

/// Decode a button code published by the EXTI handler.
pub fn parse_trigger(code: u8) -> Option<Trigger> {
    match code {
        TRIGGER_LIGHT => Some(Trigger::Light),
        TRIGGER_TIME => Some(Trigger::Time),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_decode_to_power_levels() {
        assert_eq!(parse_command(b'0'), Some(Command::Power(0)));
        assert_eq!(parse_command(b'5'), Some(Command::Power(5)));
        assert_eq!(parse_command(b'9'), Some(Command::Power(9)));
    }

    #[test]
    fn direction_letters_are_case_sensitive() {
        assert_eq!(parse_command(b'F'), Some(Command::Forward));
        assert_eq!(parse_command(b'R'), Some(Command::Reverse));
        assert_eq!(parse_command(b'S'), Some(Command::Stop));
        assert_eq!(parse_command(b'f'), None);
        assert_eq!(parse_command(b's'), None);
    }

    #[test]
    fn unknown_bytes_are_ignored() {
        for byte in [b'\r', b'\n', b' ', b'A', b'/', b':', 0x00, 0xFF] {
            assert_eq!(parse_command(byte), None);
        }
    }

    #[test]
    fn manual_only_commands() {
        assert!(Command::Power(3).is_manual_only());
        assert!(Command::Stop.is_manual_only());
        assert!(!Command::Forward.is_manual_only());
        assert!(!Command::Reverse.is_manual_only());
    }

    #[test]
    fn trigger_codes() {
        assert_eq!(parse_trigger(1), Some(Trigger::Light));
        assert_eq!(parse_trigger(2), Some(Trigger::Time));
        assert_eq!(parse_trigger(0), None);
        assert_eq!(parse_trigger(3), None);
    }
}
