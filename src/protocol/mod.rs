// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial command and button trigger protocol of the motor lab.

pub mod messages;
pub mod parser;

pub use messages::{Command, Trigger};
pub use parser::{parse_command, parse_trigger};
