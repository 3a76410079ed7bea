// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Logic
//!
//! Open-loop speed and direction control for the lab motor.
//!
//! ## Modules
//!
//! - [`duty`] - Power level to PWM duty-cycle mapping.
//! - [`power`] - Per-mode power level computation and the TIME_CONTROL ramp.
//! - [`rotation`] - STOP / FORWARD / REVERSE transitions with the reversal settle delay.
//! - [`mode`] - MANUAL / LIGHT_CONTROL / TIME_CONTROL toggling.
//! - [`controller`] - Owns all state and runs one dispatch cycle per call.

pub mod controller;
pub mod duty;
pub mod mode;
pub mod power;
pub mod rotation;

pub use controller::MotorController;
pub use duty::{map_duty, DutyPair};
pub use mode::Mode;
pub use power::PowerController;
pub use rotation::{Operation, Transition};
