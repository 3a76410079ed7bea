// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! Motor-level wrappers that sit above the PWM outputs.
//!
//! ## Modules
//!
//! - [`dc_motor`] - Brushed DC motor on an H-bridge driven by two PWM inputs.

pub mod dc_motor;

pub use dc_motor::DcMotor;
