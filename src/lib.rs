// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motor Lab Firmware
//!
//! Firmware for a single brushed DC motor driven through two complementary PWM channels, written
//! in Rust, targeting an STM32F767ZI MCU (Nucleo-144).
//!
//! The motor is controlled in one of three modes:
//!
//! - **MANUAL** – power digits `0`-`9` and `F`/`R`/`S` direction commands over the serial console.
//! - **LIGHT_CONTROL** – power follows an ambient light sensor sampled once per second.
//! - **TIME_CONTROL** – power ramps 9 → 0 → 9 one step per second.
//!
//! Two push buttons toggle between MANUAL and either auto mode.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Timing and scaling constants |
//! | [`control`] | Duty mapping, power, rotation and mode state machines, main controller |
//! | [`drivers`] | Device-level abstractions (ambient light sensor) |
//! | [`input`] | Inboxes shared between interrupt handlers and the main loop |
//! | [`motors`] | Two-channel DC motor on top of PWM outputs |
//! | [`protocol`] | Serial command and button trigger decoding |
//! | `hw` | MCU-level wrappers around USART, ADC, timers, GPIO (embedded target only) |
//!
//! ## Getting Started
//!
//! Run the control-logic tests on the host:
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod input;
pub mod motors;
pub mod protocol;

#[cfg(target_os = "none")]
pub mod hw;

pub use error::Fault;
