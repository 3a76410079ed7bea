// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device abstractions that sit above the raw `hw/` layer and below the
//! control logic.
//!
//! ## Existing drivers
//!
//! - [`light_sensor`] – CdS photoresistor read through a single ADC channel

pub mod light_sensor;

pub use light_sensor::LightSensor;
