// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Timing and scaling constants for the motor lab.
//!
//! All values are compile-time defaults; nothing is persisted across resets. [`ControlConfig`]
//! bundles the ones the controller needs so tests can shorten or override them.

/// Highest power level accepted from any source.
pub const MAX_POWER: u8 = 9;

/// Power level loaded at boot.
pub const INITIAL_POWER: u8 = 9;

/// Raw ADC counts per power step in LIGHT_CONTROL (12-bit sensor, 0x180 * 10 > 0xFFF).
pub const LIGHT_INTERVAL: u16 = 0x180;

/// Pause between stopping and re-driving when the direction is flipped.
pub const SETTLE_DELAY_MS: u32 = 500;

/// Period of the LIGHT_CONTROL / TIME_CONTROL actions.
pub const CYCLE_PERIOD_MS: u32 = 1_000;

/// Maximum number of end-of-conversion polls before the light sensor is declared faulty.
pub const SENSOR_POLL_LIMIT: u32 = 100_000;

/// Debug console baud rate.
pub const CONSOLE_BAUD: u32 = 115_200;

/// PWM timer counting frequency.
pub const PWM_TICK_HZ: u32 = 1_000_000;

/// PWM auto-reload value: 1000 ticks per period, i.e. 1 kHz at a 1 MHz tick.
pub const PWM_ARR: u32 = 999;

/// Runtime parameters of [`crate::control::MotorController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlConfig {
    /// Stop-and-settle pause on direct reversal (ms)
    pub settle_delay_ms: u32,
    /// Auto-mode cycle period (ms)
    pub cycle_period_ms: u32,
    /// ADC counts per power step
    pub light_interval: u16,
    /// Power level at boot
    pub initial_power: u8,
    /// Bound on the sensor-ready busy wait
    pub sensor_poll_limit: u32,
}

impl ControlConfig {
    pub const fn new() -> Self {
        Self {
            settle_delay_ms: SETTLE_DELAY_MS,
            cycle_period_ms: CYCLE_PERIOD_MS,
            light_interval: LIGHT_INTERVAL,
            initial_power: INITIAL_POWER,
            sensor_poll_limit: SENSOR_POLL_LIMIT,
        }
    }

    /// Set the reversal settle delay.
    pub fn with_settle_delay_ms(mut self, ms: u32) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Set the auto-mode cycle period.
    pub fn with_cycle_period_ms(mut self, ms: u32) -> Self {
        self.cycle_period_ms = ms;
        self
    }

    /// Set the light scaling. Zero is bumped to one.
    pub fn with_light_interval(mut self, interval: u16) -> Self {
        self.light_interval = interval.max(1);
        self
    }

    /// Set the boot power level, clamped to [`MAX_POWER`].
    pub fn with_initial_power(mut self, power: u8) -> Self {
        self.initial_power = power.min(MAX_POWER);
        self
    }

    /// Set the sensor-ready poll bound.
    pub fn with_sensor_poll_limit(mut self, polls: u32) -> Self {
        self.sensor_poll_limit = polls;
        self
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lab_constants() {
        let cfg = ControlConfig::default();
        assert_eq!(cfg.settle_delay_ms, 500);
        assert_eq!(cfg.cycle_period_ms, 1_000);
        assert_eq!(cfg.light_interval, 384);
        assert_eq!(cfg.initial_power, 9);
    }

    #[test]
    fn light_range_spans_all_power_levels() {
        // Full scale overshoots MAX_POWER and relies on the clamp.
        assert_eq!(0x0FFF / LIGHT_INTERVAL, 10);
        assert_eq!(0x0D7F / LIGHT_INTERVAL, 8);
    }

    #[test]
    fn setters_clamp_out_of_range_values() {
        let cfg = ControlConfig::new()
            .with_initial_power(42)
            .with_light_interval(0)
            .with_settle_delay_ms(5);
        assert_eq!(cfg.initial_power, MAX_POWER);
        assert_eq!(cfg.light_interval, 1);
        assert_eq!(cfg.settle_delay_ms, 5);
    }
}
