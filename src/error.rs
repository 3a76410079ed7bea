// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware fault conditions surfaced by the controller.

use core::fmt;

/// Faults that can occur while driving the motor or sampling the light sensor.
///
/// None of these are fatal: the main loop reports them and keeps running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    /// The light sensor never signalled end-of-conversion within the poll bound.
    SensorTimeout,
    /// A PWM channel rejected a duty-cycle write.
    Pwm,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::SensorTimeout => f.write_str("light sensor not ready"),
            Fault::Pwm => f.write_str("PWM duty write failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_line() {
        assert_eq!(Fault::SensorTimeout.to_string(), "light sensor not ready");
        assert_eq!(Fault::Pwm.to_string(), "PWM duty write failed");
    }
}
