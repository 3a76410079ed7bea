// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Control mode state machine.
//!
//! Each button toggles MANUAL against one auto mode. Pressing either button while in an auto mode
//! returns to MANUAL; there is no direct LIGHT_CONTROL ↔ TIME_CONTROL jump.

use core::fmt;

use crate::protocol::Trigger;

/// Source that decides the motor power.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Power digits from the console.
    #[default]
    Manual,
    /// Power follows the ambient light sensor.
    LightControl,
    /// Power ramps up and down once per cycle.
    TimeControl,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Manual => "MANUAL",
            Mode::LightControl => "LIGHT_CONTROL",
            Mode::TimeControl => "TIME_CONTROL",
        }
    }

    /// Short label used in the per-cycle status lines.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Manual => "Manual",
            Mode::LightControl => "Light",
            Mode::TimeControl => "Time",
        }
    }

    #[inline]
    pub fn is_auto(&self) -> bool {
        !matches!(self, Mode::Manual)
    }

    /// Mode after `trigger` is pressed.
    pub fn toggled(self, trigger: Trigger) -> Mode {
        match (self, trigger) {
            (Mode::Manual, Trigger::Light) => Mode::LightControl,
            (Mode::Manual, Trigger::Time) => Mode::TimeControl,
            _ => Mode::Manual,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_button_toggles_light_mode() {
        let mode = Mode::Manual.toggled(Trigger::Light);
        assert_eq!(mode, Mode::LightControl);
        assert_eq!(mode.toggled(Trigger::Light), Mode::Manual);
    }

    #[test]
    fn time_button_toggles_time_mode() {
        let mode = Mode::Manual.toggled(Trigger::Time);
        assert_eq!(mode, Mode::TimeControl);
        assert_eq!(mode.toggled(Trigger::Time), Mode::Manual);
    }

    #[test]
    fn other_button_in_auto_mode_returns_to_manual() {
        assert_eq!(Mode::TimeControl.toggled(Trigger::Light), Mode::Manual);
        assert_eq!(Mode::LightControl.toggled(Trigger::Time), Mode::Manual);
    }

    #[test]
    fn names() {
        assert_eq!(Mode::Manual.to_string(), "MANUAL");
        assert_eq!(Mode::LightControl.to_string(), "LIGHT_CONTROL");
        assert_eq!(Mode::TimeControl.to_string(), "TIME_CONTROL");
        assert!(!Mode::Manual.is_auto());
        assert!(Mode::TimeControl.is_auto());
    }
}
