// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Power level computation for each control mode.
//!
//! - MANUAL: the last console digit, if one arrived this cycle.
//! - LIGHT_CONTROL: raw sensor reading divided by the light interval.
//! - TIME_CONTROL: one step per cycle, bouncing between 0 and [`MAX_POWER`].
//!
//! The result is always clamped to `0..=MAX_POWER`.

use crate::config::MAX_POWER;
use crate::control::Mode;

/// Power level and TIME_CONTROL ramp state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PowerController {
    level: u8,
    /// Ramp direction, persists across cycles and mode changes.
    ramp_up: bool,
    light_interval: u16,
}

impl PowerController {
    pub fn new(initial: u8, light_interval: u16) -> Self {
        Self {
            level: initial.min(MAX_POWER),
            ramp_up: true,
            light_interval: light_interval.max(1),
        }
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Compute and store the next power level for `mode`.
    ///
    /// `digit` is only consulted in MANUAL and `sensor` only in LIGHT_CONTROL.
    pub fn update(&mut self, mode: Mode, digit: Option<u8>, sensor: u16) -> u8 {
        let next: i32 = match mode {
            Mode::Manual => digit.map_or(self.level as i32, i32::from),
            Mode::LightControl => (sensor / self.light_interval) as i32,
            Mode::TimeControl => {
                if self.level >= MAX_POWER {
                    self.ramp_up = false;
                } else if self.level == 0 {
                    self.ramp_up = true;
                }
                self.level as i32 + if self.ramp_up { 1 } else { -1 }
            }
        };

        self.level = next.clamp(0, MAX_POWER as i32) as u8;
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LIGHT_INTERVAL;

    fn controller(initial: u8) -> PowerController {
        PowerController::new(initial, LIGHT_INTERVAL)
    }

    #[test]
    fn manual_digit_sets_level() {
        let mut pc = controller(9);
        assert_eq!(pc.update(Mode::Manual, Some(3), 0), 3);
        assert_eq!(pc.update(Mode::Manual, None, 0), 3);
    }

    #[test]
    fn manual_out_of_range_digit_is_clamped() {
        let mut pc = controller(0);
        assert_eq!(pc.update(Mode::Manual, Some(42), 0), MAX_POWER);
    }

    #[test]
    fn light_level_scales_and_clamps() {
        let mut pc = controller(9);
        assert_eq!(pc.update(Mode::LightControl, None, 0), 0);
        assert_eq!(pc.update(Mode::LightControl, None, 383), 0);
        assert_eq!(pc.update(Mode::LightControl, None, 384), 1);
        assert_eq!(pc.update(Mode::LightControl, None, 2000), 5);
        assert_eq!(pc.update(Mode::LightControl, None, 4095), 9);
        assert_eq!(pc.update(Mode::LightControl, None, u16::MAX), 9);
    }

    #[test]
    fn ramp_bounces_between_limits() {
        let mut pc = controller(9);
        let mut seen = vec![pc.level()];
        for _ in 0..20 {
            seen.push(pc.update(Mode::TimeControl, None, 0));
        }
        assert_eq!(
            seen,
            [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 8, 7]
        );
    }

    #[test]
    fn ramp_keeps_direction_between_limits() {
        let mut pc = controller(4);
        assert_eq!(pc.update(Mode::TimeControl, None, 0), 5);
        assert_eq!(pc.update(Mode::TimeControl, None, 0), 6);
    }

    #[test]
    fn level_is_always_in_range() {
        for initial in 0..=9 {
            for mode in [Mode::Manual, Mode::LightControl, Mode::TimeControl] {
                for sensor in [0, 1000, 4095, u16::MAX] {
                    let mut pc = controller(initial);
                    let level = pc.update(mode, Some(9), sensor);
                    assert!(level <= MAX_POWER);
                }
            }
        }
    }
}
