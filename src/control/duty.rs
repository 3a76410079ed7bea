// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Power level to PWM duty-cycle mapping.
//!
//! A linear `power * 10 %` leaves the low levels below the motor's stall threshold, so every
//! nonzero level gets a +10 % kick and level 1 an extra +5 % to break static friction:
//!
//! | power | 0 | 1  | 2  | 3  | 4  | 5  | 6  | 7  | 8  | 9   |
//! | ----- | - | -- | -- | -- | -- | -- | -- | -- | -- | --- |
//! | duty% | 0 | 25 | 30 | 40 | 50 | 60 | 70 | 80 | 90 | 100 |

use crate::control::Operation;

/// Duty cycle in percent for a power level, clamped to [0, 100].
pub fn map_duty(power: u8) -> u8 {
    let power = power as u16;
    let mut duty = power * 10;
    if power != 0 {
        duty += 10;
    }
    if power == 1 {
        duty += 5;
    }
    duty.min(100) as u8
}

/// Duty cycles (percent) of the forward and reverse H-bridge inputs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DutyPair {
    /// Forward channel (pin 2, TIM2_CH3)
    pub forward: u8,
    /// Reverse channel (pin 3, TIM2_CH4)
    pub reverse: u8,
}

impl DutyPair {
    /// Both channels off.
    pub const OFF: Self = Self {
        forward: 0,
        reverse: 0,
    };

    /// Channel duties for driving `power` in direction `op`. At most one channel is nonzero.
    pub fn for_operation(op: Operation, power: u8) -> Self {
        match op {
            Operation::Stop => Self::OFF,
            Operation::Forward => Self {
                forward: map_duty(power),
                reverse: 0,
            },
            Operation::Reverse => Self {
                forward: 0,
                reverse: map_duty(power),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(map_duty(0), 0);
        assert_eq!(map_duty(1), 25);
        assert_eq!(map_duty(2), 30);
        assert_eq!(map_duty(5), 60);
        assert_eq!(map_duty(9), 100);
    }

    #[test]
    fn monotonic_and_bounded() {
        let mut prev = 0;
        for power in 0..=9 {
            let duty = map_duty(power);
            assert!(duty >= prev, "duty dropped at power {power}");
            assert!(duty <= 100);
            prev = duty;
        }
    }

    #[test]
    fn out_of_range_power_saturates() {
        assert_eq!(map_duty(10), 100);
        assert_eq!(map_duty(u8::MAX), 100);
    }

    #[test]
    fn only_one_channel_is_driven() {
        for power in 0..=9 {
            let fwd = DutyPair::for_operation(Operation::Forward, power);
            let rev = DutyPair::for_operation(Operation::Reverse, power);
            assert_eq!(fwd.reverse, 0);
            assert_eq!(rev.forward, 0);
            assert_eq!(fwd.forward, rev.reverse);
            assert_eq!(DutyPair::for_operation(Operation::Stop, power), DutyPair::OFF);
        }
    }
}
