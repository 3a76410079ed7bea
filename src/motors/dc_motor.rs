// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Brushed DC motor on an H-bridge with one PWM input per direction.
//!
//! | forward | reverse | motor   |
//! | ------- | ------- | ------- |
//! | 0       | 0       | coast   |
//! | PWM     | 0       | forward |
//! | 0       | PWM     | reverse |
//!
//! Both inputs high (brake) is never commanded.

use embedded_hal::pwm::SetDutyCycle;

use crate::control::DutyPair;
use crate::error::Fault;

/// Two-channel DC motor. Remembers the last duty pair written.
pub struct DcMotor<F, R> {
    forward: F,
    reverse: R,
    duty: DutyPair,
}

impl<F, R> DcMotor<F, R>
where
    F: SetDutyCycle,
    R: SetDutyCycle,
{
    /// Wrap the forward and reverse PWM channels. Outputs are not touched until [`Self::apply`].
    pub fn new(forward: F, reverse: R) -> Self {
        Self {
            forward,
            reverse,
            duty: DutyPair::OFF,
        }
    }

    /// Write a duty pair (percent per channel) to the outputs.
    ///
    /// The channel being switched off is written first so both inputs are never active together.
    pub fn apply(&mut self, duty: DutyPair) -> Result<(), Fault> {
        let forward = duty.forward.min(100);
        // Forward wins if both channels are requested.
        let reverse = if forward == 0 { duty.reverse.min(100) } else { 0 };

        if forward == 0 {
            self.forward.set_duty_cycle_percent(0).map_err(|_| Fault::Pwm)?;
            self.reverse
                .set_duty_cycle_percent(reverse)
                .map_err(|_| Fault::Pwm)?;
        } else {
            self.reverse.set_duty_cycle_percent(0).map_err(|_| Fault::Pwm)?;
            self.forward
                .set_duty_cycle_percent(forward)
                .map_err(|_| Fault::Pwm)?;
        }

        self.duty = DutyPair { forward, reverse };
        Ok(())
    }

    /// Switch both channels off.
    #[inline]
    pub fn coast(&mut self) -> Result<(), Fault> {
        self.apply(DutyPair::OFF)
    }

    /// Last duty pair written.
    #[inline]
    pub fn duty(&self) -> DutyPair {
        self.duty
    }

    /// Release the PWM channels.
    pub fn free(self) -> (F, R) {
        (self.forward, self.reverse)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use core::convert::Infallible;

    use embedded_hal::pwm::{ErrorKind, ErrorType, SetDutyCycle};

    /// PWM channel with a 0..=1000 compare range, like TIM2 at ARR = 999.
    #[derive(Default)]
    pub struct MockPwm {
        pub compare: u16,
        pub writes: u32,
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.compare = duty;
            self.writes += 1;
            Ok(())
        }
    }

    #[derive(Debug)]
    pub struct BrokenPwmError;

    impl embedded_hal::pwm::Error for BrokenPwmError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// PWM channel whose writes always fail.
    pub struct BrokenPwm;

    impl ErrorType for BrokenPwm {
        type Error = BrokenPwmError;
    }

    impl SetDutyCycle for BrokenPwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
            Err(BrokenPwmError)
        }
    }
}
