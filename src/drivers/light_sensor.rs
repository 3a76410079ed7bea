// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Ambient light sensor (CdS photoresistor divider on an ADC input).
//!
//! A conversion is started explicitly and polled for completion. The raw 12-bit reading
//! (0..4095) rises with the light level.

use crate::error::Fault;

/// Start / poll / read access to a light sensor conversion.
pub trait LightSensor {
    /// Start a single conversion.
    fn start(&mut self);

    /// Whether the last started conversion has completed.
    fn is_ready(&mut self) -> bool;

    /// Raw result of the last completed conversion.
    fn read(&mut self) -> u16;

    /// Start a conversion and busy-wait for it, giving up after `poll_limit` polls.
    fn sample(&mut self, poll_limit: u32) -> Result<u16, Fault> {
        self.start();
        for _ in 0..poll_limit {
            if self.is_ready() {
                return Ok(self.read());
            }
        }
        Err(Fault::SensorTimeout)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::LightSensor;

    /// Sensor that becomes ready after a fixed number of polls.
    pub struct MockSensor {
        pub value: u16,
        /// `None` never becomes ready.
        pub ready_after: Option<u32>,
        pub starts: u32,
        polls: u32,
    }

    impl MockSensor {
        pub fn new(value: u16) -> Self {
            Self {
                value,
                ready_after: Some(0),
                starts: 0,
                polls: 0,
            }
        }

        pub fn stuck() -> Self {
            Self {
                ready_after: None,
                ..Self::new(0)
            }
        }
    }

    impl LightSensor for MockSensor {
        fn start(&mut self) {
            self.starts += 1;
            self.polls = 0;
        }

        fn is_ready(&mut self) -> bool {
            let ready = matches!(self.ready_after, Some(n) if self.polls >= n);
            self.polls += 1;
            ready
        }

        fn read(&mut self) -> u16 {
            self.value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockSensor;
    use super::*;

    #[test]
    fn sample_waits_for_ready() {
        let mut sensor = MockSensor::new(1234);
        sensor.ready_after = Some(10);
        assert_eq!(sensor.sample(100), Ok(1234));
        assert_eq!(sensor.starts, 1);
    }

    #[test]
    fn sample_times_out_instead_of_hanging() {
        let mut sensor = MockSensor::stuck();
        assert_eq!(sensor.sample(50), Err(Fault::SensorTimeout));
    }

    #[test]
    fn ready_on_last_allowed_poll() {
        let mut sensor = MockSensor::new(7);
        sensor.ready_after = Some(4);
        assert_eq!(sensor.sample(5), Ok(7));
        sensor.ready_after = Some(5);
        assert_eq!(sensor.sample(5), Err(Fault::SensorTimeout));
    }
}
