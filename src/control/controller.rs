// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Top-level motor controller and dispatch loop body.
//!
//! The controller owns the motor, the light sensor, the blocking delay and the console, plus all
//! control state (operation, mode, power, last sensor reading). The firmware main loop drains the
//! interrupt inboxes and hands the events to [`MotorController::step`]:
//!
//! ```ignore
//! controller.start()?;
//!
//! loop {
//!     let serial = SERIAL_INBOX.take();
//!     let button = BUTTON_INBOX.take();
//!     if let Err(fault) = controller.step(serial, button) {
//!         // report, then keep going
//!     }
//! }
//! ```
//!
//! Every notification is written to the console as one CRLF-terminated line. Console write
//! errors are ignored; the control loop never stops because telemetry could not be sent.

use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::ControlConfig;
use crate::control::rotation::{self, Transition};
use crate::control::{DutyPair, Mode, Operation, PowerController};
use crate::drivers::LightSensor;
use crate::error::Fault;
use crate::motors::DcMotor;
use crate::protocol::{parse_command, parse_trigger, Command};

/// Banner printed once at boot.
pub const BANNER: &str = "MOTOR LAB READY";

/// Controller state and peripherals.
pub struct MotorController<F, R, S, D, W> {
    motor: DcMotor<F, R>,
    sensor: S,
    delay: D,
    console: W,
    config: ControlConfig,

    operation: Operation,
    mode: Mode,
    power: PowerController,

    /// Last raw light sensor reading
    sensor_value: u16,
}

impl<F, R, S, D, W> MotorController<F, R, S, D, W>
where
    F: SetDutyCycle,
    R: SetDutyCycle,
    S: LightSensor,
    D: DelayNs,
    W: Write,
{
    /// Create a controller in STOP / MANUAL with the configured boot power level.
    pub fn new(motor: DcMotor<F, R>, sensor: S, delay: D, console: W, config: ControlConfig) -> Self {
        Self {
            motor,
            sensor,
            delay,
            console,
            config,
            operation: Operation::Stop,
            mode: Mode::Manual,
            power: PowerController::new(config.initial_power, config.light_interval),
            sensor_value: 0,
        }
    }

    /// Put the outputs in a known (off) state and print the banner.
    pub fn start(&mut self) -> Result<(), Fault> {
        self.motor.coast()?;
        self.say(format_args!("{}", BANNER));
        Ok(())
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn power(&self) -> u8 {
        self.power.level()
    }

    #[inline]
    pub fn sensor_value(&self) -> u16 {
        self.sensor_value
    }

    /// Duty pair currently applied to the motor.
    #[inline]
    pub fn duty(&self) -> DutyPair {
        self.motor.duty()
    }

    #[inline]
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Access the console, e.g. to report a fault from the main loop.
    #[inline]
    pub fn console(&mut self) -> &mut W {
        &mut self.console
    }

    /// Access the delay provider.
    #[inline]
    pub fn delay(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Tear down the controller and return its peripherals.
    pub fn free(self) -> (DcMotor<F, R>, S, D, W) {
        (self.motor, self.sensor, self.delay, self.console)
    }

    /// Run one control cycle.
    ///
    /// `serial` is the console byte received since the last cycle, `button` the button code.
    /// Both are consumed. In LIGHT_CONTROL and TIME_CONTROL the periodic action runs on every
    /// call whether or not an event was pending, and blocks for one cycle period.
    ///
    /// A fault in one stage does not skip the later ones; the first fault is returned.
    pub fn step(&mut self, serial: Option<u8>, button: Option<u8>) -> Result<(), Fault> {
        let serial_result = match serial {
            Some(byte) => self.handle_serial(byte),
            None => Ok(()),
        };

        if let Some(code) = button {
            self.handle_button(code);
        }

        let cycle_result = match self.mode {
            Mode::Manual => Ok(()),
            Mode::LightControl => self.light_cycle(),
            Mode::TimeControl => self.time_cycle(),
        };

        serial_result.and(cycle_result)
    }

    /// Route one console byte. Power digits and STOP are rejected outside MANUAL.
    pub fn handle_serial(&mut self, byte: u8) -> Result<(), Fault> {
        let Some(command) = parse_command(byte) else {
            return Ok(());
        };

        if self.mode.is_auto() && command.is_manual_only() {
            match command {
                Command::Power(_) => {
                    self.say(format_args!("Manual power control is only allowed in MANUAL mode"))
                }
                _ => self.say(format_args!("STOP is only allowed in MANUAL mode")),
            }
            return Ok(());
        }

        match command {
            Command::Power(digit) => self.update_power(Some(digit)),
            Command::Forward => self.rotate(Operation::Forward),
            Command::Reverse => self.rotate(Operation::Reverse),
            Command::Stop => self.rotate(Operation::Stop),
        }
    }

    /// Apply a mode button code. Unknown codes are ignored.
    pub fn handle_button(&mut self, code: u8) {
        if let Some(trigger) = parse_trigger(code) {
            let mode = self.mode.toggled(trigger);
            self.mode = mode;
            self.say(format_args!("Mode: {}", mode));
        }
    }

    /// Execute a direction command, settling through STOP on a direct reversal.
    pub fn rotate(&mut self, target: Operation) -> Result<(), Fault> {
        let transition = rotation::plan(self.operation, target);
        self.say(format_args!("{}", transition));

        if let Transition::Already(_) = transition {
            return Ok(());
        }

        if transition.needs_settle() {
            self.operation = Operation::Stop;
            self.drive()?;
            self.delay.delay_ms(self.config.settle_delay_ms);
        }

        self.operation = transition.target();
        self.drive()
    }

    /// Recompute the power level for the current mode and re-drive the motor.
    ///
    /// Nothing happens while stopped; a digit received in STOP is dropped.
    pub fn update_power(&mut self, digit: Option<u8>) -> Result<(), Fault> {
        if self.operation == Operation::Stop {
            self.say(format_args!("No power related operation allowed in STOP"));
            return Ok(());
        }

        self.power.update(self.mode, digit, self.sensor_value);
        self.drive()
    }

    /// LIGHT_CONTROL periodic action.
    ///
    /// If the sensor never becomes ready the power update is skipped, the previous reading kept,
    /// and `Fault::SensorTimeout` returned after the cycle period has still elapsed. A forced
    /// switch to FORWARD is still driven at the current level.
    fn light_cycle(&mut self) -> Result<(), Fault> {
        self.say(format_args!("Light Control Mode"));
        let forced = self.require_rotation();

        let result = match self.sensor.sample(self.config.sensor_poll_limit) {
            Ok(value) => {
                self.sensor_value = value;
                self.update_power(None)
            }
            Err(fault) if forced => self.drive().and(Err(fault)),
            Err(fault) => Err(fault),
        };

        self.delay.delay_ms(self.config.cycle_period_ms);
        result
    }

    /// TIME_CONTROL periodic action.
    fn time_cycle(&mut self) -> Result<(), Fault> {
        self.say(format_args!("Time Control Mode"));
        self.require_rotation();

        let result = self.update_power(None);
        self.delay.delay_ms(self.config.cycle_period_ms);
        result
    }

    /// Auto modes need the motor turning; STOP is switched to FORWARD without a settle delay.
    ///
    /// Returns `true` if the operation was changed. The caller drives the new duty.
    fn require_rotation(&mut self) -> bool {
        if self.operation != Operation::Stop {
            return false;
        }
        let label = self.mode.label();
        self.say(format_args!(
            "{} Control Mode requires NON-STOP operation, changed into FORWARD operation",
            label
        ));
        self.operation = Operation::Forward;
        true
    }

    /// Write the duty pair for the current operation and power level.
    fn drive(&mut self) -> Result<(), Fault> {
        let duty = DutyPair::for_operation(self.operation, self.power.level());
        self.say(format_args!(
            "Duty: {} for pin 2, {} for pin 3",
            duty.forward, duty.reverse
        ));
        self.motor.apply(duty)
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.console.write_fmt(args);
        let _ = self.console.write_str("\r\n");
    }
}
