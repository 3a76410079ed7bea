// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Rotation state machine (STOP / FORWARD / REVERSE).
//!
//! Flipping directly between FORWARD and REVERSE always goes through STOP and a settle delay so
//! the H-bridge never sees an abrupt current reversal:
//!
//! | current \ cmd | F                     | R                     | S       |
//! | ------------- | --------------------- | --------------------- | ------- |
//! | STOP          | → FORWARD             | → REVERSE             | no-op   |
//! | FORWARD       | no-op                 | STOP, settle, REVERSE | → STOP  |
//! | REVERSE       | STOP, settle, FORWARD | no-op                 | → STOP  |
//!
//! [`plan`] only decides the transition; [`crate::control::MotorController`] carries it out.

use core::fmt;

/// Motor direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    Stop,
    Forward,
    Reverse,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Stop => "STOP",
            Operation::Forward => "FORWARD",
            Operation::Reverse => "REVERSE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a direction command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Already in the commanded state.
    Already(Operation),
    /// STOP → FORWARD / REVERSE.
    Start(Operation),
    /// FORWARD / REVERSE → STOP.
    Halt(Operation),
    /// FORWARD ↔ REVERSE through STOP and the settle delay.
    Reverse { from: Operation, to: Operation },
}

impl Transition {
    /// State after the transition completes.
    pub fn target(&self) -> Operation {
        match *self {
            Transition::Already(op) | Transition::Start(op) => op,
            Transition::Halt(_) => Operation::Stop,
            Transition::Reverse { to, .. } => to,
        }
    }

    /// Whether the settle delay is required.
    #[inline]
    pub fn needs_settle(&self) -> bool {
        matches!(self, Transition::Reverse { .. })
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Already(op) => write!(f, "Already {}", op),
            Transition::Start(op) => write!(f, "STOP -> {}", op),
            Transition::Halt(op) => write!(f, "{} -> STOP", op),
            Transition::Reverse { from, to } => write!(f, "{} -> STOP -> {}", from, to),
        }
    }
}

/// Decide how to get from `current` to `target`.
pub fn plan(current: Operation, target: Operation) -> Transition {
    match (current, target) {
        (c, t) if c == t => Transition::Already(t),
        (Operation::Stop, t) => Transition::Start(t),
        (c, Operation::Stop) => Transition::Halt(c),
        (from, to) => Transition::Reverse { from, to },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Operation; 3] = [Operation::Stop, Operation::Forward, Operation::Reverse];

    #[test]
    fn every_command_reaches_its_target() {
        for current in ALL {
            for target in ALL {
                assert_eq!(plan(current, target).target(), target);
            }
        }
    }

    #[test]
    fn repeating_a_command_is_a_no_op() {
        for op in ALL {
            assert_eq!(plan(op, op), Transition::Already(op));
            assert!(!plan(op, op).needs_settle());
        }
    }

    #[test]
    fn only_direct_reversal_settles() {
        for current in ALL {
            for target in ALL {
                let reversing = current != Operation::Stop
                    && target != Operation::Stop
                    && current != target;
                assert_eq!(plan(current, target).needs_settle(), reversing);
            }
        }
    }

    #[test]
    fn status_lines() {
        let line = |c, t| plan(c, t).to_string();
        assert_eq!(line(Operation::Stop, Operation::Forward), "STOP -> FORWARD");
        assert_eq!(line(Operation::Stop, Operation::Reverse), "STOP -> REVERSE");
        assert_eq!(line(Operation::Stop, Operation::Stop), "Already STOP");
        assert_eq!(line(Operation::Forward, Operation::Forward), "Already FORWARD");
        assert_eq!(
            line(Operation::Forward, Operation::Reverse),
            "FORWARD -> STOP -> REVERSE"
        );
        assert_eq!(
            line(Operation::Reverse, Operation::Forward),
            "REVERSE -> STOP -> FORWARD"
        );
        assert_eq!(line(Operation::Reverse, Operation::Stop), "REVERSE -> STOP");
    }
}
