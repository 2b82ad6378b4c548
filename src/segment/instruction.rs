//! Movement instructions emitted by the segmenter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dominant axis-aligned movement direction.
///
/// A closed enumeration; a sample that moves but resolves to no direction
/// (the exact zero-delta case) simply contributes nothing to segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Dominant +x motion
    Right,
    /// Dominant -x motion
    Left,
    /// Dominant +y motion
    Forward,
    /// Dominant -y motion
    Backward,
}

impl Direction {
    /// Classify a planar step by its dominant axis.
    ///
    /// The x axis wins only when |dx| is strictly greater than |dy|; an
    /// exact tie resolves to the forward/backward axis. Returns `None`
    /// for an exactly zero step.
    #[inline]
    pub fn from_planar_delta(dx: f32, dy: f32) -> Option<Direction> {
        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Some(Direction::Right)
            } else {
                Some(Direction::Left)
            }
        } else if dy > 0.0 {
            Some(Direction::Forward)
        } else if dy < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    /// The movement verb used in rendered instructions.
    pub fn verb(&self) -> &'static str {
        match self {
            Direction::Right => "Move right",
            Direction::Left => "Move left",
            Direction::Forward => "Move forward",
            Direction::Backward => "Move backward",
        }
    }
}

/// One narrated event on a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// A coalesced run of same-direction steps.
    Move {
        /// Shared direction of the run
        direction: Direction,
        /// Number of accepted samples in the run (>= 1)
        steps: u32,
    },
    /// The trajectory passed through the landmark zone at the origin.
    LandmarkStop,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Move { direction, steps } => {
                write!(f, "{} for {} steps", direction.verb(), steps)
            }
            Instruction::LandmarkStop => write!(f, "See a white pole and stop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dominant_x() {
        assert_eq!(
            Direction::from_planar_delta(1.0, 0.2),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::from_planar_delta(-0.8, 0.2),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_classify_dominant_y() {
        assert_eq!(
            Direction::from_planar_delta(0.2, 1.0),
            Some(Direction::Forward)
        );
        assert_eq!(
            Direction::from_planar_delta(0.2, -1.0),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn test_classify_tie_resolves_vertical() {
        assert_eq!(
            Direction::from_planar_delta(1.0, 1.0),
            Some(Direction::Forward)
        );
        assert_eq!(
            Direction::from_planar_delta(1.0, -1.0),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn test_classify_zero_delta() {
        assert_eq!(Direction::from_planar_delta(0.0, 0.0), None);
    }

    #[test]
    fn test_display_move() {
        let one = Instruction::Move {
            direction: Direction::Forward,
            steps: 1,
        };
        assert_eq!(one.to_string(), "Move forward for 1 steps");

        let many = Instruction::Move {
            direction: Direction::Left,
            steps: 7,
        };
        assert_eq!(many.to_string(), "Move left for 7 steps");
    }

    #[test]
    fn test_display_landmark() {
        assert_eq!(
            Instruction::LandmarkStop.to_string(),
            "See a white pole and stop"
        );
    }
}
