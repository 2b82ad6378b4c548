//! Run-coalescing trajectory segmenter.

use crate::core::types::Position3D;

use super::config::SegmenterConfig;
use super::instruction::{Direction, Instruction};

/// Current run of same-direction steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// No direction committed yet
    Idle,
    /// An open run waiting to be extended or flushed
    Active { direction: Direction, steps: u32 },
}

/// Streaming trajectory segmenter.
///
/// Feed positions one at a time with [`step`](Self::step) and flush the
/// final pending run with [`finish`](Self::finish), or hand a whole
/// sequence to [`narrate`](Self::narrate). State is O(1): the previous
/// accepted position plus the open run.
///
/// Every consumed sample is accounted for exactly once: it either extends
/// or opens a run, is dropped as sub-threshold jitter, or (exact
/// zero-delta, only reachable with a zero threshold) is accepted without
/// touching the run.
#[derive(Debug)]
pub struct TrajectorySegmenter {
    config: SegmenterConfig,
    last_position: Option<Position3D>,
    state: RunState,
    samples_seen: u64,
    samples_skipped: u64,
}

impl TrajectorySegmenter {
    /// Create a new segmenter with the given configuration.
    pub fn new(config: SegmenterConfig) -> Self {
        Self {
            config,
            last_position: None,
            state: RunState::Idle,
            samples_seen: 0,
            samples_skipped: 0,
        }
    }

    /// Total samples consumed so far.
    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }

    /// Samples dropped as sub-threshold jitter.
    pub fn samples_skipped(&self) -> u64 {
        self.samples_skipped
    }

    /// Consume one position sample.
    ///
    /// Returns the instructions this sample caused, in transition order:
    /// a completed run (when the direction changed) before a landmark
    /// event. Most samples return nothing.
    ///
    /// Sub-threshold samples are dropped entirely: they neither advance
    /// the reference position nor reach the landmark check, so jitter
    /// near a boundary cannot thrash the run direction.
    pub fn step(&mut self, position: &Position3D) -> Vec<Instruction> {
        self.samples_seen += 1;

        let last = match self.last_position {
            Some(last) => last,
            None => {
                // First sample only establishes the reference position.
                self.last_position = Some(*position);
                return Vec::new();
            }
        };

        let (dx, dy) = position.planar_offset_from(&last);
        if position.planar_distance(&last) < self.config.distance_threshold {
            self.samples_skipped += 1;
            return Vec::new();
        }

        let mut emitted = Vec::new();

        if let Some(direction) = Direction::from_planar_delta(dx, dy) {
            self.state = match self.state {
                RunState::Active {
                    direction: current,
                    steps,
                } if current == direction => RunState::Active {
                    direction: current,
                    steps: steps + 1,
                },
                RunState::Active {
                    direction: current,
                    steps,
                } => {
                    emitted.push(Instruction::Move {
                        direction: current,
                        steps,
                    });
                    RunState::Active { direction, steps: 1 }
                }
                RunState::Idle => RunState::Active { direction, steps: 1 },
            };
        }

        if position.x.abs() < self.config.landmark_radius
            && position.y.abs() < self.config.landmark_radius
        {
            emitted.push(Instruction::LandmarkStop);
        }

        self.last_position = Some(*position);
        emitted
    }

    /// Flush the pending run at end of input.
    ///
    /// Returns the final instruction, if a run was open. The reference
    /// position is kept, so a stream can continue after a flush.
    pub fn finish(&mut self) -> Option<Instruction> {
        match std::mem::replace(&mut self.state, RunState::Idle) {
            RunState::Active { direction, steps } => {
                Some(Instruction::Move { direction, steps })
            }
            RunState::Idle => None,
        }
    }

    /// Reset all state for reuse on a fresh trajectory.
    pub fn reset(&mut self) {
        self.last_position = None;
        self.state = RunState::Idle;
        self.samples_seen = 0;
        self.samples_skipped = 0;
    }

    /// Narrate a whole trajectory: step every sample, then flush.
    pub fn narrate<I>(&mut self, positions: I) -> Vec<Instruction>
    where
        I: IntoIterator<Item = Position3D>,
    {
        let mut instructions = Vec::new();
        for position in positions {
            instructions.extend(self.step(&position));
        }
        instructions.extend(self.finish());
        instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f32, y: f32) -> Position3D {
        Position3D::new(x, y, 0.0)
    }

    fn narrate_default(track: &[Position3D]) -> Vec<String> {
        let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
        segmenter
            .narrate(track.iter().copied())
            .iter()
            .map(|i| i.to_string())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(narrate_default(&[]).is_empty());
    }

    #[test]
    fn test_single_sample() {
        assert!(narrate_default(&[pos(3.0, 3.0)]).is_empty());
    }

    #[test]
    fn test_all_samples_below_threshold() {
        // Every step is jitter around the starting point, away from the
        // landmark zone.
        let track = [
            pos(5.0, 5.0),
            pos(5.1, 5.0),
            pos(5.0, 5.1),
            pos(4.9, 4.9),
        ];
        let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
        let out = segmenter.narrate(track);
        assert!(out.is_empty());
        assert_eq!(segmenter.samples_seen(), 4);
        assert_eq!(segmenter.samples_skipped(), 3);
    }

    #[test]
    fn test_run_coalescing() {
        let track = [pos(0.0, 0.0), pos(1.0, 0.0), pos(2.0, 0.0), pos(3.0, 0.0)];
        assert_eq!(narrate_default(&track), ["Move right for 3 steps"]);
    }

    #[test]
    fn test_direction_switch_flushes_run() {
        let track = [pos(0.0, 0.0), pos(1.0, 0.0), pos(2.0, 0.0), pos(2.0, 1.0)];
        assert_eq!(
            narrate_default(&track),
            ["Move right for 2 steps", "Move forward for 1 steps"]
        );
    }

    #[test]
    fn test_tie_break_prefers_vertical_axis() {
        let track = [pos(0.0, 0.0), pos(1.0, 1.0)];
        assert_eq!(narrate_default(&track), ["Move forward for 1 steps"]);

        let track = [pos(0.0, 0.0), pos(-1.0, -1.0)];
        assert_eq!(narrate_default(&track), ["Move backward for 1 steps"]);
    }

    #[test]
    fn test_landmark_does_not_reset_run() {
        // Rightward run passing through the landmark zone.
        let track = [
            pos(-2.0, 0.0),
            pos(-1.0, 0.0),
            pos(0.2, 0.2),
            pos(1.2, 0.2),
        ];
        assert_eq!(
            narrate_default(&track),
            ["See a white pole and stop", "Move right for 3 steps"]
        );
    }

    #[test]
    fn test_landmark_emitted_mid_step_without_segment_flush() {
        let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
        assert!(segmenter.step(&pos(-2.0, 0.0)).is_empty());
        assert!(segmenter.step(&pos(-1.0, 0.0)).is_empty());

        // Same direction, inside the landmark zone: only the landmark fires.
        let events = segmenter.step(&pos(0.2, 0.2));
        assert_eq!(events, [Instruction::LandmarkStop]);

        assert_eq!(
            segmenter.finish(),
            Some(Instruction::Move {
                direction: Direction::Right,
                steps: 2
            })
        );
    }

    #[test]
    fn test_direction_change_and_landmark_ordering() {
        let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
        assert!(segmenter.step(&pos(0.0, -1.6)).is_empty());
        assert!(segmenter.step(&pos(0.0, -0.9)).is_empty());

        // dx 0.49 > dy 0.41: switches the forward run to rightward while
        // inside the landmark zone. Completed run is emitted first.
        let events = segmenter.step(&pos(0.49, -0.49));
        assert_eq!(
            events,
            [
                Instruction::Move {
                    direction: Direction::Forward,
                    steps: 1
                },
                Instruction::LandmarkStop
            ]
        );
    }

    #[test]
    fn test_final_flush_includes_pending_run() {
        let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
        segmenter.step(&pos(0.0, 0.0));
        segmenter.step(&pos(0.0, 1.0));
        assert_eq!(
            segmenter.finish(),
            Some(Instruction::Move {
                direction: Direction::Forward,
                steps: 1
            })
        );
        // Second flush has nothing left.
        assert_eq!(segmenter.finish(), None);
    }

    #[test]
    fn test_zero_delta_sample_leaves_run_untouched() {
        // Only reachable with a zero threshold: an exactly repeated
        // position is accepted but classifies to no direction.
        let config = SegmenterConfig {
            distance_threshold: 0.0,
            ..SegmenterConfig::default()
        };
        let mut segmenter = TrajectorySegmenter::new(config);
        let track = [pos(3.0, 0.0), pos(4.0, 0.0), pos(4.0, 0.0), pos(5.0, 0.0)];
        let out = segmenter.narrate(track);
        assert_eq!(
            out,
            [Instruction::Move {
                direction: Direction::Right,
                steps: 2
            }]
        );
    }

    #[test]
    fn test_reset_clears_state() {
        let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
        segmenter.step(&pos(0.0, 0.0));
        segmenter.step(&pos(1.0, 0.0));
        segmenter.reset();
        assert_eq!(segmenter.samples_seen(), 0);
        assert_eq!(segmenter.finish(), None);
    }

    #[test]
    fn test_concrete_scenario() {
        // (0,0) -> (1,0) -> (2,0) -> (2,1) with threshold 0.5
        let track = [pos(0.0, 0.0), pos(1.0, 0.0), pos(2.0, 0.0), pos(2.0, 1.0)];
        assert_eq!(
            narrate_default(&track),
            ["Move right for 2 steps", "Move forward for 1 steps"]
        );
    }
}
