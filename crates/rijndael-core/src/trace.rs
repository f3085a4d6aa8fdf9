//! Per-step observation of the round engines.
//!
//! Observers see every intermediate state in the order FIPS-197 Appendix C
//! prints it. They are read-only: attaching one never changes the output.

use core::fmt;

use crate::block::Block;

/// Which engine produced an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward cipher.
    Encrypt,
    /// Inverse cipher.
    Decrypt,
}

/// A point in a round at which the state (or round key) is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// The block handed to the engine.
    Input,
    /// State at the beginning of a round.
    Start,
    /// After SubBytes (or InvSubBytes).
    SubBytes,
    /// After ShiftRows (or InvShiftRows).
    ShiftRows,
    /// After MixColumns.
    MixColumns,
    /// The round key about to be added.
    RoundKey,
    /// After AddRoundKey, reported only by the inverse engine.
    AddRoundKey,
    /// The block returned by the engine.
    Output,
}

impl Step {
    /// FIPS-197 Appendix C tag for this step.
    pub const fn label(self, direction: Direction) -> &'static str {
        match direction {
            Direction::Encrypt => match self {
                Step::Input => "input",
                Step::Start => "start",
                Step::SubBytes => "s_box",
                Step::ShiftRows => "s_row",
                Step::MixColumns => "m_col",
                Step::RoundKey => "k_sch",
                Step::AddRoundKey => "k_add",
                Step::Output => "output",
            },
            Direction::Decrypt => match self {
                Step::Input => "iinput",
                Step::Start => "istart",
                Step::SubBytes => "is_box",
                Step::ShiftRows => "is_row",
                Step::MixColumns => "im_col",
                Step::RoundKey => "ik_sch",
                Step::AddRoundKey => "ik_add",
                Step::Output => "ioutput",
            },
        }
    }
}

/// Receives intermediate values from the round engines.
pub trait RoundObserver {
    /// Called once per reported step with the serialized 16-byte value.
    fn observe(&mut self, direction: Direction, round: usize, step: Step, value: &Block);
}

impl RoundObserver for () {
    #[inline]
    fn observe(&mut self, _: Direction, _: usize, _: Step, _: &Block) {}
}

impl<F> RoundObserver for F
where
    F: FnMut(Direction, usize, Step, &Block),
{
    fn observe(&mut self, direction: Direction, round: usize, step: Step, value: &Block) {
        self(direction, round, step, value)
    }
}

/// One recorded observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceLine {
    /// Engine that produced the line.
    pub direction: Direction,
    /// Round number, 0..=Nr.
    pub round: usize,
    /// Step within the round.
    pub step: Step,
    /// State or round key at that step.
    pub value: Block,
}

impl TraceLine {
    /// The value as lowercase hex.
    pub fn hex(&self) -> String {
        hex::encode(self.value)
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = format!(
            "round[{:2}].{}",
            self.round,
            self.step.label(self.direction)
        );
        write!(f, "{tag:<20}{}", self.hex())
    }
}

/// Observer that keeps every line in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceRecorder {
    lines: Vec<TraceLine>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines, oldest first.
    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    /// First line matching `round` and `step`.
    pub fn find(&self, round: usize, step: Step) -> Option<&TraceLine> {
        self.lines
            .iter()
            .find(|line| line.round == round && line.step == step)
    }

    /// Discards recorded lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Renders all lines in the Appendix C layout, one per line.
    pub fn render(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

impl RoundObserver for TraceRecorder {
    fn observe(&mut self, direction: Direction, round: usize, step: Step, value: &Block) {
        self.lines.push(TraceLine {
            direction,
            round,
            step,
            value: *value,
        });
    }
}
