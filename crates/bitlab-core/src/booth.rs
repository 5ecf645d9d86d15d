//! Booth's signed multiplication as a navigable step-by-step state machine.
//!
//! One [`BoothMultiplier`] owns one run of the algorithm: `initialize` loads
//! the operands and records the initial register image, each `step` examines
//! the `(Q0, Q-1)` pair, conditionally adds or subtracts the multiplicand
//! with fixed-width wraparound, performs the arithmetic right shift across
//! `A:Q:Q-1`, and appends an immutable history record. After exactly
//! `bit_width` steps the run is complete and `A:Q` holds the product.

#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use crate::error::CoreError;

/// Smallest supported operand width.
pub const MIN_BIT_WIDTH: u32 = 2;
/// Largest supported operand width.
pub const MAX_BIT_WIDTH: u32 = 16;
/// Operand width used when none is requested.
pub const DEFAULT_BIT_WIDTH: u32 = 8;

/// Arithmetic action taken by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum BoothOp {
    /// Register image recorded by `initialize`.
    Init,
    /// `Q0 Q-1 = 01`: the multiplicand was added to `A`.
    Add,
    /// `Q0 Q-1 = 10`: the multiplicand was subtracted from `A`.
    Sub,
    /// `Q0 Q-1 = 00` or `11`: shift only.
    Noop,
}

impl core::fmt::Display for BoothOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Self::Init => "Initialize",
            Self::Add => "A = A + M",
            Self::Sub => "A = A - M",
            Self::Noop => "No operation",
        };
        f.write_str(text)
    }
}

/// One immutable record of the algorithm history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct BoothStep {
    /// Step index: 0 for the initial image, then 1..=`bit_width`.
    pub step: u32,
    /// The `Q0 Q-1` pair: the one examined by this step, or the one the
    /// first step will examine for the initial record.
    pub bits: String,
    /// Arithmetic action taken before the shift.
    pub operation: BoothOp,
    /// Accumulator after the step, as a signed binary string.
    pub a: String,
    /// Multiplier register after the step, as a signed binary string.
    pub q: String,
    /// The carried-out `Q-1` bit after the step.
    pub q1: u8,
    /// Plain-text narration of what the step did.
    pub explanation: String,
}

/// Whether a `step` call advanced the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Progress {
    /// A new history record was appended.
    Advanced,
    /// The run is complete; nothing changed.
    Complete,
}

/// State machine for one Booth multiplication run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct BoothMultiplier {
    multiplicand: i64,
    multiplier: i64,
    bit_width: u32,
    a: u64,
    q: u64,
    q1: u8,
    current_step: u32,
    complete: bool,
    history: Vec<BoothStep>,
}

impl BoothMultiplier {
    /// Loads the operands and records the initial register image.
    ///
    /// # Errors
    ///
    /// [`CoreError::ValueOutOfRange`] when `bit_width` is outside
    /// `2..=16` or an operand does not fit the two's-complement range
    /// `[-2^(w-1), 2^(w-1)-1]`.
    pub fn initialize(
        multiplicand: i64,
        multiplier: i64,
        bit_width: u32,
    ) -> Result<Self, CoreError> {
        if !(MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&bit_width) {
            return Err(CoreError::ValueOutOfRange {
                value: i64::from(bit_width),
                min: i64::from(MIN_BIT_WIDTH),
                max: i64::from(MAX_BIT_WIDTH),
            });
        }
        let max = (1_i64 << (bit_width - 1)) - 1;
        let min = -(1_i64 << (bit_width - 1));
        for operand in [multiplicand, multiplier] {
            if !(min..=max).contains(&operand) {
                return Err(CoreError::ValueOutOfRange {
                    value: operand,
                    min,
                    max,
                });
            }
        }

        let mut machine = Self {
            multiplicand,
            multiplier,
            bit_width,
            a: 0,
            q: 0,
            q1: 0,
            current_step: 0,
            complete: false,
            history: Vec::with_capacity(bit_width as usize + 1),
        };
        machine.load_initial_image();
        Ok(machine)
    }

    fn load_initial_image(&mut self) {
        let width = self.bit_width;
        self.a = 0;
        self.q = mask(self.multiplier, width);
        self.q1 = 0;
        self.current_step = 0;
        self.complete = false;
        self.history.clear();

        let q_binary = to_signed_binary(self.multiplier, width);
        let m_binary = to_signed_binary(self.multiplicand, width);
        let zeros = "0".repeat(width as usize);
        self.history.push(BoothStep {
            step: 0,
            bits: format!("{}0", self.q & 1),
            operation: BoothOp::Init,
            a: zeros.clone(),
            q: q_binary.clone(),
            q1: 0,
            explanation: format!("Initialize: A = {zeros}, Q = {q_binary}, Q-1 = 0, M = {m_binary}"),
        });
    }

    /// Executes one step. Once complete, further calls are no-ops that
    /// report [`Progress::Complete`].
    pub fn step(&mut self) -> Progress {
        if self.complete {
            return Progress::Complete;
        }

        let width = self.bit_width;
        let m = mask(self.multiplicand, width);
        let old_a = render(self.a, width);
        let m_binary = render(m, width);

        let q0 = (self.q & 1) as u8;
        let pair = format!("{q0}{}", self.q1);
        let (operation, mut explanation) = match (q0, self.q1) {
            (1, 0) => {
                self.a = wrap(self.a.wrapping_sub(m), width);
                (
                    BoothOp::Sub,
                    format!(
                        "Q Q-1 = 10 → subtract M from A: {old_a} - {m_binary} = {}",
                        render(self.a, width)
                    ),
                )
            }
            (0, 1) => {
                self.a = wrap(self.a.wrapping_add(m), width);
                (
                    BoothOp::Add,
                    format!(
                        "Q Q-1 = 01 → add M to A: {old_a} + {m_binary} = {}",
                        render(self.a, width)
                    ),
                )
            }
            _ => (
                BoothOp::Noop,
                format!("Q Q-1 = {pair} → no arithmetic operation"),
            ),
        };

        // Arithmetic right shift across A:Q:Q-1.
        self.q1 = (self.q & 1) as u8;
        self.q = (self.q >> 1) | ((self.a & 1) << (width - 1));
        let sign_bit = (self.a >> (width - 1)) & 1;
        self.a = (self.a >> 1) | (sign_bit << (width - 1));

        explanation.push_str(&format!(
            " → shift right: A Q Q-1 = {} {} {}",
            render(self.a, width),
            render(self.q, width),
            self.q1
        ));

        self.current_step += 1;
        self.history.push(BoothStep {
            step: self.current_step,
            bits: pair,
            operation,
            a: render(self.a, width),
            q: render(self.q, width),
            q1: self.q1,
            explanation,
        });

        if self.current_step >= width {
            self.complete = true;
        }
        Progress::Advanced
    }

    /// Runs the remaining steps to completion.
    pub fn run_to_completion(&mut self) {
        while self.step() == Progress::Advanced {}
    }

    /// The product `M × Q`, available only once the run is complete:
    /// the `2w`-bit signed interpretation of the final `A:Q`.
    #[must_use]
    pub fn final_result(&self) -> Option<i64> {
        if !self.complete {
            return None;
        }
        let width = self.bit_width;
        let combined = (self.a << width) | self.q;
        Some(sign_extend(combined, width * 2))
    }

    /// Immutable, append-only history: the initial image plus one record
    /// per executed step.
    #[must_use]
    pub fn history(&self) -> &[BoothStep] {
        &self.history
    }

    /// Random-access, non-mutating read of one history record.
    #[must_use]
    pub fn view_step(&self, index: usize) -> Option<&BoothStep> {
        self.history.get(index)
    }

    /// True once `bit_width` steps have executed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of algorithm steps executed so far.
    #[must_use]
    pub const fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Operand width of this run.
    #[must_use]
    pub const fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// The multiplicand `M`.
    #[must_use]
    pub const fn multiplicand(&self) -> i64 {
        self.multiplicand
    }

    /// The multiplier `Q`.
    #[must_use]
    pub const fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// Discards the whole history and reloads the initial register image
    /// for the same operands.
    pub fn reset(&mut self) {
        self.load_initial_image();
    }
}

/// Renders `value` as an `bits`-character two's-complement binary string.
#[must_use]
pub fn to_signed_binary(value: i64, bits: u32) -> String {
    render(mask(value, bits), bits)
}

/// Interprets an `n`-character binary string as an `n`-bit two's-complement
/// value.
///
/// # Errors
///
/// [`CoreError::NonBinary`] for a malformed string and
/// [`CoreError::Format`] for widths beyond 63 bits.
pub fn from_signed_binary(bits: &str) -> Result<i64, CoreError> {
    if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CoreError::NonBinary);
    }
    let width = u32::try_from(bits.len()).map_err(|_| CoreError::Format {
        reason: "bit string too long".to_owned(),
    })?;
    if width > 63 {
        return Err(CoreError::Format {
            reason: "bit string too long".to_owned(),
        });
    }
    let raw = u64::from_str_radix(bits, 2).map_err(|_| CoreError::NonBinary)?;
    Ok(sign_extend(raw, width))
}

const fn mask(value: i64, bits: u32) -> u64 {
    (value as u64) & low_mask(bits)
}

const fn wrap(raw: u64, bits: u32) -> u64 {
    raw & low_mask(bits)
}

const fn low_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    }
}

fn render(raw: u64, bits: u32) -> String {
    format!("{raw:0width$b}", width = bits as usize)
}

const fn sign_extend(raw: u64, bits: u32) -> i64 {
    let sign = 1_u64 << (bits - 1);
    if raw & sign == 0 {
        raw as i64
    } else {
        (raw | !low_mask(bits)) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::{
        from_signed_binary, to_signed_binary, BoothMultiplier, BoothOp, Progress,
    };
    use crate::CoreError;

    #[test]
    fn worked_example_five_times_minus_three() {
        let mut booth = BoothMultiplier::initialize(5, -3, 8).expect("valid operands");
        booth.run_to_completion();
        assert!(booth.is_complete());
        assert_eq!(booth.final_result(), Some(-15));
        // Initial image plus eight step records.
        assert_eq!(booth.history().len(), 9);
    }

    #[test]
    fn initial_record_shows_the_pair_the_first_step_examines() {
        let booth = BoothMultiplier::initialize(5, -3, 8).expect("valid operands");
        let init = &booth.history()[0];
        assert_eq!(init.operation, BoothOp::Init);
        assert_eq!(init.a, "00000000");
        assert_eq!(init.q, "11111101");
        // LSB of Q is 1, carried-out bit starts at 0.
        assert_eq!(init.bits, "10");
        assert_eq!(init.q1, 0);
    }

    #[test]
    fn first_step_of_worked_example_subtracts_m() {
        let mut booth = BoothMultiplier::initialize(5, -3, 8).expect("valid operands");
        assert_eq!(booth.step(), Progress::Advanced);
        let step = &booth.history()[1];
        assert_eq!(step.operation, BoothOp::Sub);
        // A = 0 - 5 = 11111011, shifted right with Q's LSB carried out.
        assert_eq!(step.a, "11111101");
        assert_eq!(step.q, "11111110");
        assert_eq!(step.q1, 1);
    }

    #[test]
    fn stepping_past_completion_is_a_no_op() {
        let mut booth = BoothMultiplier::initialize(3, 3, 4).expect("valid operands");
        booth.run_to_completion();
        let history_len = booth.history().len();
        let final_a = booth.history().last().expect("non-empty").a.clone();
        assert_eq!(booth.step(), Progress::Complete);
        assert_eq!(booth.history().len(), history_len);
        assert_eq!(booth.history().last().expect("non-empty").a, final_a);
    }

    #[test]
    fn view_step_is_random_access_and_non_mutating() {
        let mut booth = BoothMultiplier::initialize(7, 6, 8).expect("valid operands");
        booth.run_to_completion();
        let snapshot: Vec<_> = booth.history().to_vec();
        assert_eq!(booth.view_step(0), snapshot.first());
        assert_eq!(booth.view_step(5), snapshot.get(5));
        assert_eq!(booth.view_step(99), None);
        assert_eq!(booth.history(), &snapshot[..]);
    }

    #[test]
    fn final_result_is_gated_on_completion() {
        let mut booth = BoothMultiplier::initialize(5, 3, 8).expect("valid operands");
        assert_eq!(booth.final_result(), None);
        booth.step();
        assert_eq!(booth.final_result(), None);
        booth.run_to_completion();
        assert_eq!(booth.final_result(), Some(15));
    }

    #[test]
    fn reset_discards_history_and_reloads_operands() {
        let mut booth = BoothMultiplier::initialize(-4, 9, 8).expect("valid operands");
        booth.run_to_completion();
        booth.reset();
        assert!(!booth.is_complete());
        assert_eq!(booth.current_step(), 0);
        assert_eq!(booth.history().len(), 1);
        booth.run_to_completion();
        assert_eq!(booth.final_result(), Some(-36));
    }

    #[test]
    fn operands_must_fit_the_declared_width() {
        assert!(matches!(
            BoothMultiplier::initialize(128, 1, 8),
            Err(CoreError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            BoothMultiplier::initialize(1, -129, 8),
            Err(CoreError::ValueOutOfRange { .. })
        ));
        assert!(BoothMultiplier::initialize(-128, 127, 8).is_ok());
        assert!(matches!(
            BoothMultiplier::initialize(1, 1, 17),
            Err(CoreError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn extreme_operands_multiply_correctly() {
        let mut booth = BoothMultiplier::initialize(-128, -128, 8).expect("valid operands");
        booth.run_to_completion();
        assert_eq!(booth.final_result(), Some(16384));

        let mut booth = BoothMultiplier::initialize(127, -128, 8).expect("valid operands");
        booth.run_to_completion();
        assert_eq!(booth.final_result(), Some(-16256));
    }

    #[test]
    fn signed_binary_helpers_round_trip() {
        assert_eq!(to_signed_binary(-3, 8), "11111101");
        assert_eq!(to_signed_binary(5, 8), "00000101");
        assert_eq!(from_signed_binary("11111101").expect("valid"), -3);
        assert_eq!(from_signed_binary("00000101").expect("valid"), 5);
        assert_eq!(from_signed_binary("1x"), Err(CoreError::NonBinary));
    }
}
