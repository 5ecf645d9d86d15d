//! Core crate for the Bitlab computer-organization teaching tools.
//!
//! Every component is an explicit instance owned by the caller; there are
//! no process-wide singletons and no I/O. All operations are synchronous
//! and deterministic, and every failure leaves the component exactly as it
//! was before the call.

/// Recoverable error taxonomy shared by all core components.
pub mod error;
pub use error::{CoreError, ErrorClass};

/// Stateless numeric codecs: radix, Gray, BCD, Excess-3, ASCII, parity,
/// signed representations and unsigned binary arithmetic.
pub mod codec;
pub use codec::arith::{binary_arithmetic, ArithmeticOp, ArithmeticResult};
pub use codec::ascii::{ascii_codes_to_text, ascii_table, text_to_ascii_codes, AsciiRow};
pub use codec::base::{convert_base, Conversion, DIGIT_ALPHABET};
pub use codec::bcd::{
    bcd_add, bcd_sub, bcd_to_decimal, binary_to_excess3, decimal_to_bcd, excess3_to_binary,
};
pub use codec::gray::{binary_to_gray, gray_to_binary};
pub use codec::parity::{append_parity, compute_parity, ParityKind};
pub use codec::signed::{
    from_ones_complement, from_sign_magnitude, from_twos_complement, to_ones_complement,
    to_sign_magnitude, to_twos_complement,
};

/// IEEE-754 single/double precision bit-field encode/decode.
pub mod ieee754;
pub use ieee754::{Decoded, Fields, NumberKind, Precision};

/// Booth's signed multiplication as a navigable step-by-step state machine.
pub mod booth;
pub use booth::{BoothMultiplier, BoothOp, BoothStep};

/// Operand stack machine with register/flag emulation and instruction
/// tracing.
pub mod machine;
pub use machine::flags::Flags;
pub use machine::registers::Registers;
pub use machine::{BinaryOp, MachineConfig, StackMachine, DEFAULT_MAX_STACK_SIZE};

/// Byte-addressable memory model with segment-relative stack mirroring.
pub mod memory;
pub use memory::view::{format_value, parse_value, ViewMode};
pub use memory::{
    Inspection, MemoryModel, MemoryOpKind, MemoryOperation, Segment, SegmentRegisters, MEM_SIZE,
};

/// Deterministic machine-event observation seam and presentation playback
/// queue.
pub mod playback;
pub use playback::{EventSink, MachineEvent, PlaybackQueue};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
