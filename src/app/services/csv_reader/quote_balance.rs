//! Quote balance detection for lazily accumulated record buffers

use crate::constants::QUOTE;

/// Check whether a buffer contains an even number of quote characters
///
/// An odd count means the buffer currently ends inside an open quoted field,
/// so the logical record is incomplete and more physical lines are needed.
/// The count is recomputed over the whole buffer on every call; records are
/// small enough that correctness wins over incremental bookkeeping. An empty
/// buffer is balanced.
///
/// Escaped quotes (`""`) contribute two characters and therefore never change
/// the parity, which is what makes a plain count sufficient.
pub fn is_balanced(buffer: &str) -> bool {
    buffer.chars().filter(|&c| c == QUOTE).count() % 2 == 0
}
