//! Logical record reassembly from physical lines

use super::quote_balance::is_balanced;

/// Accumulates physical lines into complete logical records
///
/// Physical lines are joined with a single `\n`, reconstructing the embedded
/// newlines of multi-line quoted fields exactly. A logical record is yielded
/// as soon as the buffer holds an even number of quote characters.
#[derive(Debug, Default)]
pub struct RecordAccumulator {
    buffer: String,
}

impl RecordAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one physical line and yield a logical record if one completed
    ///
    /// Returns `None` while the buffer ends inside an open quoted field; the
    /// caller must supply more physical lines. Every returned record has a
    /// balanced quote count, and the buffer is reset for the next record.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);

        if is_balanced(&self.buffer) {
            Some(std::mem::take(&mut self.buffer))
        } else {
            None
        }
    }

    /// Buffered text left over at end of stream, if any
    ///
    /// Non-empty only when the input ended inside an unterminated quoted
    /// field. The pipeline drops this residue rather than erroring; it is
    /// exposed so the caller can log what was discarded.
    pub fn residual(&self) -> Option<&str> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(&self.buffer)
        }
    }
}
