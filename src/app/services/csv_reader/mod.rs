//! Streaming CSV record reassembly and tokenization
//!
//! Roster files are read one physical line at a time, but a quoted field may
//! contain embedded newlines, so a logical record can span several physical
//! lines. This module reconstructs logical records and splits them into raw
//! field strings.
//!
//! ## Architecture
//!
//! - [`quote_balance`] - Detects whether a buffer ends inside an open quote
//! - [`accumulator`] - Joins physical lines until a logical record completes
//! - [`tokenizer`] - Splits one complete record into raw field strings

pub mod accumulator;
pub mod quote_balance;
pub mod tokenizer;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use accumulator::RecordAccumulator;
pub use quote_balance::is_balanced;
pub use tokenizer::tokenize;
