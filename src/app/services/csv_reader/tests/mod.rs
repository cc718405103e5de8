//! Tests for streaming record reassembly and tokenization

use super::accumulator::RecordAccumulator;

mod tokenizer_tests;

/// Feed physical lines through an accumulator and collect completed records
pub fn collect_records(lines: &[&str]) -> (Vec<String>, Option<String>) {
    let mut accumulator = RecordAccumulator::new();
    let mut records = Vec::new();
    for line in lines {
        if let Some(record) = accumulator.push_line(line) {
            records.push(record);
        }
    }
    let residual = accumulator.residual().map(str::to_string);
    (records, residual)
}
