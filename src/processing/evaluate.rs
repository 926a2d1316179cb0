//! Evaluation of a single comparison against one cell.

use super::condition::{CompareOp, Condition};

/// Parse a cell or literal as a number.
///
/// Surrounding whitespace is ignored. Anything `f64::from_str` rejects is not a number.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Compare `cell` against `literal` with `op`.
///
/// When both sides parse as numbers the comparison is numeric (`=` is exact `f64` equality).
/// Otherwise only `=` is defined, as exact string equality; every other operator is `false`.
pub fn evaluate(cell: &str, op: CompareOp, literal: &str) -> bool {
    match (parse_number(cell), parse_number(literal)) {
        (Some(a), Some(b)) => match op {
            CompareOp::Gt => a > b,
            CompareOp::Lt => a < b,
            CompareOp::Ge => a >= b,
            CompareOp::Le => a <= b,
            CompareOp::Eq => a == b,
        },
        _ => op == CompareOp::Eq && cell == literal,
    }
}

impl Condition {
    /// Evaluate this condition against a cell value.
    pub fn matches(&self, cell: &str) -> bool {
        evaluate(cell, self.op, &self.literal)
    }
}
