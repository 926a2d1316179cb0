//! Parsing of single-comparison filter conditions such as `price>500` or `name = Bob`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ProcessingError, ProcessingResult};

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `=`
    Eq,
}

impl CompareOp {
    /// Operators in the order they are searched for. Two-character operators come before their
    /// one-character prefixes.
    pub const PRIORITY: [CompareOp; 5] = [
        CompareOp::Ge,
        CompareOp::Le,
        CompareOp::Gt,
        CompareOp::Lt,
        CompareOp::Eq,
    ];

    /// Operator text as written in a condition.
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Eq => "=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed `column <op> literal` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Column name (trimmed).
    pub column: String,
    /// Comparison operator.
    pub op: CompareOp,
    /// Right-hand side literal (trimmed), compared as a number when possible.
    pub literal: String,
}

impl Condition {
    /// Create a condition from its parts.
    pub fn new(column: impl Into<String>, op: CompareOp, literal: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            op,
            literal: literal.into(),
        }
    }

    /// Parse a raw condition string.
    ///
    /// The first operator of [`CompareOp::PRIORITY`] that occurs anywhere in `raw` is used as
    /// the delimiter, and `raw` is split at its first occurrence. This is a substring search,
    /// not a tokenizer: `a<b>=c` splits on `>=` because `>=` is searched before `<`.
    ///
    /// ```
    /// use tabfilter::processing::{CompareOp, Condition};
    ///
    /// let c = Condition::parse("price >= 500").unwrap();
    /// assert_eq!(c, Condition::new("price", CompareOp::Ge, "500"));
    /// ```
    pub fn parse(raw: &str) -> ProcessingResult<Self> {
        CompareOp::PRIORITY
            .iter()
            .find_map(|&op| {
                raw.split_once(op.symbol())
                    .map(|(column, literal)| Condition::new(column.trim(), op, literal.trim()))
            })
            .ok_or_else(|| ProcessingError::InvalidCondition {
                condition: raw.to_owned(),
            })
    }
}

impl FromStr for Condition {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.op, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::{CompareOp, Condition};
    use crate::error::ProcessingError;

    #[test]
    fn parses_each_operator() {
        let cases = [
            ("a>=5", CompareOp::Ge),
            ("a<=5", CompareOp::Le),
            ("a>5", CompareOp::Gt),
            ("a<5", CompareOp::Lt),
            ("a=5", CompareOp::Eq),
        ];
        for (raw, op) in cases {
            assert_eq!(Condition::parse(raw).unwrap(), Condition::new("a", op, "5"), "{raw}");
        }
    }

    #[test]
    fn two_char_operator_is_not_split_on_its_prefix() {
        let c = Condition::parse("price>=500").unwrap();
        assert_eq!(c.column, "price");
        assert_eq!(c.op, CompareOp::Ge);
        assert_eq!(c.literal, "500");
    }

    #[test]
    fn trims_column_and_literal() {
        let c = Condition::parse("  name =  Bob  ").unwrap();
        assert_eq!(c, Condition::new("name", CompareOp::Eq, "Bob"));
    }

    #[test]
    fn inner_whitespace_in_literal_is_kept() {
        let c = Condition::parse("city=New York").unwrap();
        assert_eq!(c.literal, "New York");
    }

    #[test]
    fn priority_order_wins_over_position() {
        // `<` occurs first by position, but `>=` is searched first.
        let c = Condition::parse("a<b>=c").unwrap();
        assert_eq!(c, Condition::new("a<b", CompareOp::Ge, "c"));

        // `=` occurs first by position, but `>` is searched before `=`.
        let c = Condition::parse("x=5>3").unwrap();
        assert_eq!(c, Condition::new("x=5", CompareOp::Gt, "3"));
    }

    #[test]
    fn splits_on_first_occurrence_of_chosen_operator() {
        let c = Condition::parse("price>>500").unwrap();
        assert_eq!(c, Condition::new("price", CompareOp::Gt, ">500"));
    }

    #[test]
    fn empty_sides_are_allowed() {
        assert_eq!(Condition::parse("=").unwrap(), Condition::new("", CompareOp::Eq, ""));
        assert_eq!(Condition::parse("a>").unwrap(), Condition::new("a", CompareOp::Gt, ""));
    }

    #[test]
    fn missing_operator_is_invalid() {
        let err = Condition::parse("price500").unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::InvalidCondition { ref condition } if condition == "price500"
        ));
        assert_eq!(err.to_string(), "invalid condition: price500");
    }

    #[test]
    fn from_str_and_display() {
        let c: Condition = "qty <= 3".parse().unwrap();
        assert_eq!(c.to_string(), "qty<=3");
    }
}
