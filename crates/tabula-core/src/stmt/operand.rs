use std::fmt;

/// Comparison applied by a where clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    Contains,
    StartsWith,
    EndsWith,
    In,
    NotIn,
    Between,
}

impl Operand {
    /// SQL token used by a single-parameter clause, `None` when the operand
    /// needs a different clause shape.
    pub fn unary_token(self) -> Option<&'static str> {
        use Operand::*;

        match self {
            Equal => Some("="),
            NotEqual => Some("<>"),
            GreaterThan => Some(">"),
            GreaterThanOrEqual => Some(">="),
            LessThan => Some("<"),
            LessThanOrEqual => Some("<="),
            Like | Contains | StartsWith | EndsWith => Some("LIKE"),
            In | NotIn | Between => None,
        }
    }

    /// SQL token used by a list clause.
    pub fn array_token(self) -> Option<&'static str> {
        match self {
            Operand::In => Some("IN"),
            Operand::NotIn => Some("NOT IN"),
            _ => None,
        }
    }

    pub fn is_pattern(self) -> bool {
        matches!(
            self,
            Operand::Contains | Operand::StartsWith | Operand::EndsWith
        )
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
