use super::Expr;

/// String pattern match, rendered as `LIKE` with `%` placed by `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprPattern {
    pub kind: PatternKind,
    pub expr: Box<Expr>,
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Contains,
    StartsWith,
    EndsWith,
}

impl PatternKind {
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Contains => "contains",
            PatternKind::StartsWith => "starts_with",
            PatternKind::EndsWith => "ends_with",
        }
    }

    /// Wraps `value` in `%` wildcards. `%`, `_` and `[` inside `value` are
    /// escaped with brackets so they match literally.
    pub fn wrap(self, value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 2);
        for ch in value.chars() {
            match ch {
                '%' | '_' | '[' => {
                    escaped.push('[');
                    escaped.push(ch);
                    escaped.push(']');
                }
                ch => escaped.push(ch),
            }
        }

        match self {
            PatternKind::Contains => format!("%{escaped}%"),
            PatternKind::StartsWith => format!("{escaped}%"),
            PatternKind::EndsWith => format!("%{escaped}"),
        }
    }
}

impl Expr {
    pub fn pattern(kind: PatternKind, expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        ExprPattern {
            kind,
            expr: Box::new(expr.into()),
            pattern: pattern.into(),
        }
        .into()
    }
}

impl From<ExprPattern> for Expr {
    fn from(value: ExprPattern) -> Self {
        Self::Pattern(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_places_wildcards() {
        assert_eq!(PatternKind::Contains.wrap("ab"), "%ab%");
        assert_eq!(PatternKind::StartsWith.wrap("ab"), "ab%");
        assert_eq!(PatternKind::EndsWith.wrap("ab"), "%ab");
    }

    #[test]
    fn wrap_escapes_wildcards_in_value() {
        assert_eq!(PatternKind::Contains.wrap("5%_x"), "%5[%][_]x%");
    }
}
