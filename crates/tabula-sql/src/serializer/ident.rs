use super::{Formatter, ToSql};

/// A bracket-quoted identifier. Closing brackets in the name are doubled.
pub(super) struct Ident<S>(pub(super) S);

/// `[schema].[name]`
pub(super) struct QualifiedName<'a>(pub(super) &'a str, pub(super) &'a str);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();
        f.dst.push('[');
        for ch in name.chars() {
            if ch == ']' {
                f.dst.push(']');
            }
            f.dst.push(ch);
        }
        f.dst.push(']');
    }
}

impl ToSql for QualifiedName<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0) "." Ident(self.1));
    }
}

/// A single-quoted string literal. `N` prefixes unicode literals.
pub(super) struct Literal<'a> {
    pub(super) text: &'a str,
    pub(super) unicode: bool,
}

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.unicode {
            f.dst.push('N');
        }
        f.dst.push('\'');
        for ch in self.text.chars() {
            if ch == '\'' {
                f.dst.push('\'');
            }
            f.dst.push(ch);
        }
        f.dst.push('\'');
    }
}
