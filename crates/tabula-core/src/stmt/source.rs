use super::{SourceJoined, SourceSubquery, SourceTable};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Table(SourceTable),
    Subquery(SourceSubquery),
    Joined(SourceJoined),
}

impl Source {
    pub fn alias(&self) -> Option<&str> {
        match self {
            Source::Table(table) => table.alias.as_deref(),
            Source::Subquery(subquery) => Some(&subquery.alias),
            Source::Joined(joined) => joined.root.alias(),
        }
    }

    /// The table the statement is rooted at, when there is one.
    pub fn root_table(&self) -> Option<&SourceTable> {
        match self {
            Source::Table(table) => Some(table),
            Source::Subquery(_) => None,
            Source::Joined(joined) => joined.root.root_table(),
        }
    }
}

impl From<SourceTable> for Source {
    fn from(value: SourceTable) -> Self {
        Source::Table(value)
    }
}

impl From<SourceSubquery> for Source {
    fn from(value: SourceSubquery) -> Self {
        Source::Subquery(value)
    }
}

impl From<SourceJoined> for Source {
    fn from(value: SourceJoined) -> Self {
        Source::Joined(value)
    }
}

/// Checks that `alias` can be written unquoted after a table or subquery:
/// a letter or `_` followed by letters, digits or `_`, at most 128
/// characters.
pub fn validate_alias(alias: &str) -> Result<()> {
    let mut chars = alias.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_')
        && alias.chars().count() <= 128;

    if !valid {
        return Err(Error::invalid_statement(format!(
            "`{alias}` is not a valid alias; use a letter or `_` followed by letters, digits \
             or `_`"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_plain_identifiers() {
        assert!(validate_alias("t0").is_ok());
        assert!(validate_alias("_foo").is_ok());

        for alias in ["", "0t", "f b", "f; DROP TABLE Foo", "[f]"] {
            let err = validate_alias(alias).unwrap_err();
            assert!(err.is_invalid_statement(), "{alias}");
        }
    }
}
