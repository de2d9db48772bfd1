use tabula_core::{stmt::Value, Error, Result};

use indexmap::{IndexMap, IndexSet};

/// Sizes an `IN` list parameter count is padded up to.
pub const PAD_STEPS: &[usize] = &[
    1, 2, 3, 4, 5, 10, 15, 20, 30, 50, 75, 100, 130, 160, 200, 500, 1000,
];

/// Lists at or below this size are never padded.
const PAD_THRESHOLD: usize = 5;

/// Number of parameters emitted for an `IN` list of `len` values.
///
/// Padding to a small set of sizes keeps the number of distinct statement
/// texts low, so the engine reuses cached plans. Lists longer than the last
/// step are not padded.
pub fn pad_len(len: usize) -> usize {
    if len <= PAD_THRESHOLD {
        return len;
    }

    PAD_STEPS
        .iter()
        .copied()
        .find(|step| *step >= len)
        .unwrap_or(len)
}

/// Derives a parameter name from a field name in camel case: a leading
/// capital, or a leading acronym (`JSON`, `JSONBlob`), is lower cased and
/// characters that are not valid in an identifier become `_`.
pub fn logical_name(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();

    // `JSONBlob` keeps the `B` that starts the next word
    let upper = chars.iter().take_while(|ch| ch.is_uppercase()).count();
    let lower = match chars.get(upper) {
        Some(next) if upper > 1 && next.is_lowercase() => upper - 1,
        _ => upper,
    };

    let mut name = String::with_capacity(field.len());
    for (i, ch) in chars.into_iter().enumerate() {
        match ch {
            ch if i < lower => name.extend(ch.to_lowercase()),
            ch if ch.is_alphanumeric() || ch == '_' => name.push(ch),
            _ => name.push('_'),
        }
    }

    if name.is_empty() || name.starts_with(|ch: char| ch.is_ascii_digit()) {
        name.insert(0, 'p');
    }
    name
}

/// Issues parameter names that are unique within one statement.
///
/// The first request for a logical name gets it unchanged (`@int`), later
/// requests get a numeric suffix (`@int_0`, `@int_1`, ...).
#[derive(Debug, Clone, Default)]
pub struct ParamNames {
    issued: IndexSet<String>,
}

impl ParamNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh name derived from `logical`, `@` included.
    pub fn unique(&mut self, logical: &str) -> String {
        let base = format!("@{}", logical_name(logical.trim_start_matches('@')));
        let name = candidates(&base)
            .find(|candidate| !self.issued.contains(candidate))
            .unwrap_or_default();
        self.issued.insert(name.clone());
        name
    }

    /// `count` fresh names sharing one base, suffixed by position
    /// (`@int0`, `@int1`, ...).
    pub fn list(&mut self, logical: &str, count: usize) -> Vec<String> {
        let base = format!("@{}", logical_name(logical.trim_start_matches('@')));
        let names = candidates(&base)
            .map(|candidate| {
                let sep = if candidate == base { "" } else { "_" };
                (0..count)
                    .map(|i| format!("{candidate}{sep}{i}"))
                    .collect::<Vec<_>>()
            })
            .find(|names| names.iter().all(|name| !self.issued.contains(name)))
            .unwrap_or_default();

        self.issued.extend(names.iter().cloned());
        names
    }

    /// Claims an explicit name. Fails when it was already issued.
    pub fn reserve(&mut self, name: &str) -> Result<()> {
        if !self.issued.insert(name.to_string()) {
            return Err(Error::invalid_statement(format!(
                "parameter `{name}` is already defined"
            )));
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.issued.contains(name)
    }
}

/// `base`, then `base_0`, `base_1`, ...
fn candidates(base: &str) -> impl Iterator<Item = String> {
    let base = base.to_string();
    std::iter::once(base.clone()).chain((0..).map(move |n| format!("{base}_{n}")))
}

/// Parameter values of one statement, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    names: ParamNames,
    values: IndexMap<String, Value>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` under a fresh name derived from `logical` and returns
    /// the name.
    pub fn add(&mut self, logical: &str, value: impl Into<Value>) -> String {
        let name = self.names.unique(logical);
        self.values.insert(name.clone(), value.into());
        name
    }

    /// Binds the values of an `IN` list, padded to [`pad_len`] by repeating
    /// the last value. An empty list binds nothing.
    pub fn add_list(&mut self, logical: &str, values: Vec<Value>) -> Vec<String> {
        let Some(last) = values.last().cloned() else {
            return vec![];
        };

        let padded = pad_len(values.len());
        let names = self.names.list(logical, padded);
        let values = values
            .into_iter()
            .chain(std::iter::repeat(last))
            .take(padded);

        for (name, value) in names.iter().zip(values) {
            self.values.insert(name.clone(), value);
        }
        names
    }

    /// Binds `value` under an explicit name, `@` included.
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        if !name.starts_with('@') || name.len() < 2 {
            return Err(Error::invalid_statement(format!(
                "parameter name `{name}` must start with `@` followed by a name"
            )));
        }
        self.names.reserve(name)?;
        self.values.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
