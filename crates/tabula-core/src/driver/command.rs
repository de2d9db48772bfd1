use crate::stmt::{Parameter, Value};

/// Executable SQL text plus its parameter values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Command {
    pub sql: String,

    /// Values bound to the parameters the SQL text references, in the order
    /// they were added
    pub parameters: Vec<CommandParameter>,

    /// Declared parameters of generated DDL, empty for plain statements
    pub declarations: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandParameter {
    /// Name including the leading `@`
    pub name: String,
    pub value: Value,
}

impl Command {
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|param| param.name == name)
            .map(|param| &param.value)
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.parameters.iter().map(|param| param.name.as_str())
    }
}

impl CommandParameter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
