use crate::{ParameterSet, Serializer};

use tabula_core::{
    driver::{Command, CommandParameter},
    stmt::Statement,
};

/// Produces the executable command for `statement` bound to `params`.
///
/// Parameter names referenced by the statement are not checked against
/// `params`; a missing value surfaces as an engine error on execution.
pub fn assemble(statement: &Statement, params: &ParameterSet) -> Command {
    let sql = Serializer::new().serialize(statement);

    let parameters = params
        .iter()
        .map(|(name, value)| CommandParameter::new(name, value.clone()))
        .collect();

    let declarations = match statement {
        Statement::CreateFunction(function) => function.parameters.clone(),
        Statement::CreateProcedure(procedure) => procedure.parameters.clone(),
        _ => vec![],
    };

    Command {
        sql,
        parameters,
        declarations,
    }
}
