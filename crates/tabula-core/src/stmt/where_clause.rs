use super::{Field, Operand, Select};
use crate::{Error, Result};

/// A `WHERE` (or `ON`) predicate.
///
/// Parameter names are carried verbatim, including the leading `@`. Values
/// live in the parameter set that travels next to the statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Where {
    /// `field op @param`
    Unary(WhereUnary),

    /// `field BETWEEN @low AND @high`
    Binary(WhereBinary),

    /// `field IN (@p0, @p1, ...)`
    Array(WhereArray),

    /// `field IS [NOT] NULL`
    IsNull(WhereIsNull),

    /// Conjunction of clauses
    And(WhereAnd),

    /// Hand-written SQL
    Custom(String),

    /// `field IN (SELECT ...)`
    InSubquery(WhereInSubquery),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhereUnary {
    pub field: Field,
    pub operand: Operand,
    pub param: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhereBinary {
    pub field: Field,
    pub low: String,
    pub high: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhereArray {
    pub field: Field,
    pub operand: Operand,
    pub params: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhereIsNull {
    pub field: Field,
    pub negate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhereAnd {
    pub clauses: Vec<Where>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhereInSubquery {
    pub field: Field,
    pub select: Box<Select>,
}

fn check_param(param: &str) -> Result<()> {
    if param.len() < 2 || !param.starts_with('@') {
        return Err(Error::invalid_statement(format!(
            "parameter name `{param}` must start with `@` followed by a name"
        )));
    }
    Ok(())
}

impl Where {
    pub fn unary(field: Field, operand: Operand, param: impl Into<String>) -> Result<Where> {
        let param = param.into();
        if operand.unary_token().is_none() {
            return Err(Error::invalid_statement(format!(
                "operand {operand} cannot be used in a single-value where clause"
            )));
        }
        check_param(&param)?;
        Ok(Where::Unary(WhereUnary {
            field,
            operand,
            param,
        }))
    }

    pub fn between(field: Field, low: impl Into<String>, high: impl Into<String>) -> Result<Where> {
        let (low, high) = (low.into(), high.into());
        check_param(&low)?;
        check_param(&high)?;
        Ok(Where::Binary(WhereBinary { field, low, high }))
    }

    pub fn array(field: Field, operand: Operand, params: Vec<String>) -> Result<Where> {
        if operand.array_token().is_none() {
            return Err(Error::invalid_statement(format!(
                "operand {operand} cannot be used in a list where clause"
            )));
        }
        if params.is_empty() {
            return Err(Error::invalid_statement(
                "list where clause requires at least one parameter",
            ));
        }
        for param in &params {
            check_param(param)?;
        }
        Ok(Where::Array(WhereArray {
            field,
            operand,
            params,
        }))
    }

    pub fn is_null(field: Field) -> Where {
        Where::IsNull(WhereIsNull {
            field,
            negate: false,
        })
    }

    pub fn is_not_null(field: Field) -> Where {
        Where::IsNull(WhereIsNull {
            field,
            negate: true,
        })
    }

    pub fn custom(sql: impl Into<String>) -> Where {
        Where::Custom(sql.into())
    }

    pub fn in_subquery(field: Field, select: Select) -> Where {
        Where::InSubquery(WhereInSubquery {
            field,
            select: Box::new(select),
        })
    }

    /// Combine clauses with `AND`, flattening nested conjunctions. A single
    /// clause is returned as-is.
    pub fn and(clauses: impl IntoIterator<Item = Where>) -> Option<Where> {
        let mut flat = vec![];
        for clause in clauses {
            match clause {
                Where::And(and) => flat.extend(and.clauses),
                clause => flat.push(clause),
            }
        }

        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Where::And(WhereAnd { clauses: flat })),
        }
    }

    /// Conjuncts of the clause, a single element unless it is an `And`.
    pub fn conjuncts(&self) -> &[Where] {
        match self {
            Where::And(and) => &and.clauses,
            other => std::slice::from_ref(other),
        }
    }

    /// Parameter names referenced by the clause, in rendering order.
    pub fn params(&self) -> Vec<&str> {
        let mut out = vec![];
        self.collect_params(&mut out);
        out
    }

    fn collect_params<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Where::Unary(w) => out.push(&w.param),
            Where::Binary(w) => {
                out.push(&w.low);
                out.push(&w.high);
            }
            Where::Array(w) => out.extend(w.params.iter().map(String::as_str)),
            Where::And(w) => w.clauses.iter().for_each(|c| c.collect_params(out)),
            Where::InSubquery(w) => {
                if let Some(filter) = &w.select.filter {
                    filter.collect_params(out);
                }
            }
            Where::IsNull(_) | Where::Custom(_) => {}
        }
    }
}
