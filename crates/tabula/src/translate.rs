//! Lowers typed predicates into `WHERE` clauses.
//!
//! Translation either succeeds for the whole expression or fails with an
//! error naming the construct that has no SQL form.

use tabula_core::{
    stmt::{self, BinaryOp, Expr, Operand, PatternKind, Value, Where},
    Error, Result,
};
use tabula_sql::ParameterSet;

/// Listed in every translation error.
const SUPPORTED: &str = "comparisons (==, !=, <, <=, >, >=) between a field and a value, \
    contains/starts_with/ends_with on string fields, in_list/not_in, is_null/is_not_null, \
    boolean fields and their negation, and `and`";

pub(crate) struct Translate<'a> {
    /// Maps a property name to the field it reads from
    resolve: &'a dyn Fn(&str) -> Result<stmt::Field>,

    params: &'a mut ParameterSet,
}

impl<'a> Translate<'a> {
    pub(crate) fn new(
        resolve: &'a dyn Fn(&str) -> Result<stmt::Field>,
        params: &'a mut ParameterSet,
    ) -> Self {
        Self { resolve, params }
    }

    pub(crate) fn translate(&mut self, expr: &Expr) -> Result<Where> {
        match expr {
            Expr::And(and) => {
                let clauses = and
                    .operands
                    .iter()
                    .map(|operand| self.translate(operand))
                    .collect::<Result<Vec<_>>>()?;

                Where::and(clauses).ok_or_else(|| unsupported(expr))
            }
            Expr::BinaryOp(e) => self.comparison(&e.lhs, e.op, &e.rhs),
            Expr::Field(e) => self.bool_field(&e.name, true),
            Expr::InList(e) => self.in_list(&e.expr, &e.list, false),
            Expr::IsNull(e) => {
                let field = self.field(&e.expr)?;
                Ok(if e.negate {
                    Where::is_not_null(field)
                } else {
                    Where::is_null(field)
                })
            }
            Expr::Not(e) => match &*e.expr {
                Expr::Field(field) => self.bool_field(&field.name, false),
                Expr::InList(list) => self.in_list(&list.expr, &list.list, true),
                Expr::IsNull(null) => {
                    let field = self.field(&null.expr)?;
                    Ok(if null.negate {
                        Where::is_null(field)
                    } else {
                        Where::is_not_null(field)
                    })
                }
                _ => Err(unsupported(expr)),
            },
            Expr::Pattern(e) => {
                let field = self.field(&e.expr)?;
                let operand = match e.kind {
                    PatternKind::Contains => Operand::Contains,
                    PatternKind::StartsWith => Operand::StartsWith,
                    PatternKind::EndsWith => Operand::EndsWith,
                };
                let param = self
                    .params
                    .add(field.logical_name(), e.kind.wrap(&e.pattern));
                Where::unary(field, operand, param)
            }
            Expr::Call(_) | Expr::Or(_) | Expr::Value(_) => Err(unsupported(expr)),
        }
    }

    fn comparison(&mut self, lhs: &Expr, op: BinaryOp, rhs: &Expr) -> Result<Where> {
        let (field, op, value) = match (lhs, rhs) {
            (Expr::Field(field), Expr::Value(value)) => (field, op, value),
            (Expr::Value(value), Expr::Field(field)) => (field, op.commute(), value),
            (Expr::Field(_), Expr::Field(_)) => {
                return Err(Error::unsupported_expression(
                    "comparison between two fields",
                    SUPPORTED,
                ))
            }
            (Expr::Field(_) | Expr::Value(_), other) => return Err(unsupported(other)),
            (other, _) => return Err(unsupported(other)),
        };

        let field = (self.resolve)(&field.name)?;

        // `field == NULL` never matches in SQL; compare with IS NULL instead
        match (value, op) {
            (Value::Null, BinaryOp::Eq) => return Ok(Where::is_null(field)),
            (Value::Null, BinaryOp::Ne) => return Ok(Where::is_not_null(field)),
            (Value::Null, _) => {
                return Err(Error::unsupported_expression(
                    format!("`{op}` comparison with NULL"),
                    SUPPORTED,
                ))
            }
            _ => {}
        }

        let param = self.params.add(field.logical_name(), value.clone());
        Where::unary(field, op.operand(), param)
    }

    fn in_list(&mut self, expr: &Expr, list: &[Value], negate: bool) -> Result<Where> {
        let field = self.field(expr)?;

        if list.is_empty() {
            // Nothing is in an empty list
            return Ok(Where::custom(if negate { "1 = 1" } else { "1 = 0" }));
        }

        let params = self.params.add_list(field.logical_name(), list.to_vec());
        let operand = if negate { Operand::NotIn } else { Operand::In };
        Where::array(field, operand, params)
    }

    fn bool_field(&mut self, name: &str, value: bool) -> Result<Where> {
        let field = (self.resolve)(name)?;
        let param = self.params.add(field.logical_name(), value);
        Where::unary(field, Operand::Equal, param)
    }

    fn field(&self, expr: &Expr) -> Result<stmt::Field> {
        match expr {
            Expr::Field(field) => (self.resolve)(&field.name),
            other => Err(unsupported(other)),
        }
    }
}

fn unsupported(expr: &Expr) -> Error {
    Error::unsupported_expression(expr.describe(), SUPPORTED)
}
