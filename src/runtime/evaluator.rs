use std::io::Write;

use crate::error::Result;
use crate::parser::{BinaryOp, Expression, Program, Statement, UnaryOp};
use crate::runtime::{Environment, Value};

/// Tree-walking evaluator
///
/// Statements run strictly in source order against an environment owned by
/// the caller. Each top-level statement produces exactly one value:
/// - `x = expr` stores the value of `expr` and yields it
/// - a bare expression yields its value
///
/// The first error stops the run; nothing after the failing statement is
/// evaluated.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Assignments performed so far, in order (name, value)
    execution_trace: Vec<(String, Value)>,
}

impl Evaluator {
    /// Creates a new evaluator
    pub fn new() -> Self {
        Evaluator {
            execution_trace: Vec::new(),
        }
    }

    /// Get the execution trace (variable assignments)
    pub fn execution_trace(&self) -> &[(String, Value)] {
        &self.execution_trace
    }

    /// Clear the execution trace
    pub fn clear_execution_trace(&mut self) {
        self.execution_trace.clear();
    }

    /// Execute a program, returning one value per statement
    pub fn execute(&mut self, program: &Program, env: &mut Environment) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(program.statements.len());
        self.run(program, env, |value| {
            values.push(value);
            Ok(())
        })?;
        Ok(values)
    }

    /// Execute a program, writing each statement's value as a line to `out`
    /// as soon as it is computed
    ///
    /// Lines of statements that completed before a failure have already been
    /// written when the error is returned. Returns the number of lines written.
    pub fn execute_into<W: Write>(
        &mut self,
        program: &Program,
        env: &mut Environment,
        out: &mut W,
    ) -> Result<usize> {
        self.run(program, env, |value| {
            writeln!(out, "{}", value)?;
            Ok(())
        })
    }

    fn run<F>(&mut self, program: &Program, env: &mut Environment, mut emit: F) -> Result<usize>
    where
        F: FnMut(Value) -> Result<()>,
    {
        let mut count = 0;
        for (index, statement) in program.statements.iter().enumerate() {
            let value = self.evaluate_statement(statement, env).map_err(|err| {
                tracing::debug!(index, %statement, error = %err, "statement failed");
                err
            })?;
            tracing::debug!(index, %statement, %value, "evaluated statement");
            emit(value)?;
            count += 1;
        }
        Ok(count)
    }

    /// Evaluate a single top-level statement
    pub fn evaluate_statement(
        &mut self,
        statement: &Statement,
        env: &mut Environment,
    ) -> Result<Value> {
        match statement {
            Statement::Expression(expr) => self.evaluate_expression(expr, env),

            Statement::Assignment { name, value } => {
                let val = self.evaluate_expression(value, env)?;
                env.set(name, val);
                self.execution_trace.push((name.clone(), val));
                Ok(val)
            }
        }
    }

    /// Evaluate an expression; expressions never modify the environment
    pub fn evaluate_expression(&self, expr: &Expression, env: &Environment) -> Result<Value> {
        match expr {
            // A literal with too many digits scans as infinity
            Expression::NumberLiteral(n) => Value::new(*n).ensure_finite(),

            Expression::Variable(name) => env.get(name),

            Expression::Binary { op, left, right } => {
                // Left operand first
                let lhs = self.evaluate_expression(left, env)?;
                let rhs = self.evaluate_expression(right, env)?;
                let value = match op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Sub => lhs - rhs,
                    BinaryOp::Mul => lhs * rhs,
                    BinaryOp::Div => lhs.checked_div(rhs)?,
                };
                // Operands are finite, so only overflow can leave the range
                value.ensure_finite()
            }

            Expression::Unary {
                op: UnaryOp::Neg,
                operand,
            } => Ok(-self.evaluate_expression(operand, env)?),
        }
    }
}

/// Evaluate a program against `env`, returning the printed line of each statement
pub fn evaluate(program: &Program, env: &mut Environment) -> Result<Vec<String>> {
    let values = Evaluator::new().execute(program, env)?;
    Ok(values.iter().map(Value::to_string).collect())
}
