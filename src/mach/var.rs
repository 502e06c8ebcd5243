use super::Val;
use crate::error;
use crate::lang::{is_quoted, Error};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// A name keeps the kind of the first value stored under it.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    pub fn fetch_declared(&self, var_name: &str) -> Result<&Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val),
            None => Err(error!(UndefinedReference; "variable not declared: {}", var_name)),
        }
    }

    /// Value of a variable-or-literal operand.
    pub fn resolve(&self, token: &str) -> Result<Val> {
        match self.vars.get(token) {
            Some(val) => Ok(val.clone()),
            None => Val::from_literal(token),
        }
    }

    pub fn store(&mut self, var_name: &str, value: Val) -> Result<()> {
        if var_name.is_empty() || is_quoted(var_name) {
            return Err(error!(MalformedLiteral; "invalid variable name: {}", var_name));
        }
        match self.vars.get_mut(var_name) {
            Some(var) => {
                if var.kind() != value.kind() {
                    return Err(error!(
                        TypeMismatch;
                        "cannot store {} in {} variable {}",
                        value.kind(),
                        var.kind(),
                        var_name
                    ));
                }
                *var = value;
            }
            None => {
                self.vars.insert(var_name.to_string(), value);
            }
        }
        Ok(())
    }
}
