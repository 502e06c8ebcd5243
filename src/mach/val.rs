use crate::error;
use crate::lang::{unquote, Error};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Tagged script value

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    String(String),
    Integer(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValKind {
    String,
    Integer,
    Float,
}

impl Val {
    pub fn kind(&self) -> ValKind {
        match self {
            Val::String(_) => ValKind::String,
            Val::Integer(_) => ValKind::Integer,
            Val::Float(_) => ValKind::Float,
        }
    }

    /// Infer a value from literal text.
    ///
    /// `"..."` is a String, text with a decimal point that parses as a
    /// number is a Float, anything else must parse as an Integer.
    pub fn from_literal(s: &str) -> Result<Val> {
        if let Some(s) = unquote(s) {
            return Ok(Val::String(s));
        }
        if s.contains('.') {
            if let Ok(n) = s.parse::<f64>() {
                return Ok(Val::Float(n));
            }
        }
        match s.parse::<i64>() {
            Ok(n) => Ok(Val::Integer(n)),
            Err(_) => Err(error!(MalformedLiteral; "not a string or number: {}", s)),
        }
    }
}

impl TryFrom<&Val> for i64 {
    type Error = Error;
    fn try_from(val: &Val) -> Result<i64> {
        match val {
            Val::Integer(n) => Ok(*n),
            Val::Float(n) => {
                let n = n.trunc();
                if n.is_finite() && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
                    Ok(n as i64)
                } else {
                    Err(error!(Overflow; "{} does not fit in an integer", val))
                }
            }
            Val::String(_) => Err(error!(TypeMismatch; "expected a number, got STRING")),
        }
    }
}

impl TryFrom<&Val> for f64 {
    type Error = Error;
    fn try_from(val: &Val) -> Result<f64> {
        match val {
            Val::Integer(n) => Ok(*n as f64),
            Val::Float(n) => Ok(*n),
            Val::String(_) => Err(error!(TypeMismatch; "expected a number, got STRING")),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl std::fmt::Display for ValKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            ValKind::String => "STRING",
            ValKind::Integer => "INTEGER",
            ValKind::Float => "FLOAT",
        };
        write!(f, "{}", s)
    }
}
