use super::Val;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic and comparison on tagged values
///
/// The left-hand side is always the stored variable, so its kind decides
/// the kind of the result. An Integer target keeps its kind even when the
/// operand is a Float; the floating point result is truncated on store.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            String(l) => match rhs {
                String(r) => Ok(String(l + &r)),
                Integer(r) => Ok(String(format!("{}{}", l, r))),
                Float(_) => Err(Operation::mismatch("add", &String(l), &rhs)),
            },
            Integer(l) => match rhs {
                Integer(r) => match l.checked_add(r) {
                    Some(i) => Ok(Integer(i)),
                    None => Err(error!(Overflow; "{} + {}", l, r)),
                },
                Float(r) => Ok(Integer(i64::try_from(&Float(l as f64 + r))?)),
                String(_) => Err(Operation::mismatch("add", &Integer(l), &rhs)),
            },
            Float(l) => match rhs {
                Integer(r) => Ok(Float(l + r as f64)),
                Float(r) => Ok(Float(l + r)),
                String(_) => Err(Operation::mismatch("add", &Float(l), &rhs)),
            },
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Integer(l) => match rhs {
                Integer(r) => match l.checked_sub(r) {
                    Some(i) => Ok(Integer(i)),
                    None => Err(error!(Overflow; "{} - {}", l, r)),
                },
                Float(r) => Ok(Integer(i64::try_from(&Float(l as f64 - r))?)),
                String(_) => Err(Operation::mismatch("subtract", &Integer(l), &rhs)),
            },
            Float(l) => match rhs {
                Integer(r) => Ok(Float(l - r as f64)),
                Float(r) => Ok(Float(l - r)),
                String(_) => Err(Operation::mismatch("subtract", &Float(l), &rhs)),
            },
            String(_) => Err(Operation::mismatch("subtract", &lhs, &rhs)),
        }
    }

    pub fn equal_bool(lhs: &Val, rhs: &Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(l == r),
            (String(_), _) | (_, String(_)) => Err(Operation::mismatch("compare", lhs, rhs)),
            _ => Ok(f64::try_from(lhs)? == f64::try_from(rhs)?),
        }
    }

    pub fn less_bool(lhs: &Val, rhs: &Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (String(_), String(_)) => {
                Err(error!(TypeMismatch; "strings can only be compared for equality"))
            }
            (String(_), _) | (_, String(_)) => Err(Operation::mismatch("compare", lhs, rhs)),
            _ => Ok(f64::try_from(lhs)? < f64::try_from(rhs)?),
        }
    }

    pub fn greater_bool(lhs: &Val, rhs: &Val) -> Result<bool> {
        Operation::less_bool(rhs, lhs)
    }

    fn mismatch(op: &str, lhs: &Val, rhs: &Val) -> Error {
        error!(TypeMismatch; "cannot {} {} and {}", op, lhs.kind(), rhs.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use Val::*;

    #[test]
    fn test_integer_float_truncates() {
        assert_eq!(Operation::sum(Integer(10), Float(3.5)), Ok(Integer(13)));
        assert_eq!(Operation::sum(Integer(10), Float(-3.5)), Ok(Integer(6)));
        assert_eq!(Operation::subtract(Integer(10), Float(0.5)), Ok(Integer(9)));
    }

    #[test]
    fn test_float_target_stays_float() {
        assert_eq!(Operation::sum(Float(2.0), Integer(5)), Ok(Float(7.0)));
        assert_eq!(Operation::subtract(Float(2.5), Float(0.5)), Ok(Float(2.0)));
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(
            Operation::sum(String("a".into()), String("b".into())),
            Ok(String("ab".into()))
        );
        assert_eq!(
            Operation::sum(String("n=".into()), Integer(-4)),
            Ok(String("n=-4".into()))
        );
        let e = Operation::sum(String("a".into()), Float(1.5)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
        assert_eq!(e.text(), "cannot add STRING and FLOAT");
    }

    #[test]
    fn test_no_string_subtraction() {
        let e = Operation::subtract(String("ab".into()), String("b".into())).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
        let e = Operation::subtract(Integer(1), String("b".into())).unwrap_err();
        assert_eq!(e.text(), "cannot subtract INTEGER and STRING");
    }

    #[test]
    fn test_overflow() {
        let e = Operation::sum(Integer(i64::MAX), Integer(1)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::Overflow);
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(Operation::equal_bool(&Integer(5), &Float(5.0)), Ok(true));
        assert_eq!(Operation::less_bool(&Integer(4), &Float(4.5)), Ok(true));
        assert_eq!(Operation::greater_bool(&Float(4.5), &Integer(4)), Ok(true));
        assert_eq!(Operation::greater_bool(&Integer(4), &Integer(4)), Ok(false));
    }

    #[test]
    fn test_compare_strings() {
        let a = String("a".into());
        let b = String("b".into());
        assert_eq!(Operation::equal_bool(&a, &a), Ok(true));
        assert_eq!(Operation::equal_bool(&a, &b), Ok(false));
        assert!(Operation::less_bool(&a, &b).is_err());
        assert!(Operation::equal_bool(&a, &Integer(1)).is_err());
    }
}
