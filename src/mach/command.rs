use crate::error;
use crate::lang::Error;
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

/// ## Command keywords
///
/// Keywords are matched exactly; `Print` and `print` are different words.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Print,
    Println,
    Printnl,
    Printvar,
    Move,
    Autopress,
    Press,
    Release,
    Tap,
    Ifpressed,
    Ifnotpressed,
    Wait,
    Goto,
    Gosub,
    Goclr,
    Return,
    Set,
    Add,
    Sub,
    Ifequal,
    Ifnotequal,
    Ifless,
    Ifgreater,
    Getcolor,
    Colorsmatch,
    Savecolor,
    Printcolorrgb,
    Printcolorhex,
    Ifcolor,
}

const MANY: usize = usize::max_value();

impl Command {
    pub fn command_and_arity(keyword: &str) -> Option<(Command, RangeInclusive<usize>)> {
        use Command::*;
        match keyword {
            "print" => Some((Print, 1..=MANY)),
            "println" => Some((Println, 1..=MANY)),
            "printnl" => Some((Printnl, 0..=0)),
            "printvar" => Some((Printvar, 1..=1)),
            "move" => Some((Move, 2..=2)),
            "autopress" => Some((Autopress, 1..=MANY)),
            "press" => Some((Press, 1..=MANY)),
            "release" => Some((Release, 1..=MANY)),
            "tap" => Some((Tap, 1..=MANY)),
            "ifpressed" => Some((Ifpressed, 1..=1)),
            "ifnotpressed" => Some((Ifnotpressed, 1..=1)),
            "wait" => Some((Wait, 1..=1)),
            "goto" => Some((Goto, 1..=1)),
            "gosub" => Some((Gosub, 1..=1)),
            "goclr" => Some((Goclr, 0..=0)),
            "return" => Some((Return, 0..=0)),
            "set" => Some((Set, 2..=2)),
            "add" => Some((Add, 2..=2)),
            "sub" => Some((Sub, 2..=2)),
            "ifequal" => Some((Ifequal, 2..=2)),
            "ifnotequal" => Some((Ifnotequal, 2..=2)),
            "ifless" => Some((Ifless, 2..=2)),
            "ifgreater" => Some((Ifgreater, 2..=2)),
            "getcolor" => Some((Getcolor, 3..=3)),
            "colorsmatch" => Some((Colorsmatch, 3..=3)),
            "savecolor" => Some((Savecolor, 2..=2)),
            "printcolorrgb" => Some((Printcolorrgb, 0..=0)),
            "printcolorhex" => Some((Printcolorhex, 0..=0)),
            "ifcolor" => Some((Ifcolor, 2..=2)),
            _ => None,
        }
    }

    /// Look up `keyword` and check that `argc` arguments are acceptable.
    pub fn decode(keyword: &str, argc: usize) -> Result<Command> {
        let (command, arity) = match Command::command_and_arity(keyword) {
            Some(ca) => ca,
            None => return Err(error!(UnknownCommand; "{}", keyword)),
        };
        if arity.contains(&argc) {
            return Ok(command);
        }
        let expected = if *arity.end() == MANY {
            format!("at least {}", arity.start())
        } else if *arity.start() == 0 {
            "no".to_string()
        } else {
            format!("exactly {}", arity.start())
        };
        let plural = if *arity.start() == 1 && *arity.end() != 0 {
            "argument"
        } else {
            "arguments"
        };
        Err(error!(
            ArityError;
            "{} expects {} {}, got {}",
            keyword,
            expected,
            plural,
            argc
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_decode() {
        assert_eq!(Command::decode("goto", 1), Ok(Command::Goto));
        assert_eq!(Command::decode("press", 4), Ok(Command::Press));
        assert_eq!(Command::decode("return", 0), Ok(Command::Return));
    }

    #[test]
    fn test_unknown_is_case_sensitive() {
        let e = Command::decode("Goto", 1).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownCommand);
        assert_eq!(e.text(), "Goto");
    }

    #[test]
    fn test_arity_messages() {
        let e = Command::decode("move", 1).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ArityError);
        assert_eq!(e.text(), "move expects exactly 2 arguments, got 1");
        let e = Command::decode("goto", 2).unwrap_err();
        assert_eq!(e.text(), "goto expects exactly 1 argument, got 2");
        let e = Command::decode("print", 0).unwrap_err();
        assert_eq!(e.text(), "print expects at least 1 argument, got 0");
        let e = Command::decode("return", 1).unwrap_err();
        assert_eq!(e.text(), "return expects no arguments, got 1");
    }
}
