use super::lex::lex;

/// Separates a command keyword from its arguments.
pub const SEPARATOR: char = ':';
pub const ANONYMOUS_LABEL: &str = "#@";

/// ## One line of script source

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    source: String,
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Blank,
    Comment,
    Label(String),
    AnonymousLabel,
    Statement { command: String, args: Vec<String> },
}

impl Line {
    pub fn new(s: &str) -> Line {
        let source = s.trim_end_matches(|c| c == '\r' || c == '\n').to_string();
        let kind = Line::classify(&source);
        Line { source, kind }
    }

    fn classify(s: &str) -> Kind {
        let s = s.trim();
        if s.is_empty() {
            Kind::Blank
        } else if s.starts_with(';') {
            Kind::Comment
        } else if s == ANONYMOUS_LABEL {
            Kind::AnonymousLabel
        } else if let Some(name) = s.strip_prefix('#') {
            Kind::Label(name.trim().to_string())
        } else {
            match s.find(SEPARATOR) {
                Some(idx) => Kind::Statement {
                    command: s[..idx].trim().to_string(),
                    args: lex(&s[idx + SEPARATOR.len_utf8()..]),
                },
                None => Kind::Statement {
                    command: s.to_string(),
                    args: vec![],
                },
            }
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn is_statement(&self) -> bool {
        matches!(self.kind, Kind::Statement { .. })
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
