/// Split the text after a command separator into raw argument tokens.
///
/// Commas inside a double-quoted span do not separate. A quote preceded
/// by `\` does not open or close a span. Tokens are trimmed; quotes are
/// kept so the caller can tell literals from names.
pub fn lex(s: &str) -> Vec<String> {
    if s.trim().is_empty() {
        return vec![];
    }
    ArgLexer {
        chars: s.chars().peekable(),
        done: false,
    }
    .collect()
}

/// Strip the surrounding quotes of a string literal and resolve `\"`.
/// Returns `None` if the token is not a quoted literal.
pub fn unquote(token: &str) -> Option<String> {
    if !is_quoted(token) {
        return None;
    }
    let inner = &token[1..token.len() - 1];
    let mut s = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE {
            if let Some('"') = chars.peek() {
                continue;
            }
        }
        s.push(ch);
    }
    Some(s)
}

pub fn is_quoted(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

const ESCAPE: char = '\\';

struct ArgLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    done: bool,
}

impl<'a> Iterator for ArgLexer<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut s = String::new();
        let mut in_string = false;
        let mut prev: Option<char> = None;
        loop {
            let ch = match self.chars.next() {
                Some(ch) => ch,
                None => {
                    self.done = true;
                    break;
                }
            };
            if ch == '"' && prev != Some(ESCAPE) {
                in_string = !in_string;
            } else if ch == ',' && !in_string {
                break;
            }
            s.push(ch);
            prev = Some(ch);
        }
        Some(s.trim().to_string())
    }
}
