use super::Address;
use crate::error;
use crate::lang::{Error, Kind, Line};
use log::warn;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Jump targets
///
/// Named labels map to the index of their marker line. Anonymous labels
/// (`#@`) are kept in source order and addressed relative to the jumping
/// line: `@f` is the next one forward, `@bb` the second one back.

#[derive(Debug, Default)]
pub struct Link {
    symbols: HashMap<String, Address>,
    anonymous: Vec<Address>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Direction {
    Forward,
    Backward,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
        self.anonymous.clear();
    }

    /// Single forward pass over the source. A redefined name keeps the
    /// last definition.
    pub fn index<'a, T: IntoIterator<Item = &'a Line>>(&mut self, lines: T) {
        self.clear();
        for (addr, line) in lines.into_iter().enumerate() {
            match line.kind() {
                Kind::AnonymousLabel => self.anonymous.push(addr),
                Kind::Label(name) => {
                    if let Some(prev) = self.symbols.insert(name.clone(), addr) {
                        warn!(
                            "label {} on line {} redefined on line {}",
                            name,
                            prev + 1,
                            addr + 1
                        );
                    }
                }
                _ => {}
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Address> {
        self.symbols.get(name).copied()
    }

    pub fn anonymous(&self) -> &[Address] {
        &self.anonymous
    }

    /// Target index for `label` as seen from the line at `from`.
    pub fn resolve(&self, label: &str, from: Address) -> Result<Address> {
        if let Some((direction, count)) = Link::relative(label) {
            let found = match direction {
                Direction::Forward => self
                    .anonymous
                    .iter()
                    .filter(|&&addr| addr > from)
                    .nth(count - 1),
                Direction::Backward => self
                    .anonymous
                    .iter()
                    .rev()
                    .filter(|&&addr| addr < from)
                    .nth(count - 1),
            };
            return match found {
                Some(addr) => Ok(*addr),
                None => Err(error!(
                    UndefinedReference;
                    "fewer than {} anonymous labels {} this line",
                    count,
                    if direction == Direction::Forward { "after" } else { "before" }
                )),
            };
        }
        match self.symbols.get(label) {
            Some(addr) => Ok(*addr),
            None => Err(error!(UndefinedReference; "undefined label: {}", label)),
        }
    }

    fn relative(label: &str) -> Option<(Direction, usize)> {
        let rest = label.strip_prefix('@')?;
        let direction = match rest.chars().next()? {
            'f' => Direction::Forward,
            'b' => Direction::Backward,
            _ => return None,
        };
        let marker = if direction == Direction::Forward { 'f' } else { 'b' };
        if rest.chars().all(|c| c == marker) {
            Some((direction, rest.len()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn link(src: &[&str]) -> Link {
        let lines: Vec<Line> = src.iter().map(|s| Line::new(s)).collect();
        let mut link = Link::new();
        link.index(lines.iter());
        link
    }

    fn anonymous_at_5_10_15() -> Link {
        let mut src = vec!["wait:1"; 16];
        src[5] = "#@";
        src[10] = "#@";
        src[15] = "#@";
        link(&src)
    }

    #[test]
    fn test_named_labels() {
        let l = link(&["#start", "wait:1", "; comment", "#end"]);
        assert_eq!(l.get("start"), Some(0));
        assert_eq!(l.resolve("end", 1), Ok(3));
        let e = l.resolve("middle", 1).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedReference);
    }

    #[test]
    fn test_last_definition_wins() {
        let l = link(&["#a", "wait:1", "#a"]);
        assert_eq!(l.get("a"), Some(2));
    }

    #[test]
    fn test_relative_forward() {
        let l = anonymous_at_5_10_15();
        assert_eq!(l.resolve("@f", 7), Ok(10));
        assert_eq!(l.resolve("@ff", 7), Ok(15));
        assert!(l.resolve("@fff", 7).is_err());
    }

    #[test]
    fn test_relative_backward() {
        let l = anonymous_at_5_10_15();
        assert_eq!(l.resolve("@b", 7), Ok(5));
        let e = l.resolve("@bb", 7).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedReference);
    }

    #[test]
    fn test_strictly_before_and_after() {
        let l = anonymous_at_5_10_15();
        assert_eq!(l.resolve("@f", 10), Ok(15));
        assert_eq!(l.resolve("@b", 10), Ok(5));
    }

    #[test]
    fn test_mixed_markers_are_names() {
        let l = link(&["#@fb", "#@"]);
        assert_eq!(l.resolve("@fb", 1), Ok(0));
        assert_eq!(l.anonymous(), &[1]);
    }

    #[test]
    fn test_moving_non_label_lines() {
        let a = link(&["#x", "", "; c", "#@", "#y"]);
        let b = link(&["#x", "; c", "", "#@", "#y"]);
        assert_eq!(a.get("x"), b.get("x"));
        assert_eq!(a.get("y"), b.get("y"));
        assert_eq!(a.anonymous(), b.anonymous());
    }
}
