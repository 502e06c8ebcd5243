use crate::lang::Line;
use std::sync::Arc;

/// ## Script source in line order
///
/// Line indexes are 0-based; reported line numbers are index + 1.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<Vec<Line>>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.source.get(index)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.source.iter()
    }

    pub fn push(&mut self, line: Line) {
        Arc::make_mut(&mut self.source).push(line);
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) {
        self.push(Line::new(line));
    }
}

impl std::str::FromStr for Listing {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Listing, Self::Err> {
        let mut listing = Listing::default();
        for line in s.lines() {
            listing.load_str(line);
        }
        Ok(listing)
    }
}
