//! Rotating color palette for list items.

/// Fixed ordered sequence of color token sets.
///
/// Item `i` of a list uses entry `i mod len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<String>,
}

impl Palette {
    /// Creates a palette from token-set strings such as `"bg-blue-100 text-blue-800"`.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The five pastel pairs used for skill badges.
    pub fn standard() -> Self {
        Self::new([
            "bg-blue-100 text-blue-800",
            "bg-green-100 text-green-800",
            "bg-yellow-100 text-yellow-800",
            "bg-red-100 text-red-800",
            "bg-purple-100 text-purple-800",
        ])
    }

    /// Returns the entry for list position `index`, or `None` for an empty palette.
    pub fn entry(&self, index: usize) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        Some(&self.entries[index % self.entries.len()])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
