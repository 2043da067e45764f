//! Attribute accumulation and face-reference resolution
//!
//! The geometry scan fills three of these tables (positions, texture
//! coordinates, normals); face records then reference entries by signed
//! 1-based index.

use crate::error::ParseErrorKind;

/// An ordered, append-only table of raw attribute records.
#[derive(Debug)]
pub struct AttributeTable<T> {
    items: Vec<T>,
}

impl<T> Default for AttributeTable<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Copy> AttributeTable<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of accumulated records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve a face-reference token against the table.
    ///
    /// Positive tokens are 1-based; negative tokens count back from the
    /// most recently appended record, so `-1` selects the last one. Zero
    /// and non-numeric tokens are malformed, and a resolved index outside
    /// the table is out of range.
    pub fn resolve(&self, token: &str) -> Result<T, ParseErrorKind> {
        let raw: i64 = token
            .parse()
            .map_err(|_| ParseErrorKind::MalformedIndex(token.to_string()))?;
        if raw == 0 {
            return Err(ParseErrorKind::MalformedIndex(token.to_string()));
        }

        let resolved = if raw < 0 {
            self.items.len() as i64 + raw
        } else {
            raw - 1
        };

        usize::try_from(resolved)
            .ok()
            .and_then(|index| self.items.get(index))
            .copied()
            .ok_or(ParseErrorKind::IndexOutOfRange {
                index: raw,
                len: self.items.len(),
            })
    }
}
