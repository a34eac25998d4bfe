use crate::header::{Field, FieldName, FieldValue};
use bytes::BytesMut;
use tracing::trace;

/// Default capacity of a [`FieldMap`].
pub const DEFAULT_FIELD_LIMIT: usize = 100;

/// Bounded, insertion-ordered collection of header fields.
///
/// Holds zero-copy views into an externally owned buffer; a map cannot
/// outlive the bytes its fields point into, and never copies them.
/// Storage is reserved at construction and the map never grows past its
/// limit, so no reallocation happens after `new`/`with_limit`.
#[derive(Debug)]
pub struct FieldMap<'b> {
    fields: Vec<Field<'b>>,
    limit: usize,
}

impl<'b> FieldMap<'b> {
    #[inline]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_FIELD_LIMIT)
    }

    /// `limit` is fixed for the lifetime of the map.
    #[inline]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            fields: Vec::with_capacity(limit),
            limit,
        }
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Appends a field, keeping any existing fields with the same name.
    ///
    /// Returns `false` and leaves the map unchanged once `limit` fields
    /// are stored.
    pub fn append(
        &mut self,
        name: impl Into<FieldName<'b>>,
        value: impl Into<FieldValue<'b>>,
    ) -> bool {
        if self.fields.len() >= self.limit {
            trace!(limit = self.limit, "field limit reached");
            return false;
        }
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
        true
    }

    /// Replaces, in place, the value of the first field whose name
    /// matches; the field keeps its position and stored name spelling.
    /// Absent a match this appends, subject to the same capacity check.
    pub fn insert(
        &mut self,
        name: impl Into<FieldName<'b>>,
        value: impl Into<FieldValue<'b>>,
    ) -> bool {
        let name = name.into();
        let value = value.into();
        match self.position(name.as_str()) {
            Some(i) => {
                self.fields[i].value = value;
                true
            }
            None => self.append(name, value),
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Value of the first field named `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<FieldValue<'b>> {
        self.position(name).map(|i| self.fields[i].value)
    }

    /// Removes every field named `name`, preserving the relative order
    /// of the remaining fields. Returns the number removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.fields.len();
        self.fields.retain(|f| !(f.name == name));
        before - self.fields.len()
    }

    /// Drops every field; the limit is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Field<'b>> {
        self.fields.iter()
    }

    /// Writes every field in insertion order as `<name>: <value>\r\n`.
    ///
    /// The blank line terminating a header section belongs to the
    /// message assembler and is not written here.
    pub fn encode(&self, wbuf: &mut BytesMut) {
        for f in &self.fields {
            wbuf.extend_from_slice(f.name.as_bytes());
            wbuf.extend_from_slice(b": ");
            wbuf.extend_from_slice(f.value.as_bytes());
            wbuf.extend_from_slice(b"\r\n");
        }
    }

    #[inline]
    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

impl Default for FieldMap<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FieldMap<'_> {
    // copies the view pairs only, re-reserving the full limit
    fn clone(&self) -> Self {
        let mut fields = Vec::with_capacity(self.limit);
        fields.extend(self.fields.iter().cloned());
        Self {
            fields,
            limit: self.limit,
        }
    }
}

impl<'s, 'b> IntoIterator for &'s FieldMap<'b> {
    type Item = &'s Field<'b>;
    type IntoIter = std::slice::Iter<'s, Field<'b>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
