/// Read-only view over the string values submitted under one field name.
///
/// Obtained from [`FormData::get`](crate::FormData::get). A missing key and an
/// empty sequence both produce an empty view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormValue<'a>(&'a [String]);

impl<'a> FormValue<'a> {
    pub fn new(values: &'a [String]) -> Self {
        Self(values)
    }

    /// Returns the value at `index`, or `""` when the index is negative or
    /// past the end.
    pub fn at(&self, index: isize) -> &'a str {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.0.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Shorthand for `at(0)`.
    pub fn first(&self) -> &'a str {
        self.at(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &'a [String] {
        self.0
    }
}
