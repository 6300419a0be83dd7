use alloc::string::{String, ToString};
use core::fmt;

use crate::collection::Collection;

/// Canonical form: `[e0, e1, ..., en-1]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, item) in self.storage.as_slice().iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.as_slice().iter()).finish()
    }
}

impl<T: fmt::Display> Collection<T> {
    /// Renders the collection in its canonical string form.
    ///
    /// ```
    /// # use collection::Collection;
    /// let names = Collection::from(["Peter", "Maria"]);
    /// assert_eq!(names.render(), "[Peter, Maria]");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_render_empty() {
        let collection: Collection<i32> = Collection::new();
        assert_eq!(collection.render(), "[]");
    }

    #[test]
    fn test_render_single_has_no_separator() {
        assert_eq!(Collection::from([5]).render(), "[5]");
    }

    #[test]
    fn test_render_delegates_to_element_display() {
        let collection = Collection::from([1.5, -2.0]);
        assert_eq!(collection.render(), "[1.5, -2]");
    }

    #[test]
    fn test_display_honours_nested_collections() {
        let inner = Collection::from([1, 2]);
        let outer = Collection::from([inner.clone(), Collection::new(), inner]);
        assert_eq!(format!("{outer}"), "[[1, 2], [], [1, 2]]");
    }

    #[test]
    fn test_debug_uses_element_debug() {
        let collection = Collection::from(["a", "b"]);
        assert_eq!(format!("{collection:?}"), "[\"a\", \"b\"]");
    }
}
