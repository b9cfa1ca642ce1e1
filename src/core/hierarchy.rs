//! Dotted logger namespace
//!
//! Parents are derived from the name alone; no tree is ever built.

/// Name of the root logger
pub const ROOT: &str = ".";

/// Separator between namespace segments
pub const SEPARATOR: char = '.';

/// Parent of `name` in the dotted namespace.
///
/// The root, the empty name and single-segment names have the root as their
/// parent, as does any name whose first segment is empty (`".worker"`).
/// Otherwise the last segment is dropped.
///
/// ```
/// use rust_hierarchical_logger::core::hierarchy::get_parent;
///
/// assert_eq!(get_parent("service.worker.pool"), "service.worker");
/// assert_eq!(get_parent("service"), ".");
/// assert_eq!(get_parent("."), ".");
/// ```
pub fn get_parent(name: &str) -> &str {
    if name == ROOT || name.is_empty() || name.starts_with(SEPARATOR) {
        return ROOT;
    }
    match name.rfind(SEPARATOR) {
        Some(idx) => &name[..idx],
        None => ROOT,
    }
}

/// Whether `name` is the root logger
pub fn is_root(name: &str) -> bool {
    name == ROOT
}

/// Iterate from `name` up to and including the root.
///
/// ```
/// use rust_hierarchical_logger::core::hierarchy::ancestors;
///
/// let chain: Vec<_> = ancestors("a.b.c").collect();
/// assert_eq!(chain, ["a.b.c", "a.b", "a", "."]);
/// ```
pub fn ancestors(name: &str) -> Ancestors<'_> {
    Ancestors { next: Some(name) }
}

pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if is_root(current) {
            None
        } else {
            Some(get_parent(current))
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_parent() {
        let cases = [
            ("", "."),
            (".Test", "."),
            (".", "."),
            ("Test", "."),
            ("Test.Test", "Test"),
            ("Test.Test.Test", "Test.Test"),
            ("Test.Test.Test.Test", "Test.Test.Test"),
        ];
        for (name, parent) in cases {
            assert_eq!(get_parent(name), parent, "parent of {:?}", name);
        }
    }

    #[test]
    fn test_get_parent_with_empty_segments() {
        assert_eq!(get_parent("a..b"), "a.");
        assert_eq!(get_parent("a."), "a");
        assert_eq!(get_parent(".."), ".");
        assert_eq!(get_parent("..."), ".");
    }

    #[test]
    fn test_root_is_fixed_point() {
        assert_eq!(get_parent(get_parent(ROOT)), ROOT);
    }

    #[test]
    fn test_ancestors_end_at_root() {
        assert_eq!(ancestors(".").collect::<Vec<_>>(), ["."]);
        assert_eq!(ancestors("").collect::<Vec<_>>(), ["", "."]);
        assert_eq!(ancestors("a..b").collect::<Vec<_>>(), ["a..b", "a.", "a", "."]);
    }
}
