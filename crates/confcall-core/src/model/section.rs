//!
//! In-memory configuration tree.
//!
//! The tree is already materialized by whatever loaded it; this module only
//! stores it and answers navigation queries. Keys are case-insensitive and
//! children iterate in natural key order so indexed entries keep their
//! position (`1`, `2`, `10` rather than `1`, `10`, `2`).
//!

use std::cmp::Ordering;

pub const KEY_DELIMITER: char = ':';

///
/// ConfigSection
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConfigSection {
    key: String,
    path: String,
    value: Option<String>,
    children: Vec<Self>,
}

impl ConfigSection {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a tree from colon-delimited key paths, mirroring an in-memory
    /// configuration source. A `None` value records the key without a value.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut root = Self::root();
        for (path, value) in pairs {
            root.insert(path.as_ref(), value.map(Into::into));
        }

        root
    }

    /// Insert (or overwrite) the value at `path`, creating intermediate nodes.
    pub fn insert(&mut self, path: &str, value: Option<String>) {
        let mut node = self;

        for segment in path.split(KEY_DELIMITER) {
            let idx = match node.child_index(segment) {
                Some(idx) => idx,
                None => {
                    let child = Self {
                        key: segment.to_string(),
                        path: node.child_path(segment),
                        value: None,
                        children: Vec::new(),
                    };
                    let idx = node
                        .children
                        .partition_point(|c| compare_keys(&c.key, segment) != Ordering::Greater);
                    node.children.insert(idx, child);
                    idx
                }
            };
            node = &mut node.children[idx];
        }

        node.value = value;
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Full colon path from the root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Direct children in natural key order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Self> {
        self.children.iter()
    }

    /// Descend a colon-delimited path; `None` when any segment is missing.
    #[must_use]
    pub fn section(&self, path: &str) -> Option<&Self> {
        path.split(KEY_DELIMITER)
            .try_fold(self, |node, segment| node.child(segment))
    }

    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Self> {
        self.child_index(key).map(|idx| &self.children[idx])
    }

    /// Value of a direct child leaf.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.child(key).and_then(Self::value)
    }

    fn child_index(&self, key: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|c| c.key.eq_ignore_ascii_case(key))
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}{KEY_DELIMITER}{key}", self.path)
        }
    }
}

/// Natural ordering of sibling keys: both numeric compare as numbers,
/// numeric sorts before text, otherwise case-insensitive ordinal.
#[must_use]
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a
            .bytes()
            .map(|c| c.to_ascii_lowercase())
            .cmp(b.bytes().map(|c| c.to_ascii_lowercase())),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(section: &ConfigSection) -> Vec<&str> {
        section.children().map(ConfigSection::key).collect()
    }

    #[test]
    fn numeric_keys_sort_numerically() {
        let root = ConfigSection::from_pairs([
            ("WriteTo:10:Name", Some("c")),
            ("WriteTo:2:Name", Some("b")),
            ("WriteTo:1:Name", Some("a")),
        ]);

        let write_to = root.section("WriteTo").unwrap();
        assert_eq!(keys(write_to), ["1", "2", "10"]);
    }

    #[test]
    fn numeric_keys_precede_text_keys() {
        let root = ConfigSection::from_pairs([("b", Some("")), ("3", Some("")), ("A", Some(""))]);
        assert_eq!(keys(&root), ["3", "A", "b"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let root = ConfigSection::from_pairs([("Serilog:WriteTo:1:Name", Some("Console"))]);

        let entry = root.section("serilog:writeto:1").unwrap();
        assert_eq!(entry.get("NAME"), Some("Console"));
        assert_eq!(entry.path(), "Serilog:WriteTo:1");
    }

    #[test]
    fn later_pairs_overwrite_earlier_ones() {
        let root = ConfigSection::from_pairs([("a:b", Some("1")), ("A:B", Some("2"))]);
        assert_eq!(root.section("a").unwrap().get("b"), Some("2"));
        assert_eq!(root.section("a").unwrap().children().len(), 1);
    }

    #[test]
    fn null_values_keep_the_key() {
        let root = ConfigSection::from_pairs([("x:Name", None::<&str>)]);
        let x = root.section("x").unwrap();

        assert!(x.child("Name").is_some());
        assert_eq!(x.get("Name"), None);
    }

    #[test]
    fn missing_paths_return_none() {
        let root = ConfigSection::from_pairs([("a:b", Some("1"))]);
        assert!(root.section("a:c").is_none());
        assert!(root.section("z").is_none());
    }
}
