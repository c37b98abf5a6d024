//! The user's ingredient inventory.
//!
//! [`IngredientList`] is an ordered set: entries are normalized (trimmed and
//! lowercased) on insertion, so duplicates that differ only in case or
//! surrounding whitespace collapse into a single entry.

/// Normalizes raw user input into an ingredient name.
///
/// Strips surrounding whitespace and stray comma delimiters, then lowercases.
/// Returns `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use fridgechef::domain::ingredients::normalize;
///
/// assert_eq!(normalize("  Egg, "), Some("egg".to_string()));
/// assert_eq!(normalize(" , "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == ',');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Ordered, deduplicated list of lowercase ingredient names.
///
/// Invariant: no empty entry and no two entries that compare equal
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Normalizes and appends an ingredient.
    ///
    /// Returns `true` if the list changed. Empty input and duplicates are
    /// ignored.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(name) = normalize(raw) else {
            return false;
        };
        if self.items.contains(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    /// Removes the entry at `index`, returning it.
    ///
    /// Out-of-range indices leave the list untouched and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Snapshot of the entries, used when dispatching generation requests.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_variant_duplicates_collapse() {
        let mut list = IngredientList::new();
        assert!(list.add("Egg"));
        assert!(!list.add("egg"));
        assert!(!list.add(" EGG "));
        assert_eq!(list.as_slice(), ["egg"]);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut list = IngredientList::new();
        list.add("Tomato");
        list.add("basil");
        list.add("Mozzarella ");
        assert_eq!(list.as_slice(), ["tomato", "basil", "mozzarella"]);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut list = IngredientList::new();
        assert!(!list.add("   "));
        assert!(!list.add(","));
        assert!(list.is_empty());
    }

    #[test]
    fn out_of_range_remove_is_noop() {
        let mut list = IngredientList::new();
        list.add("rice");
        list.add("beans");
        let before = list.clone();
        assert_eq!(list.remove(2), None);
        assert_eq!(list, before);
    }

    #[test]
    fn remove_shifts_following_entries() {
        let mut list = IngredientList::new();
        list.add("rice");
        list.add("beans");
        list.add("corn");
        assert_eq!(list.remove(1).as_deref(), Some("beans"));
        assert_eq!(list.as_slice(), ["rice", "corn"]);
    }
}
