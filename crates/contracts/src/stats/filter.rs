//! Predicate composition over entity collections.

/// Case-insensitive substring match across one or more text fields.
/// An empty (or whitespace) query matches everything.
pub fn text_matches(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Ordered conjunction of predicates (logical AND).
///
/// `filter` keeps the input order and never mutates the source; an empty
/// result is a valid outcome, not an error.
pub struct FilterSet<'a, T> {
    predicates: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<'a, T> FilterSet<'a, T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Number of active criteria (for the filter badge).
    pub fn active_count(&self) -> usize {
        self.predicates.len()
    }

    /// Register a predicate unconditionally.
    pub fn with(mut self, pred: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(pred));
        self
    }

    /// Register a predicate only when its criterion is active. Inactive
    /// criteria (sentinel "all" selection, empty search text) are skipped
    /// entirely so the filter stays the identity.
    pub fn when(self, active: bool, pred: impl Fn(&T) -> bool + 'a) -> Self {
        if active {
            self.with(pred)
        } else {
            self
        }
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|pred| pred(item))
    }

    /// Stable filter: the ordered subsequence satisfying all predicates.
    pub fn filter(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

impl<'a, T> Default for FilterSet<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_is_identity() {
        let items = vec![3, 1, 2];
        let set = FilterSet::new();
        assert_eq!(set.filter(&items), items);
    }

    #[test]
    fn test_filter_is_stable_and_conjunctive() {
        let items = vec![1, 2, 3, 4, 5, 6];
        let set = FilterSet::new().with(|n: &i32| n % 2 == 0).with(|n| *n > 2);
        assert_eq!(set.filter(&items), vec![4, 6]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = vec![10, 25, 30, 45];
        let set = FilterSet::new().with(|n: &i32| n % 10 == 0);
        let once = set.filter(&items);
        let twice = set.filter(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filtered_count_never_exceeds_input() {
        let items = vec![1, 2, 3];
        let set = FilterSet::new().with(|n: &i32| *n > 1);
        assert!(set.filter(&items).len() <= items.len());
    }

    #[test]
    fn test_empty_result_is_valid() {
        let items = vec![1, 2, 3];
        let set = FilterSet::new().with(|n: &i32| *n > 10);
        assert!(set.filter(&items).is_empty());
    }

    #[test]
    fn test_when_skips_inactive_criteria() {
        let items = vec![1, 2, 3];
        let selected = "all";
        let set = FilterSet::new().when(selected != "all", |n: &i32| *n == 2);
        assert_eq!(set.active_count(), 0);
        assert_eq!(set.filter(&items), items);
    }

    #[test]
    fn test_text_matches_is_case_insensitive() {
        assert!(text_matches("wax", &["Tissu Wax Premium", "textile"]));
        assert!(text_matches("WAX", &["tissu wax premium"]));
        assert!(!text_matches("soie", &["Tissu Wax Premium"]));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(text_matches("", &["anything"]));
        assert!(text_matches("   ", &["anything"]));
        assert!(text_matches("", &[]));
    }
}
