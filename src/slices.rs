//! Slice searching and concatenation helpers

use std::fmt;

/// Concatenate three slices into a fresh vector
#[must_use]
pub fn concat<T: Clone>(first: &[T], second: &[T], third: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(first.len() + second.len() + third.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out.extend_from_slice(third);
    out
}

/// Index of the first occurrence of `key`
#[must_use]
pub fn index_of<T: PartialEq>(slice: &[T], key: &T) -> Option<usize> {
    slice.iter().position(|item| item == key)
}

/// Index of the first occurrence of `key` at or after `from`
#[must_use]
pub fn index_of_from<T: PartialEq>(slice: &[T], key: &T, from: usize) -> Option<usize> {
    if from >= slice.len() {
        return None;
    }
    slice[from..].iter().position(|item| item == key).map(|i| i + from)
}

/// True when the slice contains `key`
#[must_use]
pub fn contains<T: PartialEq>(slice: &[T], key: &T) -> bool {
    index_of(slice, key).is_some()
}

/// Number of occurrences of `key`
#[must_use]
pub fn occurrences<T: PartialEq>(slice: &[T], key: &T) -> usize {
    slice.iter().filter(|item| *item == key).count()
}

/// Index of the first case-insensitive occurrence of `key`
#[must_use]
pub fn index_of_ignore_case<S: AsRef<str>>(slice: &[S], key: &str) -> Option<usize> {
    let key = key.to_lowercase();
    slice
        .iter()
        .position(|item| item.as_ref().to_lowercase() == key)
}

/// True when the slice contains `key`, ignoring case
#[must_use]
pub fn contains_ignore_case<S: AsRef<str>>(slice: &[S], key: &str) -> bool {
    index_of_ignore_case(slice, key).is_some()
}

/// Comma-joined rendering of the slice's elements
#[must_use]
pub fn display_join<T: fmt::Display>(slice: &[T]) -> String {
    slice
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Comma-joined rendering with `<null>` for absent entries
#[must_use]
pub fn display_join_opt<T: fmt::Display>(slice: &[Option<T>]) -> String {
    slice
        .iter()
        .map(|item| {
            item.as_ref()
                .map_or_else(|| String::from("<null>"), ToString::to_string)
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// A fresh sorted vector with the slice's elements
#[must_use]
pub fn sorted<T: Ord + Clone>(slice: &[T]) -> Vec<T> {
    let mut out = slice.to_vec();
    out.sort();
    out
}

/// A fresh vector sorted by the given key function
#[must_use]
pub fn sorted_by_key<T, K, F>(slice: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut out = slice.to_vec();
    out.sort_by_key(key_fn);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_concat() {
        assert_eq!(concat(&[1, 2], &[3], &[4, 5]), vec![1, 2, 3, 4, 5]);
        let empty: [i32; 0] = [];
        assert_eq!(concat(&empty, &empty, &empty), Vec::<i32>::new());
    }

    #[test]
    fn test_index_of() {
        let items = ["a", "b", "c", "b"];
        assert_eq!(index_of(&items, &"b"), Some(1));
        assert_eq!(index_of(&items, &"z"), None);
        assert_eq!(index_of_from(&items, &"b", 2), Some(3));
        assert_eq!(index_of_from(&items, &"b", 4), None);
        assert!(contains(&items, &"c"));
        assert!(!contains(&items, &"z"));
    }

    #[test]
    fn test_occurrences() {
        assert_eq!(occurrences(&[1, 2, 1, 3, 1], &1), 3);
        assert_eq!(occurrences(&[1, 2, 3], &9), 0);
    }

    #[test]
    fn test_ignore_case_search() {
        let items = ["Alpha", "Beta", "GAMMA"];
        assert_eq!(index_of_ignore_case(&items, "gamma"), Some(2));
        assert_eq!(index_of_ignore_case(&items, "delta"), None);
        assert!(contains_ignore_case(&items, "BETA"));
    }

    #[test]
    fn test_display_join() {
        assert_eq!(display_join(&[1, 2, 3]), "1,2,3");
        assert_eq!(
            display_join_opt(&[Some(1), None, Some(3)]),
            "1,<null>,3"
        );
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(&[3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(
            sorted_by_key(&["ccc", "a", "bb"], |s| s.len()),
            vec!["a", "bb", "ccc"]
        );
    }
}
