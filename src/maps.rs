//! Order-preserving map collectors
//!
//! Built on `IndexMap` so iteration order follows insertion order, which
//! keeps keyed lookups deterministic for callers that render or compare
//! results.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{BasicError, Result};

/// Index values by a derived key, requiring every key to be unique
///
/// # Errors
///
/// Returns an `InvalidArgument` error when two values map to the same key.
pub fn index_by<K, V, F>(values: impl IntoIterator<Item = V>, mut key_fn: F) -> Result<IndexMap<K, V>>
where
    K: Hash + Eq + Debug,
    F: FnMut(&V) -> K,
{
    let mut map = IndexMap::new();
    for value in values {
        let key = key_fn(&value);
        insert_unique(&mut map, key, value)?;
    }
    Ok(map)
}

/// Group values by a derived key, preserving encounter order
pub fn group_by<K, V, F>(values: impl IntoIterator<Item = V>, mut key_fn: F) -> IndexMap<K, Vec<V>>
where
    K: Hash + Eq,
    F: FnMut(&V) -> K,
{
    let mut map = IndexMap::new();
    for value in values {
        let key = key_fn(&value);
        push_group(&mut map, key, value);
    }
    map
}

/// Insert a key-value pair, rejecting an already-present key
///
/// # Errors
///
/// Returns an `InvalidArgument` error when the key is already in the map.
pub fn insert_unique<K, V>(map: &mut IndexMap<K, V>, key: K, value: V) -> Result<()>
where
    K: Hash + Eq + Debug,
{
    match map.entry(key) {
        Entry::Occupied(entry) => Err(BasicError::invalid_argument(format!(
            "the key {:?} is already present",
            entry.key()
        ))),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

/// Append a value to the group stored under `key`
pub fn push_group<K, V>(map: &mut IndexMap<K, Vec<V>>, key: K, value: V)
where
    K: Hash + Eq,
{
    map.entry(key).or_default().push(value);
}
