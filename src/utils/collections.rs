//! Purpose: Sequence and keyed-record helpers (range, grouping, dedup, chunking, pick/omit).
//! Exports: `Record`, `range`, `group_by`, `unique`, `chunk`, `pick`, `omit`.
//! Role: Pure functions over borrowed inputs; every result is a fresh collection.
//! Invariants: Inputs are never mutated; relative element order is preserved.
//! Invariants: `pick`/`omit` keep the input record's key order and ignore absent keys.
use std::collections::HashSet;
use std::hash::Hash;

use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};

/// Keyed record with insertion-ordered string keys.
pub type Record = Map<String, Value>;

pub fn range(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Partitions `items` by `key`, keeping each group's items in input order.
///
/// Groups come back in the order their key was first seen.
pub fn group_by<T, K, F>(items: &[T], mut key: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((key, vec![item.clone()])),
        }
    }
    groups
}

pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Splits `items` into consecutive groups of `size`; the last group holds the remainder.
///
/// A `size` of zero is rejected with `ErrorKind::InvalidArgument`.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, Error> {
    if size == 0 {
        return Err(Error::new(ErrorKind::InvalidArgument)
            .with_message("chunk size must be at least 1")
            .with_hint("Pass a positive chunk size."));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

pub fn pick<K: AsRef<str>>(record: &Record, keys: &[K]) -> Record {
    record
        .iter()
        .filter(|(name, _)| keys.iter().any(|key| key.as_ref() == name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

pub fn omit<K: AsRef<str>>(record: &Record, keys: &[K]) -> Record {
    record
        .iter()
        .filter(|(name, _)| !keys.iter().any(|key| key.as_ref() == name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
