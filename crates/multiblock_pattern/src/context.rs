//! Shared mutable state for one match attempt.
//!
//! Predicates use a [`MatchContext`] to aggregate data while the matcher
//! sweeps a structure: counting casings, collecting hatches, remembering the
//! tier of the first coil they saw. Two contexts exist per attempt, a global
//! one that survives the whole attempt and a layer one that is cleared at the
//! start of every slice.
//!
//! Values are stored type-erased. Typed reads of a key holding a different
//! type behave as if the key were absent; typed writes report
//! [`ErrorKind::ContextTypeMismatch`](multiblock_foundation::ErrorKind) and
//! leave the stored value untouched.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;

use multiblock_foundation::{Error, Result};

type Entry = Box<dyn Any + Send + Sync>;

/// A resettable, typed key-value store.
#[derive(Default)]
pub struct MatchContext {
    entries: HashMap<String, Entry>,
}

impl MatchContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stores `value` under `key`, replacing any previous value of any type.
    pub fn set<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), Box::new(value));
    }

    /// Returns the value under `key` if it exists and is a `T`.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(|v| (**v).downcast_ref::<T>())
    }

    /// Returns the value under `key` mutably if it exists and is a `T`.
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.entries
            .get_mut(key)
            .and_then(|v| (**v).downcast_mut::<T>())
    }

    /// Returns a copy of the value under `key`, or `default` if it is absent
    /// or not a `T`.
    #[must_use]
    pub fn get_or_default<T: Any + Clone>(&self, key: &str, default: T) -> T {
        self.get::<T>(key).cloned().unwrap_or(default)
    }

    /// Returns the value under `key`, inserting the result of `create` first
    /// if the key is absent.
    ///
    /// # Errors
    /// Returns an error if the key holds a value of another type.
    pub fn get_or_create<T, F>(&mut self, key: &str, create: F) -> Result<&mut T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        let entry = self
            .entries
            .entry(key.to_owned())
            .or_insert_with(|| Box::new(create()) as Entry);
        (**entry)
            .downcast_mut::<T>()
            .ok_or_else(|| Error::context_type_mismatch(key, type_name::<T>()))
    }

    /// Returns the value under `key`, inserting `initial` first if the key
    /// is absent.
    ///
    /// # Errors
    /// Returns an error if the key holds a value of another type.
    pub fn get_or_put<T: Any + Send + Sync>(&mut self, key: &str, initial: T) -> Result<&mut T> {
        self.get_or_create(key, || initial)
    }

    /// Adds `by` to the `i64` counter under `key` (absent counts as zero) and
    /// returns the new value.
    ///
    /// # Errors
    /// Returns an error if the key holds a value that is not an `i64`.
    pub fn increment(&mut self, key: &str, by: i64) -> Result<i64> {
        let counter = self.get_or_put(key, 0_i64)?;
        *counter = counter.saturating_add(by);
        Ok(*counter)
    }

    /// Returns true if any value is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes the value under `key`. Returns true if something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for MatchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchContext")
            .field("keys", &self.keys())
            .finish()
    }
}
