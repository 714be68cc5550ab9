//! StudentMap: the chained core fixed to Student keys and i32 values, with a
//! dynamically-typed query surface.

use crate::chained_hash_map::{ChainedHashMap, Iter, MapError};
use crate::student::Student;
use hashbrown::HashSet;
use std::any::Any;

/// A map from students to marks.
///
/// This is a type-constrained instantiation of [`ChainedHashMap`], not a
/// separate implementation. What distinguishes it is the query surface:
/// `get`, `contains_key`, `contains_value`, and `remove` take `&dyn Any` and
/// fail with [`MapError::TypeMismatch`] when the runtime type is not the
/// declared one, leaving the map unmodified. Mutation is typed.
pub struct StudentMap {
    inner: ChainedHashMap<Student, i32>,
}

impl StudentMap {
    pub fn new() -> Self {
        Self {
            inner: ChainedHashMap::new(),
        }
    }

    /// See [`ChainedHashMap::with_capacity`] for the capacity contract.
    pub fn with_capacity(capacity: isize) -> Result<Self, MapError> {
        Ok(Self {
            inner: ChainedHashMap::with_capacity(capacity)?,
        })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    // Accepts a bare `Student` or the nullable `Option<Student>` form; any
    // other runtime type is a mismatch.
    fn coerce_key(key: &dyn Any) -> Result<Option<&Student>, MapError> {
        if let Some(student) = key.downcast_ref::<Student>() {
            Ok(Some(student))
        } else if let Some(nullable) = key.downcast_ref::<Option<Student>>() {
            Ok(nullable.as_ref())
        } else {
            Err(MapError::TypeMismatch {
                expected: "Student",
            })
        }
    }

    fn coerce_value(value: &dyn Any) -> Result<&i32, MapError> {
        value
            .downcast_ref::<i32>()
            .ok_or(MapError::TypeMismatch { expected: "i32" })
    }

    pub fn get(&self, key: &dyn Any) -> Result<Option<&i32>, MapError> {
        Ok(self.inner.get(Self::coerce_key(key)?))
    }

    pub fn contains_key(&self, key: &dyn Any) -> Result<bool, MapError> {
        Ok(self.get(key)?.is_some())
    }

    pub fn contains_value(&self, value: &dyn Any) -> Result<bool, MapError> {
        Ok(self.inner.contains_value(Self::coerce_value(value)?))
    }

    pub fn remove(&mut self, key: &dyn Any) -> Result<Option<i32>, MapError> {
        // A mismatched key must leave the map untouched, so coerce first.
        let key = Self::coerce_key(key)?;
        Ok(self.inner.remove(key))
    }

    pub fn insert(&mut self, key: Option<Student>, value: i32) -> Option<i32> {
        self.inner.insert(key, value)
    }

    pub fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Option<Student>, i32)>,
    {
        self.inner.insert_all(entries);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn key_set(&self) -> HashSet<Option<Student>> {
        self.inner.key_set()
    }

    pub fn values(&self) -> Vec<i32> {
        self.inner.values()
    }

    pub fn entry_set(&self) -> Vec<(Option<Student>, i32)> {
        self.inner.entry_set()
    }

    pub fn iter(&self) -> Iter<'_, Student, i32> {
        self.inner.iter()
    }
}

impl Default for StudentMap {
    fn default() -> Self {
        Self::new()
    }
}
