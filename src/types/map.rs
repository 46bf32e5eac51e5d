use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::types::Value;

/// Order-preserving JSON object.
///
/// Keys are unique byte strings. Iteration follows insertion order;
/// re-setting an existing key replaces its value without moving it.
/// Equality ignores insertion order (two maps holding the same pairs
/// compare equal), while [`PartialOrd`] compares entries in sorted-key
/// order so comparisons are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<Vec<u8>, Value>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.entries.get(key.as_ref())
    }

    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut Value> {
        self.entries.get_mut(key.as_ref())
    }

    /// Sets `key` to `value`. An existing key keeps its position and only
    /// the value changes; a new key is appended. Returns the prior value.
    pub fn set(&mut self, key: impl AsRef<[u8]>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.as_ref().to_vec(), value.into())
    }

    /// Sets `key` to `value` at the first position, shifting the rest.
    pub fn set_at_front(&mut self, key: impl AsRef<[u8]>, value: impl Into<Value>) -> Option<Value> {
        self.entries
            .shift_insert(0, key.as_ref().to_vec(), value.into())
    }

    /// Sets `key` to `value` directly after `anchor`. A missing anchor
    /// appends instead.
    pub fn set_after(
        &mut self,
        anchor: impl AsRef<[u8]>,
        key: impl AsRef<[u8]>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        let key = key.as_ref().to_vec();
        match self.entries.get_index_of(anchor.as_ref()) {
            Some(index) => {
                let limit = if self.entries.contains_key(&key) {
                    self.entries.len() - 1
                } else {
                    self.entries.len()
                };
                self.entries
                    .shift_insert((index + 1).min(limit), key, value.into())
            }
            None => self.entries.insert(key, value.into()),
        }
    }

    /// Removes `key`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<Value> {
        self.entries.shift_remove(key.as_ref())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.keys().map(Vec::as_slice)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Vec<u8>, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Vec<u8>, Value> {
        self.entries.iter_mut()
    }

    /// First entry in insertion order.
    pub fn first(&self) -> Option<(&[u8], &Value)> {
        self.entries.first().map(|(key, value)| (key.as_slice(), value))
    }

    /// Walks a dotted path rooted at this map; see [`from_json`](crate::from_json).
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        crate::path::lookup(self, path)
    }

    pub fn lookup_mut(&mut self, path: &str) -> Option<&mut Value> {
        crate::path::lookup_mut(self, path)
    }

    /// Looks up `key` and casts the value to `K` in one step.
    pub fn cast<K: crate::types::Kind>(&self, key: impl AsRef<[u8]>) -> Option<&K> {
        self.get(key).and_then(K::cast)
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl PartialOrd for Map {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut lhs: Vec<_> = self.entries.iter().collect();
        let mut rhs: Vec<_> = other.entries.iter().collect();
        lhs.sort_by(|a, b| a.0.cmp(b.0));
        rhs.sort_by(|a, b| a.0.cmp(b.0));

        let mut lhs = lhs.into_iter();
        let mut rhs = rhs.into_iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return Some(Ordering::Equal),
                (None, Some(_)) => return Some(Ordering::Less),
                (Some(_), None) => return Some(Ordering::Greater),
                (Some((lk, lv)), Some((rk, rv))) => {
                    match lk.cmp(rk) {
                        Ordering::Equal => {}
                        order => return Some(order),
                    }
                    match lv.partial_cmp(rv) {
                        Some(Ordering::Equal) => {}
                        other => return other,
                    }
                }
            }
        }
    }
}

impl<K: AsRef<[u8]>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<[u8]>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (Vec<u8>, Value);
    type IntoIter = indexmap::map::IntoIter<Vec<u8>, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Vec<u8>, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Vec<u8>, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
