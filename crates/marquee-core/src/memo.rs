//! Single-entry memoization for derived widget state.
//!
//! A [`Memo`] caches one value together with the dependency key it was
//! computed from. Asking for the value with an equal key returns the cached
//! value untouched; any other key recomputes and replaces it. Keys that hold
//! shared data should wrap it in [`ArcKey`] so equality means "same
//! allocation", not "same contents".

use std::fmt;
use std::sync::Arc;

/// Cache of one derived value keyed by its dependencies.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    /// Create an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it when the key changed.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((cached_key, value)) = &self.entry {
            if *cached_key == key {
                self.hits += 1;
                tracing::trace!(hits = self.hits, "memo hit");
                return value.clone();
            }
        }

        self.misses += 1;
        tracing::trace!(misses = self.misses, "memo miss, recomputing");
        let value = compute(&key);
        self.entry = Some((key, value.clone()));
        value
    }

    /// Cached value, if any, without touching the counters.
    #[must_use]
    pub fn peek(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, v)| v)
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of lookups answered from the cache.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that recomputed.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}

/// Shared data compared by allocation identity.
pub struct ArcKey<T: ?Sized>(pub Arc<T>);

impl<T: ?Sized> ArcKey<T> {
    /// Wrap a shared reference.
    #[must_use]
    pub fn new(value: &Arc<T>) -> Self {
        Self(Arc::clone(value))
    }
}

impl<T: ?Sized> Clone for ArcKey<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for ArcKey<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for ArcKey<T> {}

impl<T: ?Sized> fmt::Debug for ArcKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArcKey({:p})", Arc::as_ptr(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_computes_once_for_same_key() {
        let mut memo: Memo<u32, String> = Memo::new();
        let mut calls = 0;

        let a = memo.get_or_compute(1, |k| {
            calls += 1;
            format!("v{k}")
        });
        let b = memo.get_or_compute(1, |k| {
            calls += 1;
            format!("v{k}")
        });

        assert_eq!(a, "v1");
        assert_eq!(b, "v1");
        assert_eq!(calls, 1);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);
    }

    #[test]
    fn test_memo_recomputes_on_key_change() {
        let mut memo: Memo<u32, u32> = Memo::new();
        assert_eq!(memo.get_or_compute(1, |k| k * 10), 10);
        assert_eq!(memo.get_or_compute(2, |k| k * 10), 20);
        assert_eq!(memo.get_or_compute(1, |k| k * 10), 10);
        assert_eq!(memo.misses(), 3);
        assert_eq!(memo.hits(), 0);
    }

    #[test]
    fn test_memo_peek_and_invalidate() {
        let mut memo: Memo<&str, u8> = Memo::new();
        assert!(memo.peek().is_none());
        memo.get_or_compute("k", |_| 7);
        assert_eq!(memo.peek(), Some(&7));
        memo.invalidate();
        assert!(memo.peek().is_none());
    }

    #[test]
    fn test_arc_key_compares_by_identity() {
        let a: Arc<[u8]> = Arc::from(vec![1, 2, 3]);
        let b: Arc<[u8]> = Arc::from(vec![1, 2, 3]);

        assert_eq!(ArcKey::new(&a), ArcKey::new(&a));
        assert_ne!(ArcKey::new(&a), ArcKey::new(&b));
    }

    #[test]
    fn test_memo_with_arc_key() {
        let data: Arc<[u8]> = Arc::from(vec![3, 1, 2]);
        let mut memo: Memo<ArcKey<[u8]>, usize> = Memo::new();

        memo.get_or_compute(ArcKey::new(&data), |k| k.0.len());
        memo.get_or_compute(ArcKey::new(&data), |k| k.0.len());
        assert_eq!(memo.hits(), 1);

        let replaced: Arc<[u8]> = Arc::from(vec![3, 1, 2]);
        memo.get_or_compute(ArcKey::new(&replaced), |k| k.0.len());
        assert_eq!(memo.misses(), 2);
    }
}
