use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use icn_lang::{CommandList, parse_str};

/// Source of parsed programs for the renderer.
///
/// Implementations must return an equal list for equal sources; whether and
/// how they memoize is up to them.
pub trait ParseCache {
    fn get_or_parse(&self, source: &str) -> Arc<CommandList>;
}

impl<P: ParseCache + ?Sized> ParseCache for Arc<P> {
    #[inline]
    fn get_or_parse(&self, source: &str) -> Arc<CommandList> {
        (**self).get_or_parse(source)
    }
}

impl<P: ParseCache + ?Sized> ParseCache for &P {
    #[inline]
    fn get_or_parse(&self, source: &str) -> Arc<CommandList> {
        (**self).get_or_parse(source)
    }
}

/// Memoizing cache keyed by the exact source string.
///
/// Each distinct source is parsed at most once for the lifetime of the cache;
/// entries are never evicted. Safe to share across threads: a miss is parsed
/// under the write lock, so racing misses on one key cannot parse twice.
#[derive(Debug)]
pub struct SourceCache {
    entries: RwLock<HashMap<String, Arc<CommandList>>>,
    parse: fn(&str) -> CommandList,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::with_parser(parse_str)
    }

    /// Cache backed by a custom parse function.
    pub fn with_parser(parse: fn(&str) -> CommandList) -> Self {
        Self { entries: RwLock::new(HashMap::new()), parse }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(source)
    }
}

impl Default for SourceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseCache for SourceCache {
    fn get_or_parse(&self, source: &str) -> Arc<CommandList> {
        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(source)
        {
            return Arc::clone(hit);
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let parse = self.parse;
        Arc::clone(entries.entry(source.to_string()).or_insert_with(|| {
            log::debug!("icn cache miss ({} bytes)", source.len());
            Arc::new(parse(source))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn second_lookup_returns_stored_list() {
        let cache = SourceCache::new();
        let a = cache.get_or_parse("dot 1 1");
        let b = cache.get_or_parse("dot 1 1");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("dot 1 1"));
    }

    #[test]
    fn keyed_by_exact_string() {
        let cache = SourceCache::new();
        let a = cache.get_or_parse("dot 1 1");
        let b = cache.get_or_parse("dot 1  1");
        assert_eq!(*a, *b);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn separate_caches_agree() {
        let src = "w 3 c #abc bogus square 0 0 2 2";
        assert_eq!(
            *SourceCache::new().get_or_parse(src),
            *SourceCache::new().get_or_parse(src)
        );
    }

    static SERIAL_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counting_parse_serial(src: &str) -> CommandList {
        SERIAL_CALLS.fetch_add(1, Ordering::SeqCst);
        parse_str(src)
    }

    #[test]
    fn parses_once_per_source() {
        let cache = SourceCache::with_parser(counting_parse_serial);
        for _ in 0..5 {
            cache.get_or_parse("line 0 0 1 1");
            cache.get_or_parse("dot 0 0");
        }
        assert_eq!(SERIAL_CALLS.load(Ordering::SeqCst), 2);
    }

    static THREADED_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counting_parse_threaded(src: &str) -> CommandList {
        THREADED_CALLS.fetch_add(1, Ordering::SeqCst);
        parse_str(src)
    }

    #[test]
    fn concurrent_misses_parse_once() {
        let cache = SourceCache::with_parser(counting_parse_threaded);
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        cache.get_or_parse("tri 0 0 1 0 0 1");
                    }
                });
            }
        });
        assert_eq!(THREADED_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn shared_through_arc() {
        let cache = Arc::new(SourceCache::new());
        let handle = Arc::clone(&cache);
        handle.get_or_parse("back");
        assert!(cache.contains("back"));
    }
}
