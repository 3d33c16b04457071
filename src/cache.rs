//! Template caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::template::Template;

/// Global cache for parsed templates.
static CACHE: Mutex<Option<LruCache<String, Template>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a template, using the cache.
pub fn get_or_parse(template: &str) -> Template {
    // A poisoned cache still holds fully parsed templates.
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(template) {
        return parsed.clone();
    }

    log::debug!("template cache miss: {:?}", template);
    let parsed = Template::parse(template);
    cache.put(template.to_string(), parsed.clone());
    parsed
}
