use std::sync::Arc;
use std::thread;

use crate::{CompileCache, CompileError, Compiler, DEFAULT_CACHE_CAPACITY, Error};

#[test]
fn same_key_shares_automaton() {
    let cache = CompileCache::new();
    let first = cache.get("(a+b)*c", true).unwrap();
    let second = cache.get("(a+b)*c", true).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn optimize_flag_is_part_of_key() {
    let cache = CompileCache::new();
    let plain = cache.get("a+b", false).unwrap();
    let optimized = cache.get("a+b", true).unwrap();

    assert!(!plain.is_optimized());
    assert!(optimized.is_optimized());
    assert_eq!(cache.len(), 2);
}

#[test]
fn errors_are_cached() {
    let cache = CompileCache::new();

    for _ in 0..2 {
        assert_eq!(
            cache.get("a#", false),
            Err(Error::Compile(CompileError::UnknownToken { position: 1 }))
        );
    }
    assert_eq!(cache.len(), 1);
}

#[test]
fn compiler_limits_apply() {
    let cache = CompileCache::with_compiler(Compiler::new().max_pattern_len(Some(1)));

    assert!(cache.get("a", true).is_ok());
    assert_eq!(
        cache.get("ab", true),
        Err(Error::Compile(CompileError::PatternTooLong { len: 2, limit: 1 }))
    );
}

#[test]
fn concurrent_requests_share_one_result() {
    let cache = Arc::new(CompileCache::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get("((ab)*+c*)*d", true).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
    assert_eq!(cache.len(), 1);
}

#[test]
fn clear_forgets_everything() {
    let cache = CompileCache::new();
    cache.get("a", false).unwrap();
    cache.clear();

    assert!(cache.is_empty());
}

#[test]
fn distinct_patterns_stay_within_capacity() {
    let cache = CompileCache::new().capacity(4);

    for i in 0..20 {
        let _ = cache.get(&format!("a#{i}"), i % 2 == 0);
        assert!(cache.len() <= 4);
    }
    assert_eq!(cache.len(), 4);
}

#[test]
fn oldest_key_is_evicted_first() {
    let cache = CompileCache::new().capacity(2);
    let first = cache.get("a", false).unwrap();
    let second = cache.get("b", false).unwrap();
    cache.get("c", false).unwrap();

    assert!(Arc::ptr_eq(&second, &cache.get("b", false).unwrap()));
    assert!(!Arc::ptr_eq(&first, &cache.get("a", false).unwrap()));
    // The evicted automaton is still usable by whoever held it.
    assert!(first.matches("a").unwrap());
    assert_eq!(cache.len(), 2);
}

#[test]
fn capacity_defaults_and_floor() {
    assert_eq!(CompileCache::new().get_capacity(), DEFAULT_CACHE_CAPACITY);
    assert_eq!(CompileCache::new().capacity(0).get_capacity(), 1);

    let cache = CompileCache::new().capacity(0);
    cache.get("a", true).unwrap();
    cache.get("b", true).unwrap();
    assert_eq!(cache.len(), 1);
}
