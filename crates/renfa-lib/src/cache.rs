//! Shared cache of compiled automata.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use indexmap::IndexMap;
use renfa_compiler::Compiler;

use crate::{Automaton, Result};

/// Default number of `(pattern, optimize)` entries kept.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

type Key = (String, bool);
type Slot = Arc<OnceLock<Result<Arc<Automaton>>>>;

/// Compiled automata keyed by `(pattern, optimize)`.
///
/// The map lock is held only to fetch a key's slot. Each slot is filled at
/// most once: concurrent requests for the same key wait for the first one,
/// and requests for different keys compile in parallel. Failures are cached
/// like successes.
///
/// At most `capacity` keys are kept. Inserting past that evicts the oldest
/// key; callers already holding its slot keep their result.
#[derive(Debug)]
pub struct CompileCache {
    compiler: Compiler,
    capacity: usize,
    slots: Mutex<IndexMap<Key, Slot>>,
}

impl Default for CompileCache {
    fn default() -> Self {
        Self::with_compiler(Compiler::default())
    }
}

impl CompileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `compiler` for everything except the optimize flag, which is
    /// part of each request.
    pub fn with_compiler(compiler: Compiler) -> Self {
        Self {
            compiler,
            capacity: DEFAULT_CACHE_CAPACITY,
            slots: Mutex::default(),
        }
    }

    /// Keep at most `capacity` keys (at least one).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn get_capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, pattern: &str, optimize: bool) -> Result<Arc<Automaton>> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            let key = (pattern.to_owned(), optimize);
            match slots.get(&key) {
                Some(slot) => Arc::clone(slot),
                None => {
                    while slots.len() >= self.capacity {
                        if let Some(((evicted, _), _)) = slots.shift_remove_index(0) {
                            log::debug!("cache full, evicting {evicted:?}");
                        }
                    }
                    let slot = Slot::default();
                    slots.insert(key, Arc::clone(&slot));
                    slot
                }
            }
        };

        slot.get_or_init(|| {
            log::debug!("cache miss for {pattern:?} (optimize: {optimize})");
            Automaton::with_compiler(pattern, self.compiler.optimize(optimize)).map(Arc::new)
        })
        .clone()
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
