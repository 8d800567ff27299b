//! In-memory data store
//!
//! Single source of truth for requests, equipment, and teams. Collections
//! live behind one `RwLock`; the methods on [`Store`] are the only legal
//! mutation path. State is per-process and resets on restart.
//!
//! Mutation semantics: an unknown id is a silent no-op. Mutators return
//! `Option<Record>` where `None` means "absent, nothing changed" rather
//! than an error.

mod equipment;
mod requests;
pub mod seed;
mod teams;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::models::{Equipment, MaintenanceRequest, Team};

/// Injectable clock, used for `created_at` stamping and overdue checks
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// Injectable id generator
pub trait IdGen: Send + Sync {
    /// Produce a fresh id with the given entity prefix (`req`, `eq`, ...)
    fn next(&self, prefix: &str) -> String;
}

/// UUIDv4-based id generator
pub struct UuidGen;

impl IdGen for UuidGen {
    fn next(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, uuid::Uuid::new_v4())
    }
}

#[derive(Default)]
pub(crate) struct Collections {
    pub(crate) requests: IndexMap<String, MaintenanceRequest>,
    pub(crate) equipment: IndexMap<String, Equipment>,
    pub(crate) teams: IndexMap<String, Team>,
}

/// Cheaply clonable handle to the shared collections
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

struct Inner {
    collections: RwLock<Collections>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGen>,
}

impl Store {
    pub fn new(clock: impl Clock + 'static, ids: impl IdGen + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                collections: RwLock::new(Collections::default()),
                clock: Box::new(clock),
                ids: Box::new(ids),
            }),
        }
    }

    /// Current date from the injected clock
    pub fn today(&self) -> NaiveDate {
        self.inner.clock.today()
    }

    pub(crate) fn next_id(&self, prefix: &str) -> String {
        self.inner.ids.next(prefix)
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner
            .collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    /// Fixed-date clock for deterministic tests
    pub struct FixedClock(pub NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    /// Sequential id generator (`req-1`, `req-2`, ...)
    #[derive(Default)]
    pub struct SeqGen(AtomicU64);

    impl IdGen for SeqGen {
        fn next(&self, prefix: &str) -> String {
            let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
            format!("{}-{}", prefix, n)
        }
    }

    pub fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 27).expect("valid date")
    }

    pub fn test_store() -> Store {
        Store::new(FixedClock(fixed_date()), SeqGen::default())
    }
}
