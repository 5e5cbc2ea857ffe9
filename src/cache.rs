// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Keyed store of the last successful read per resource, plus the table
//! that binds each write to the reads it must refresh.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    Accounts,
    Categories,
    Transactions,
}

impl QueryKey {
    pub const ALL: [QueryKey; 3] = [
        QueryKey::Accounts,
        QueryKey::Categories,
        QueryKey::Transactions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::Accounts => "accounts",
            QueryKey::Categories => "categories",
            QueryKey::Transactions => "transactions",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every write the client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateAccount,
    UpdateAccount,
    CreateCategory,
    UpdateCategory,
    DeleteCategory,
    ReorderCategory,
    CreateTransaction,
    UpdateTransaction,
}

impl Mutation {
    /// Keys refreshed once this mutation has succeeded.
    pub fn invalidates(&self) -> &'static [QueryKey] {
        use Mutation::*;
        match self {
            CreateAccount | UpdateAccount => &[QueryKey::Accounts],
            CreateCategory | UpdateCategory | DeleteCategory | ReorderCategory => {
                &[QueryKey::Categories]
            }
            // a transaction moves balances and budget-available amounts
            CreateTransaction | UpdateTransaction => &[
                QueryKey::Transactions,
                QueryKey::Accounts,
                QueryKey::Categories,
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        use Mutation::*;
        match self {
            CreateAccount => "create_account",
            UpdateAccount => "update_account",
            CreateCategory => "create_category",
            UpdateCategory => "update_category",
            DeleteCategory => "delete_category",
            ReorderCategory => "reorder_category",
            CreateTransaction => "create_transaction",
            UpdateTransaction => "update_transaction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent {
    Updated(QueryKey),
    Invalidated(QueryKey),
}

struct Entry {
    value: Box<dyn Any>,
    stale: bool,
}

type Subscriber = Box<dyn FnMut(CacheEvent)>;

#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    fetches: HashMap<QueryKey, u64>,
    subscribers: Vec<Subscriber>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener called on every value change and invalidation.
    pub fn subscribe(&mut self, f: impl FnMut(CacheEvent) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Returns the cached value when it is fresh, otherwise runs `fetcher`.
    pub fn fetch<V, E, F>(&mut self, key: QueryKey, fetcher: F) -> Result<V, E>
    where
        V: Clone + 'static,
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(entry) = self.entries.get(&key) {
            if !entry.stale {
                if let Some(v) = entry.value.downcast_ref::<V>() {
                    trace!(%key, "cache hit");
                    return Ok(v.clone());
                }
            }
        }
        self.refetch(key, fetcher)
    }

    /// Always runs `fetcher`. On failure the previous value stays in place.
    pub fn refetch<V, E, F>(&mut self, key: QueryKey, fetcher: F) -> Result<V, E>
    where
        V: Clone + 'static,
        F: FnOnce() -> Result<V, E>,
    {
        *self.fetches.entry(key).or_insert(0) += 1;
        debug!(%key, "fetching");
        let value = fetcher()?;
        self.entries.insert(
            key,
            Entry {
                value: Box::new(value.clone()),
                stale: false,
            },
        );
        self.notify(CacheEvent::Updated(key));
        Ok(value)
    }

    /// Last successful value for `key`, fresh or stale.
    pub fn peek<V: 'static>(&self, key: QueryKey) -> Option<&V> {
        self.entries.get(&key)?.value.downcast_ref::<V>()
    }

    /// A key that has never been fetched counts as stale.
    pub fn is_stale(&self, key: QueryKey) -> bool {
        self.entries.get(&key).is_none_or(|e| e.stale)
    }

    pub fn invalidate(&mut self, keys: &[QueryKey]) {
        for &key in keys {
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.stale = true;
            }
            debug!(%key, "invalidated");
            self.notify(CacheEvent::Invalidated(key));
        }
    }

    pub fn fetch_count(&self, key: QueryKey) -> u64 {
        self.fetches.get(&key).copied().unwrap_or(0)
    }

    fn notify(&mut self, event: CacheEvent) {
        for s in self.subscribers.iter_mut() {
            s(event);
        }
    }
}
