// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{accounts, categories, transactions};
use crate::cache::{Mutation, QueryCache, QueryKey};
use crate::client::{ApiClient, HttpTransport, Transport};
use crate::config::Settings;
use crate::draft::validate_name;
use crate::error::ApiResult;
use crate::models::*;
use tracing::{info, warn};

/// Owns the REST client and the query cache for one run of the app.
///
/// Reads go through the cache. Writes call the backend and, only once the
/// response has come back successfully, invalidate the keys bound to them
/// in [`Mutation::invalidates`].
pub struct Session<T: Transport = HttpTransport> {
    api: ApiClient<T>,
    cache: QueryCache,
}

impl Session<HttpTransport> {
    pub fn connect(settings: &Settings) -> ApiResult<Self> {
        Ok(Self::new(ApiClient::http(&settings.api_url)?))
    }
}

impl<T: Transport> Session<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut QueryCache {
        &mut self.cache
    }

    // ---- queries ----

    pub fn accounts(&mut self) -> ApiResult<Vec<Account>> {
        self.cache
            .fetch(QueryKey::Accounts, || accounts::list(&self.api))
    }

    pub fn categories(&mut self) -> ApiResult<Vec<Category>> {
        self.cache
            .fetch(QueryKey::Categories, || categories::list(&self.api))
    }

    pub fn transactions(&mut self) -> ApiResult<Vec<Transaction>> {
        self.cache
            .fetch(QueryKey::Transactions, || transactions::list(&self.api))
    }

    pub fn refetch_categories(&mut self) -> ApiResult<Vec<Category>> {
        self.cache
            .refetch(QueryKey::Categories, || categories::list(&self.api))
    }

    // ---- mutations ----

    pub fn create_account(&mut self, input: &CreateAccount) -> ApiResult<Account> {
        validate_name(&input.name)?;
        self.mutate(Mutation::CreateAccount, |api| accounts::create(api, input))
    }

    pub fn update_account(&mut self, input: &UpdateAccount) -> ApiResult<Account> {
        if let Some(name) = &input.name {
            validate_name(name)?;
        }
        self.mutate(Mutation::UpdateAccount, |api| accounts::update(api, input))
    }

    pub fn create_category(&mut self, input: &CreateCategory) -> ApiResult<Category> {
        validate_name(&input.name)?;
        self.mutate(Mutation::CreateCategory, |api| {
            categories::create(api, input)
        })
    }

    pub fn update_category(&mut self, input: &UpdateCategory) -> ApiResult<Category> {
        if let Some(name) = &input.name {
            validate_name(name)?;
        }
        self.mutate(Mutation::UpdateCategory, |api| {
            categories::update(api, input)
        })
    }

    pub fn delete_category(&mut self, input: &DeleteCategory) -> ApiResult<serde_json::Value> {
        self.mutate(Mutation::DeleteCategory, |api| {
            categories::delete(api, input)
        })
    }

    /// Raw reorder call. Table code goes through `CategoryBoard::drop_on`,
    /// which adds the no-op checks and the in-flight guard.
    pub fn reorder_category(&mut self, input: &ReorderCategory) -> ApiResult<serde_json::Value> {
        self.mutate(Mutation::ReorderCategory, |api| {
            categories::reorder(api, input)
        })
    }

    pub fn create_transaction(&mut self, input: &CreateTransaction) -> ApiResult<Transaction> {
        self.mutate(Mutation::CreateTransaction, |api| {
            transactions::create(api, input)
        })
    }

    pub fn update_transaction(&mut self, input: &UpdateTransaction) -> ApiResult<Transaction> {
        self.mutate(Mutation::UpdateTransaction, |api| {
            transactions::update(api, input)
        })
    }

    fn mutate<R>(
        &mut self,
        mutation: Mutation,
        call: impl FnOnce(&ApiClient<T>) -> ApiResult<R>,
    ) -> ApiResult<R> {
        match call(&self.api) {
            Ok(out) => {
                info!(mutation = mutation.name(), "mutation succeeded");
                self.cache.invalidate(mutation.invalidates());
                Ok(out)
            }
            Err(e) => {
                warn!(mutation = mutation.name(), error = %e, "mutation failed");
                Err(e)
            }
        }
    }
}
