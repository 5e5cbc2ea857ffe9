// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{Account, CreateAccount, UpdateAccount};

pub fn create<T: Transport>(api: &ApiClient<T>, input: &CreateAccount) -> ApiResult<Account> {
    api.request(Method::Post, "/accounts", Some(input))
}

pub fn list<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Account>> {
    api.get("/accounts")
}

pub fn update<T: Transport>(api: &ApiClient<T>, input: &UpdateAccount) -> ApiResult<Account> {
    api.request(Method::Put, &format!("/accounts/{}", input.id), Some(input))
}
