// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{CreateTransaction, Transaction, UpdateTransaction};

pub fn create<T: Transport>(
    api: &ApiClient<T>,
    input: &CreateTransaction,
) -> ApiResult<Transaction> {
    api.request(Method::Post, "/transactions", Some(input))
}

pub fn list<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Transaction>> {
    api.get("/transactions")
}

pub fn update<T: Transport>(
    api: &ApiClient<T>,
    input: &UpdateTransaction,
) -> ApiResult<Transaction> {
    api.request(
        Method::Put,
        &format!("/transactions/{}", input.id),
        Some(input),
    )
}
