// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{Category, CreateCategory, DeleteCategory, ReorderCategory, UpdateCategory};

pub fn create<T: Transport>(api: &ApiClient<T>, input: &CreateCategory) -> ApiResult<Category> {
    api.request(Method::Post, "/categories", Some(input))
}

pub fn list<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Category>> {
    api.get("/categories")
}

pub fn update<T: Transport>(api: &ApiClient<T>, input: &UpdateCategory) -> ApiResult<Category> {
    api.request(Method::Put, &format!("/categories/{}", input.id), Some(input))
}

/// The backend recomputes persisted order from the move description.
pub fn reorder<T: Transport>(
    api: &ApiClient<T>,
    input: &ReorderCategory,
) -> ApiResult<serde_json::Value> {
    api.request(
        Method::Put,
        &format!("/categories/reorder/{}", input.id),
        Some(input),
    )
}

pub fn delete<T: Transport>(
    api: &ApiClient<T>,
    input: &DeleteCategory,
) -> ApiResult<serde_json::Value> {
    api.request::<_, ()>(Method::Delete, &format!("/categories/{}", input.id), None)
}
