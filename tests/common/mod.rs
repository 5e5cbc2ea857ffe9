// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use budgetdesk::client::{ApiClient, Method, RawResponse, Transport};
use budgetdesk::error::ApiResult;
use budgetdesk::session::Session;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

pub const BASE: &str = "http://budget.test";

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Canned responses per route. The last response on a route repeats.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<(Method, String), VecDeque<RawResponse>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.push(method, path, status, &body.to_string());
        self
    }

    pub fn push(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(RawResponse {
                status,
                body: body.to_string(),
            });
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method != Method::Get)
            .collect()
    }
}

impl Transport for MockTransport {
    fn send(&self, method: Method, url: &str, body: Option<String>) -> ApiResult<RawResponse> {
        let path = url.strip_prefix(BASE).unwrap_or(url).to_string();
        self.calls.borrow_mut().push(Call {
            method,
            path: path.clone(),
            body: body.map(|b| serde_json::from_str(&b).unwrap()),
        });
        let mut routes = self.routes.borrow_mut();
        let resp = match routes.get_mut(&(method, path)) {
            Some(q) if q.len() > 1 => q.pop_front().unwrap(),
            Some(q) => q.front().cloned().unwrap(),
            None => RawResponse {
                status: 404,
                body: "Not Found".into(),
            },
        };
        Ok(resp)
    }
}

pub fn session(mock: MockTransport) -> Session<MockTransport> {
    Session::new(ApiClient::with_transport(BASE, mock))
}

pub fn mock(session: &Session<MockTransport>) -> &MockTransport {
    session.api().transport()
}

pub fn food_and_rent() -> Value {
    json!([
        {"id": 1, "name": "Food", "parent_id": null, "amount": 100, "categories": []},
        {"id": 2, "name": "Rent", "parent_id": null, "amount": 900, "categories": []}
    ])
}

pub fn rent_and_food() -> Value {
    json!([
        {"id": 2, "name": "Rent", "parent_id": null, "amount": 900, "categories": []},
        {"id": 1, "name": "Food", "parent_id": null, "amount": 100, "categories": []}
    ])
}

pub fn checking(balance: Value) -> Value {
    json!([{"id": 1, "name": "Checking", "balance": balance}])
}

pub fn transaction(id: i64, account_id: i64, amount: f64, date: &str) -> Value {
    json!({
        "id": id,
        "account_id": account_id,
        "category_id": null,
        "payee": "Corner Shop",
        "memo": null,
        "amount": amount,
        "date": date,
        "transfer_account_id": null,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z",
        "is_deleted": 0
    })
}
