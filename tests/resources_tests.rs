// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use budgetdesk::api::{accounts, categories, transactions};
use budgetdesk::client::{ApiClient, Method};
use budgetdesk::models::*;
use chrono::NaiveDate;
use common::{transaction, MockTransport, BASE};
use rust_decimal::Decimal;
use serde_json::json;

fn client() -> ApiClient<MockTransport> {
    let m = MockTransport::new()
        .on(Method::Post, "/accounts", 200, json!({"id": 1, "name": "Cash", "balance": null}))
        .on(Method::Put, "/accounts/1", 200, json!({"id": 1, "name": "Cash", "balance": 20}))
        .on(
            Method::Put,
            "/categories/1",
            200,
            json!({"id": 1, "name": "x", "parent_id": null, "categories": []}),
        )
        .on(Method::Put, "/categories/reorder/3", 200, json!({"status": "OK"}))
        .on(Method::Post, "/transactions", 200, transaction(4, 1, 12.5, "2025-05-06"))
        .on(Method::Put, "/transactions/4", 200, transaction(4, 1, 12.5, "2025-05-06"))
        .on(Method::Get, "/transactions", 200, json!([transaction(4, 1, 12.5, "2025-05-06")]));
    ApiClient::with_transport(BASE, m)
}

fn last_body(api: &ApiClient<MockTransport>) -> serde_json::Value {
    api.transport().calls().last().unwrap().body.clone().unwrap()
}

#[test]
fn category_update_sends_only_supplied_fields() {
    let api = client();
    categories::update(
        &api,
        &UpdateCategory {
            id: 1,
            name: Some("x".into()),
            ..Default::default()
        },
    )
    .unwrap();
    let body = last_body(&api);
    assert_eq!(body, json!({"id": 1, "name": "x"}));
    assert!(body.get("amount").is_none());
    assert!(body.get("parent_id").is_none());
}

#[test]
fn amounts_go_out_as_json_numbers() {
    let api = client();
    accounts::update(
        &api,
        &UpdateAccount {
            id: 1,
            amount: Some(Decimal::new(2050, 2)),
            ..Default::default()
        },
    )
    .unwrap();
    let body = last_body(&api);
    assert_eq!(body["amount"].as_f64(), Some(20.5));
    assert!(body.get("name").is_none());
}

#[test]
fn account_create_omits_missing_parent() {
    let api = client();
    let acct = accounts::create(
        &api,
        &CreateAccount {
            name: "Cash".into(),
            parent_id: None,
        },
    )
    .unwrap();
    assert_eq!(acct.balance, None);
    assert_eq!(last_body(&api), json!({"name": "Cash"}));
}

#[test]
fn reorder_targets_the_moved_id() {
    let api = client();
    categories::reorder(
        &api,
        &ReorderCategory {
            id: 3,
            old_index: Some(0),
            new_index: Some(2),
        },
    )
    .unwrap();
    let call = api.transport().calls().pop().unwrap();
    assert_eq!(call.method, Method::Put);
    assert_eq!(call.path, "/categories/reorder/3");
    assert_eq!(call.body, Some(json!({"id": 3, "oldIndex": 0, "newIndex": 2})));
}

#[test]
fn transaction_create_and_update_shapes() {
    let api = client();
    let created = transactions::create(
        &api,
        &CreateTransaction {
            account_id: 1,
            category_id: Some(7),
            payee: None,
            memo: Some("weekly".into()),
            amount: Decimal::new(125, 1),
            date: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            transfer_account_id: None,
        },
    )
    .unwrap();
    assert_eq!(created.id, 4);
    let body = last_body(&api);
    assert_eq!(body["date"], json!("2025-05-06"));
    assert_eq!(body["category_id"], json!(7));
    assert!(body.get("payee").is_none());
    assert!(body.get("transfer_account_id").is_none());

    transactions::update(
        &api,
        &UpdateTransaction {
            id: 4,
            memo: Some("monthly".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(last_body(&api), json!({"id": 4, "memo": "monthly"}));
}

#[test]
fn list_uses_get_without_body() {
    let api = client();
    let txs = transactions::list(&api).unwrap();
    assert_eq!(txs.len(), 1);
    assert!(!txs[0].is_deleted);
    let call = api.transport().calls().pop().unwrap();
    assert_eq!((call.method, call.path.as_str(), call.body), (Method::Get, "/transactions", None));
}
