// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use budgetdesk::cache::{CacheEvent, QueryKey};
use budgetdesk::client::Method;
use budgetdesk::error::ReorderError;
use budgetdesk::tree::{CategoryBoard, DragEnd, ReorderOutcome};
use budgetdesk::{cli, commands::categories};
use common::{food_and_rent, mock, rent_and_food, session, MockTransport};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn reorder_backend() -> MockTransport {
    let m = MockTransport::new();
    m.push(Method::Get, "/categories", 200, &food_and_rent().to_string());
    m.push(Method::Get, "/categories", 200, &rent_and_food().to_string());
    m.on(
        Method::Put,
        "/categories/reorder/2",
        200,
        json!({"status": "OK"}),
    )
}

#[test]
fn drag_rent_above_food_sends_move_then_refetches() {
    let mut s = session(reorder_backend());
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    s.cache_mut().subscribe(move |e| sink.borrow_mut().push(e));

    let cats = s.categories().unwrap();
    let mut board = CategoryBoard::new(&cats);
    assert_eq!(board.ids(), &[1, 2]);

    let outcome = board
        .drop_on(&mut s, DragEnd { active: 2, over: Some(1) })
        .unwrap();

    let calls = mock(&s).calls();
    let seq: Vec<(Method, &str)> = calls.iter().map(|c| (c.method, c.path.as_str())).collect();
    assert_eq!(
        seq,
        vec![
            (Method::Get, "/categories"),
            (Method::Put, "/categories/reorder/2"),
            (Method::Get, "/categories"),
        ]
    );
    assert_eq!(
        calls[1].body,
        Some(json!({"id": 2, "oldIndex": 1, "newIndex": 0}))
    );
    match outcome {
        ReorderOutcome::Moved { request, order } => {
            assert_eq!(request.id, 2);
            assert_eq!(order, vec![2, 1]);
        }
        other => panic!("expected a move, got {other:?}"),
    }
    assert_eq!(board.ids(), &[2, 1]);
    assert!(!board.is_busy());
    assert_eq!(
        *events.borrow(),
        vec![
            CacheEvent::Updated(QueryKey::Categories),
            CacheEvent::Invalidated(QueryKey::Categories),
            CacheEvent::Updated(QueryKey::Categories),
        ]
    );
}

#[test]
fn drop_on_self_or_outside_sends_nothing() {
    let mut s = session(reorder_backend());
    let cats = s.categories().unwrap();
    let mut board = CategoryBoard::new(&cats);

    for drag in [
        DragEnd { active: 2, over: Some(2) },
        DragEnd { active: 2, over: None },
        DragEnd { active: 2, over: Some(42) },
    ] {
        assert_eq!(board.drop_on(&mut s, drag).unwrap(), ReorderOutcome::Cancelled);
    }
    assert!(mock(&s).writes().is_empty());
    assert_eq!(s.cache().fetch_count(QueryKey::Categories), 1);
}

#[test]
fn rejected_reorder_keeps_cache_and_frees_board() {
    let m = MockTransport::new().on(Method::Get, "/categories", 200, food_and_rent());
    m.push(Method::Put, "/categories/reorder/2", 500, "Database error");
    let mut s = session(m);
    let cats = s.categories().unwrap();
    let mut board = CategoryBoard::new(&cats);

    let err = board
        .drop_on(&mut s, DragEnd { active: 2, over: Some(1) })
        .unwrap_err();
    match err {
        ReorderError::Api(e) => assert_eq!(e.status(), Some(500)),
        other => panic!("unexpected {other:?}"),
    }
    assert!(!board.is_busy());
    assert_eq!(board.ids(), &[1, 2]);
    assert!(!s.cache().is_stale(QueryKey::Categories));
    assert_eq!(mock(&s).count(Method::Get, "/categories"), 1);
}

#[test]
fn move_subcommand_drives_the_board() {
    let mut s = session(reorder_backend());
    let matches =
        cli::build_cli().get_matches_from(["budgetdesk", "category", "move", "2", "--over", "1"]);
    if let Some(("category", cat_m)) = matches.subcommand() {
        categories::handle(&mut s, cat_m).unwrap();
    } else {
        panic!("no category subcommand");
    }
    let writes = mock(&s).writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(
        writes[0].body,
        Some(json!({"id": 2, "oldIndex": 1, "newIndex": 0}))
    );
}
