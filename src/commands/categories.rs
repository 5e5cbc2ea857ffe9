// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::Transport;
use crate::models::{Category, CreateCategory, DeleteCategory, UpdateCategory};
use crate::session::Session;
use crate::summary::{able_to_assign, display_amount, AmountMode};
use crate::tree::{flatten, CategoryBoard, DragEnd, ReorderOutcome};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub fn handle<T: Transport>(session: &mut Session<T>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let input = CreateCategory {
                name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
                parent_id: sub.get_one::<i64>("parent").copied(),
            };
            let cat = session
                .create_category(&input)
                .with_context(|| format!("Create category '{}'", input.name))?;
            println!("Added category '{}' (id {})", cat.name, cat.id);
        }
        Some(("list", sub)) => list(session, sub)?,
        Some(("update", sub)) => {
            let input = update_input(sub)?;
            let cat = session
                .update_category(&input)
                .with_context(|| format!("Update category {}", input.id))?;
            println!("Updated category '{}' (id {})", cat.name, cat.id);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").context("category id is required")?;
            session
                .delete_category(&DeleteCategory { id })
                .with_context(|| format!("Delete category {}", id))?;
            println!("Removed category {}", id);
        }
        Some(("move", sub)) => move_category(session, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn update_input(sub: &clap::ArgMatches) -> Result<UpdateCategory> {
    Ok(UpdateCategory {
        id: *sub.get_one::<i64>("id").context("category id is required")?,
        name: sub.get_one::<String>("name").cloned(),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        parent_id: sub.get_one::<i64>("parent").copied(),
    })
}

fn list<T: Transport>(session: &mut Session<T>, sub: &clap::ArgMatches) -> Result<()> {
    let categories = session.categories().context("Fetch categories")?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &categories)? {
        return Ok(());
    }
    let accounts = session.accounts().context("Fetch accounts")?;
    let mode = if sub.get_flag("stored") {
        AmountMode::Stored
    } else {
        AmountMode::Rollup
    };
    println!(
        "Able to assign: {}",
        fmt_money(&able_to_assign(&accounts, &categories))
    );
    println!("{}", render(&categories, mode, !sub.get_flag("collapsed")));
    Ok(())
}

pub fn render(categories: &[Category], mode: AmountMode, expanded: bool) -> comfy_table::Table {
    let rows = flatten(categories, expanded)
        .into_iter()
        .map(|r| {
            let marker = if r.depth == 0 && !r.category.categories.is_empty() {
                if expanded { "▾ " } else { "▸ " }
            } else {
                ""
            };
            vec![
                r.category.id.to_string(),
                format!("{}{}{}", "  ".repeat(r.depth), marker, r.category.name),
                fmt_money(&display_amount(r.category, mode)),
            ]
        })
        .collect();
    pretty_table(&["Id", "Name", "Amount"], rows)
}

fn move_category<T: Transport>(session: &mut Session<T>, sub: &clap::ArgMatches) -> Result<()> {
    let active = *sub.get_one::<i64>("id").context("category id is required")?;
    let over = sub.get_one::<i64>("over").copied();

    let categories = session.categories().context("Fetch categories")?;
    let mut board = CategoryBoard::new(&categories);
    match board.drop_on(session, DragEnd { active, over })? {
        ReorderOutcome::Cancelled => println!("Nothing to move"),
        ReorderOutcome::Moved { request, order } => {
            println!(
                "Moved category {} from position {} to {}",
                request.id,
                request.old_index.unwrap_or_default(),
                request.new_index.unwrap_or_default()
            );
            let order: Vec<String> = order.iter().map(|id| id.to_string()).collect();
            println!("Order: {}", order.join(", "));
        }
    }
    Ok(())
}
