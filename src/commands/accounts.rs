// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::Transport;
use crate::models::{Account, CreateAccount, UpdateAccount};
use crate::session::Session;
use crate::utils::{fmt_opt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub fn handle<T: Transport>(session: &mut Session<T>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let input = CreateAccount {
                name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
                parent_id: sub.get_one::<i64>("parent").copied(),
            };
            let acct = session
                .create_account(&input)
                .with_context(|| format!("Create account '{}'", input.name))?;
            println!("Added account '{}' (id {})", acct.name, acct.id);
        }
        Some(("list", sub)) => {
            let accounts = session.accounts().context("Fetch accounts")?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &accounts)? {
                println!("{}", render(&accounts));
            }
        }
        Some(("update", sub)) => {
            let input = update_input(sub)?;
            let acct = session
                .update_account(&input)
                .with_context(|| format!("Update account {}", input.id))?;
            println!("Updated account '{}' (id {})", acct.name, acct.id);
        }
        _ => {}
    }
    Ok(())
}

pub fn update_input(sub: &clap::ArgMatches) -> Result<UpdateAccount> {
    Ok(UpdateAccount {
        id: *sub.get_one::<i64>("id").context("account id is required")?,
        name: sub.get_one::<String>("name").cloned(),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        parent_id: sub.get_one::<i64>("parent").copied(),
    })
}

fn render(accounts: &[Account]) -> comfy_table::Table {
    let rows = accounts
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.name.clone(),
                a.parent_id.map(|p| p.to_string()).unwrap_or_default(),
                fmt_opt_money(a.balance.as_ref()),
            ]
        })
        .collect();
    pretty_table(&["Id", "Name", "Parent", "Balance"], rows)
}
