// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::Transport;
use crate::session::Session;
use crate::summary::{able_to_assign, total_balance, total_budgeted};
use crate::utils::{fmt_money, fmt_opt_money, pretty_table};
use anyhow::{Context, Result};

pub fn handle<T: Transport>(session: &mut Session<T>) -> Result<()> {
    let accounts = session.accounts().context("Fetch accounts")?;
    let categories = session.categories().context("Fetch categories")?;

    let mut rows: Vec<Vec<String>> = accounts
        .iter()
        .map(|a| vec![a.name.clone(), fmt_opt_money(a.balance.as_ref())])
        .collect();
    rows.push(vec!["Total balance".into(), fmt_money(&total_balance(&accounts))]);
    rows.push(vec!["Budgeted".into(), fmt_money(&total_budgeted(&categories))]);
    rows.push(vec![
        "Able to assign".into(),
        fmt_money(&able_to_assign(&accounts, &categories)),
    ]);
    println!("{}", pretty_table(&["", "Amount"], rows));
    Ok(())
}
