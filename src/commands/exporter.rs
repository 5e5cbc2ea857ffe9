// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::Transport;
use crate::commands::transactions::{select, Labels};
use crate::session::Session;
use anyhow::{bail, Context, Result};
use serde_json::json;

pub fn handle<T: Transport>(session: &mut Session<T>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(session, sub),
        _ => Ok(()),
    }
}

fn export_transactions<T: Transport>(
    session: &mut Session<T>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub.get_one::<String>("out").context("--out is required")?;

    let txs = select(session.transactions().context("Fetch transactions")?, None, None);
    let accounts = session.accounts().context("Fetch accounts")?;
    let categories = session.categories().context("Fetch categories")?;
    let labels = Labels::new(&accounts, &categories);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id", "date", "account", "payee", "amount", "category", "memo", "transfer",
            ])?;
            for t in &txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    labels.account(t.account_id),
                    t.payee.clone().unwrap_or_default(),
                    t.amount.to_string(),
                    labels.category(t.category_id),
                    t.memo.clone().unwrap_or_default(),
                    t.transfer_account_id
                        .map(|a| labels.account(a))
                        .unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date.to_string(),
                        "account": labels.account(t.account_id),
                        "payee": t.payee,
                        "amount": t.amount.to_string(),
                        "category": t.category_id.map(|c| labels.category(Some(c))),
                        "memo": t.memo,
                        "transfer": t.transfer_account_id.map(|a| labels.account(a)),
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
