// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::Transport;
use crate::draft::{transaction_rows, TableRow, TransactionDraft, TransactionRow};
use crate::models::{Account, Category, Transaction, UpdateTransaction};
use crate::session::Session;
use crate::tree::flatten;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use std::collections::HashMap;

pub fn handle<T: Transport>(session: &mut Session<T>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("update", sub)) => {
            let input = update_input(sub)?;
            let tx = session
                .update_transaction(&input)
                .with_context(|| format!("Update transaction {}", input.id))?;
            println!("Updated transaction {} ({})", tx.id, fmt_money(&tx.amount));
        }
        _ => {}
    }
    Ok(())
}

pub fn draft_from(sub: &clap::ArgMatches) -> TransactionDraft {
    let text = |name: &str| sub.get_one::<String>(name).cloned();
    TransactionDraft {
        account_id: text("account"),
        category_id: text("category"),
        payee: text("payee"),
        memo: text("memo"),
        amount: text("amount"),
        date: text("date"),
        transfer_account_id: text("transfer"),
    }
}

fn add<T: Transport>(session: &mut Session<T>, sub: &clap::ArgMatches) -> Result<()> {
    let draft = draft_from(sub);
    let input = draft.validate()?;

    if sub.get_flag("dry-run") {
        let existing = session.transactions().context("Fetch transactions")?;
        let labels = Labels::fetch(session)?;
        println!("{}", render(&transaction_rows(&existing, Some(&draft)), &labels));
        println!("Draft is valid; not saved.");
        return Ok(());
    }

    let tx = session
        .create_transaction(&input)
        .context("Create transaction")?;
    println!(
        "Recorded {} on {} (account {})",
        fmt_money(&tx.amount),
        tx.date,
        tx.account_id
    );
    Ok(())
}

pub fn update_input(sub: &clap::ArgMatches) -> Result<UpdateTransaction> {
    Ok(UpdateTransaction {
        id: *sub.get_one::<i64>("id").context("transaction id is required")?,
        account_id: sub.get_one::<i64>("account").copied(),
        category_id: sub.get_one::<i64>("category").copied(),
        payee: sub.get_one::<String>("payee").cloned(),
        memo: sub.get_one::<String>("memo").cloned(),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
        transfer_account_id: sub.get_one::<i64>("transfer").copied(),
    })
}

/// Live rows after the optional account filter and limit.
pub fn select(
    transactions: Vec<Transaction>,
    account: Option<i64>,
    limit: Option<usize>,
) -> Vec<Transaction> {
    let rows = transactions
        .into_iter()
        .filter(|t| !t.is_deleted)
        .filter(|t| account.is_none_or(|a| t.account_id == a));
    match limit {
        Some(n) => rows.take(n).collect(),
        None => rows.collect(),
    }
}

fn list<T: Transport>(session: &mut Session<T>, sub: &clap::ArgMatches) -> Result<()> {
    let all = session.transactions().context("Fetch transactions")?;
    let data = select(
        all,
        sub.get_one::<i64>("account").copied(),
        sub.get_one::<usize>("limit").copied(),
    );
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let labels = Labels::fetch(session)?;
        println!("{}", render(&transaction_rows(&data, None), &labels));
    }
    Ok(())
}

/// Id to display-name lookups for the account and category columns.
#[derive(Debug, Default)]
pub struct Labels {
    accounts: HashMap<i64, String>,
    categories: HashMap<i64, String>,
}

impl Labels {
    pub fn new(accounts: &[Account], categories: &[Category]) -> Self {
        Self {
            accounts: accounts.iter().map(|a| (a.id, a.name.clone())).collect(),
            categories: flatten(categories, true)
                .into_iter()
                .map(|r| (r.category.id, r.category.name.clone()))
                .collect(),
        }
    }

    fn fetch<T: Transport>(session: &mut Session<T>) -> Result<Self> {
        let accounts = session.accounts().context("Fetch accounts")?;
        let categories = session.categories().context("Fetch categories")?;
        Ok(Self::new(&accounts, &categories))
    }

    pub fn account(&self, id: i64) -> String {
        self.accounts
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("#{id}"))
    }

    pub fn category(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => self
                .categories
                .get(&id)
                .cloned()
                .unwrap_or_else(|| format!("#{id}")),
            None => String::new(),
        }
    }
}

pub fn row_cells(row: &TransactionRow, labels: &Labels) -> Vec<String> {
    match row {
        TableRow::Persisted(t) => {
            let category = match t.transfer_account_id {
                Some(to) => format!("Transfer: {}", labels.account(to)),
                None => labels.category(t.category_id),
            };
            vec![
                labels.account(t.account_id),
                t.date.to_string(),
                t.payee.clone().unwrap_or_default(),
                category,
                t.memo.clone().unwrap_or_default(),
                fmt_money(&t.amount),
            ]
        }
        TableRow::Draft(d) => {
            let raw = |v: &Option<String>| v.clone().unwrap_or_default();
            vec![
                format!("+ {}", raw(&d.account_id)),
                raw(&d.date),
                raw(&d.payee),
                raw(&d.category_id),
                raw(&d.memo),
                raw(&d.amount),
            ]
        }
    }
}

fn render(rows: &[TransactionRow], labels: &Labels) -> comfy_table::Table {
    pretty_table(
        &["Account", "Date", "Payee", "Category", "Memo", "Amount"],
        rows.iter().map(|r| row_cells(r, labels)).collect(),
    )
}
