// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-progress form state and the rows that mix it with persisted data.

use crate::error::ValidationError;
use crate::models::{CreateTransaction, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A table row is either backend data or a local, unsaved draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "row", rename_all = "snake_case")]
pub enum TableRow<T, D> {
    Persisted(T),
    Draft(D),
}

impl<T, D> TableRow<T, D> {
    pub fn is_draft(&self) -> bool {
        matches!(self, TableRow::Draft(_))
    }
}

pub type TransactionRow = TableRow<Transaction, TransactionDraft>;

/// Persisted rows in backend order, with the draft (if any) appended last.
pub fn transaction_rows(
    transactions: &[Transaction],
    draft: Option<&TransactionDraft>,
) -> Vec<TransactionRow> {
    let mut rows: Vec<TransactionRow> = transactions
        .iter()
        .cloned()
        .map(TableRow::Persisted)
        .collect();
    if let Some(d) = draft {
        rows.push(TableRow::Draft(d.clone()));
    }
    rows
}

/// Raw text as typed into the add-transaction row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionDraft {
    pub account_id: Option<String>,
    pub category_id: Option<String>,
    pub payee: Option<String>,
    pub memo: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub transfer_account_id: Option<String>,
}

impl TransactionDraft {
    pub fn validate(&self) -> Result<CreateTransaction, ValidationError> {
        let account_id = required_id("account_id", self.account_id.as_deref())?;
        let amount = match non_blank(self.amount.as_deref()) {
            Some(s) => s
                .parse::<Decimal>()
                .map_err(|_| ValidationError::new("amount", format!("'{s}' is not a number")))?,
            None => return Err(ValidationError::new("amount", "is required")),
        };
        let date = match non_blank(self.date.as_deref()) {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                ValidationError::new("date", format!("'{s}' is not a YYYY-MM-DD date"))
            })?,
            None => return Err(ValidationError::new("date", "is required")),
        };

        Ok(CreateTransaction {
            account_id,
            category_id: optional_id("category_id", self.category_id.as_deref())?,
            payee: non_blank(self.payee.as_deref()).map(str::to_string),
            memo: non_blank(self.memo.as_deref()).map(str::to_string),
            amount,
            date,
            transfer_account_id: optional_id(
                "transfer_account_id",
                self.transfer_account_id.as_deref(),
            )?,
        })
    }
}

/// The backend refuses blank names, so catch them before sending.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name", "is required"));
    }
    Ok(())
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn required_id(field: &'static str, s: Option<&str>) -> Result<i64, ValidationError> {
    optional_id(field, s)?.ok_or_else(|| ValidationError::new(field, "is required"))
}

fn optional_id(field: &'static str, s: Option<&str>) -> Result<Option<i64>, ValidationError> {
    non_blank(s)
        .map(|v| {
            v.parse::<i64>()
                .map_err(|_| ValidationError::new(field, format!("'{v}' is not an id")))
        })
        .transpose()
}
