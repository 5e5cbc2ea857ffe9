// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display-time sums over already-fetched data. Nothing here is stored.

use crate::models::{Account, Category};
use rust_decimal::Decimal;

/// How a parent row's amount is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountMode {
    /// The node's own stored scalar.
    Stored,
    /// Stored scalar plus the rolled-up amounts of all descendants.
    #[default]
    Rollup,
}

pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts
        .iter()
        .map(|a| a.balance.unwrap_or(Decimal::ZERO))
        .sum()
}

/// Sum of stored amounts on root categories. Children are not added in.
pub fn total_budgeted(categories: &[Category]) -> Decimal {
    categories
        .iter()
        .filter(|c| c.is_root())
        .map(|c| c.amount.unwrap_or(Decimal::ZERO))
        .sum()
}

/// Account balances minus root-category budgeted amounts; unknowns count as zero.
pub fn able_to_assign(accounts: &[Account], categories: &[Category]) -> Decimal {
    total_balance(accounts) - total_budgeted(categories)
}

pub fn display_amount(category: &Category, mode: AmountMode) -> Decimal {
    let own = category.amount.unwrap_or(Decimal::ZERO);
    match mode {
        AmountMode::Stored => own,
        AmountMode::Rollup => {
            own + category
                .categories
                .iter()
                .map(|c| display_amount(c, AmountMode::Rollup))
                .sum::<Decimal>()
        }
    }
}
