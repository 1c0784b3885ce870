pub mod aggregator;
pub mod matcher;
pub mod service;

use std::collections::BTreeMap;

use crate::error::TripError;
use crate::models::{CurrencyCode, Duty, Transaction};

use aggregator::{account_balances, net_pair_balances, obligations_for};
use matcher::AccountBalance;

/// Computes the minimal set of direct payments settling all active duties,
/// per currency. Deleted duties are skipped; currencies never net against
/// each other.
pub fn compute_settlement(duties: &[Duty]) -> Result<Vec<Transaction>, TripError> {
    let obligations = duties
        .iter()
        .filter(|duty| !duty.deleted)
        .flat_map(obligations_for)
        .collect();

    let balances = account_balances(net_pair_balances(obligations));

    let mut by_currency: BTreeMap<CurrencyCode, Vec<AccountBalance>> = BTreeMap::new();
    for ((user, currency), amount) in balances {
        by_currency
            .entry(currency)
            .or_default()
            .push(AccountBalance { user, amount });
    }

    let mut transactions = Vec::new();
    for (currency, accounts) in by_currency {
        transactions.extend(matcher::direct_transactions(accounts, currency)?);
    }
    Ok(transactions)
}
