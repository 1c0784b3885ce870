use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::SETTLE_SCALE;
use crate::error::TripError;
use crate::models::{CurrencyCode, Transaction};

/// One user's net position in a single currency. Positive: is owed money.
#[derive(Clone, Debug)]
pub struct AccountBalance {
    pub user: Uuid,
    pub amount: Decimal,
}

/// Greedy matching of one currency's balances into direct payments. Both
/// partitions are sorted ascending by signed amount and consumed from the
/// end, so each round pairs the largest outstanding credit with the
/// current debtor. Emits at most min(creditors, debtors) transactions.
///
/// A zero-sum input exhausts both sides simultaneously; anything else is
/// an upstream balance-computation bug and comes back as
/// `UnbalancedSettlement`.
pub fn direct_transactions(
    accounts: Vec<AccountBalance>,
    currency: CurrencyCode,
) -> Result<Vec<Transaction>, TripError> {
    if accounts.is_empty() {
        return Ok(Vec::new());
    }

    let (mut creditors, mut debtors): (Vec<AccountBalance>, Vec<AccountBalance>) = accounts
        .into_iter()
        .partition(|account| account.amount > Decimal::ZERO);

    creditors.sort_by(|a, b| a.amount.cmp(&b.amount).then(a.user.cmp(&b.user)));
    debtors.sort_by(|a, b| a.amount.cmp(&b.amount).then(a.user.cmp(&b.user)));

    let mut transactions = Vec::new();

    let Some(mut src) = debtors.pop() else {
        return Err(TripError::UnbalancedSettlement("credit without any debt"));
    };
    let Some(mut trg) = creditors.pop() else {
        return Err(TripError::UnbalancedSettlement("debt without any credit"));
    };

    loop {
        // src.amount is negative; dif is what remains after this pairing.
        let dif = src.amount + trg.amount;
        if dif.round_dp(SETTLE_SCALE).is_zero() {
            transactions.push(Transaction {
                source_user_id: src.user,
                target_user_id: trg.user,
                amount: (-src.amount).round_dp(SETTLE_SCALE),
                currency,
            });
            match (debtors.pop(), creditors.pop()) {
                (Some(next_src), Some(next_trg)) => {
                    src = next_src;
                    trg = next_trg;
                }
                (None, None) => break,
                _ => {
                    return Err(TripError::UnbalancedSettlement(
                        "one partition exhausted before the other",
                    ));
                }
            }
        } else if dif > Decimal::ZERO {
            transactions.push(Transaction {
                source_user_id: src.user,
                target_user_id: trg.user,
                amount: (-src.amount).round_dp(SETTLE_SCALE),
                currency,
            });
            trg.amount = dif;
            src = debtors.pop().ok_or(TripError::UnbalancedSettlement(
                "debtors exhausted with credit remaining",
            ))?;
        } else {
            transactions.push(Transaction {
                source_user_id: src.user,
                target_user_id: trg.user,
                amount: trg.amount.round_dp(SETTLE_SCALE),
                currency,
            });
            src.amount = dif;
            trg = creditors.pop().ok_or(TripError::UnbalancedSettlement(
                "creditors exhausted with debt remaining",
            ))?;
        }
    }

    Ok(transactions)
}
