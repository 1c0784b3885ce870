use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::constants::{SETTLE_SCALE, SHARE_SCALE};
use crate::models::{CurrencyCode, Duty};

/// One participant's derived share owed to the payer. A payer who is also
/// a participant owes a share to themselves; such self-edges net to zero
/// through the ordinary pair math and never reach the matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Obligation {
    pub debtor: Uuid,
    pub creditor: Uuid,
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

/// Netted obligation between two users in one currency, normalized so the
/// amount is non-negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetPair {
    pub debtor: Uuid,
    pub creditor: Uuid,
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

/// Unordered user pair + currency. Obligations typed in either direction
/// collapse to the same bucket.
type PairKey = (Uuid, Uuid, CurrencyCode);

fn pair_key(a: Uuid, b: Uuid, currency: CurrencyCode) -> PairKey {
    if a <= b { (a, b, currency) } else { (b, a, currency) }
}

/// Expands a duty into per-participant obligations. The share is taken at
/// a higher scale than the currency's minor unit so that rounding error
/// does not compound across many small splits.
pub fn obligations_for(duty: &Duty) -> Vec<Obligation> {
    let share =
        (duty.amount / Decimal::from(duty.participant_ids.len())).round_dp(SHARE_SCALE);
    duty.participant_ids
        .iter()
        .map(|&participant| Obligation {
            debtor: participant,
            creditor: duty.payer_id,
            amount: share,
            currency: duty.currency,
        })
        .collect()
}

/// Nets all obligations sharing an unordered pair + currency into one
/// signed balance per pair. While accumulating, an obligation whose debtor
/// differs from the bucket's recorded debtor contributes negatively, so
/// the bucket converges to one signed net regardless of insertion order.
pub fn net_pair_balances(obligations: Vec<Obligation>) -> Vec<NetPair> {
    let mut buckets: HashMap<PairKey, NetPair> = HashMap::new();

    for obligation in obligations {
        let key = pair_key(obligation.debtor, obligation.creditor, obligation.currency);
        match buckets.get_mut(&key) {
            Some(net) => {
                if obligation.debtor == net.debtor {
                    net.amount += obligation.amount;
                } else {
                    net.amount -= obligation.amount;
                }
            }
            None => {
                buckets.insert(
                    key,
                    NetPair {
                        debtor: obligation.debtor,
                        creditor: obligation.creditor,
                        amount: obligation.amount,
                        currency: obligation.currency,
                    },
                );
            }
        }
    }

    buckets
        .into_values()
        .map(|net| {
            if net.amount < Decimal::ZERO {
                NetPair {
                    debtor: net.creditor,
                    creditor: net.debtor,
                    amount: -net.amount,
                    currency: net.currency,
                }
            } else {
                net
            }
        })
        .collect()
}

/// Expands net pairs into per-user signed positions and sums them: credit
/// positive, debit negative. Balances that round to zero at the currency's
/// minor unit are already settled and are dropped.
pub fn account_balances(pairs: Vec<NetPair>) -> HashMap<(Uuid, CurrencyCode), Decimal> {
    let mut balances: HashMap<(Uuid, CurrencyCode), Decimal> = HashMap::new();

    for pair in pairs {
        *balances
            .entry((pair.creditor, pair.currency))
            .or_insert(Decimal::ZERO) += pair.amount;
        *balances
            .entry((pair.debtor, pair.currency))
            .or_insert(Decimal::ZERO) -= pair.amount;
    }

    balances.retain(|_, amount| !amount.round_dp(SETTLE_SCALE).is_zero());
    balances
}
