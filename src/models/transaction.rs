use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::currency::CurrencyCode;

/// A concrete settlement instruction: `source` pays `target`. Amounts are
/// positive and rounded to the currency's minor unit.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Transaction {
    pub source_user_id: Uuid,
    pub target_user_id: Uuid,
    pub amount: Decimal,
    pub currency: CurrencyCode,
}
