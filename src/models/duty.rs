use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::currency::CurrencyCode;

/// A shared cost paid by one trip member and split evenly among the
/// participants. Immutable once created apart from the soft-delete flag;
/// the per-participant share is derived at settlement time, never stored.
#[derive(Clone, Debug)]
pub struct Duty {
    pub id: Uuid,
    pub title: String,
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub payer_id: Uuid,
    pub day_point_id: Uuid,
    pub participant_ids: Vec<Uuid>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}
