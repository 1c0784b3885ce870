use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::constants::MIN_DUTY_TITLE_LEN;
use crate::error::TripError;
use crate::models::{CurrencyCode, Day, DayPoint, Duty, Transaction, Trip};
use crate::settlement::compute_settlement;
use crate::storage::Storage;

#[derive(Clone, Debug)]
pub struct NewDuty {
    pub day_point_id: Uuid,
    pub title: String,
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub participant_ids: Vec<Uuid>,
}

pub struct DutyService<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> DutyService<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        DutyService { storage }
    }

    /// Records a shared cost. The author is the payer; the amount is split
    /// evenly among the participants at settlement time.
    pub async fn create_duty(&self, new_duty: NewDuty, author_id: Uuid) -> Result<Duty, TripError> {
        if new_duty.title.trim().len() < MIN_DUTY_TITLE_LEN {
            return Err(TripError::InvalidDutyTitle);
        }
        if new_duty.amount <= Decimal::ZERO {
            return Err(TripError::AmountNotPositive);
        }
        if new_duty.participant_ids.is_empty() {
            return Err(TripError::NoParticipants);
        }

        let (_, _, trip) = self.resolve_trip(new_duty.day_point_id).await?;
        if !trip.is_member(author_id) {
            warn!("user {} is not a member of trip {}", author_id, trip.id);
            return Err(TripError::NotTripMember(author_id));
        }
        for &participant in &new_duty.participant_ids {
            if self.storage.get_user(participant).await?.is_none() {
                return Err(TripError::UserNotFound(participant));
            }
            if !trip.is_member(participant) {
                return Err(TripError::NotTripMember(participant));
            }
        }

        let duty = Duty {
            id: Uuid::new_v4(),
            title: new_duty.title,
            amount: new_duty.amount,
            currency: new_duty.currency,
            payer_id: author_id,
            day_point_id: new_duty.day_point_id,
            participant_ids: new_duty.participant_ids,
            deleted: false,
            created_at: Utc::now(),
        };
        self.storage.save_duty(duty.clone()).await?;
        info!(
            "duty {} created: {} {} split {} ways",
            duty.id,
            duty.amount,
            duty.currency,
            duty.participant_ids.len()
        );
        Ok(duty)
    }

    /// Soft delete. Only the duty's payer or the trip author may delete;
    /// deleting a duty that no longer exists is a no-op.
    pub async fn delete_duty(&self, duty_id: Uuid, user_id: Uuid) -> Result<Uuid, TripError> {
        let Some(mut duty) = self.storage.get_duty(duty_id).await? else {
            return Ok(duty_id);
        };
        let (_, _, trip) = self.resolve_trip(duty.day_point_id).await?;
        if user_id != duty.payer_id && user_id != trip.author_id {
            warn!("user {} may not delete duty {}", user_id, duty_id);
            return Err(TripError::NotPermitted(user_id));
        }
        duty.deleted = true;
        self.storage.save_duty(duty).await?;
        Ok(duty_id)
    }

    /// Collects the trip's active duties (on active day points) and nets
    /// them into direct payment instructions, per currency.
    pub async fn duty_calculations(&self, trip_id: Uuid) -> Result<Vec<Transaction>, TripError> {
        if self.storage.get_trip(trip_id).await?.is_none() {
            return Err(TripError::TripNotFound(trip_id));
        }

        let mut duties = Vec::new();
        for day in self.storage.list_days(trip_id).await? {
            for point in self.storage.list_day_points(day.id).await? {
                if point.deleted {
                    continue;
                }
                duties.extend(
                    self.storage
                        .list_duties(point.id)
                        .await?
                        .into_iter()
                        .filter(|duty| !duty.deleted),
                );
            }
        }
        debug!("settling {} duties for trip {}", duties.len(), trip_id);
        compute_settlement(&duties)
    }

    async fn resolve_trip(&self, day_point_id: Uuid) -> Result<(DayPoint, Day, Trip), TripError> {
        let point = self
            .storage
            .get_day_point(day_point_id)
            .await?
            .ok_or(TripError::DayPointNotFound(day_point_id))?;
        let day = self
            .storage
            .get_day(point.day_id)
            .await?
            .ok_or(TripError::DayNotFound(point.day_id))?;
        let trip = self
            .storage
            .get_trip(day.trip_id)
            .await?
            .ok_or(TripError::TripNotFound(day.trip_id))?;
        Ok((point, day, trip))
    }
}
