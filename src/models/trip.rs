use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

/// Membership is a plain id set; day points and duties refer back to their
/// owners by id rather than through a live object graph.
#[derive(Clone, Debug)]
pub struct Trip {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub member_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.author_id == user_id || self.member_ids.contains(&user_id)
    }
}

#[derive(Clone, Debug)]
pub struct Day {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub date: NaiveDateTime,
}
