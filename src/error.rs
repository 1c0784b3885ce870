use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TripError {
    /// Duty title is empty or too short
    #[error("Duty title must be longer than 3 characters")]
    InvalidDutyTitle,

    /// Duty amount is zero or negative
    #[error("Duty amount must be positive")]
    AmountNotPositive,

    /// Duty has an empty participant set
    #[error("Duty must have at least one participant")]
    NoParticipants,

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(Uuid),

    /// User is not a member of the trip
    #[error("User {0} is not a trip member")]
    NotTripMember(Uuid),

    /// Trip with given ID not found
    #[error("Trip {0} not found")]
    TripNotFound(Uuid),

    /// Day with given ID not found
    #[error("Day {0} not found")]
    DayNotFound(Uuid),

    /// Day point with given ID not found
    #[error("Day point {0} not found")]
    DayPointNotFound(Uuid),

    /// User may not perform this action
    #[error("User {0} cannot perform this action")]
    NotPermitted(Uuid),

    /// Reorder targets belong to different days
    #[error("Day points belong to different days")]
    PointsInDifferentDays,

    /// Only the first point of a day can be re-anchored
    #[error("Day point is not the start point")]
    NotStartPoint,

    /// Creditor/debtor partitions emptied at different times. This is a
    /// balance-computation bug upstream, not a valid end state.
    #[error("Settlement input is unbalanced: {0}")]
    UnbalancedSettlement(&'static str),

    /// Opening-hours input failed validation
    #[error("Malformed opening hours: {0}")]
    MalformedSchedule(String),

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// External provider call failed
    #[error("Provider error: {0}")]
    ProviderError(String),
}
