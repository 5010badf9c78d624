//! Messages consumed by the payment service.

use serde::{Deserialize, Serialize};

/// Kafka topics owned by the payment service.
pub mod topics {
    /// Published after a user cancels a schedule so the payment service can refund it.
    pub const SCHEDULE_CANCELED: &str = "payment.schedule-canceled";
}

/// Payload published on [`topics::SCHEDULE_CANCELED`].
#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCanceledMessage {
    #[prost(string, tag = "1")]
    pub schedule_id: String,
}
