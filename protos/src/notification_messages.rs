//! Events pushed to connected clients by the notification layer.

/// Websocket event names.
pub mod events {
    /// Sent to a diarist when the customer cancels one of their schedules.
    pub const SCHEDULE_CANCELED: &str = "schedule:canceled";
}
