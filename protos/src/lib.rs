//! Shared wire messages exchanged between marinetes services.
//!
//! Each module mirrors one protobuf package. Messages derive `prost::Message` for the
//! binary encoding used on gRPC channels and serde for the JSON form published to
//! message topics and websocket frames. The crate root re-exports everything so
//! callers only need `protos::MessageName`.

pub mod notification_messages;
pub mod payment_messages;

pub use notification_messages::*;
pub use payment_messages::*;
