//! HTTP request handlers.
//!
//! Handlers authenticate through the `Authenticated<P>` extractor, convert DTOs into
//! server-side parameters, call into the service layer and convert the result back to
//! DTOs.

pub mod address;
pub mod backoffice;
pub mod diarist;
pub mod schedule;
pub mod websocket;

#[cfg(test)]
mod test;
