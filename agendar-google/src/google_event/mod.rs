//! Conversions between core event types and the Google wire types.

mod from_google;
mod to_google;

pub use from_google::FromGoogle;
pub use to_google::{ToGoogle, apply_changes};
