//! Value Objects - Immutable, identity-less domain primitives

mod beach_position;
mod geo_location;
mod user_id;

pub use beach_position::BeachPosition;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use user_id::UserId;
