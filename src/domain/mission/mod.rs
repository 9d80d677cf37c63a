//! Mission domain module.
//!
//! Plain data aggregate administered through CRUD handlers. The only
//! policy decision lives in [`MissionDeletePolicy`].

mod aggregate;
mod delete_policy;
mod errors;

pub use aggregate::{
    Mission, MissionDetails, MAX_LOCATION_LENGTH, MAX_SHORT_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
};
pub use delete_policy::MissionDeletePolicy;
pub use errors::MissionError;
