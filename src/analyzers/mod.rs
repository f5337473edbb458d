//! Trip statistics aggregation.
//!
//! Four independent aggregators read a shared [`crate::table::TripTable`],
//! clean the columns they need on their own, and summarize travel times,
//! stations, durations and users. Bad cells are dropped silently; a
//! missing column yields an empty result rather than an error.

pub mod duration;
pub mod sanitize;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;

pub use duration::duration_stats;
pub use station::station_stats;
pub use time::time_stats;
pub use user::user_stats;
