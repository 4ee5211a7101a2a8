//! Pure derivation routines over the loaded user record.
//!
//! Everything here is a synchronous transformation of in-memory data: unit
//! conversion, duration arithmetic, categorical counting, and location
//! normalization. Derived values are recomputed on every call; nothing is
//! cached.

mod counts;
mod duration;
mod height;
mod location;
mod selections;
mod summary;
pub mod tables;

pub use counts::{count_by_category, CategoryCounts};
pub use duration::days_between;
pub use height::height_to_imperial;
pub use location::{build_location_summary, LocationSummary};
pub use selections::selection_values;
pub use summary::{build_user_summary, UserSummary};
