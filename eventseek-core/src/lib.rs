//! Core filter-and-rank pipeline for Eventseek.
//!
//! The crate takes an immutable snapshot of events plus a set of filter
//! criteria (free text, category, date window, focal location) and produces
//! an ordered subset: events failing any active filter are dropped, and when
//! a focal location is selected the survivors are ranked by ascending
//! great-circle distance from it.
//!
//! Every pass is pure and stateless. Hosts re-run the pipeline whenever a
//! criterion changes; there is no incremental state to invalidate.
//!
//! # Examples
//!
//! ```
//! use eventseek_core::{FilterCriteria, pipeline};
//!
//! let criteria = FilterCriteria::default().near("SF");
//! let ranked = pipeline::rank(&[], &criteria);
//!
//! assert!(ranked.is_empty());
//! assert!(ranked.focal.is_some());
//! ```

#![forbid(unsafe_code)]

pub mod category;
pub mod criteria;
pub mod distance;
pub mod event;
pub mod locations;
pub mod pipeline;
pub mod predicate;
pub mod view;

pub use category::{Category, CategoryFilter, CategoryOption};
pub use criteria::{DateWindow, FilterCriteria};
pub use distance::distance_km;
pub use event::{Event, TicketAvailability, Venue};
pub use locations::{NamedLocation, Region, ResolveError};
pub use pipeline::{RADIUS_KM, Ranked, rank, rank_at};
pub use predicate::EventPredicate;
pub use view::{EventCard, MapMarker};
