//! Facade crate for the Eventseek discovery engine.
//!
//! This crate re-exports the core domain types and the filter-and-rank
//! pipeline so downstream hosts depend on a single crate.

#![forbid(unsafe_code)]

pub use eventseek_core::{
    Category, CategoryFilter, DateWindow, Event, EventCard, FilterCriteria, MapMarker, Ranked,
    ResolveError, TicketAvailability, Venue, distance_km, locations, pipeline, predicate, view,
};
