//! The filter-and-rank pipeline.
//!
//! One pass takes an immutable snapshot of the event collection plus the
//! current [`FilterCriteria`] and produces a fresh ordered subset. Passes are
//! pure and stateless: hosts re-run the pipeline from the full collection on
//! every criteria change instead of patching previous output, so the most
//! recently completed pass always corresponds to a single criteria snapshot.
//!
//! Resolution failures never abort a pass. An unknown focal location
//! degrades to "radius inactive" with a warning, and the remaining
//! predicates still apply.

use chrono::{Local, NaiveDate};
use geo::Coord;

use crate::{Event, EventPredicate, FilterCriteria, distance_km, locations, predicate};

/// Radius applied whenever a focal location is active, in kilometres.
pub const RADIUS_KM: f64 = 50.0;

/// Output of one filtering pass.
///
/// Ordering is significant only when `focal` is set: events are sorted by
/// ascending distance from it, ties keeping their source order. `focal` is
/// the same coordinate the radius filter used, so a map presentation centred
/// on it can never drift from the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    /// Surviving events, ordered as described above.
    pub events: Vec<Event>,
    /// Focal coordinate of this pass, when one was active.
    pub focal: Option<Coord<f64>>,
}

impl Ranked {
    /// Number of surviving events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event survived. An empty result is a normal outcome, not
    /// an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Run one pass against the current local date.
///
/// Thin wrapper over [`rank_at`]; "today" is the start of the local day at
/// the moment of evaluation.
#[must_use]
pub fn rank(events: &[Event], criteria: &FilterCriteria) -> Ranked {
    rank_at(events, criteria, Local::now().date_naive())
}

/// Run one pass with an explicit evaluation date.
#[must_use]
pub fn rank_at(events: &[Event], criteria: &FilterCriteria, today: NaiveDate) -> Ranked {
    let focal = criteria.focal_location.as_deref().and_then(resolve_focal);

    let mut predicates: Vec<EventPredicate> = vec![
        predicate::text(&criteria.search_text),
        predicate::category(criteria.category),
        predicate::date_window(criteria.date_window, today),
    ];
    if let Some(centre) = focal {
        predicates.push(predicate::within_radius(centre, RADIUS_KM));
    }

    let retained: Vec<Event> = events
        .iter()
        .filter(|event| predicates.iter().all(|test| test(event)))
        .cloned()
        .collect();

    let ordered = match focal {
        Some(centre) => sort_by_distance(retained, centre),
        None => retained,
    };

    Ranked {
        events: ordered,
        focal,
    }
}

/// A focal id missing from the reference table degrades the pass to "radius
/// inactive" instead of failing it.
fn resolve_focal(id: &str) -> Option<Coord<f64>> {
    match locations::resolve(id) {
        Ok(centre) => Some(centre),
        Err(err) => {
            log::warn!("skipping radius filter: {err}");
            None
        }
    }
}

fn sort_by_distance(events: Vec<Event>, centre: Coord<f64>) -> Vec<Event> {
    // The radius predicate has already rejected events without a usable
    // position, so every retained event measures a real distance; the
    // infinity fallback keeps the sort total regardless.
    let mut measured: Vec<(f64, Event)> = events
        .into_iter()
        .map(|event| {
            let d = event
                .venue
                .position()
                .map_or(f64::INFINITY, |position| distance_km(position, centre));
            (d, event)
        })
        .collect();
    // Vec::sort_by is stable: equal distances keep their filtered order.
    measured.sort_by(|a, b| a.0.total_cmp(&b.0));
    measured.into_iter().map(|(_, event)| event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, CategoryFilter, DateWindow, Venue};
    use rstest::{fixture, rstest};

    fn event(id: &str, category: Category, lat: &str, lon: &str) -> Event {
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            description: String::new(),
            start_local: "2025-06-07T12:00:00".into(),
            category,
            venue: Venue {
                name: format!("Venue {id}"),
                latitude: lat.into(),
                longitude: lon.into(),
                address_display: "Somewhere, US".into(),
            },
            tickets: None,
            url: format!("https://example.com/event/{id}"),
        }
    }

    fn ids(ranked: &Ranked) -> Vec<&str> {
        ranked.events.iter().map(|e| e.id.as_str()).collect()
    }

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    /// One event in San Francisco, one in Los Angeles, one in Chicago.
    #[fixture]
    fn snapshot() -> Vec<Event> {
        vec![
            event("sf", Category::Music, "37.7749", "-122.4194"),
            event("la", Category::Tech, "34.0522", "-118.2437"),
            event("chi", Category::Music, "41.8781", "-87.6298"),
        ]
    }

    #[rstest]
    fn default_criteria_return_the_snapshot_unchanged(snapshot: Vec<Event>) {
        let ranked = rank_at(&snapshot, &FilterCriteria::default(), june_first());
        assert_eq!(ranked.events, snapshot);
        assert_eq!(ranked.focal, None);
    }

    #[rstest]
    fn category_filter_keeps_only_matching_events(snapshot: Vec<Event>) {
        let criteria =
            FilterCriteria::default().with_category(CategoryFilter::Only(Category::Tech));
        let ranked = rank_at(&snapshot, &criteria, june_first());
        assert_eq!(ids(&ranked), ["la"]);
    }

    #[rstest]
    fn radius_filter_drops_events_beyond_50_km(snapshot: Vec<Event>) {
        let criteria = FilterCriteria::default().near("SF");
        let ranked = rank_at(&snapshot, &criteria, june_first());
        // Los Angeles is roughly 560 km from San Francisco.
        assert_eq!(ids(&ranked), ["sf"]);
        assert!(ranked.focal.is_some());
    }

    #[test]
    fn radius_results_are_ordered_by_ascending_distance() {
        // Near Chicago: Navy Pier (~3 km from the focal point) listed after
        // Evanston (~20 km) in the source; ranking must swap them.
        let events = vec![
            event("evanston", Category::Music, "42.0451", "-87.6877"),
            event("navy-pier", Category::Music, "41.8917", "-87.6086"),
        ];
        let criteria = FilterCriteria::default().near("CHI");
        let ranked = rank_at(&events, &criteria, june_first());
        assert_eq!(ids(&ranked), ["navy-pier", "evanston"]);
    }

    #[test]
    fn equal_distances_preserve_source_order() {
        let twin_a = event("a", Category::Music, "41.8826", "-87.6226");
        let twin_b = event("b", Category::Tech, "41.8826", "-87.6226");
        let events = vec![twin_a, twin_b];
        let criteria = FilterCriteria::default().near("CHI");
        let ranked = rank_at(&events, &criteria, june_first());
        assert_eq!(ids(&ranked), ["a", "b"]);
    }

    #[rstest]
    fn unresolvable_focal_location_degrades_to_no_radius(snapshot: Vec<Event>) {
        let with_bad_focal = FilterCriteria::default().near("ATL");
        let without_focal = FilterCriteria::default();
        let degraded = rank_at(&snapshot, &with_bad_focal, june_first());
        let baseline = rank_at(&snapshot, &without_focal, june_first());
        assert_eq!(degraded.events, baseline.events);
        assert_eq!(degraded.focal, None);
    }

    #[rstest]
    fn invalid_geometry_is_excluded_only_under_an_active_radius(snapshot: Vec<Event>) {
        let mut events = snapshot;
        events.push(event("ghost", Category::Music, "unknown", "unknown"));

        let unfiltered = rank_at(&events, &FilterCriteria::default(), june_first());
        assert!(ids(&unfiltered).contains(&"ghost"));

        let near_sf = FilterCriteria::default().near("SF");
        let filtered = rank_at(&events, &near_sf, june_first());
        assert_eq!(ids(&filtered), ["sf"]);
    }

    #[test]
    fn tomorrow_is_outside_today_but_inside_next7days() {
        let mut tomorrow = event("t", Category::Music, "41.8781", "-87.6298");
        tomorrow.start_local = "2025-06-02T10:00:00".into();
        let events = vec![tomorrow];

        let today_only = FilterCriteria::default().with_date_window(DateWindow::Today);
        assert!(rank_at(&events, &today_only, june_first()).is_empty());

        let week = FilterCriteria::default().with_date_window(DateWindow::Next7Days);
        assert_eq!(rank_at(&events, &week, june_first()).len(), 1);
    }

    #[rstest]
    fn text_and_category_compose_with_and(snapshot: Vec<Event>) {
        // "Event" matches every title; the category then narrows to music.
        let criteria = FilterCriteria::default()
            .with_search("event")
            .with_category(CategoryFilter::Only(Category::Music));
        let ranked = rank_at(&snapshot, &criteria, june_first());
        assert_eq!(ids(&ranked), ["sf", "chi"]);
    }

    #[test]
    fn empty_snapshot_with_radius_is_a_normal_empty_result() {
        let criteria = FilterCriteria::default().near("SF");
        let ranked = rank_at(&[], &criteria, june_first());
        assert!(ranked.is_empty());
        assert!(ranked.focal.is_some());
    }

    #[rstest]
    fn reapplying_criteria_to_its_own_output_is_a_fixed_point(snapshot: Vec<Event>) {
        let criteria = FilterCriteria::default()
            .with_category(CategoryFilter::Only(Category::Music))
            .near("SF");
        let once = rank_at(&snapshot, &criteria, june_first());
        let twice = rank_at(&once.events, &criteria, june_first());
        assert_eq!(once, twice);
    }
}
