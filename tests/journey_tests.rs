//! Delivery-day walkthroughs on the Bangalore fixtures.

mod fixtures;

use route_sequencer::haversine::StraightLineRouter;
use route_sequencer::journey::Journey;
use route_sequencer::overlay::route_geometry;
use route_sequencer::{DeliveryStop, Error, RouteEngine, StopStatus};

use fixtures::{DEPOT, EXTRA_CUSTOMERS, customer_stops};

fn current_count(stops: &[DeliveryStop]) -> usize {
    stops
        .iter()
        .filter(|s| s.status == StopStatus::Current)
        .count()
}

#[test]
fn full_delivery_day() {
    let mut journey = Journey::start(RouteEngine::default(), &customer_stops(), Some(DEPOT));
    assert_eq!(journey.current().map(|s| s.id.as_str()), Some("2"));

    let mut delivered = Vec::new();
    while let Some(current) = journey.current().map(|s| s.id.clone()) {
        journey.complete(&current).unwrap();
        delivered.push(current);
        assert!(current_count(journey.stops()) <= 1);
    }

    assert_eq!(delivered, vec!["2", "1", "4", "5", "3"]);
    assert!(journey.is_finished());
}

#[test]
fn stop_added_mid_route_is_sequenced_after_current() {
    let mut journey = Journey::start(RouteEngine::default(), &customer_stops(), Some(DEPOT));
    journey.complete(&"2".to_string()).unwrap();
    journey.complete(&"1".to_string()).unwrap();
    assert_eq!(journey.current().map(|s| s.id.as_str()), Some("4"));

    journey.add_stop(EXTRA_CUSTOMERS[0].stop("6")).unwrap();

    let ids: Vec<&str> = journey.stops().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(&ids[..3], &["2", "1", "4"]);
    assert_eq!(ids.len(), 6);
    assert_eq!(current_count(journey.stops()), 1);
    assert_eq!(journey.remaining(), 4);
}

#[test]
fn unknown_delivery_is_reported() {
    let mut journey = Journey::start(RouteEngine::default(), &customer_stops(), Some(DEPOT));
    assert!(matches!(
        journey.complete(&"99".to_string()),
        Err(Error::UnknownStop(_))
    ));
}

#[test]
fn geometry_follows_remaining_route() {
    let mut journey = Journey::start(RouteEngine::default(), &customer_stops(), Some(DEPOT));
    journey.complete(&"2".to_string()).unwrap();

    let geometry = route_geometry(&StraightLineRouter::default(), DEPOT, journey.stops());
    // completed stop 2 is skipped: depot -> 1 -> 4 -> 5 -> 3
    assert_eq!(geometry.legs.len(), 4);
    assert_eq!(geometry.legs[0].to, fixtures::CUSTOMERS[0].position());
    assert_eq!(geometry.fallback_legs(), 4);
}
