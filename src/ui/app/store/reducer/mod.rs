pub mod lifecycle;
pub mod location;

use super::action::Action;
use crate::ui::app::state::AppState;

/// Folds one action into the state.
///
/// Pure and total: no I/O, no clock, and actions with nothing to record return an
/// equal state.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::Lifecycle(action) => lifecycle::reduce(&mut next.lifecycle, *action),
        Action::Location(action) => location::reduce(&mut next, action),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AuthorizationAccuracy, AuthorizationStatus, AuthorizationType, BeaconConstraint,
        BeaconReading, Coordinate, DeviceCapabilities, Heading, Position, Region, RegionEvent,
        RegionState, Visit,
    };
    use crate::ui::app::state::AppLifecycle;
    use crate::ui::app::store::action::{LifecycleAction, LocationAction, Toggle};
    use chrono::{TimeZone, Utc};

    fn location(action: LocationAction) -> Action {
        Action::Location(action)
    }

    fn fix(lat: f64, lon: f64) -> Position {
        Position::new(lat, lon, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    fn region(id: &str) -> Region {
        Region::new(id, Coordinate::new(51.50998, -0.1337), 100.0)
    }

    fn busy_state() -> AppState {
        let mut state = AppState::empty();
        state.lifecycle = AppLifecycle::ForegroundActive;
        state.authorization.status = AuthorizationStatus::AuthorizedWhenInUse;
        state.monitoring.location = true;
        state.monitoring.region = true;
        state.monitoring.region_choice = Some(region("a"));
        state.last_known.position = Some(fix(1.0, 2.0));
        state.error = "old".into();
        state
    }

    #[test]
    fn test_empty_state_defaults() {
        let state = AppState::empty();
        assert_eq!(state.authorization.status, AuthorizationStatus::NotDetermined);
        assert_eq!(state.authorization.requested_type, AuthorizationType::WhenInUse);
        assert_eq!(state.lifecycle, AppLifecycle::BackgroundInactive);
        assert!(!state.monitoring.location);
        assert!(state.last_known.position.is_none());
        assert!(!state.has_error());
    }

    #[test]
    fn test_toggle_location_services_is_optimistic() {
        let state = AppState::empty();
        let next = reduce(&state, &location(LocationAction::ToggleLocationServices(true)));
        assert!(next.monitoring.location);

        let expected = AppState {
            monitoring: next.monitoring.clone(),
            ..AppState::empty()
        };
        assert_eq!(next, expected);
    }

    #[test]
    fn test_position_update_sets_position_and_clears_error() {
        let state = busy_state();
        let next = reduce(
            &state,
            &location(LocationAction::PositionUpdated(fix(51.5, -0.13))),
        );
        let position = next.last_known.position.unwrap();
        assert_eq!(position.coordinate, Coordinate::new(51.5, -0.13));
        assert_eq!(next.error, "");
    }

    #[test]
    fn test_error_sets_message_and_resets_position() {
        let state = busy_state();
        let next = reduce(
            &state,
            &location(LocationAction::ErrorOccurred("denied".into())),
        );
        assert_eq!(next.error, "denied");
        assert!(next.last_known.position.is_none());
        // Everything else is untouched.
        assert_eq!(next.monitoring, state.monitoring);
        assert_eq!(next.authorization, state.authorization);
    }

    #[test]
    fn test_newer_error_overwrites_previous_one() {
        let state = busy_state();
        let next = reduce(
            &state,
            &location(LocationAction::ErrorOccurred("timeout".into())),
        );
        let next = reduce(
            &next,
            &location(LocationAction::ErrorOccurred("unavailable".into())),
        );
        assert_eq!(next.error, "unavailable");
    }

    #[test]
    fn test_toggle_authorization_type_touches_only_requested_type() {
        let state = busy_state();
        let always = reduce(
            &state,
            &location(LocationAction::ToggleAuthorizationType(true)),
        );
        assert_eq!(always.authorization.requested_type, AuthorizationType::Always);
        assert_eq!(
            always,
            AppState {
                authorization: always.authorization,
                ..state.clone()
            }
        );

        let when_in_use = reduce(
            &always,
            &location(LocationAction::ToggleAuthorizationType(false)),
        );
        assert_eq!(
            when_in_use.authorization.requested_type,
            AuthorizationType::WhenInUse
        );
        assert_eq!(when_in_use, state);
    }

    #[test]
    fn test_region_toggle_replaces_target_wholesale() {
        let state = AppState::empty();
        let a = reduce(
            &state,
            &location(LocationAction::ToggleRegionMonitoring(Toggle::On(region("a")))),
        );
        let b = reduce(
            &a,
            &location(LocationAction::ToggleRegionMonitoring(Toggle::On(region("b")))),
        );
        assert!(b.monitoring.region);
        assert_eq!(b.monitoring.region_choice, Some(region("b")));

        let off = reduce(
            &b,
            &location(LocationAction::ToggleRegionMonitoring(Toggle::Off)),
        );
        assert!(!off.monitoring.region);
        assert_eq!(off.monitoring.region_choice, Some(region("b")));
    }

    #[test]
    fn test_beacon_toggle_records_constraint() {
        let constraint = BeaconConstraint::new(uuid::Uuid::nil()).with_major(4);
        let next = reduce(
            &AppState::empty(),
            &location(LocationAction::ToggleBeaconRanging(Toggle::On(constraint))),
        );
        assert!(next.monitoring.beacon_ranging);
        assert_eq!(next.monitoring.beacon_choice, Some(constraint));
    }

    #[test]
    fn test_toggle_off_is_idempotent() {
        let actions = [
            LocationAction::ToggleLocationServices(false),
            LocationAction::ToggleSignificantLocationChange(false),
            LocationAction::ToggleHeadingUpdates(false),
            LocationAction::ToggleRegionMonitoring(Toggle::Off),
            LocationAction::ToggleBeaconRanging(Toggle::Off),
            LocationAction::ToggleVisitMonitoring(false),
        ];
        for action in actions {
            let action = location(action);
            let once = reduce(&busy_state(), &action);
            let twice = reduce(&once, &action);
            assert_eq!(once, twice, "{} is not idempotent", action.name());
        }
    }

    #[test]
    fn test_requests_do_not_change_state() {
        let state = busy_state();
        let requests = [
            LocationAction::RequestPosition,
            LocationAction::RequestAuthorizationType,
            LocationAction::RequestDeviceCapabilities,
            LocationAction::RequestRegionState(region("a")),
        ];
        for request in requests {
            assert_eq!(reduce(&state, &location(request)), state);
        }
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let state = busy_state();
        let actions = [
            location(LocationAction::PositionUpdated(fix(10.0, 20.0))),
            location(LocationAction::VisitDetected(Visit {
                arrival: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()),
                departure: None,
                coordinate: Coordinate::new(10.0, 20.0),
            })),
            Action::Lifecycle(LifecycleAction::DidEnterBackground),
        ];
        for action in &actions {
            assert_eq!(reduce(&state, action), reduce(&state, action));
        }
    }

    #[test]
    fn test_service_events_are_recorded() {
        let mut state = busy_state();
        state = reduce(
            &state,
            &location(LocationAction::AuthorizationStatusChanged {
                status: AuthorizationStatus::AuthorizedAlways,
                accuracy: AuthorizationAccuracy::Reduced,
            }),
        );
        // Authorization changes leave the error alone.
        assert_eq!(state.error, "old");
        assert_eq!(state.authorization.status, AuthorizationStatus::AuthorizedAlways);
        assert_eq!(state.authorization.accuracy, AuthorizationAccuracy::Reduced);

        state = reduce(
            &state,
            &location(LocationAction::HeadingUpdated(Heading {
                direction: 90.0,
                accuracy: 5.0,
            })),
        );
        assert_eq!(state.last_known.heading.unwrap().direction, 90.0);
        assert!(!state.has_error());

        state = reduce(
            &state,
            &location(LocationAction::RegionEventReceived(RegionEvent {
                region_id: "a".into(),
                state: RegionState::Inside,
            })),
        );
        assert_eq!(
            state.last_known.region_event.as_ref().map(|e| e.state),
            Some(RegionState::Inside)
        );

        let beacons = vec![BeaconReading {
            id: "b1".into(),
            rssi: -70,
        }];
        state = reduce(
            &state,
            &location(LocationAction::BeaconRangingUpdated(beacons.clone())),
        );
        assert_eq!(state.last_known.beacons, beacons);

        state = reduce(
            &state,
            &location(LocationAction::DeviceCapabilitiesReported(
                DeviceCapabilities::all(),
            )),
        );
        assert_eq!(state.capabilities, DeviceCapabilities::all());
    }

    #[test]
    fn test_visit_is_recorded_and_clears_error() {
        let visit = Visit {
            arrival: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).single(),
            departure: Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 0).single(),
            coordinate: Coordinate::new(51.5, -0.13),
        };
        let state = busy_state();
        let next = reduce(&state, &location(LocationAction::VisitDetected(visit)));

        assert_eq!(next.last_known.visit, Some(visit));
        assert!(!next.has_error());
        assert_eq!(next.last_known.position, state.last_known.position);
        assert_eq!(next.monitoring, state.monitoring);
    }

    #[test]
    fn test_lifecycle_transitions() {
        let cases = [
            (LifecycleAction::DidBecomeActive, AppLifecycle::ForegroundActive),
            (LifecycleAction::WillResignActive, AppLifecycle::ForegroundInactive),
            (LifecycleAction::DidEnterBackground, AppLifecycle::BackgroundActive),
            (LifecycleAction::WillEnterForeground, AppLifecycle::ForegroundInactive),
            (LifecycleAction::WillTerminate, AppLifecycle::BackgroundInactive),
        ];
        for (action, expected) in cases {
            let next = reduce(&busy_state(), &Action::Lifecycle(action));
            assert_eq!(next.lifecycle, expected);
            assert_eq!(next.monitoring, busy_state().monitoring);
        }
    }
}
