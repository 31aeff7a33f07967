use super::{Labeled, Projection, format};
use crate::ui::app::{Action, AppState, LocationAction};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitMonitoringViewAction {
    ToggleVisitEventsService(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitMonitoringViewState {
    pub title: String,
    pub toggle_visit_events: Labeled<bool>,
    pub visit: Labeled<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VisitMonitoringSection;

impl Projection for VisitMonitoringSection {
    type State = VisitMonitoringViewState;
    type Action = VisitMonitoringViewAction;

    fn state_map(&self, state: &AppState) -> VisitMonitoringViewState {
        VisitMonitoringViewState {
            title: "Visit Monitoring".into(),
            toggle_visit_events: Labeled::new("Visit events", state.monitoring.visits),
            visit: Labeled::new("Last visit: ", format::visit(state.last_known.visit.as_ref())),
        }
    }

    fn action_map(&self, action: VisitMonitoringViewAction) -> Option<Action> {
        match action {
            VisitMonitoringViewAction::ToggleVisitEventsService(enabled) => Some(
                Action::Location(LocationAction::ToggleVisitMonitoring(enabled)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Visit};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_shows_last_visit() {
        let mut state = AppState::empty();
        let view = VisitMonitoringSection.state_map(&state);
        assert!(!view.toggle_visit_events.value);
        assert_eq!(view.visit.text(), "Last visit: Unknown");

        state.monitoring.visits = true;
        state.last_known.visit = Some(Visit {
            arrival: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).single(),
            departure: None,
            coordinate: Coordinate::new(51.5, -0.13),
        });
        let view = VisitMonitoringSection.state_map(&state);
        assert!(view.toggle_visit_events.value);
        assert_eq!(
            view.visit.value,
            "arrived 09:30:05, departed -, Lat: 51.50000, Lon: -0.13000"
        );
    }

    #[test]
    fn test_toggle_maps_to_visit_monitoring() {
        assert_eq!(
            VisitMonitoringSection
                .action_map(VisitMonitoringViewAction::ToggleVisitEventsService(true)),
            Some(Action::Location(LocationAction::ToggleVisitMonitoring(true)))
        );
    }
}
