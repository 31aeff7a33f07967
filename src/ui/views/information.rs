use super::{Labeled, Projection, format};
use crate::ui::app::{Action, AppState};
use serde::Serialize;

/// The information section only displays state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InformationViewAction {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InformationViewState {
    pub location: Labeled<String>,
    pub error: Labeled<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InformationSection;

impl Projection for InformationSection {
    type State = InformationViewState;
    type Action = InformationViewAction;

    fn state_map(&self, state: &AppState) -> InformationViewState {
        InformationViewState {
            location: Labeled::new(
                "Position: ",
                format::position(state.last_known.position.as_ref()),
            ),
            error: Labeled::new("Error: ", state.error.clone()),
        }
    }

    fn action_map(&self, action: InformationViewAction) -> Option<Action> {
        match action {}
    }
}
