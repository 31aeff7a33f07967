use super::{Labeled, Projection, format};
use crate::domain::AuthorizationType;
use crate::ui::app::{Action, AppState, LocationAction};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationViewAction {
    ToggleAuthType(bool),
    RequestAuthorizationTapped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationViewState {
    pub title: String,
    pub toggle_auth_type: Labeled<bool>,
    pub authorization: Labeled<String>,
    pub accuracy: Labeled<String>,
    pub request_button: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationSection;

impl Projection for AuthorizationSection {
    type State = AuthorizationViewState;
    type Action = AuthorizationViewAction;

    fn state_map(&self, state: &AppState) -> AuthorizationViewState {
        let authorization = &state.authorization;
        AuthorizationViewState {
            title: "Authorization".into(),
            toggle_auth_type: Labeled::new(
                "Always authorization",
                authorization.requested_type == AuthorizationType::Always,
            ),
            authorization: Labeled::new(
                "Authorization status: ",
                format::authorization_status(authorization.status).to_string(),
            ),
            accuracy: Labeled::new(
                "Authorization accuracy: ",
                format::authorization_accuracy(authorization.accuracy).to_string(),
            ),
            request_button: "Request authorization".into(),
        }
    }

    fn action_map(&self, action: AuthorizationViewAction) -> Option<Action> {
        let action = match action {
            AuthorizationViewAction::ToggleAuthType(always) => {
                LocationAction::ToggleAuthorizationType(always)
            }
            AuthorizationViewAction::RequestAuthorizationTapped => {
                LocationAction::RequestAuthorizationType
            }
        };
        Some(Action::Location(action))
    }
}
