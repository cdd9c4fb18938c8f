//! Action failure taxonomy and its conversion to the turn's reply.

use c3_client::ClientError;
use c3_intent::ExtractionFailure;
use c3_protocol::{ActionKind, ActionResponse};

use crate::settings;

/// Why a turn did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// A required credential is absent; nothing was sent anywhere.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// No extraction path produced a valid intent.
    #[error(transparent)]
    Extraction(#[from] ExtractionFailure),

    /// The remote service failed or could not be reached.
    #[error("remote error: {message}")]
    Remote {
        message: String,
        status_code: Option<u16>,
    },

    /// The text did not name any supported action.
    #[error("unrecognized request: {0}")]
    UnknownAction(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<ClientError> for ActionError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidApiKey => ActionError::Unexpected(err.to_string()),
            ClientError::Status { status, message } => ActionError::Remote {
                message,
                status_code: Some(status),
            },
            ClientError::Transport(message) => ActionError::Remote {
                message,
                status_code: None,
            },
            // A 2xx body we cannot read is our problem, not a rejection.
            ClientError::Decode(message) => {
                ActionError::Unexpected(format!("undecodable response: {message}"))
            }
        }
    }
}

/// Statuses that mean the service's gateway, not the request, failed.
fn is_gateway_status(status: u16) -> bool {
    matches!(status, 502..=504)
}

impl ActionError {
    /// Render the failure as the single reply for this turn.
    pub fn into_response(self, kind: Option<ActionKind>) -> ActionResponse {
        let action = kind.map(|k| k.name()).unwrap_or("request");
        match self {
            ActionError::MissingCredential(name) => ActionResponse::failure(
                format!(
                    "The Comput3 API key is not configured. Set {} to use {action}.",
                    settings::API_KEY
                ),
                format!("missing credential: {name}"),
                None,
            ),
            ActionError::Extraction(failure) => {
                ActionResponse::failure(failure.user_message(), failure.to_string(), None)
            }
            ActionError::Remote {
                message,
                status_code: Some(status),
            } if is_gateway_status(status) => ActionResponse::failure(
                "The Comput3 service is temporarily unavailable (gateway error). \
                 Please try again in a few minutes.",
                message,
                Some(status),
            ),
            ActionError::Remote {
                message,
                status_code,
            } => ActionResponse::failure(
                format!("{action} failed: {message}"),
                message,
                status_code,
            ),
            ActionError::UnknownAction(text) => ActionResponse::failure(
                "I can launch, stop or list workloads, show workload types, \
                 and check your balance or profile.",
                format!("unrecognized request: {text}"),
                None,
            ),
            ActionError::Unexpected(message) => ActionResponse::failure(
                format!("Something went wrong while handling {action}."),
                message,
                None,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use c3_intent::{CommandKind, Strategy};

    #[test]
    fn gateway_status_gets_friendly_text() {
        for status in [502, 503, 504] {
            let err = ActionError::Remote {
                message: "Bad Gateway".into(),
                status_code: Some(status),
            };
            let resp = err.into_response(Some(ActionKind::LaunchWorkload));
            assert!(!resp.is_success());
            assert!(resp.text.contains("try again"), "{status}");
            assert_eq!(resp.content.status_code, Some(status));
            assert_eq!(resp.content.error.as_deref(), Some("Bad Gateway"));
        }
    }

    #[test]
    fn other_status_surfaces_message() {
        let err = ActionError::Remote {
            message: "unknown workload type".into(),
            status_code: Some(400),
        };
        let resp = err.into_response(Some(ActionKind::LaunchWorkload));
        assert_eq!(resp.text, "LAUNCH_WORKLOAD failed: unknown workload type");
        assert_eq!(resp.content.status_code, Some(400));
    }

    #[test]
    fn client_errors_map_to_remote() {
        let err: ActionError = ClientError::Status {
            status: 404,
            message: "not found".into(),
        }
        .into();
        assert!(matches!(
            err,
            ActionError::Remote {
                status_code: Some(404),
                ..
            }
        ));

        let err: ActionError = ClientError::Transport("connection refused".into()).into();
        assert!(matches!(
            err,
            ActionError::Remote {
                status_code: None,
                ..
            }
        ));
    }

    #[test]
    fn decode_errors_are_unexpected() {
        let err: ActionError = ClientError::Decode("expected value at line 1".into()).into();
        assert!(matches!(err, ActionError::Unexpected(_)));

        let resp = err.into_response(Some(ActionKind::GetBalance));
        assert_eq!(resp.text, "Something went wrong while handling GET_BALANCE.");
        assert!(resp.content.error.unwrap().contains("expected value"));
        assert_eq!(resp.content.status_code, None);
    }

    #[test]
    fn extraction_failure_uses_hint() {
        let err = ActionError::from(ExtractionFailure {
            kind: CommandKind::Stop,
            attempted: vec![Strategy::Direct],
        });
        let resp = err.into_response(Some(ActionKind::StopWorkload));
        assert!(resp.text.contains("UUID"));
        assert!(resp.content.status_code.is_none());
    }

    #[test]
    fn missing_credential_names_setting() {
        let resp = ActionError::MissingCredential(settings::API_KEY)
            .into_response(Some(ActionKind::GetBalance));
        assert!(resp.text.contains("COMPUT3_API_KEY"));
        assert!(!resp.is_success());
    }
}
