//! Backend HTTP Bindings
//!
//! JSON calls to the backend routes, organized by domain. Every reply
//! carries the service envelope `{ status, message? }`; anything other
//! than an explicit `"success"` status is treated as a failure.

mod animals;

use serde::Deserialize;

/// Base path of the animal routes on the backend
pub const ANIMALS_BASE: &str = "/animals";

/// Wire envelope shared by every backend reply
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope decoded into an explicit success/failure
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyOutcome {
    Success { message: Option<String> },
    Failure { message: String },
}

impl ServiceReply {
    /// Fail closed: only a literal `"success"` status counts as success
    pub fn outcome(self) -> ReplyOutcome {
        if self.status.as_deref() == Some("success") {
            ReplyOutcome::Success { message: self.message }
        } else {
            ReplyOutcome::Failure {
                message: self.message.unwrap_or_else(|| {
                    "Une erreur interne s'est produite. Veuillez réessayer plus tard.".to_string()
                }),
            }
        }
    }
}

// Re-export all public items
pub use animals::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ReplyOutcome {
        serde_json::from_str::<ServiceReply>(json)
            .expect("valid JSON")
            .outcome()
    }

    #[test]
    fn test_success_status() {
        assert_eq!(
            parse(r#"{"status":"success"}"#),
            ReplyOutcome::Success { message: None }
        );
        assert_eq!(
            parse(r#"{"status":"success","message":"Animal supprimé avec succès."}"#),
            ReplyOutcome::Success {
                message: Some("Animal supprimé avec succès.".to_string())
            }
        );
    }

    #[test]
    fn test_error_status_carries_server_message() {
        assert_eq!(
            parse(r#"{"status":"error","message":"Animal introuvable."}"#),
            ReplyOutcome::Failure {
                message: "Animal introuvable.".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_status_fails_closed() {
        let ReplyOutcome::Failure { .. } = parse(r#"{"status":"ok"}"#) else {
            panic!("unexpected success");
        };
    }

    #[test]
    fn test_missing_status_fails_closed_with_generic_message() {
        assert_eq!(
            parse(r#"{}"#),
            ReplyOutcome::Failure {
                message: "Une erreur interne s'est produite. Veuillez réessayer plus tard."
                    .to_string()
            }
        );
    }
}
