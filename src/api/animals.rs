//! Animal Routes
//!
//! Frontend bindings for the backend animal endpoints.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::models::AnimalPage;

use super::{ReplyOutcome, ServiceReply, ANIMALS_BASE};

/// Form payload for register/update calls
#[derive(Serialize)]
pub struct AnimalPayload<'a> {
    pub nom: &'a str,
    pub espece: &'a str,
    pub race: &'a str,
    pub age: u32,
    pub description: &'a str,
    pub email: &'a str,
    pub adresse: &'a str,
    pub ville: &'a str,
    pub code_postal: &'a str,
}

/// Listing reply: the service envelope plus one page of animals
#[derive(Deserialize)]
struct ListEnvelope {
    #[serde(flatten)]
    reply: ServiceReply,
    data: Option<AnimalPage>,
}

/// One page of the listing, optionally filtered by a search keyword
pub async fn list_animals(page: u32, query: &str) -> Result<AnimalPage, String> {
    let page = page.to_string();
    let resp = Request::get(&format!("{ANIMALS_BASE}/list"))
        .query([("page", page.as_str()), ("query", query)])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let envelope: ListEnvelope = resp.json().await.map_err(|e| e.to_string())?;
    match envelope.reply.outcome() {
        ReplyOutcome::Success { .. } => envelope
            .data
            .ok_or_else(|| "réponse sans données".to_string()),
        ReplyOutcome::Failure { message } => Err(message),
    }
}

/// Register a new animal
pub async fn register_animal(payload: &AnimalPayload<'_>) -> Result<ServiceReply, String> {
    let resp = Request::post(&format!("{ANIMALS_BASE}/register"))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

/// Update an existing animal
pub async fn update_animal(id: u32, payload: &AnimalPayload<'_>) -> Result<ServiceReply, String> {
    let resp = Request::post(&format!("{ANIMALS_BASE}/update/{id}"))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

/// Delete an animal. The backend expects a JSON content type even
/// though the request carries no body.
pub async fn delete_animal(id: u32) -> Result<ServiceReply, String> {
    let resp = Request::post(&format!("{ANIMALS_BASE}/delete/{id}"))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_with_data() {
        let envelope: ListEnvelope = serde_json::from_str(
            r#"{
                "status": "success",
                "data": {
                    "animals": [{
                        "id": 7,
                        "nom": "Rex",
                        "espece": "Chien",
                        "race": "Berger allemand",
                        "age": 4,
                        "description": null,
                        "email": "rex@refuge.fr",
                        "adresse": "12 rue des Lilas",
                        "ville": "Lyon",
                        "code_postal": "69001"
                    }],
                    "page": 1,
                    "total_pages": 3
                }
            }"#,
        )
        .expect("valid envelope");

        let page = envelope.data.expect("data present");
        assert_eq!(page.animals.len(), 1);
        assert_eq!(page.animals[0].id, 7);
        assert_eq!(page.total_pages, 3);
        assert!(matches!(
            envelope.reply.outcome(),
            ReplyOutcome::Success { .. }
        ));
    }

    #[test]
    fn test_list_envelope_error_has_no_data() {
        let envelope: ListEnvelope = serde_json::from_str(
            r#"{"status":"error","message":"Animal introuvable."}"#,
        )
        .expect("valid envelope");
        assert!(envelope.data.is_none());
        assert_eq!(
            envelope.reply.outcome(),
            ReplyOutcome::Failure {
                message: "Animal introuvable.".to_string()
            }
        );
    }
}
