/// Lead submission
///
/// One fire-and-forget POST per submit. The sink is a spreadsheet webhook
/// whose response carries no meaningful status (it answers the same way
/// whether or not the row was recorded), so delivery is inferred purely
/// from the absence of a transport error; the response is dropped unread.
use serde::Serialize;

/// Spreadsheet webhook the leads land in.
pub const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbwQmH3k4yLxTn9vRkCeT0dUzpPqGgXaWyJbM5oEiFhVrN82sDdc/exec";

/// The five lead fields, named exactly as the sheet's columns expect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub message: String,
}

/// A submission failure. Only transport-level problems are observable; the
/// remote never reports anything. Carried as a string so the error can ride
/// inside clonable UI messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

/// POST the lead to the sink as form data.
///
/// `Ok` means the request left this machine and a response of some kind came
/// back; it says nothing about whether the sheet actually recorded the lead.
pub async fn submit_lead(endpoint: String, payload: LeadPayload) -> Result<(), SubmitError> {
    tracing::debug!(endpoint = %endpoint, "submitting lead");

    let client = reqwest::Client::new();
    let _ = client.post(&endpoint).form(&payload).send().await?;

    tracing::info!("lead dispatched");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::form::{ContactFormState, LeadField};

    #[test]
    fn test_payload_mirrors_draft() {
        let mut form = ContactFormState::default();
        form.edit(LeadField::FullName, "Amira Hassan".into());
        form.edit(LeadField::Email, "amira@example.com".into());
        form.edit(LeadField::City, "Casablanca".into());
        form.edit(LeadField::Phone, "+212 600 000 000".into());
        form.edit(LeadField::Message, "A gown for the gala.".into());

        let payload = form.draft.payload();
        assert_eq!(
            payload,
            LeadPayload {
                full_name: "Amira Hassan".into(),
                email: "amira@example.com".into(),
                city: "Casablanca".into(),
                phone: "+212 600 000 000".into(),
                message: "A gown for the gala.".into(),
            }
        );
    }

    #[test]
    fn test_payload_field_names_match_sheet_columns() {
        let payload = LeadPayload {
            full_name: "a".into(),
            email: "b".into(),
            city: "c".into(),
            phone: "d".into(),
            message: String::new(),
        };

        let encoded = serde_urlencoded::to_string(&payload).unwrap();
        assert_eq!(encoded, "fullName=a&email=b&city=c&phone=d&message=");
    }
}
