use crate::core::events::EventLog;
use crate::core::params::parse_params;
use crate::errors::AppResult;
use crate::models::param_key::ParamKey;
use crate::models::record::EventRecord;
use crate::models::user::{UserProfile, display_name};

/// Where a registration comes from: the chat and, when known, the sender.
#[derive(Debug, Clone, Default)]
pub struct Origin {
    pub chat_id: String,
    pub user: Option<UserProfile>,
}

impl Origin {
    pub fn user_id(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.id.to_string())
            .unwrap_or_default()
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The record was appended to the log.
    Saved(EventRecord),
    /// Nothing was written; these required keys were absent or blank.
    Missing(Vec<ParamKey>),
}

/// High-level business logic for registering a kite session.
pub struct AddLogic;

impl AddLogic {
    /// Parse `text`, validate the required keys and append one record.
    pub fn apply(log: &EventLog, text: &str, origin: &Origin) -> AppResult<AddOutcome> {
        let params = parse_params(text);

        let missing = params.missing(&ParamKey::REQUIRED);
        if !missing.is_empty() {
            tracing::debug!(?missing, "registration rejected");
            return Ok(AddOutcome::Missing(missing));
        }

        let name = display_name(origin.user.as_ref());
        let record = EventRecord::new(
            origin.chat_id.clone(),
            origin.user_id(),
            &name,
            params.get(ParamKey::Kite).unwrap_or_default(),
            params.get(ParamKey::From).unwrap_or_default(),
            params.get(ParamKey::To).unwrap_or_default(),
        );

        log.append(&record)?;
        Ok(AddOutcome::Saved(record))
    }
}
