use serde_json::{Map, Value};

use crate::payload::{parse_payload, text_field, PayloadError};

pub const FIELD_INTERESSES: &str = "interesses";
pub const FIELD_HABILIDADES: &str = "habilidades";
pub const FIELD_LOCALIZACAO: &str = "localizacao";

/// A validated cause search. `habilidades` is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauseQuery {
    interesses: String,
    habilidades: Option<String>,
    localizacao: String,
}

impl CauseQuery {
    pub fn from_body(body: &[u8]) -> Result<Self, PayloadError> {
        let payload = parse_payload(body)?;
        Self::from_payload(&payload)
    }

    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, PayloadError> {
        let interesses = text_field(payload, FIELD_INTERESSES);
        let localizacao = text_field(payload, FIELD_LOCALIZACAO);

        match (interesses, localizacao) {
            (Some(interesses), Some(localizacao)) => Ok(CauseQuery {
                interesses,
                habilidades: text_field(payload, FIELD_HABILIDADES),
                localizacao,
            }),
            (interesses, localizacao) => {
                let mut missing = Vec::new();
                if interesses.is_none() {
                    missing.push(FIELD_INTERESSES);
                }
                if localizacao.is_none() {
                    missing.push(FIELD_LOCALIZACAO);
                }
                Err(PayloadError::MissingFields { missing })
            }
        }
    }

    pub fn interesses(&self) -> &str {
        &self.interesses
    }

    pub fn habilidades(&self) -> Option<&str> {
        self.habilidades.as_deref()
    }

    pub fn localizacao(&self) -> &str {
        &self.localizacao
    }
}
