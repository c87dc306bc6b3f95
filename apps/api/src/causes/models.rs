use serde::Serialize;

use crate::maps_client::Place;

const PLACE_DETAILS_URL: &str = "https://www.google.com/maps/place/?q=place_id:";

/// One nearby organization, as sent to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationMatch {
    pub nome: String,
    pub endereco: String,
    pub detalhes_google: String,
}

impl From<Place> for OrganizationMatch {
    fn from(place: Place) -> Self {
        Self {
            detalhes_google: format!("{PLACE_DETAILS_URL}{}", place.place_id),
            endereco: place
                .vicinity
                .or(place.formatted_address)
                .unwrap_or_default(),
            nome: place.name,
        }
    }
}

/// Response body of `POST /sugerir_causas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CauseSuggestions {
    pub sugestoes: Vec<OrganizationMatch>,
}

impl CauseSuggestions {
    pub fn new(sugestoes: Vec<OrganizationMatch>) -> Self {
        Self { sugestoes }
    }
}
