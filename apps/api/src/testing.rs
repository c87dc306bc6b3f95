//! In-process stand-ins for the upstream services, shared by the unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextGenerator};
use crate::maps_client::{Coordinates, MapsError, Place, PlacesLookup};
use crate::state::AppState;

/// Records every prompt and answers with a canned reply.
pub struct MockGenerator {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(|message| LlmError::Api {
            status: 503,
            message,
        })
    }
}

/// A scripted maps backend.
pub struct MockPlaces {
    pub geocode_result: Result<Option<Coordinates>, String>,
    pub nearby_result: Result<Vec<Place>, String>,
    pub geocode_calls: Mutex<Vec<String>>,
    pub nearby_calls: Mutex<Vec<(Coordinates, String, u32)>>,
}

impl MockPlaces {
    pub fn new(
        geocode_result: Result<Option<Coordinates>, String>,
        nearby_result: Result<Vec<Place>, String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            geocode_result,
            nearby_result,
            geocode_calls: Mutex::new(Vec::new()),
            nearby_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn found(places: Vec<Place>) -> Arc<Self> {
        Self::new(Ok(Some(recife())), Ok(places))
    }
}

fn status_error(message: String) -> MapsError {
    MapsError::Status {
        status: "UNKNOWN_ERROR".to_string(),
        message,
    }
}

#[async_trait]
impl PlacesLookup for MockPlaces {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, MapsError> {
        self.geocode_calls.lock().unwrap().push(address.to_string());
        self.geocode_result.clone().map_err(status_error)
    }

    async fn nearby(
        &self,
        location: Coordinates,
        keyword: &str,
        radius_m: u32,
    ) -> Result<Vec<Place>, MapsError> {
        self.nearby_calls
            .lock()
            .unwrap()
            .push((location, keyword.to_string(), radius_m));
        self.nearby_result.clone().map_err(status_error)
    }
}

pub fn recife() -> Coordinates {
    Coordinates {
        lat: -8.05,
        lng: -34.9,
    }
}

pub fn place(name: &str, place_id: &str) -> Place {
    Place {
        name: name.to_string(),
        place_id: place_id.to_string(),
        vicinity: Some(format!("Endereço de {name}")),
        formatted_address: None,
    }
}

pub fn state_with(llm: Arc<MockGenerator>, places: Option<Arc<MockPlaces>>) -> AppState {
    AppState {
        llm,
        places: places.map(|p| p as Arc<dyn PlacesLookup>),
    }
}
