//! Geospatial enrichment: search term → geocode → nearby places.
//!
//! The stage never fails the request. Its result is an `EnrichmentOutcome`
//! so callers and tests can tell "no organizations found" apart from
//! "lookup failed"; only `into_matches` collapses the two.

use thiserror::Error;
use tracing::warn;

use crate::causes::keywords::extract_search_terms;
use crate::causes::models::OrganizationMatch;
use crate::maps_client::{MapsError, PlacesLookup};

/// Nearby search radius.
pub const SEARCH_RADIUS_METERS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("maps client is not configured")]
    NotConfigured,

    #[error("no search term could be extracted from the generated text")]
    NoSearchTerm,

    #[error("location '{location}' could not be geocoded")]
    GeocodeMiss { location: String },

    #[error("geocoding failed: {0}")]
    Geocode(#[source] MapsError),

    #[error("nearby places lookup failed: {0}")]
    Places(#[source] MapsError),
}

#[derive(Debug)]
pub enum EnrichmentOutcome {
    Matched(Vec<OrganizationMatch>),
    Failed(EnrichmentError),
}

impl EnrichmentOutcome {
    /// Failures become an empty list and are logged server-side only.
    pub fn into_matches(self) -> Vec<OrganizationMatch> {
        match self {
            EnrichmentOutcome::Matched(matches) => matches,
            EnrichmentOutcome::Failed(e) => {
                warn!("Enrichment failed, returning no organizations: {e}");
                Vec::new()
            }
        }
    }
}

/// Runs the enrichment stage for `location`, using `generated` as the
/// search term source. The first term the text lists becomes the places
/// keyword.
pub async fn enrich(
    places: Option<&dyn PlacesLookup>,
    location: &str,
    generated: &str,
) -> EnrichmentOutcome {
    match find_organizations(places, location, generated).await {
        Ok(matches) => EnrichmentOutcome::Matched(matches),
        Err(e) => EnrichmentOutcome::Failed(e),
    }
}

async fn find_organizations(
    places: Option<&dyn PlacesLookup>,
    location: &str,
    generated: &str,
) -> Result<Vec<OrganizationMatch>, EnrichmentError> {
    let places = places.ok_or(EnrichmentError::NotConfigured)?;

    let keyword = extract_search_terms(generated, 1)
        .into_iter()
        .next()
        .ok_or(EnrichmentError::NoSearchTerm)?;

    let coordinates = places
        .geocode(location)
        .await
        .map_err(EnrichmentError::Geocode)?
        .ok_or_else(|| EnrichmentError::GeocodeMiss {
            location: location.to_string(),
        })?;

    let found = places
        .nearby(coordinates, &keyword, SEARCH_RADIUS_METERS)
        .await
        .map_err(EnrichmentError::Places)?;

    Ok(found.into_iter().map(OrganizationMatch::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{place, recife, MockPlaces};

    const GENERATED: &str = "Abrigo de animais, proteção animal, resgate de animais";

    #[tokio::test]
    async fn test_matches_keep_upstream_order() {
        let places = MockPlaces::found(vec![place("Zeta", "z"), place("Alfa", "a")]);

        let outcome = enrich(Some(&*places), "Recife", GENERATED).await;

        let names: Vec<String> = match outcome {
            EnrichmentOutcome::Matched(m) => m.into_iter().map(|o| o.nome).collect(),
            EnrichmentOutcome::Failed(e) => panic!("unexpected failure: {e}"),
        };
        assert_eq!(names, vec!["Zeta", "Alfa"]);
    }

    #[tokio::test]
    async fn test_nearby_uses_geocoded_point_first_term_and_fixed_radius() {
        let places = MockPlaces::found(vec![]);

        enrich(Some(&*places), "Recife", GENERATED).await;

        assert_eq!(*places.geocode_calls.lock().unwrap(), vec!["Recife"]);
        let calls = places.nearby_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (at, keyword, radius) = &calls[0];
        assert_eq!(*at, recife());
        assert_eq!(keyword, "abrigo animais");
        assert_eq!(*radius, 10_000);
    }

    #[tokio::test]
    async fn test_geocode_miss_degrades_to_empty() {
        let places = MockPlaces::new(Ok(None), Ok(vec![place("ONG", "x")]));

        let outcome = enrich(Some(&*places), "Atlântida", GENERATED).await;

        assert!(matches!(
            outcome,
            EnrichmentOutcome::Failed(EnrichmentError::GeocodeMiss { ref location }) if location == "Atlântida"
        ));
        assert!(outcome.into_matches().is_empty());
        assert!(places.nearby_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_geocode_error_degrades_to_empty() {
        let places = MockPlaces::new(Err("denied".into()), Ok(vec![]));

        let outcome = enrich(Some(&*places), "Recife", GENERATED).await;

        assert!(matches!(
            outcome,
            EnrichmentOutcome::Failed(EnrichmentError::Geocode(_))
        ));
        assert!(outcome.into_matches().is_empty());
    }

    #[tokio::test]
    async fn test_places_error_degrades_to_empty() {
        let places = MockPlaces::new(Ok(Some(recife())), Err("boom".into()));

        let outcome = enrich(Some(&*places), "Recife", GENERATED).await;

        assert!(matches!(
            outcome,
            EnrichmentOutcome::Failed(EnrichmentError::Places(_))
        ));
        assert!(outcome.into_matches().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_maps_is_failure() {
        let outcome = enrich(None, "Recife", GENERATED).await;
        assert!(matches!(
            outcome,
            EnrichmentOutcome::Failed(EnrichmentError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_no_search_term_skips_lookups() {
        let places = MockPlaces::found(vec![place("ONG", "x")]);

        let outcome = enrich(Some(&*places), "Recife", "a, e, o").await;

        assert!(matches!(
            outcome,
            EnrichmentOutcome::Failed(EnrichmentError::NoSearchTerm)
        ));
        assert!(places.geocode_calls.lock().unwrap().is_empty());
    }
}
