//! Pluggable API client.
//!
//! External callers implement [`CommuteApi`] to provide data fetching;
//! [`HttpApi`] is the default reqwest-backed implementation. The trait keeps
//! the view layer testable without a network.

use std::future::Future;
use std::pin::Pin;

use geojson::FeatureCollection;

use crate::api::{
    DirectionsRequest, DirectionsResponse, IsochroneRequest, PlaceSearchResult, SearchItem,
    TransitPropertiesRequest, WalkablePropertiesRequest,
};
use crate::property::ScoredProperty;
use kommute_transit::models::types::Itinerary;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned status {0}")]
    Status(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

pub trait CommuteApi: Send + Sync {
    fn nearest_transit_properties<'a>(
        &'a self,
        request: &'a TransitPropertiesRequest,
    ) -> Pin<Box<dyn Future<Output = ApiResult<Vec<ScoredProperty>>> + Send + 'a>>;

    fn nearest_walkable_properties<'a>(
        &'a self,
        request: &'a WalkablePropertiesRequest,
    ) -> Pin<Box<dyn Future<Output = ApiResult<Vec<ScoredProperty>>> + Send + 'a>>;

    fn directions<'a>(
        &'a self,
        request: &'a DirectionsRequest,
    ) -> Pin<Box<dyn Future<Output = ApiResult<Vec<Itinerary>>> + Send + 'a>>;

    fn isochrone<'a>(
        &'a self,
        request: &'a IsochroneRequest,
    ) -> Pin<Box<dyn Future<Output = ApiResult<FeatureCollection>> + Send + 'a>>;

    fn search_places<'a>(
        &'a self,
        query: &'a str,
    ) -> Pin<Box<dyn Future<Output = ApiResult<Vec<SearchItem>>> + Send + 'a>>;
}

/// Service endpoints and credentials.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the kommute backend.
    pub base_url: String,
    /// Geocoder base URL.
    pub search_url: String,
    /// Country filter passed to the geocoder.
    pub search_countrycodes: String,
    /// Isochrone service base URL.
    pub isochrone_url: String,
    /// Access token for the isochrone service, if it requires one.
    pub isochrone_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            search_url: "https://nominatim.openstreetmap.org".to_string(),
            search_countrycodes: "my".to_string(),
            isochrone_url: "https://api.mapbox.com".to_string(),
            isochrone_token: None,
        }
    }
}

pub struct HttpApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn isochrone_path(&self, request: &IsochroneRequest) -> String {
        format!(
            "{}/isochrone/v1/mapbox/walking/{},{}",
            self.config.isochrone_url, request.origin.longitude, request.origin.latitude
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let response = self.client.get(url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

impl CommuteApi for HttpApi {
    fn nearest_transit_properties<'a>(
        &'a self,
        request: &'a TransitPropertiesRequest,
    ) -> Pin<Box<dyn Future<Output = ApiResult<Vec<ScoredProperty>>> + Send + 'a>> {
        Box::pin(async move {
            self.get_json(
                format!("{}/properties/nearest/transit", self.config.base_url),
                &[
                    ("latitude", request.latitude.to_string()),
                    ("longitude", request.longitude.to_string()),
                    ("walk_distance", request.walk_distance.to_string()),
                    ("min_transfer", request.min_transfer.to_string()),
                    ("max_transfer", request.max_transfer.to_string()),
                ],
            )
            .await
        })
    }

    fn nearest_walkable_properties<'a>(
        &'a self,
        request: &'a WalkablePropertiesRequest,
    ) -> Pin<Box<dyn Future<Output = ApiResult<Vec<ScoredProperty>>> + Send + 'a>> {
        Box::pin(async move {
            self.get_json(
                format!("{}/properties/nearest/walkable", self.config.base_url),
                &[
                    ("latitude", request.latitude.to_string()),
                    ("longitude", request.longitude.to_string()),
                    ("walk_distance", request.walk_distance.to_string()),
                ],
            )
            .await
        })
    }

    fn directions<'a>(
        &'a self,
        request: &'a DirectionsRequest,
    ) -> Pin<Box<dyn Future<Output = ApiResult<Vec<Itinerary>>> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .client
                .post(format!("{}/directions", self.config.base_url))
                .json(request)
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(ApiError::Status(response.status().as_u16()));
            }
            let body: DirectionsResponse = response.json().await?;
            Ok(body.itineraries)
        })
    }

    fn isochrone<'a>(
        &'a self,
        request: &'a IsochroneRequest,
    ) -> Pin<Box<dyn Future<Output = ApiResult<FeatureCollection>> + Send + 'a>> {
        Box::pin(async move {
            let mut query = vec![
                ("contours_meters", request.walk_distance.to_string()),
                ("polygons", "true".to_string()),
            ];
            if let Some(token) = &self.config.isochrone_token {
                query.push(("access_token", token.clone()));
            }
            self.get_json(self.isochrone_path(request), &query).await
        })
    }

    fn search_places<'a>(
        &'a self,
        query: &'a str,
    ) -> Pin<Box<dyn Future<Output = ApiResult<Vec<SearchItem>>> + Send + 'a>> {
        Box::pin(async move {
            let raw: Vec<PlaceSearchResult> = self
                .get_json(
                    format!("{}/search.php", self.config.search_url),
                    &[
                        ("q", query.to_string()),
                        ("countrycodes", self.config.search_countrycodes.clone()),
                        ("format", "json".to_string()),
                    ],
                )
                .await?;
            Ok(raw.into_iter().filter_map(SearchItem::from_wire).collect())
        })
    }
}
