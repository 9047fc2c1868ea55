//! Destination and hotel search operations
//!
//! Each operation makes exactly one upstream call and always returns text:
//! upstream failures and unexpected shapes become fixed messages rather
//! than errors, so the calling model can read them.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::format::{format_destinations, format_hotels, HotelQuery};
use crate::gateway::{Endpoint, QueryParams, TravelApi};

pub const UNEXPECTED_FORMAT: &str = "Unexpected response format from the API.";
pub const NO_DESTINATIONS: &str = "No destinations found matching your query.";
pub const NO_HOTELS: &str = "No hotels found for these dates.";

/// Default party size for hotel searches
pub const DEFAULT_ADULTS: i64 = 2;

const LOCALE: &str = "en-gb";

/// Search operations over a travel API
#[derive(Clone)]
pub struct HotelSearch {
    api: Arc<dyn TravelApi>,
}

impl HotelSearch {
    pub fn new(api: Arc<dyn TravelApi>) -> Self {
        Self { api }
    }

    /// Look up destinations by name
    pub async fn search_destinations(&self, query: &str) -> String {
        info!("Searching for destinations with query: {}", query);

        let params: QueryParams = vec![("name", query.into()), ("locale", LOCALE.into())];

        let result = match self.api.request(Endpoint::Locations, &params).await {
            Ok(result) => result,
            Err(e) => {
                error!("Error in search_destinations: {}", e);
                return format!("Error fetching destinations: {}", e);
            }
        };

        let Value::Array(destinations) = result else {
            warn!("Unexpected response format from API for query: {}", query);
            return UNEXPECTED_FORMAT.to_string();
        };

        info!(
            "Found {} destinations for query: {}",
            destinations.len(),
            query
        );

        if destinations.is_empty() {
            return NO_DESTINATIONS.to_string();
        }
        format_destinations(&destinations)
    }

    /// Search hotels in a destination for a date range
    pub async fn get_hotels(
        &self,
        destination_id: &str,
        checkin_date: &str,
        checkout_date: &str,
        adults: i64,
    ) -> String {
        info!(
            "Getting hotels for destination_id: {}, checkin: {}, checkout: {}, adults: {}",
            destination_id, checkin_date, checkout_date, adults
        );

        let params = hotel_search_params(destination_id, checkin_date, checkout_date, adults);

        let result = match self.api.request(Endpoint::Search, &params).await {
            Ok(result) => result,
            Err(e) => {
                error!("Error in get_hotels: {}", e);
                return format!("Error fetching hotels: {}", e);
            }
        };

        let hotels = match &result {
            Value::Object(map) => match map.get("result") {
                None => Some(&[][..]),
                Some(Value::Array(items)) => Some(items.as_slice()),
                Some(_) => None,
            },
            _ => None,
        };

        let Some(hotels) = hotels else {
            warn!(
                "Unexpected response format from API for destination: {}",
                destination_id
            );
            return UNEXPECTED_FORMAT.to_string();
        };

        info!(
            "Found {} hotels for destination: {}",
            hotels.len(),
            destination_id
        );

        if hotels.is_empty() {
            return NO_HOTELS.to_string();
        }

        let query = HotelQuery {
            checkin_date,
            checkout_date,
            adults,
        };
        format_hotels(hotels, &query)
    }
}

/// Fixed parameter set for the search endpoint
fn hotel_search_params(
    destination_id: &str,
    checkin_date: &str,
    checkout_date: &str,
    adults: i64,
) -> QueryParams {
    vec![
        ("adults_number", adults.into()),
        ("units", "metric".into()),
        ("page_number", 0i64.into()),
        ("checkin_date", checkin_date.into()),
        ("checkout_date", checkout_date.into()),
        ("dest_type", "city".into()),
        ("dest_id", destination_id.into()),
        ("order_by", "popularity".into()),
        ("include_adjacency", true.into()),
        ("room_number", 1i64.into()),
        ("filter_by_currency", "USD".into()),
        ("locale", LOCALE.into()),
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{HotelsError, Result};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// In-memory API returning a canned response and recording calls
    pub(crate) struct StubApi {
        response: Mutex<Option<Result<Value>>>,
        pub calls: Mutex<Vec<(Endpoint, QueryParams)>>,
    }

    impl StubApi {
        pub(crate) fn ok(body: Value) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(Ok(body))),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn err(err: HotelsError) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(Err(err))),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TravelApi for StubApi {
        async fn request(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Value> {
            self.calls.lock().push((endpoint, params.clone()));
            self.response
                .lock()
                .take()
                .unwrap_or_else(|| Err(HotelsError::Internal("stub exhausted".into())))
        }
    }

    fn search(api: &Arc<StubApi>) -> HotelSearch {
        HotelSearch::new(api.clone())
    }

    #[tokio::test]
    async fn test_search_destinations_paris() {
        let api = StubApi::ok(json!([{
            "name": "Paris",
            "dest_type": "city",
            "dest_id": "-1456928",
            "country": "France",
            "latitude": "48.85",
            "longitude": "2.35"
        }]));

        let text = search(&api).search_destinations("Paris").await;
        assert_eq!(
            text,
            "Name: Paris\nType: city\nCity ID: -1456928\nCountry: France\nCoordinates: 48.85, 2.35\n"
        );

        let calls = api.calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Endpoint::Locations);
        let expected: QueryParams = vec![("name", "Paris".into()), ("locale", "en-gb".into())];
        assert_eq!(calls[0].1, expected);
    }

    #[tokio::test]
    async fn test_search_destinations_empty() {
        let api = StubApi::ok(json!([]));
        assert_eq!(search(&api).search_destinations("Nowhere").await, NO_DESTINATIONS);
    }

    #[tokio::test]
    async fn test_search_destinations_wrong_shape() {
        let api = StubApi::ok(json!({"message": "oops"}));
        assert_eq!(search(&api).search_destinations("Paris").await, UNEXPECTED_FORMAT);
    }

    #[tokio::test]
    async fn test_search_destinations_error() {
        let api = StubApi::err(HotelsError::InvalidResponse("boom".into()));
        let text = search(&api).search_destinations("Paris").await;
        assert_eq!(text, "Error fetching destinations: Invalid response: boom");
    }

    #[tokio::test]
    async fn test_get_hotels_params() {
        let api = StubApi::ok(json!({"result": []}));
        search(&api)
            .get_hotels("-1456928", "2024-06-01", "2024-06-05", 3)
            .await;

        let calls = api.calls.lock();
        assert_eq!(calls[0].0, Endpoint::Search);
        let params = &calls[0].1;
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "adults_number",
                "units",
                "page_number",
                "checkin_date",
                "checkout_date",
                "dest_type",
                "dest_id",
                "order_by",
                "include_adjacency",
                "room_number",
                "filter_by_currency",
                "locale",
            ]
        );
        assert_eq!(params[0].1.to_string(), "3");
        assert_eq!(params[6].1.to_string(), "-1456928");
        assert_eq!(params[8].1.to_string(), "true");
    }

    #[tokio::test]
    async fn test_get_hotels_formats_entries() {
        let api = StubApi::ok(json!({"result": [{
            "hotel_name": "Hotel X",
            "min_total_price": 120,
            "currency_code": "USD",
            "url": "https://x.test/h"
        }]}));

        let text = search(&api)
            .get_hotels("-1456928", "2024-06-01", "2024-06-05", DEFAULT_ADULTS)
            .await;

        assert!(text.contains("Price: 120 USD\n"));
        assert!(text.contains(
            "URL: https://x.test/h?checkin=2024-06-01&checkout=2024-06-05&group_adults=2&no_rooms=1&group_children=0\n"
        ));
    }

    #[tokio::test]
    async fn test_get_hotels_missing_result_key() {
        let api = StubApi::ok(json!({"count": 0}));
        let text = search(&api).get_hotels("1", "2024-06-01", "2024-06-02", 2).await;
        assert_eq!(text, NO_HOTELS);
    }

    #[tokio::test]
    async fn test_get_hotels_wrong_shape() {
        let api = StubApi::ok(json!({"result": "nope"}));
        let text = search(&api).get_hotels("1", "2024-06-01", "2024-06-02", 2).await;
        assert_eq!(text, UNEXPECTED_FORMAT);

        let api = StubApi::ok(json!([1, 2]));
        let text = search(&api).get_hotels("1", "2024-06-01", "2024-06-02", 2).await;
        assert_eq!(text, UNEXPECTED_FORMAT);
    }

    #[tokio::test]
    async fn test_get_hotels_error() {
        let api = StubApi::err(HotelsError::Timeout {
            url: "https://booking-com.p.rapidapi.com/v1/hotels/search".into(),
            seconds: 30,
        });
        let text = search(&api).get_hotels("1", "2024-06-01", "2024-06-02", 2).await;
        assert!(text.starts_with("Error fetching hotels: "));
        assert!(text.contains("timed out after 30s"));
    }

    #[tokio::test]
    async fn test_get_hotels_limits_to_ten() {
        let hotels: Vec<Value> = (0..25).map(|i| json!({"hotel_name": format!("H{}", i)})).collect();
        let api = StubApi::ok(json!({"result": hotels}));

        let text = search(&api).get_hotels("1", "2024-06-01", "2024-06-02", 2).await;
        assert_eq!(text.split("\n---\n").count(), 10);
        assert!(text.starts_with("Name: H0\n"));
    }
}
