use serde::Deserialize;

use crate::client::ApiClient;
use crate::models::{Car, CarRental, NewCarRental};
use crate::Result;

/// Fleet listing filters; only the set ones are sent
#[derive(Debug, Clone, Default)]
pub struct CarFilters {
    pub car_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl CarFilters {
    fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(car_type) = &self.car_type {
            pairs.push(("type".to_string(), car_type.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice".to_string(), min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice".to_string(), max.to_string()));
        }
        pairs
    }
}

#[derive(Deserialize)]
struct CarsEnvelope {
    cars: Vec<Car>,
}

#[derive(Deserialize)]
struct RentalsEnvelope {
    rentals: Vec<CarRental>,
}

#[derive(Deserialize)]
struct RentalEnvelope {
    rental: CarRental,
}

/// `GET /cars`
#[tracing::instrument(skip(client))]
pub async fn list(client: &ApiClient, filters: &CarFilters) -> Result<Vec<Car>> {
    let pairs = filters.to_pairs();
    let envelope: CarsEnvelope = if pairs.is_empty() {
        client.get("/cars").await?
    } else {
        client.get_with_query("/cars", pairs).await?
    };
    Ok(envelope.cars)
}

/// `GET /cars/rentals` - the caller's own rental requests
#[tracing::instrument(skip(client))]
pub async fn list_my_rentals(client: &ApiClient) -> Result<Vec<CarRental>> {
    let envelope: RentalsEnvelope = client.get("/cars/rentals").await?;
    Ok(envelope.rentals)
}

/// `POST /cars/rentals`
#[tracing::instrument(skip(client, rental), fields(car_id = %rental.car_id))]
pub async fn request_rental(client: &ApiClient, rental: &NewCarRental) -> Result<CarRental> {
    let envelope: RentalEnvelope = client.post("/cars/rentals", rental).await?;
    Ok(envelope.rental)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_flatten_to_the_expected_query_names() {
        let filters = CarFilters {
            car_type: Some("suv".to_string()),
            min_price: None,
            max_price: Some(100.0),
        };
        assert_eq!(
            filters.to_pairs(),
            vec![
                ("type".to_string(), "suv".to_string()),
                ("maxPrice".to_string(), "100".to_string())
            ]
        );
    }
}
