//! Typed request bodies. Raw form fields are decoded here and only validated
//! values travel on to the service layer.

use crate::error::ApiError;
use bakery_service::NewBakedGood;
use serde::Deserialize;

const MISSING_FIELDS: &str = "Missing 'name' or 'price' in form data.";
const INVALID_PRICE: &str = "'price' must be a valid number.";

#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct CreateBakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl From<Vec<(String, String)>> for CreateBakedGoodForm {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            name: first_value(&pairs, "name"),
            price: first_value(&pairs, "price"),
        }
    }
}

impl CreateBakedGoodForm {
    pub fn validate(self) -> Result<NewBakedGood, ApiError> {
        let (name, price) = match (non_empty(self.name), non_empty(self.price)) {
            (Some(name), Some(price)) => (name, price),
            _ => return Err(ApiError::BadRequest(MISSING_FIELDS.to_owned())),
        };

        let price: f64 = price
            .trim()
            .parse()
            .map_err(|_| ApiError::BadRequest(INVALID_PRICE.to_owned()))?;
        if !price.is_finite() {
            return Err(ApiError::BadRequest(INVALID_PRICE.to_owned()));
        }

        Ok(NewBakedGood::new(name, price))
    }

    pub(crate) fn missing() -> ApiError {
        ApiError::BadRequest(MISSING_FIELDS.to_owned())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct UpdateBakeryForm {
    pub name: Option<String>,
}

impl From<Vec<(String, String)>> for UpdateBakeryForm {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            name: first_value(&pairs, "name"),
        }
    }
}

impl UpdateBakeryForm {
    /// The new name, if one was supplied.
    pub fn into_name(self) -> Option<String> {
        non_empty(self.name)
    }
}

// Repeated fields keep their first occurrence; unknown fields are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.clone())
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
