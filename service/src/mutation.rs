use crate::{Query, ServiceError, ServiceResult};
use ::entity::{baked_good, bakery, prelude::*};
use sea_orm::*;

/// A baked good that has passed boundary decoding but not yet been stored.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i32>,
}

impl NewBakedGood {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            bakery_id: None,
        }
    }

    pub fn with_bakery(mut self, bakery_id: i32) -> Self {
        self.bakery_id = Some(bakery_id);
        self
    }

    fn validate(&self) -> ServiceResult<()> {
        if self.name.is_empty() {
            return Err(ServiceError::Validation(
                "Missing 'name' or 'price' in form data.".to_owned(),
            ));
        }
        // NaN and infinities cannot be stored in a REAL column
        if !self.price.is_finite() {
            return Err(ServiceError::Validation(
                "'price' must be a valid number.".to_owned(),
            ));
        }
        Ok(())
    }
}

pub struct Mutation;

impl Mutation {
    pub async fn create_baked_good(
        db: &DbConn,
        form_data: NewBakedGood,
    ) -> ServiceResult<baked_good::Model> {
        form_data.validate()?;

        if let Some(bakery_id) = form_data.bakery_id {
            Query::get_bakery(db, bakery_id).await?;
        }

        let baked_good = baked_good::ActiveModel {
            name: Set(form_data.name),
            price: Set(form_data.price),
            bakery_id: Set(form_data.bakery_id),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::debug!(id = baked_good.id, "created baked good");
        Ok(baked_good)
    }

    pub async fn delete_baked_good(db: &DbConn, id: i32) -> ServiceResult<()> {
        let res = BakedGood::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(ServiceError::baked_good_not_found(id));
        }

        tracing::debug!(id, "deleted baked good");
        Ok(())
    }

    /// Renames a bakery. A missing or empty name leaves the stored record as
    /// it is.
    pub async fn update_bakery_name(
        db: &DbConn,
        id: i32,
        name: Option<String>,
    ) -> ServiceResult<bakery::Model> {
        let bakery = Query::get_bakery(db, id).await?;

        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(bakery),
        };

        let mut bakery: bakery::ActiveModel = bakery.into();
        bakery.name = Set(name);
        let bakery = bakery.update(db).await?;

        tracing::debug!(id, "renamed bakery");
        Ok(bakery)
    }

    pub async fn create_bakery(db: &DbConn, name: &str) -> ServiceResult<bakery::Model> {
        let bakery = bakery::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(bakery)
    }
}
