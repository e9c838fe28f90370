use crate::{ServiceError, ServiceResult};
use ::entity::{baked_good, bakery, prelude::*};
use sea_orm::*;

pub struct Query;

impl Query {
    pub async fn list_bakeries(db: &DbConn) -> ServiceResult<Vec<bakery::Model>> {
        tracing::debug!("listing bakeries");
        let bakeries = Bakery::find()
            .order_by_asc(bakery::Column::Id)
            .all(db)
            .await?;
        Ok(bakeries)
    }

    pub async fn find_bakery_by_id(db: &DbConn, id: i32) -> ServiceResult<Option<bakery::Model>> {
        Ok(Bakery::find_by_id(id).one(db).await?)
    }

    /// Like [`Query::find_bakery_by_id`], but an absent bakery is an error.
    pub async fn get_bakery(db: &DbConn, id: i32) -> ServiceResult<bakery::Model> {
        tracing::debug!(id, "fetching bakery");
        Self::find_bakery_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::bakery_not_found(id))
    }

    pub async fn find_baked_good_by_id(
        db: &DbConn,
        id: i32,
    ) -> ServiceResult<Option<baked_good::Model>> {
        Ok(BakedGood::find_by_id(id).one(db).await?)
    }

    /// Every baked good, highest price first. Equal prices keep insertion
    /// order.
    pub async fn list_baked_goods_by_price_desc(
        db: &DbConn,
    ) -> ServiceResult<Vec<baked_good::Model>> {
        tracing::debug!("listing baked goods by price");
        Ok(Self::by_price_desc().all(db).await?)
    }

    pub async fn most_expensive_baked_good(db: &DbConn) -> ServiceResult<baked_good::Model> {
        tracing::debug!("fetching most expensive baked good");
        Self::by_price_desc()
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("No baked goods found.".to_owned()))
    }

    pub async fn list_baked_goods_for_bakery(
        db: &DbConn,
        bakery_id: i32,
    ) -> ServiceResult<Vec<baked_good::Model>> {
        let bakery = Self::get_bakery(db, bakery_id).await?;
        let goods = bakery
            .find_related(BakedGood)
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await?;
        Ok(goods)
    }

    fn by_price_desc() -> Select<BakedGood> {
        BakedGood::find()
            .order_by_desc(baked_good::Column::Price)
            .order_by_asc(baked_good::Column::Id)
    }
}
