use bakery_api::Config;
use bakery_service::{sea_orm::Database, setup_schema, Mutation, NewBakedGood, Query};

const BAKERIES: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful donuts",
        &[("Chocolate dipped donut", 2.75), ("Apple-spice filled donut", 3.50)],
    ),
    (
        "Incredible crullers",
        &[("Glazed honey cruller", 3.25), ("Chocolate cruller", 100.00)],
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = Database::connect(config.database_url.as_str()).await?;
    setup_schema(&db).await?;

    for (bakery_name, goods) in BAKERIES {
        let bakery = Mutation::create_bakery(&db, bakery_name).await?;
        for (name, price) in goods.iter() {
            let good = NewBakedGood::new(*name, *price).with_bakery(bakery.id);
            Mutation::create_baked_good(&db, good).await?;
        }

        let count = Query::list_baked_goods_for_bakery(&db, bakery.id).await?.len();
        tracing::info!(bakery = %bakery.name, baked_goods = count, "seeded bakery");
    }

    Ok(())
}
