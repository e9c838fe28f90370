use bakery_service::{setup_schema, Mutation, NewBakedGood, Query, ServiceError};
use pretty_assertions::assert_eq;
use sea_orm::{Database, DatabaseConnection};

async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}

fn prices(goods: &[entity::baked_good::Model]) -> Vec<f64> {
    goods.iter().map(|good| good.price).collect()
}

#[tokio::test]
async fn create_and_delete_baked_good() {
    let db = &setup().await;

    let croissant = Mutation::create_baked_good(db, NewBakedGood::new("Croissant", 3.50))
        .await
        .unwrap();
    let baguette = Mutation::create_baked_good(db, NewBakedGood::new("Baguette", 2.25))
        .await
        .unwrap();

    assert_eq!(croissant.name, "Croissant");
    assert_eq!(croissant.price, 3.5);
    assert_ne!(croissant.id, baguette.id);

    Mutation::delete_baked_good(db, croissant.id).await.unwrap();
    assert!(Query::find_baked_good_by_id(db, croissant.id)
        .await
        .unwrap()
        .is_none());

    let err = Mutation::delete_baked_good(db, croissant.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let remaining = Query::list_baked_goods_by_price_desc(db).await.unwrap();
    assert_eq!(remaining, vec![baguette]);
}

#[tokio::test]
async fn rejected_input_leaves_storage_untouched() {
    let db = &setup().await;

    for input in [
        NewBakedGood::new("", 1.0),
        NewBakedGood::new("Scone", f64::NAN),
        NewBakedGood::new("Scone", f64::INFINITY),
    ] {
        let err = Mutation::create_baked_good(db, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    assert!(Query::list_baked_goods_by_price_desc(db)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() {
    let db = &setup().await;

    let first = Mutation::create_baked_good(db, NewBakedGood::new("Scone", 2.0))
        .await
        .unwrap();
    let second = Mutation::create_baked_good(db, NewBakedGood::new("Eclair", 4.5))
        .await
        .unwrap();
    assert!(second.id > first.id);

    Mutation::delete_baked_good(db, second.id).await.unwrap();

    let third = Mutation::create_baked_good(db, NewBakedGood::new("Danish", 3.0))
        .await
        .unwrap();
    assert!(third.id > second.id);
}

#[tokio::test]
async fn whitespace_names_are_stored_as_given() {
    let db = &setup().await;

    let good = Mutation::create_baked_good(db, NewBakedGood::new("   ", 1.0))
        .await
        .unwrap();
    assert_eq!(good.name, "   ");

    let bakery = Mutation::create_bakery(db, "SeaSide Bakery").await.unwrap();
    let renamed = Mutation::update_bakery_name(db, bakery.id, Some("   ".to_owned()))
        .await
        .unwrap();
    assert_eq!(renamed.name, "   ");
}

#[tokio::test]
async fn negative_and_zero_prices_are_accepted() {
    let db = &setup().await;

    let free = Mutation::create_baked_good(db, NewBakedGood::new("Sample", 0.0))
        .await
        .unwrap();
    let refund = Mutation::create_baked_good(db, NewBakedGood::new("Refund", -1.5))
        .await
        .unwrap();

    assert_eq!(free.price, 0.0);
    assert_eq!(refund.price, -1.5);
}

#[tokio::test]
async fn baked_goods_sorted_by_price_descending() {
    let db = &setup().await;

    for (name, price) in [
        ("Muffin", 2.0),
        ("Cake", 12.5),
        ("Cookie", 1.25),
        ("Tart", 12.5),
        ("Bagel", 2.0),
    ] {
        Mutation::create_baked_good(db, NewBakedGood::new(name, price))
            .await
            .unwrap();
    }

    let goods = Query::list_baked_goods_by_price_desc(db).await.unwrap();
    assert_eq!(prices(&goods), vec![12.5, 12.5, 2.0, 2.0, 1.25]);
    assert!(goods.windows(2).all(|pair| pair[0].price >= pair[1].price));

    // equal prices keep insertion order
    let names: Vec<_> = goods.iter().map(|good| good.name.as_str()).collect();
    assert_eq!(names, vec!["Cake", "Tart", "Muffin", "Bagel", "Cookie"]);

    let most_expensive = Query::most_expensive_baked_good(db).await.unwrap();
    assert_eq!(most_expensive, goods[0]);
}

#[tokio::test]
async fn most_expensive_on_empty_table_is_not_found() {
    let db = &setup().await;

    let err = Query::most_expensive_baked_good(db).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn bakery_lookup_and_rename() {
    let db = &setup().await;

    let seaside = Mutation::create_bakery(db, "SeaSide Bakery").await.unwrap();
    let lakeside = Mutation::create_bakery(db, "LakeSide Bakery").await.unwrap();

    assert_eq!(
        Query::list_bakeries(db).await.unwrap(),
        vec![seaside.clone(), lakeside.clone()]
    );
    assert_eq!(Query::get_bakery(db, seaside.id).await.unwrap(), seaside);

    let unchanged = Mutation::update_bakery_name(db, seaside.id, None)
        .await
        .unwrap();
    assert_eq!(unchanged, seaside);

    let unchanged = Mutation::update_bakery_name(db, seaside.id, Some(String::new()))
        .await
        .unwrap();
    assert_eq!(unchanged, seaside);

    let renamed = Mutation::update_bakery_name(db, seaside.id, Some("Harbour Bakery".to_owned()))
        .await
        .unwrap();
    assert_eq!(renamed.id, seaside.id);
    assert_eq!(renamed.name, "Harbour Bakery");
    assert_eq!(Query::get_bakery(db, seaside.id).await.unwrap(), renamed);

    let missing = lakeside.id + 100;
    assert!(matches!(
        Query::get_bakery(db, missing).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        Mutation::update_bakery_name(db, missing, Some("Ghost".to_owned()))
            .await
            .unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[tokio::test]
async fn baked_goods_belong_to_bakery() {
    let db = &setup().await;

    let bakery = Mutation::create_bakery(db, "SeaSide Bakery").await.unwrap();
    let other = Mutation::create_bakery(db, "LakeSide Bakery").await.unwrap();

    let cake = Mutation::create_baked_good(
        db,
        NewBakedGood::new("Mud Cake", 10.25).with_bakery(bakery.id),
    )
    .await
    .unwrap();
    Mutation::create_baked_good(db, NewBakedGood::new("Rye", 4.0).with_bakery(other.id))
        .await
        .unwrap();

    assert_eq!(cake.bakery_id, Some(bakery.id));
    assert_eq!(
        Query::list_baked_goods_for_bakery(db, bakery.id)
            .await
            .unwrap(),
        vec![cake]
    );

    let err = Mutation::create_baked_good(db, NewBakedGood::new("Orphan", 1.0).with_bakery(999))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
