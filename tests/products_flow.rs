mod common;

use deal_curator::{
    dto::products::{CreateProductRequest, ManualProductRequest, UpdateProductRequest},
    entity::products,
    error::AppError,
    services::product_service,
};
use uuid::Uuid;

fn manual(amazon_id: &str) -> ManualProductRequest {
    ManualProductRequest {
        amazon_id: Some(amazon_id.into()),
        title: Some("Handpicked kettle".into()),
        image: Some("https://example.com/kettle.jpg".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn duplicate_amazon_id_conflicts_without_writing() {
    let db = common::mock()
        .append_query_results([vec![common::product("B08N5WRWNW")]])
        .into_connection();
    let state = common::state(db);

    let err = product_service::create_manual(&state, &common::admin(), manual("B08N5WRWNW"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let statements = common::statements(state);
    assert_eq!(statements.len(), 1, "only the lookup may run: {statements:?}");
    assert!(statements[0].contains("SELECT"));
}

#[tokio::test]
async fn duplicate_catalog_product_conflicts_without_writing() {
    let db = common::mock()
        .append_query_results([vec![common::product("B0B7BP6CJN")]])
        .into_connection();
    let state = common::state(db);

    let err = product_service::create_from_catalog(
        &state,
        &common::admin(),
        CreateProductRequest {
            amazon_id: Some("B0B7BP6CJN".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(common::statements(state).len(), 1);
}

#[tokio::test]
async fn manual_product_without_link_gets_tagged_product_page() {
    let stored = common::product("B000KETTLE");
    let db = common::mock()
        .append_query_results([Vec::<products::Model>::new(), vec![stored.clone()]])
        .into_connection();
    let state = common::state(db);

    let product = product_service::create_manual(&state, &common::admin(), manual("B000KETTLE"))
        .await
        .unwrap();
    assert_eq!(product.id, stored.id);
    assert_eq!(product.amazon_id, "B000KETTLE");

    let statements = common::statements(state);
    assert_eq!(statements.len(), 2);
    assert!(statements[1].contains("INSERT"));
    assert!(statements[1].contains("https://amazon.de/dp/B000KETTLE?tag=50674-21"));
    assert!(statements[1].contains("Allgemein"));
}

#[tokio::test]
async fn manual_product_link_is_tagged() {
    let db = common::mock()
        .append_query_results([
            Vec::<products::Model>::new(),
            vec![common::product("B000KETTLE")],
        ])
        .into_connection();
    let state = common::state(db);

    let request = ManualProductRequest {
        link: Some("https://amazon.de/dp/B000KETTLE?th=1".into()),
        ..manual("B000KETTLE")
    };
    product_service::create_manual(&state, &common::admin(), request)
        .await
        .unwrap();

    let statements = common::statements(state);
    assert!(statements[1].contains("https://amazon.de/dp/B000KETTLE?th=1&tag=50674-21"));
}

#[tokio::test]
async fn manual_product_requires_core_fields() {
    let state = common::state(common::mock().into_connection());

    let request = ManualProductRequest {
        image: None,
        ..manual("B000KETTLE")
    };
    let err = product_service::create_manual(&state, &common::admin(), request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(common::statements(state).is_empty());
}

#[tokio::test]
async fn catalog_product_requires_amazon_id() {
    let state = common::state(common::mock().into_connection());

    let err = product_service::create_from_catalog(
        &state,
        &common::admin(),
        CreateProductRequest {
            amazon_id: Some("   ".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(common::statements(state).is_empty());
}

#[tokio::test]
async fn catalog_product_is_inserted_with_listing_data() {
    let db = common::mock()
        .append_query_results([
            Vec::<products::Model>::new(),
            vec![common::product("B09JQSZ5QR")],
        ])
        .into_connection();
    let state = common::state(db);

    product_service::create_from_catalog(
        &state,
        &common::admin(),
        CreateProductRequest {
            amazon_id: Some("B09JQSZ5QR".into()),
        },
    )
    .await
    .unwrap();

    let statements = common::statements(state);
    assert!(statements[1].contains("Ninja Foodi Personal Blender"));
    assert!(statements[1].contains("https://amazon.de/dp/B09JQSZ5QR?tag=50674-21"));
}

#[tokio::test]
async fn deleting_missing_product_is_not_found() {
    let db = common::mock()
        .append_exec_results([common::exec(0)])
        .into_connection();
    let state = common::state(db);

    let err = product_service::delete_product(&state, &common::admin(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn deleting_existing_product_reports_success() {
    let db = common::mock()
        .append_exec_results([common::exec(1)])
        .into_connection();
    let state = common::state(db);

    let resp = product_service::delete_product(&state, &common::admin(), Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(resp.message, "Product deleted successfully");
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let db = common::mock()
        .append_query_results([Vec::<products::Model>::new()])
        .into_connection();
    let state = common::state(db);

    let err = product_service::get_product(&state, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn update_rejects_unknown_status_before_querying() {
    let state = common::state(common::mock().into_connection());

    let request = UpdateProductRequest {
        status: Some("archived".into()),
        ..Default::default()
    };
    let err = product_service::update_product(&state, &common::admin(), Uuid::new_v4(), request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(common::statements(state).is_empty());
}

#[tokio::test]
async fn update_tags_new_link() {
    let existing = common::product("B08N5WRWNW");
    let db = common::mock()
        .append_query_results([vec![existing.clone()], vec![existing.clone()]])
        .into_connection();
    let state = common::state(db);

    let request = UpdateProductRequest {
        link: Some("https://amazon.de/dp/B08N5WRWNW?psc=1".into()),
        status: Some("inactive".into()),
        ..Default::default()
    };
    product_service::update_product(&state, &common::admin(), existing.id, request)
        .await
        .unwrap();

    let statements = common::statements(state);
    assert_eq!(statements.len(), 2);
    assert!(statements[1].contains("UPDATE"));
    assert!(statements[1].contains("https://amazon.de/dp/B08N5WRWNW?psc=1&tag=50674-21"));
    assert!(statements[1].contains("inactive"));
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() {
    let db = common::mock()
        .append_query_results([Vec::<products::Model>::new()])
        .into_connection();
    let state = common::state(db);

    let err = product_service::update_product(
        &state,
        &common::admin(),
        Uuid::new_v4(),
        UpdateProductRequest::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn storefront_lists_transformed_products() {
    let db = common::mock()
        .append_query_results([vec![
            common::product("B08N5WRWNW"),
            common::product("B0B7BP6CJN"),
        ]])
        .into_connection();
    let state = common::state(db);

    let list = product_service::list_active_products(&state).await.unwrap();
    let ids: Vec<&str> = list.items.iter().map(|p| p.amazon_id.as_str()).collect();
    assert_eq!(ids, ["B08N5WRWNW", "B0B7BP6CJN"]);
    assert_eq!(list.items[0].original_price.as_deref(), Some("29,99€"));
    assert!(list.items[0].link.ends_with("?tag=50674-21"));
}

#[tokio::test]
async fn click_returns_new_count() {
    let mut clicked = common::product("B08N5WRWNW");
    clicked.click_count = 4;
    let db = common::mock()
        .append_query_results([vec![clicked.clone()]])
        .into_connection();
    let state = common::state(db);

    let resp = product_service::track_click(&state, &clicked.id.to_string()).await;
    assert!(resp.success);
    assert_eq!(resp.click_count, Some(4));
}

#[tokio::test]
async fn click_tracking_failure_is_swallowed() {
    // No prepared results: the mock database errors on the update.
    let state = common::state(common::mock().into_connection());

    let resp = product_service::track_click(&state, &Uuid::new_v4().to_string()).await;
    assert!(resp.success);
    assert_eq!(resp.click_count, None);
}

#[tokio::test]
async fn click_with_malformed_id_skips_the_database() {
    let state = common::state(common::mock().into_connection());

    let resp = product_service::track_click(&state, "not-a-uuid").await;
    assert!(resp.success);
    assert_eq!(resp.click_count, None);
    assert!(common::statements(state).is_empty());
}

#[tokio::test]
async fn padded_amazon_id_matches_catalog_and_duplicate_check() {
    let db = common::mock()
        .append_query_results([
            Vec::<products::Model>::new(),
            vec![common::product("B09JQSZ5QR")],
        ])
        .into_connection();
    let state = common::state(db);

    product_service::create_from_catalog(
        &state,
        &common::admin(),
        CreateProductRequest {
            amazon_id: Some("  B09JQSZ5QR \t".into()),
        },
    )
    .await
    .unwrap();

    let statements = common::statements(state);
    assert!(statements[0].contains("\"B09JQSZ5QR\""));
    assert!(statements[1].contains("\"B09JQSZ5QR\""));
    assert!(!statements[1].contains("  B09JQSZ5QR"));
    assert!(statements[1].contains("Ninja Foodi Personal Blender"));
}
