mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_list_categories_sorted_with_counts() {
    let app = TestApp::seeded().await;

    let resp = app.get("/api/categories").await;

    assert_eq!(resp.status, StatusCode::OK);
    let list = resp.body.as_array().unwrap();
    assert_eq!(list.len() as i64, app.seed.categories);
    let names: Vec<&str> = list.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Beverages", "Dairy & Eggs", "Dry Goods & Pantry", "Kitchen Supplies", "Produce", "Proteins"]
    );

    let count = |name: &str| {
        list.iter().find(|c| c["name"] == name).unwrap()["product_count"]
            .as_i64()
            .unwrap()
    };
    assert_eq!(count("Proteins"), 6);
    // Spinach is soft-deleted.
    assert_eq!(count("Produce"), 5);
    assert_eq!(count("Dry Goods & Pantry"), 4);
}

#[tokio::test]
async fn test_count_drops_after_soft_delete() {
    let app = TestApp::seeded().await;
    let id = app.product_id("Cold Brew Coffee Concentrate").await;

    app.send("DELETE", &format!("/api/products/{}", id), None).await;

    let resp = app.get("/api/categories").await;
    let beverages = resp
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Beverages")
        .unwrap()
        .clone();
    assert_eq!(beverages["product_count"], 3);
}

#[tokio::test]
async fn test_get_category() {
    let app = TestApp::seeded().await;

    let resp = app.get("/api/categories/1").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["name"], "Proteins");
    assert_eq!(resp.body["product_count"], 6);

    let missing = app.get("/api/categories/99999").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error(), "Category not found");
}
