mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

// Collection-query coverage: paging, ordering, filtering, and the paged
// document invariants.

async fn seed(server: &common::TestServer, homes: &[(&str, &str)]) -> Result<()> {
    let client = reqwest::Client::new();
    for (name, home_type) in homes {
        let res = client
            .post(format!("{}/api/homes", server.base_url))
            .json(&json!({ "name": name, "type": home_type }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED, "seeding {}", name);
    }
    Ok(())
}

#[tokio::test]
async fn paged_document_carries_items_total_page_and_rows() -> Result<()> {
    let server = common::spawn_server().await?;
    seed(
        &server,
        &[("Aspen", "single"), ("Birch", "condo"), ("Cedar", "single")],
    )
    .await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?rows=2", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let doc = res.json::<Value>().await?;
    let items = doc["items"].as_array().expect("items array");
    let total = doc["total"].as_u64().expect("total");

    assert!(items.len() <= 2, "items must respect rows per page");
    assert!(total >= items.len() as u64, "total bounds the page");
    assert_eq!(doc["page"], 1);
    assert_eq!(doc["rowsPerPage"], 2);

    Ok(())
}

#[tokio::test]
async fn second_page_returns_the_remainder() -> Result<()> {
    let server = common::spawn_server().await?;
    seed(
        &server,
        &[("Aspen", "single"), ("Birch", "condo"), ("Cedar", "single")],
    )
    .await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/homes?rows=2&page=2&orderBy=name",
            server.base_url
        ))
        .send()
        .await?;
    let doc = res.json::<Value>().await?;

    let items = doc["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Cedar");
    assert_eq!(doc["total"], 3);
    assert_eq!(doc["page"], 2);

    Ok(())
}

#[tokio::test]
async fn order_by_name_descending() -> Result<()> {
    let server = common::spawn_server().await?;
    seed(
        &server,
        &[("Aspen", "single"), ("Cedar", "single"), ("Birch", "condo")],
    )
    .await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?orderBy=name,desc", server.base_url))
        .send()
        .await?;
    let doc = res.json::<Value>().await?;

    let names: Vec<&str> = doc["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|h| h["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Cedar", "Birch", "Aspen"]);

    Ok(())
}

#[tokio::test]
async fn filter_by_type_membership() -> Result<()> {
    let server = common::spawn_server().await?;
    seed(
        &server,
        &[("Aspen", "single"), ("Birch", "condo"), ("Cedar", "single")],
    )
    .await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?type=condo", server.base_url))
        .send()
        .await?;
    let doc = res.json::<Value>().await?;

    let items = doc["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Birch");
    assert_eq!(doc["total"], 1);

    Ok(())
}

#[tokio::test]
async fn name_filter_is_a_partial_match() -> Result<()> {
    let server = common::spawn_server().await?;
    seed(&server, &[("Lake House", "single"), ("Beach Hut", "condo")]).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?name=lake", server.base_url))
        .send()
        .await?;
    let doc = res.json::<Value>().await?;

    let items = doc["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Lake House");

    Ok(())
}

#[tokio::test]
async fn unrecognized_filter_parameters_are_ignored() -> Result<()> {
    let server = common::spawn_server().await?;
    seed(&server, &[("Lake House", "single")]).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?color=blue", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["total"], 1);

    Ok(())
}

#[tokio::test]
async fn page_zero_fails_validation() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?page=0", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["field_errors"]["page"].is_string());

    Ok(())
}

#[tokio::test]
async fn rows_above_the_ceiling_fail_validation() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?rows=100000", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["field_errors"]["rows"].is_string());

    Ok(())
}

#[tokio::test]
async fn order_field_outside_allow_list_fails_validation() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?orderBy=bogus,asc", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["field_errors"]["orderBy"].is_string());

    Ok(())
}

#[tokio::test]
async fn malformed_filter_id_names_the_parameter() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes?id=not-a-valid-id", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["field_errors"]["id"], "ID is not in its proper form");

    Ok(())
}

#[tokio::test]
async fn empty_collection_yields_an_empty_page() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/homes", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let doc = res.json::<Value>().await?;
    assert_eq!(doc["items"], json!([]));
    assert_eq!(doc["total"], 0);
    assert_eq!(doc["page"], 1);

    Ok(())
}
