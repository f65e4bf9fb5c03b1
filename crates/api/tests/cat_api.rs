//! Integration tests for the `/cats` resource.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_cat_returns_201_with_derived_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/cats", common::cat_payload("Whiskers")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_i64());
    assert_eq!(json["name"], "Whiskers");
    assert_eq!(json["years_of_experience"], 3);
    assert_eq!(json["breed"], "Siamese");
    assert_eq!(json["salary"], 1500.0);
    assert_eq!(json["is_available"], true);
    assert!(json["current_mission_id"].is_null());
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn breed_match_is_case_insensitive(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = common::cat_payload("Shadow");
    payload["breed"] = json!("maine coon");

    let response = post_json(app, "/api/v1/cats", payload).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_cat_with_unknown_breed_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let mut payload = common::cat_payload("Tom");
    payload["breed"] = json!("Dragon");

    let response = post_json(app, "/api/v1/cats", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BREED");
    assert_eq!(json["field"], "breed");

    let listed = body_json(get(build_test_app(pool), "/api/v1/cats").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_cat_when_oracle_is_down_is_unavailable(pool: PgPool) {
    let app = common::build_test_app_with_oracle(pool, common::StubBreeds::unreachable());

    let response = post_json(app, "/api/v1/cats", common::cat_payload("Tom")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_UNAVAILABLE");
    assert_eq!(json["field"], "breed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_fields_are_rejected(pool: PgPool) {
    let cases = [
        ("years_of_experience", json!(21)),
        ("years_of_experience", json!(-1)),
        ("salary", json!(-0.01)),
        ("salary", json!(1_000_000.01)),
        ("name", json!("")),
        ("name", json!("   ")),
        ("name", json!("x".repeat(101))),
    ];

    for (field, value) in cases {
        let mut payload = common::cat_payload("Felix");
        payload[field] = value.clone();

        let response = post_json(build_test_app(pool.clone()), "/api/v1/cats", payload).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{field} = {value} should be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "OUT_OF_RANGE");
        assert_eq!(json["field"], field);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn boundary_values_are_accepted(pool: PgPool) {
    let mut payload = common::cat_payload("Edge");
    payload["years_of_experience"] = json!(20);
    payload["salary"] = json!(1_000_000);

    let response = post_json(build_test_app(pool.clone()), "/api/v1/cats", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut payload = common::cat_payload("Rookie");
    payload["years_of_experience"] = json!(0);
    payload["salary"] = json!(0);

    let response = post_json(build_test_app(pool), "/api/v1/cats", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_cats_is_ordered_by_id(pool: PgPool) {
    let first = common::create_cat(&pool, "A").await;
    let second = common::create_cat(&pool, "B").await;

    let json = body_json(get(build_test_app(pool), "/api/v1/cats").await).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_cat_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/cats/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cat_on_active_mission_is_unavailable(pool: PgPool) {
    let cat = common::create_cat(&pool, "Agent").await;
    let mission = common::create_mission(&pool, Some(cat), 1).await;

    let json = body_json(get(build_test_app(pool), &format!("/api/v1/cats/{cat}")).await).await;

    assert_eq!(json["is_available"], false);
    assert_eq!(json["current_mission_id"], mission["id"]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_salary_keeps_other_fields(pool: PgPool) {
    let cat = common::create_cat(&pool, "Garfield").await;

    let response = patch_json(
        build_test_app(pool),
        &format!("/api/v1/cats/{cat}"),
        json!({ "salary": 2500.5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["salary"], 2500.5);
    assert_eq!(json["name"], "Garfield");
    assert_eq!(json["breed"], "Siamese");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_ignores_derived_fields(pool: PgPool) {
    let cat = common::create_cat(&pool, "Sly").await;

    let response = patch_json(
        build_test_app(pool),
        &format!("/api/v1/cats/{cat}"),
        json!({ "is_available": false, "current_mission_id": 7, "years_of_experience": 5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["is_available"], true);
    assert!(json["current_mission_id"].is_null());
    assert_eq!(json["years_of_experience"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_out_of_range_leaves_cat_unchanged(pool: PgPool) {
    let cat = common::create_cat(&pool, "Stubborn").await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/cats/{cat}"),
        json!({ "years_of_experience": 25 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(build_test_app(pool), &format!("/api/v1/cats/{cat}")).await).await;
    assert_eq!(json["years_of_experience"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_breed_is_checked_against_oracle(pool: PgPool) {
    let cat = common::create_cat(&pool, "Morph").await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/cats/{cat}"),
        json!({ "breed": "Unicorn" }),
    )
    .await;
    assert_eq!(body_json(response).await["code"], "INVALID_BREED");

    let response = patch_json(
        build_test_app(pool),
        &format!("/api/v1/cats/{cat}"),
        json!({ "breed": "Bengal" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["breed"], "Bengal");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_without_breed_skips_oracle(pool: PgPool) {
    let cat = common::create_cat(&pool, "Offline").await;
    let app = common::build_test_app_with_oracle(pool, common::StubBreeds::unreachable());

    let response = patch_json(app, &format!("/api/v1/cats/{cat}"), json!({ "salary": 10 })).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_missing_cat_returns_404(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool),
        "/api/v1/cats/424242",
        json!({ "salary": 10 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_replaces_every_field(pool: PgPool) {
    let cat = common::create_cat(&pool, "Before").await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/cats/{cat}"),
        json!({
            "name": "After",
            "years_of_experience": 10,
            "breed": "Persian",
            "salary": 9000,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "After");
    assert_eq!(json["years_of_experience"], 10);
    assert_eq!(json["breed"], "Persian");
    assert_eq!(json["salary"], 9000.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_with_missing_field_names_it(pool: PgPool) {
    let cat = common::create_cat(&pool, "Partial").await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/cats/{cat}"),
        json!({ "salary": 9000 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["field"].is_string());
}

// ---------------------------------------------------------------------------
// Undecodable bodies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_required_field_is_400_naming_it(pool: PgPool) {
    let mut payload = common::cat_payload("NoPay");
    payload.as_object_mut().unwrap().remove("salary");

    let response = post_json(build_test_app(pool), "/api/v1/cats", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["field"], "salary");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrongly_typed_field_is_400_naming_it(pool: PgPool) {
    let mut payload = common::cat_payload("Greedy");
    payload["salary"] = json!("lots");

    let response = post_json(build_test_app(pool), "/api/v1/cats", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["field"], "salary");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn integer_overflow_is_out_of_range(pool: PgPool) {
    let mut payload = common::cat_payload("Methuselah");
    payload["years_of_experience"] = json!(3_000_000_000u64);

    let response = post_json(build_test_app(pool), "/api/v1/cats", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "OUT_OF_RANGE");
    assert_eq!(json["field"], "years_of_experience");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_with_wrong_type_is_400(pool: PgPool) {
    let cat = common::create_cat(&pool, "Typed").await;

    let response = patch_json(
        build_test_app(pool),
        &format!("/api/v1/cats/{cat}"),
        json!({ "years_of_experience": "many" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "years_of_experience");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cat_returns_204_then_404(pool: PgPool) {
    let cat = common::create_cat(&pool, "Gone").await;
    let uri = format!("/api/v1/cats/{cat}");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_assigned_cat_unassigns_its_mission(pool: PgPool) {
    let cat = common::create_cat(&pool, "Retired").await;
    let mission = common::create_mission(&pool, Some(cat), 2).await;
    let mission_id = mission["id"].as_i64().unwrap();

    let response = delete(build_test_app(pool.clone()), &format!("/api/v1/cats/{cat}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &format!("/api/v1/missions/{mission_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["cat"].is_null());
    assert_eq!(json["is_complete"], false);
    assert_matches!(json["targets"].as_array(), Some(targets) if targets.len() == 2);
}
