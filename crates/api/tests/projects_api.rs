//! HTTP-level integration tests for the project catalog API.

mod common;

use axum::http::StatusCode;
use common::{body_json, data_ids, get};

// ---------------------------------------------------------------------------
// Listing and filtering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_without_category_returns_whole_catalog_in_order() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let ids = data_ids(&body_json(response).await);
    assert_eq!(ids.len(), 8);
    assert_eq!(ids[0], "palm-jumeirah-villa");
    assert_eq!(ids[7], "yas-island-master-closet");
}

#[tokio::test]
async fn list_all_category_matches_unfiltered() {
    let all = data_ids(&body_json(get(common::build_test_app(), "/api/v1/projects?category=All").await).await);
    let unfiltered = data_ids(&body_json(get(common::build_test_app(), "/api/v1/projects").await).await);
    assert_eq!(all, unfiltered);
}

#[tokio::test]
async fn list_closets_returns_exact_subsequence() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects?category=Closets").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        data_ids(&body_json(response).await),
        vec!["al-raha-gardens-closet", "yas-island-master-closet"]
    );
}

#[tokio::test]
async fn list_multi_word_category() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects?category=Media%20Units").await;

    assert_eq!(
        data_ids(&body_json(response).await),
        vec!["al-barsha-entertainment-room"]
    );
}

#[tokio::test]
async fn list_unknown_category_is_empty_not_an_error() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects?category=Gardens").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(data_ids(&body_json(response).await).is_empty());
}

#[tokio::test]
async fn list_category_match_is_case_sensitive() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects?category=kitchens").await;

    assert!(data_ids(&body_json(response).await).is_empty());
}

#[tokio::test]
async fn categories_list_all_first() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/projects/categories").await).await;

    let categories = json["data"].as_array().unwrap();
    assert_eq!(categories.len(), 7);
    assert_eq!(categories[0], "All");
    assert_eq!(categories[6], "Media Units");
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_project_returns_camel_case_record() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects/palm-jumeirah-villa").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["title"], "The Palm Jumeirah Villa");
    assert_eq!(data["category"], "Renovation");
    assert_eq!(data["galleryImages"].as_array().unwrap().len(), 2);
    assert_eq!(data["testimonial"]["author"], "Ahmed Al Maktoum");
}

#[tokio::test]
async fn get_project_without_testimonial_has_null() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/projects/jumeirah-beach-residence").await).await;

    assert!(json["data"]["testimonial"].is_null());
}

#[tokio::test]
async fn get_nonexistent_project_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects/nonexistent-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id nonexistent-id not found");
}

#[tokio::test]
async fn get_project_id_is_case_sensitive() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects/Palm-Jumeirah-Villa").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Related projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn related_for_sole_renovation_pads_from_catalog_start() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects/palm-jumeirah-villa/related").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        data_ids(&body_json(response).await),
        vec![
            "emirates-hills-kitchen",
            "al-raha-gardens-closet",
            "jumeirah-beach-residence"
        ]
    );
}

#[tokio::test]
async fn related_for_kitchen_lists_other_kitchen_first() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects/emirates-hills-kitchen/related").await;

    assert_eq!(
        data_ids(&body_json(response).await),
        vec![
            "arabian-ranches-kitchen",
            "palm-jumeirah-villa",
            "al-raha-gardens-closet"
        ]
    );
}

#[tokio::test]
async fn related_never_includes_current_project() {
    for id in ["yas-island-master-closet", "al-barsha-entertainment-room"] {
        let app = common::build_test_app();
        let json = body_json(get(app, &format!("/api/v1/projects/{id}/related")).await).await;
        let ids = data_ids(&json);
        assert_eq!(ids.len(), 3);
        assert!(!ids.iter().any(|r| r == id));
    }
}

#[tokio::test]
async fn related_for_unknown_project_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/projects/nonexistent-id/related").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
