//! End-to-end tests over the full router: catalog pages, creation form flow
//! and the administrative bulk action, against an in-memory store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use confiserie::ServerState;
use confiserie::core::build_router;
use confiserie::db::models::{CandyCreate, ManufacturerCreate};
use confiserie::db::repository::{
    CandyRepository, ManufacturerRepository, Repository, numeric_id,
};

async fn app() -> (Router, ServerState) {
    let state = ServerState::in_memory().await.unwrap();
    (build_router(state.clone()), state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn candy(name: &str, price: f64, weight: i64) -> CandyCreate {
    CandyCreate {
        name: name.into(),
        brand: "Haribo".into(),
        flavor: "strawberry".into(),
        price: Some(price),
        weight: Some(weight),
        manufacturer: None,
    }
}

#[tokio::test]
async fn detail_page_is_not_found_for_unknown_id() {
    let (app, _state) = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/view_one/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_page_renders_an_existing_candy() {
    let (app, state) = app().await;
    let repo = CandyRepository::new(state.db.clone());
    let created = repo.create(candy("Tagada", 2.5, 100)).await.unwrap();
    let id = numeric_id(created.id.as_ref().unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/view_one/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Tagada"));
    assert!(body.contains("Haribo"));
}

#[tokio::test]
async fn detail_page_shows_a_computed_price_per_kilo_of_zero() {
    let (app, state) = app().await;
    let repo = CandyRepository::new(state.db.clone());
    // free sample: price 0, weight 500 -> 0 per kilo, which is a value
    let created = repo.create(candy("Sample", 0.0, 500)).await.unwrap();
    let id = numeric_id(created.id.as_ref().unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/view_one/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(!body.contains("not available"), "{body}");
    assert!(body.contains("<dd>0</dd>"), "{body}");
}

#[tokio::test]
async fn detail_page_has_no_price_per_kilo_for_zero_weight() {
    let (app, state) = app().await;
    let repo = CandyRepository::new(state.db.clone());
    let created = repo.create(candy("Airy", 2.5, 0)).await.unwrap();
    let id = numeric_id(created.id.as_ref().unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/view_one/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("not available"), "{body}");
}

#[tokio::test]
async fn list_page_shows_every_candy() {
    let (app, state) = app().await;
    let repo = CandyRepository::new(state.db.clone());
    repo.create(candy("Tagada", 2.5, 100)).await.unwrap();
    repo.create(candy("Dragibus", 3.0, 250)).await.unwrap();

    let response = app
        .oneshot(Request::builder().uri("/view_all").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Tagada"));
    assert!(body.contains("Dragibus"));
}

#[tokio::test]
async fn creation_form_round_trip_with_flash_notification() {
    let (app, state) = app().await;

    // blank form renders
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/formulaire")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // valid submission: redirect home with a flash cookie
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/formulaire")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Tagada&brand=Haribo&flavor=strawberry&price=2.5&weight=100",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let flash_cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    // the record was persisted
    let repo = CandyRepository::new(state.db.clone());
    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].weight, 100);

    // the next page shows the one-time notification
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, flash_cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Candy successfully added"));
}

#[tokio::test]
async fn invalid_weight_re_renders_the_form_with_the_range_message() {
    let (app, state) = app().await;

    for weight in ["-1", "10001"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/formulaire")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(format!(
                        "name=Tagada&brand=Haribo&flavor=strawberry&price=2.5&weight={weight}"
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("between 0 and 10000 grams"));
        // submitted values come back for correction
        assert!(body.contains("Tagada"));
    }

    // nothing was persisted
    let repo = CandyRepository::new(state.db.clone());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn boundary_weights_are_accepted() {
    let (app, state) = app().await;

    for weight in ["0", "10000"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/formulaire")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(format!(
                        "name=Tagada&brand=Haribo&flavor=strawberry&price=2.5&weight={weight}"
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let repo = CandyRepository::new(state.db.clone());
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn form_rejects_a_manufacturer_id_that_does_not_exist() {
    let (app, state) = app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/formulaire")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Tagada&brand=Haribo&flavor=strawberry&price=2.5&weight=100&manufacturer=7",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Select a valid manufacturer."), "{body}");

    let repo = CandyRepository::new(state.db.clone());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn form_links_an_existing_manufacturer() {
    let (app, state) = app().await;
    let makers = ManufacturerRepository::new(state.db.clone());
    let maker = makers
        .create(ManufacturerCreate {
            name: "Haribo".into(),
            website: "https://www.haribo.com".into(),
            contact_email: "contact@haribo.com".into(),
            description: None,
        })
        .await
        .unwrap();
    let maker_id = numeric_id(maker.id.as_ref().unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/formulaire")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "name=Tagada&brand=Haribo&flavor=strawberry&price=2.5&weight=100&manufacturer={maker_id}"
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let repo = CandyRepository::new(state.db.clone());
    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].manufacturer.as_ref().map(numeric_id), Some(maker_id));
}

#[tokio::test]
async fn manufacturer_api_rejects_bad_contact_details() {
    let (app, _state) = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/manufacturers")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "name": "Haribo",
                        "website": "not a url",
                        "contact_email": "not-an-email",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn candy_api_misses_with_404() {
    let (app, _state) = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/candies/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_weight_reset_reports_the_affected_count() {
    let (app, state) = app().await;
    let repo = CandyRepository::new(state.db.clone());

    let mut ids = Vec::new();
    for i in 0..3 {
        let c = repo.create(candy(&format!("C{i}"), 1.0, 50)).await.unwrap();
        ids.push(numeric_id(c.id.as_ref().unwrap()));
    }

    let selection = &ids[..2];
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/candies/reset-weight")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "ids": selection }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["updated"], 2);

    for id in selection {
        assert_eq!(repo.find_by_id(*id).await.unwrap().unwrap().weight, 1000);
    }
    assert_eq!(repo.find_by_id(ids[2]).await.unwrap().unwrap().weight, 50);
}
