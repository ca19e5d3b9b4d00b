//! Integration tests for the meetings API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::test_utils::{
        body_to_string, drop_table, seed_attendee, seed_meeting, seed_override, test_app, ts,
    };

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = body_to_string(response.into_body()).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    /// Tests a meeting is found in slot 1 with no override
    #[tokio::test]
    async fn it_finds_a_simple_match() {
        let (app, db) = test_app().await;
        seed_meeting(
            &db,
            "Acme (Jane)",
            "Beta Corp",
            "2025-08-20T14:00:00Z",
            "2025-08-20T14:30:00Z",
        )
        .await;

        let (status, body) = get_json(app, "/api/meetings?firmandname=Acme%20(Jane)").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["search_key"], "Acme (Jane)");
        assert_eq!(body["error"], Value::Null);
        let meetings = body["meetings"].as_array().unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0]["currentUserIsAttendee"], "attendee1");
        assert_eq!(meetings[0]["attendee2_firmandname"], "Beta Corp");
        assert_eq!(meetings[0]["start_time"], "2025-08-20T14:00:00Z");
    }

    /// Tests the override table redirects the search
    #[tokio::test]
    async fn it_searches_with_override_key() {
        let (app, db) = test_app().await;
        seed_override(&db, "Acme (Jane)", "Acme Corp").await;
        seed_meeting(
            &db,
            "Beta Corp",
            "Acme Corp",
            "2025-08-20T15:00:00Z",
            "2025-08-20T15:30:00Z",
        )
        .await;

        let (status, body) = get_json(app, "/api/meetings?firmandname=Acme%20(Jane)").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["search_key"], "Acme Corp");
        let meetings = body["meetings"].as_array().unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0]["currentUserIsAttendee"], "attendee2");
    }

    /// Tests looking up meetings by attendee email
    #[tokio::test]
    async fn it_finds_meetings_by_email() {
        let (app, db) = test_app().await;
        seed_attendee(&db, "jane@acme.com", "Acme (Jane)", "Investor").await;
        seed_meeting(
            &db,
            "Beta Corp",
            "Acme (Jane)",
            "2025-08-21T14:00:00Z",
            "2025-08-21T14:30:00Z",
        )
        .await;

        let (status, body) = get_json(app, "/api/meetings?email=jane@acme.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meetings"].as_array().unwrap().len(), 1);
    }

    /// Tests a valid key with no meetings returns an empty list
    #[tokio::test]
    async fn it_returns_empty_list_without_meetings() {
        let (app, _db) = test_app().await;

        let (status, body) = get_json(app, "/api/meetings?firmandname=Nobody").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meetings"], serde_json::json!([]));
        assert_eq!(body["error"], Value::Null);
    }

    /// Tests missing identity is not an error
    #[tokio::test]
    async fn it_returns_empty_list_without_identity() {
        let (app, _db) = test_app().await;

        let (status, body) = get_json(app.clone(), "/api/meetings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["search_key"], Value::Null);
        assert_eq!(body["meetings"], serde_json::json!([]));

        let (status, body) = get_json(app, "/api/meetings?email=unknown@test.com").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meetings"], serde_json::json!([]));
    }

    /// Tests a failed meetings lookup is reported rather than shown as
    /// an empty schedule
    #[tokio::test]
    async fn it_returns_502_when_lookup_fails() {
        let (app, db) = test_app().await;
        drop_table(&db, "meetings").await;

        let (status, body) = get_json(app, "/api/meetings?firmandname=Acme").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().contains("attendee1"));
        assert_eq!(body["meetings"], serde_json::json!([]));
    }

    /// Tests creating a meeting
    #[tokio::test]
    async fn it_creates_a_meeting() {
        let (app, _db) = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/meetings")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "attendee1_firmandname": "Acme (Jane)",
                            "attendee2_firmandname": "Beta Corp",
                            "table_number": 9,
                            "start_time": "2025-08-20T14:00:00Z",
                            "end_time": "2025-08-20T14:30:00Z"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let (_, body) = get_json(app, "/api/meetings?firmandname=Beta%20Corp").await;
        let meetings = body["meetings"].as_array().unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0]["table_number"], 9);
        assert_eq!(meetings[0]["currentUserIsAttendee"], "attendee2");
    }

    /// Tests the created meeting matches the stored one down to sub-second times
    #[tokio::test]
    async fn it_returns_the_stored_meeting_on_create() {
        let (app, _db) = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/meetings")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "attendee1_firmandname": "Acme (Jane)",
                            "attendee2_firmandname": "Beta Corp",
                            "start_time": "2025-08-20T14:29:59.100Z",
                            "end_time": "2025-08-20T14:29:59.900Z"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Value =
            serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();

        let (_, body) = get_json(app, "/api/meetings?firmandname=Acme%20(Jane)").await;
        let stored = &body["meetings"][0];
        assert_eq!(stored["id"], created["id"]);
        assert_eq!(stored["start_time"], created["start_time"]);
        assert_eq!(stored["end_time"], created["end_time"]);

        let start = ts(stored["start_time"].as_str().unwrap());
        let end = ts(stored["end_time"].as_str().unwrap());
        assert!(end > start);
    }

    /// Tests creating a meeting that ends before it starts returns 400
    #[tokio::test]
    async fn it_returns_400_for_backwards_meeting() {
        let (app, _db) = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/meetings")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "attendee1_firmandname": "Acme (Jane)",
                            "attendee2_firmandname": "Beta Corp",
                            "start_time": "2025-08-20T14:30:00Z",
                            "end_time": "2025-08-20T14:00:00Z"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Tests creating a meeting with missing fields returns 422
    #[tokio::test]
    async fn it_returns_422_for_missing_fields() {
        let (app, _db) = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/meetings")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "attendee1_firmandname": "Acme (Jane)",
                            "start_time": "2025-08-20T14:00:00Z"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
