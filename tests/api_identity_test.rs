//! Integration tests for the identity API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, drop_table, seed_override, test_app};

    async fn resolve(app: axum::Router, uri: &str) -> Value {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        serde_json::from_str(&body).unwrap()
    }

    /// Tests keys without an override pass through
    #[tokio::test]
    async fn it_passes_through_without_override() {
        let (app, _db) = test_app().await;
        let body = resolve(app, "/api/identity/resolve?firmandname=Beta%20Corp").await;
        assert_eq!(body["meetings_firmandname"], "Beta Corp");
    }

    /// Tests keys with an override resolve to the target
    #[tokio::test]
    async fn it_resolves_override() {
        let (app, db) = test_app().await;
        seed_override(&db, "Acme (Jane)", "Acme Corp").await;

        let body = resolve(app, "/api/identity/resolve?firmandname=Acme%20(Jane)").await;
        assert_eq!(body["firmandname"], "Acme (Jane)");
        assert_eq!(body["meetings_firmandname"], "Acme Corp");
    }

    /// Tests empty input resolves to nothing
    #[tokio::test]
    async fn it_resolves_empty_to_null() {
        let (app, _db) = test_app().await;
        let body = resolve(app.clone(), "/api/identity/resolve?firmandname=").await;
        assert_eq!(body["meetings_firmandname"], Value::Null);

        let body = resolve(app, "/api/identity/resolve").await;
        assert_eq!(body["meetings_firmandname"], Value::Null);
    }

    /// Tests a broken override table falls back to the original key
    #[tokio::test]
    async fn it_falls_back_when_override_lookup_fails() {
        let (app, db) = test_app().await;
        drop_table(&db, "mappingkey").await;

        let body = resolve(app, "/api/identity/resolve?firmandname=Acme%20(Jane)").await;
        assert_eq!(body["meetings_firmandname"], "Acme (Jane)");
    }
}
