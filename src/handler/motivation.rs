//! Motivational message endpoint
//!
//! method check → `date` extraction → parse → local hour → bucket → message

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};

use crate::config::AppState;
use crate::error::RequestError;
use crate::http;
use crate::logger;
use crate::motivation::{local_hour, parse_timestamp, TimeOfDay};

/// Handle a request for the root route
pub fn serve_motivation(
    method: &Method,
    path: &str,
    query: Option<&str>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let server_name = &state.config.http.server_name;
    match select_message(method, query, state) {
        Ok(message) => http::build_text_response(StatusCode::OK, message, server_name),
        Err(err) => {
            logger::log_rejected(method, path, &err);
            http::build_error_response(err.status(), server_name)
        }
    }
}

fn select_message(
    method: &Method,
    query: Option<&str>,
    state: &AppState,
) -> Result<&'static str, RequestError> {
    if *method != Method::GET {
        return Err(RequestError::MethodNotAllowed(method.clone()));
    }

    let date = http::query_param(query, "date")
        .filter(|d| !d.is_empty())
        .ok_or(RequestError::MissingDate)?;

    let instant = parse_timestamp(&date)?;
    let hour = local_hour(instant);
    let part = TimeOfDay::from_hour(hour);
    tracing::debug!(hour, %part, "Classified request time");
    Ok(state.picker.pick(part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::motivation::{MessageCatalog, MessagePicker};
    use chrono::{Local, Timelike};
    use http_body_util::BodyExt;

    fn state() -> AppState {
        AppState::with_picker(&test_config(), MessagePicker::with_seed(1))
    }

    fn expected_bucket(date: &str) -> TimeOfDay {
        let instant = parse_timestamp(date).unwrap();
        TimeOfDay::from_hour(instant.with_timezone(&Local).hour())
    }

    async fn body_text(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_date_returns_message_from_bucket() {
        let state = state();
        for date in [
            "2024-01-01T07:00:00Z",
            "2024-01-01T14:00:00Z",
            "2024-01-01T18:30:00Z",
            "2024-01-01T02:00:00Z",
        ] {
            let query = format!("date={date}");
            let resp = serve_motivation(&Method::GET, "/", Some(&query), &state);
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(resp.headers()["Content-Type"], "text/plain");

            let body = body_text(resp).await;
            assert!(!body.is_empty());
            assert!(
                MessageCatalog::contains(expected_bucket(date), &body),
                "{date}: {body:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_rejections_are_indistinguishable() {
        let state = state();
        let cases: [(Method, Option<&str>); 5] = [
            (Method::POST, Some("date=2024-01-01T07:00:00Z")),
            (Method::GET, None),
            (Method::GET, Some("date=")),
            (Method::GET, Some("date=not-a-date")),
            (Method::GET, Some("date=2024-01-01T07:00:00+00:00")),
        ];

        let mut bodies = Vec::new();
        for (method, query) in cases {
            let resp = serve_motivation(&method, "/", query, &state);
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method} {query:?}");
            assert_eq!(resp.headers()["Content-Type"], "text/plain");
            bodies.push(body_text(resp).await);
        }
        assert!(bodies.iter().all(|b| b == "Bad Request"));
    }

    #[test]
    fn test_select_message_errors() {
        let state = state();
        assert_eq!(
            select_message(&Method::PUT, Some("date=2024-01-01T07:00:00Z"), &state),
            Err(RequestError::MethodNotAllowed(Method::PUT))
        );
        assert_eq!(
            select_message(&Method::GET, Some("other=1"), &state),
            Err(RequestError::MissingDate)
        );
        assert_eq!(
            select_message(&Method::GET, Some("date=tomorrow"), &state),
            Err(RequestError::InvalidDate("tomorrow".to_string()))
        );
    }

    #[test]
    fn test_repeated_requests_stay_in_bucket() {
        let state = state();
        let date = "2024-01-01T12:00:00Z";
        let bucket = expected_bucket(date);
        for _ in 0..100 {
            let message = select_message(&Method::GET, Some("date=2024-01-01T12:00:00Z"), &state)
                .unwrap();
            assert!(MessageCatalog::contains(bucket, message));
        }
    }
}
