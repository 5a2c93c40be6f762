use chatbot_echo::message::ChatResponse;
use chatbot_echo::routes::create_router;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{Value, json};
use tower::util::ServiceExt;

async fn post_chatbot(body: &str) -> Response {
    create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chatbot")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_chatbot_endpoint_weather_scenario() {
    let response = post_chatbot(
        r#"{"q":"What's the weather?","long":106.8456,"lat":-6.2088,"user":"Ana"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        body,
        json!({
            "question": "What's the weather?",
            "longitude": 106.8456,
            "latitude": -6.2088,
            "user": "Ana",
            "message": "Hello Ana, you asked: 'What's the weather?'",
            "location": {"latitude": -6.2088, "longitude": 106.8456}
        })
    );
}

#[tokio::test]
async fn test_response_field_order_is_stable() {
    let response = post_chatbot(r#"{"q":"hi","long":1.5,"lat":2.5,"user":"Bo"}"#).await;
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(
        text,
        r#"{"question":"hi","longitude":1.5,"latitude":2.5,"user":"Bo","message":"Hello Bo, you asked: 'hi'","location":{"latitude":2.5,"longitude":1.5}}"#
    );
}

#[tokio::test]
async fn test_identical_requests_give_identical_bytes() {
    let body = r#"{"q":"same?","long":-73.9857,"lat":40.7484,"user":"Kim"}"#;
    let first = body_bytes(post_chatbot(body).await).await;
    let second = body_bytes(post_chatbot(body).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_integer_coordinates_are_accepted() {
    let response = post_chatbot(r#"{"q":"int?","long":10,"lat":-20,"user":"Lu"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let chat: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(chat.longitude, 10.0);
    assert_eq!(chat.latitude, -20.0);
    assert_eq!(chat.location.longitude, 10.0);
}

#[tokio::test]
async fn test_out_of_range_coordinates_are_echoed() {
    let response = post_chatbot(r#"{"q":"far","long":500.0,"lat":-123.4,"user":"Zed"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let chat: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(chat.longitude, 500.0);
    assert_eq!(chat.latitude, -123.4);
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let response =
        post_chatbot(r#"{"q":"x","long":0.0,"lat":0.0,"user":"y","extra":true}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_user_is_rejected() {
    let response = post_chatbot(r#"{"q":"no name","long":1.0,"lat":2.0}"#).await;
    assert!(!response.status().is_success());
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "malformed_request");
    assert!(body.get("message").is_some());
    assert!(body.get("question").is_none());
}

#[tokio::test]
async fn test_each_missing_field_is_rejected() {
    let bodies = [
        r#"{"long":1.0,"lat":2.0,"user":"u"}"#,
        r#"{"q":"q","lat":2.0,"user":"u"}"#,
        r#"{"q":"q","long":1.0,"user":"u"}"#,
        r#"{"q":"q","long":1.0,"lat":2.0}"#,
    ];
    for body in bodies {
        let response = post_chatbot(body).await;
        assert!(!response.status().is_success(), "accepted {}", body);
    }
}

#[tokio::test]
async fn test_wrong_types_are_rejected() {
    let bodies = [
        r#"{"q":"q","long":"east","lat":2.0,"user":"u"}"#,
        r#"{"q":"q","long":1.0,"lat":"106.8","user":"u"}"#,
        r#"{"q":42,"long":1.0,"lat":2.0,"user":"u"}"#,
        r#"{"q":"q","long":1.0,"lat":2.0,"user":null}"#,
    ];
    for body in bodies {
        let response = post_chatbot(body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "body {}", body);
    }
}

#[tokio::test]
async fn test_broken_json_is_bad_request() {
    let response = post_chatbot(r#"{"q":"oops","#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chatbot")
                .body(Body::from(r#"{"q":"q","long":1.0,"lat":2.0,"user":"u"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_only_post_chatbot_is_routed() {
    let response = create_router()
        .oneshot(Request::builder().method("GET").uri("/chatbot").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = create_router()
        .oneshot(Request::builder().method("POST").uri("/chat").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
