#![forbid(unsafe_code)]

use log::debug;
use poem_openapi::{ OpenApi, payload::Json, Object, param::Path };

use crate::v1::greetings::ApiTags;

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
pub struct GreetApi;

#[derive(Object, Debug)]
struct RespGreeting
{
    message: String,
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl GreetApi {
    /// Greet a user by their name
    ///
    /// This endpoint accepts a name as a path parameter and returns a
    /// personalized greeting message.
    #[oai(path = "/greet/:name", method = "get", tag = "ApiTags::Greetings")]
    async fn greet_user(&self, name: Path<String>) -> Json<RespGreeting> {
        debug!("Greeting requested for name: {}", name.0);
        Json(RespGreeting::process(&name.0))
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespGreeting {
    fn new(message: String) -> Self {
        Self { message }
    }

    /// Process the request.  The greeting is a pure function of the name, so
    /// no failure path exists here; routing rejects requests with a missing
    /// name segment before this code runs.
    fn process(name: &str) -> RespGreeting {
        Self::new(format_greeting(name))
    }
}

// ***************************************************************************
//                             Public Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// format_greeting:
// ---------------------------------------------------------------------------
/** Build the greeting message for a name exactly as received: no trimming,
 * escaping or coercion is applied.
 */
pub fn format_greeting(name: &str) -> String {
    format!("Hello, {}! Welcome to the API.", name)
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::{http::StatusCode, test::TestClient, Route};
    use poem_openapi::{types::ToJSON, OpenApiService};

    use super::{format_greeting, GreetApi, RespGreeting};

    // Test double of the route table built in main.
    fn test_app() -> Route {
        let api_service = OpenApiService::new(GreetApi, "Greeting API", "1.0.0");
        Route::new().nest("/", api_service)
    }

    #[test]
    fn greeting_is_exact_concatenation() {
        assert_eq!(format_greeting("World"), "Hello, World! Welcome to the API.");
        assert_eq!(format_greeting(""), "Hello, ! Welcome to the API.");
        assert_eq!(format_greeting("   "), "Hello,    ! Welcome to the API.");
        assert_eq!(format_greeting("José"), "Hello, José! Welcome to the API.");
        assert_eq!(format_greeting("O'Brien, Jr."), "Hello, O'Brien, Jr.! Welcome to the API.");
        assert_eq!(format_greeting("123"), "Hello, 123! Welcome to the API.");
    }

    #[test]
    fn greeting_is_idempotent_and_stateless() {
        let first = format_greeting("Alice");
        assert_eq!(first, format_greeting("Alice"));

        // No trace of an earlier call leaks into a later one.
        let second = format_greeting("Bob");
        assert!(!second.contains("Alice"));
        assert_eq!(second, "Hello, Bob! Welcome to the API.");
    }

    #[test]
    fn greeting_wire_shape() {
        let resp = RespGreeting::process("World");
        let json = resp.to_json().expect("greeting serializes");
        assert_eq!(json, serde_json::json!({"message": "Hello, World! Welcome to the API."}));
    }

    #[tokio::test]
    async fn greet_returns_message() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/greet/World").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("message")
            .assert_string("Hello, World! Welcome to the API.");
    }

    #[tokio::test]
    async fn greet_decodes_url_encoded_names() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/greet/Ada%20Lovelace").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("message")
            .assert_string("Hello, Ada Lovelace! Welcome to the API.");
    }

    #[tokio::test]
    async fn greet_accepts_unicode_names() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/greet/Jos%C3%A9").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("message")
            .assert_string("Hello, José! Welcome to the API.");
    }

    #[tokio::test]
    async fn greet_does_not_coerce_numeric_names() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/greet/123").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("message")
            .assert_string("Hello, 123! Welcome to the API.");
    }

    #[tokio::test]
    async fn missing_name_segment_is_not_found() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/greet/").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
