#![forbid(unsafe_code)]

use poem_openapi::Tags;

pub mod greet;
pub mod version;

// OpenAPI tags attached to the routes below.  These only affect the
// generated documentation, never request handling.
#[derive(Tags)]
pub enum ApiTags {
    /// Operations that greet users by name.
    Greetings,
}
