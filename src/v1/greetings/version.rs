#![forbid(unsafe_code)]

use poem_openapi::{ OpenApi, payload::Json, Object };

// From cargo.toml.
const SERVICE_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
pub struct VersionApi;

#[derive(Object)]
struct RespVersion
{
    result_code: String,
    result_msg: String,
    service_version: String,
    rustc_version: String,
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl VersionApi {
    #[oai(path = "/version", method = "get")]
    async fn get_version(&self) -> Json<RespVersion> {
        Json(RespVersion::process())
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespVersion {
    fn new(result_code: &str, result_msg: &str, service: &str, rustc: &str)
    -> Self {
        Self {result_code: result_code.to_string(),
              result_msg: result_msg.to_string(),
              service_version: service.to_string(),
              rustc_version: rustc.to_string(),
        }
    }

    /// All version information is compiled in, so assembling the response
    /// cannot fail.
    fn process() -> RespVersion {
        Self::new("0",
                 "success",
                 SERVICE_VERSION.unwrap_or("unknown"),
                 env!("RUSTC_VERSION"))
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::RespVersion;

    #[test]
    fn version_reports_success() {
        let resp = RespVersion::process();
        assert_eq!(resp.result_code, "0");
        assert_eq!(resp.result_msg, "success");
        assert_eq!(resp.service_version, env!("CARGO_PKG_VERSION"));
        assert!(!resp.rustc_version.is_empty());
    }
}
