//! Function definitions and their event specifications.

/// A single function entry from the `functions:` section of a serverless
/// deployment descriptor.
///
/// The config-loading collaborator resolves file-inclusion indirection before
/// handing definitions over, so the builder always sees the flattened form.
/// Unknown keys (runtime, memory size, environment, ...) are ignored.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionDefinition {
    /// Opaque handler identifier (e.g. a file path or function name).
    pub handler: String,
    /// Ordered event specifications attached to this function.
    #[serde(default)]
    pub events: Vec<EventSpec>,
}

impl FunctionDefinition {
    /// Return the first event carrying an HTTP trigger, in either API
    /// Gateway protocol-version syntax.
    ///
    /// Any further HTTP events on the same function are ignored, matching
    /// the gateway emulator's first-trigger-per-function behavior. A
    /// function with no HTTP trigger at all (e.g. schedule-only) returns
    /// `None` and contributes no route.
    #[must_use]
    pub fn first_http_trigger(&self) -> Option<&HttpTrigger> {
        self.events.iter().find_map(EventSpec::http_trigger)
    }
}

/// One entry of a function's `events:` list.
///
/// HTTP traffic can be bound through two gateway protocol versions, `http`
/// (REST API, v1) and `httpApi` (HTTP API, v2); both carry the same
/// method/path shape. Every other event kind is captured opaquely in
/// [`EventSpec::Other`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum EventSpec {
    /// API Gateway v1 (`http:`) trigger.
    #[serde(rename = "http")]
    Http(HttpTrigger),
    /// API Gateway v2 (`httpApi:`) trigger.
    #[serde(rename = "httpApi")]
    HttpApi(HttpTrigger),
    /// Any non-HTTP trigger (schedule, queue, ...), kept as raw JSON.
    #[serde(untagged)]
    Other(serde_json::Value),
}

impl EventSpec {
    /// The HTTP trigger carried by this event, if it is one of the two
    /// HTTP trigger kinds.
    #[must_use]
    pub fn http_trigger(&self) -> Option<&HttpTrigger> {
        match self {
            Self::Http(trigger) | Self::HttpApi(trigger) => Some(trigger),
            Self::Other(_) => None,
        }
    }
}

/// The method/path specification of an HTTP trigger.
///
/// Both the structured form (`method:` / `path:` keys, each optional) and
/// the descriptor shorthand (a bare string such as `"GET /users/{id}"` or
/// the catch-all `"*"`) are accepted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum HttpTrigger {
    /// Shorthand string form, `"METHOD /path"` or `"*"`.
    Shorthand(String),
    /// Structured form with optional method and path.
    Config {
        /// HTTP verb, the wildcard `*`, or the literal `any`; defaults to
        /// the wildcard when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<String>,
        /// Path pattern; defaults to the wildcard when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(value: serde_json::Value) -> FunctionDefinition {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_should_deserialize_structured_http_event() {
        let def = definition(json!({
            "handler": "index.handler",
            "events": [{"http": {"method": "GET", "path": "/users/{id}"}}],
        }));

        assert_eq!(
            def.first_http_trigger(),
            Some(&HttpTrigger::Config {
                method: Some("GET".to_owned()),
                path: Some("/users/{id}".to_owned()),
            }),
        );
    }

    #[test]
    fn test_should_deserialize_shorthand_http_event() {
        let def = definition(json!({
            "handler": "index.handler",
            "events": [{"http": "GET /users/{id}"}],
        }));

        assert_eq!(
            def.first_http_trigger(),
            Some(&HttpTrigger::Shorthand("GET /users/{id}".to_owned())),
        );
    }

    #[test]
    fn test_should_recognize_http_api_v2_syntax() {
        let def = definition(json!({
            "handler": "index.handler",
            "events": [{"httpApi": {"method": "POST", "path": "/orders"}}],
        }));

        assert!(def.first_http_trigger().is_some());
    }

    #[test]
    fn test_should_ignore_non_http_events() {
        let def = definition(json!({
            "handler": "cron.handler",
            "events": [{"schedule": "rate(1 hour)"}, {"sqs": {"arn": "arn:aws:sqs:..."}}],
        }));

        assert_eq!(def.first_http_trigger(), None);
    }

    #[test]
    fn test_should_take_first_http_trigger_only() {
        let def = definition(json!({
            "handler": "index.handler",
            "events": [
                {"schedule": "rate(1 hour)"},
                {"httpApi": {"method": "GET", "path": "/first"}},
                {"http": {"method": "GET", "path": "/second"}},
            ],
        }));

        assert_eq!(
            def.first_http_trigger(),
            Some(&HttpTrigger::Config {
                method: Some("GET".to_owned()),
                path: Some("/first".to_owned()),
            }),
        );
    }

    #[test]
    fn test_should_default_missing_method_and_path_to_none() {
        let def = definition(json!({
            "handler": "index.handler",
            "events": [{"http": {}}],
        }));

        assert_eq!(
            def.first_http_trigger(),
            Some(&HttpTrigger::Config { method: None, path: None }),
        );
    }

    #[test]
    fn test_should_accept_function_without_events() {
        let def = definition(json!({"handler": "index.handler"}));
        assert!(def.events.is_empty());
        assert_eq!(def.first_http_trigger(), None);
    }
}
