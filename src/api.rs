use gloo_net::http::{Request, Response};
use thiserror::Error;
use urlencoding::encode;

use crate::model::{ActivityMap, MutationReply};

const GENERIC_FAILURE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A response arrived but its body was not the JSON we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Text for the status region. Non-2xx replies show the server's detail
    /// (or a generic line); anything else shows `transport_fallback`.
    pub fn user_message(&self, transport_fallback: &str) -> String {
        match self {
            ApiError::Status { detail: Some(d), .. } => d.clone(),
            ApiError::Status { detail: None, .. } => GENERIC_FAILURE.to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => transport_fallback.to_string(),
        }
    }

    pub fn status_only(status: u16) -> Self {
        ApiError::Status { status, detail: None }
    }

    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Status { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    fn action(self) -> &'static str {
        match self {
            Mutation::Signup => "signup",
            Mutation::Unregister => "unregister",
        }
    }

    pub fn transport_failure(self) -> &'static str {
        match self {
            Mutation::Signup => "Failed to sign up. Please try again.",
            Mutation::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    /// Name and email are encoded exactly as given; no trimming or case folding.
    pub fn mutation_url(&self, kind: Mutation, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base,
            encode(activity),
            kind.action(),
            encode(email)
        )
    }

    pub async fn fetch_activities(&self) -> Result<ActivityMap, ApiError> {
        let resp = Request::get(&self.activities_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // The list view only ever shows its fixed failure text.
        if !resp.ok() {
            return Err(ApiError::status_only(resp.status()));
        }

        resp.json::<ActivityMap>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.mutate(Mutation::Signup, activity, email).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.mutate(Mutation::Unregister, activity, email).await
    }

    /// Returns the server's success message.
    async fn mutate(&self, kind: Mutation, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.mutation_url(kind, activity, email);
        let request = match kind {
            Mutation::Signup => Request::post(&url),
            Mutation::Unregister => Request::delete(&url),
        };

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                detail: read_detail(&resp).await,
            });
        }

        let reply = resp
            .json::<MutationReply>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(reply.message.unwrap_or_default())
    }
}

// An error body that isn't JSON just means "no detail".
async fn read_detail(resp: &Response) -> Option<String> {
    resp.json::<MutationReply>().await.ok().and_then(|r| r.detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activities_url_is_same_origin_by_default() {
        assert_eq!(ApiClient::new("").activities_url(), "/activities");
        assert_eq!(
            ApiClient::new("https://api.example.edu/").activities_url(),
            "https://api.example.edu/activities"
        );
    }

    #[test]
    fn signup_url_percent_encodes_name_and_email() {
        let api = ApiClient::new("");
        assert_eq!(
            api.mutation_url(Mutation::Signup, "Chess Club", "a@x.com"),
            "/activities/Chess%20Club/signup?email=a%40x.com"
        );
    }

    #[test]
    fn unregister_url_uses_same_encoding() {
        let api = ApiClient::new("http://localhost:8000");
        assert_eq!(
            api.mutation_url(Mutation::Unregister, "Art/Design & Co", "x+y@z.edu"),
            "http://localhost:8000/activities/Art%2FDesign%20%26%20Co/unregister?email=x%2By%40z.edu"
        );
    }

    #[test]
    fn urls_do_not_normalize_input() {
        let api = ApiClient::new("");
        assert_eq!(
            api.mutation_url(Mutation::Signup, " Chess Club ", " A@X.com"),
            "/activities/%20Chess%20Club%20/signup?email=%20A%40X.com"
        );
    }

    #[test]
    fn status_error_prefers_server_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Student already signed up".into()),
        };
        assert_eq!(
            err.user_message(Mutation::Signup.transport_failure()),
            "Student already signed up"
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn status_error_without_detail_is_generic() {
        let err = ApiError::Status { status: 500, detail: None };
        assert_eq!(err.user_message(Mutation::Signup.transport_failure()), "An error occurred");
    }

    #[test]
    fn list_status_errors_carry_no_detail() {
        let err = ApiError::status_only(503);
        assert_eq!(err, ApiError::Status { status: 503, detail: None });
        assert_eq!(err.to_string(), "HTTP 503");
        assert!(!err.is_transport());
    }

    #[test]
    fn transport_errors_use_operation_fallback() {
        let net = ApiError::Network("connection refused".into());
        assert!(net.is_transport());
        assert_eq!(
            net.user_message(Mutation::Unregister.transport_failure()),
            "Failed to unregister. Please try again."
        );

        let bad_body = ApiError::Decode("expected value at line 1".into());
        assert_eq!(
            bad_body.user_message(Mutation::Signup.transport_failure()),
            "Failed to sign up. Please try again."
        );
    }
}
