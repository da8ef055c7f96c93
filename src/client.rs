use crate::{auth::BasicAuth, config::ConnectionArgs, constants::REQUEST_TIMEOUT, error::AdminError};
use anyhow::Result;
use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Body, Client, Method, Response, StatusCode,
};

/// Status codes an operation treats as success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Exactly this code
    Status(StatusCode),
    /// Anything below 400
    BelowClientError,
}

impl Expect {
    pub const OK: Expect = Expect::Status(StatusCode::OK);
    pub const CREATED: Expect = Expect::Status(StatusCode::CREATED);

    pub fn accepts(&self, status: StatusCode) -> bool {
        match self {
            Expect::Status(code) => status == *code,
            Expect::BelowClientError => status.as_u16() < 400,
        }
    }
}

/// HTTP client for one cluster, shared by every request of a command invocation.
pub struct ElasticClient {
    pub base_url: String,
    pub client: Client,
}

impl ElasticClient {
    /// Build the client, loading Basic credentials from the auth file if one was given.
    pub fn new(conn: &ConnectionArgs) -> Result<Self> {
        let auth = BasicAuth::load(conn.auth_file.as_deref())?;
        Self::with_auth(conn.base_url(), auth.as_ref())
    }

    pub fn with_auth(base_url: String, auth: Option<&BasicAuth>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(auth) = auth {
            headers.insert(AUTHORIZATION, auth.header_value()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(ElasticClient { base_url, client })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request and return the body of an accepted response.
    ///
    /// A request body is always sent as `application/json`.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
        expect: Expect,
    ) -> Result<Bytes> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");

        let mut req = self.client.request(method, &url);
        if let Some(body) = body {
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }
        let resp = req.send().await?;
        check_status(resp, expect).await
    }

    pub async fn get(&self, path: &str) -> Result<Bytes> {
        self.send(Method::GET, path, None, Expect::OK).await
    }

    pub async fn delete(&self, path: &str) -> Result<Bytes> {
        self.send(Method::DELETE, path, None, Expect::OK).await
    }
}

/// Validate the status code, surfacing the response text as the diagnostic on mismatch.
pub async fn check_status(resp: Response, expect: Expect) -> Result<Bytes> {
    let status = resp.status();
    if !expect.accepts(status) {
        let body = resp.text().await.unwrap_or_default();
        return Err(AdminError::UnexpectedStatus { status, body }.into());
    }
    tracing::debug!(%status, "request accepted");
    Ok(resp.bytes().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_exact_status() {
        assert!(Expect::OK.accepts(StatusCode::OK));
        assert!(!Expect::OK.accepts(StatusCode::CREATED));
        assert!(Expect::CREATED.accepts(StatusCode::CREATED));
        assert!(!Expect::CREATED.accepts(StatusCode::OK));
    }

    #[test]
    fn test_expect_below_client_error() {
        assert!(Expect::BelowClientError.accepts(StatusCode::OK));
        assert!(Expect::BelowClientError.accepts(StatusCode::CREATED));
        assert!(Expect::BelowClientError.accepts(StatusCode::NOT_MODIFIED));
        assert!(!Expect::BelowClientError.accepts(StatusCode::BAD_REQUEST));
        assert!(!Expect::BelowClientError.accepts(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ElasticClient::with_auth("http://localhost:9200".into(), None).unwrap();
        assert_eq!(
            client.url("/_template/t1"),
            "http://localhost:9200/_template/t1"
        );
    }
}
