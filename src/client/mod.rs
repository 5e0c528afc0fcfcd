mod error;
mod request;
mod response;

use log::{debug, warn};
use secrecy::Secret;
use std::time::Duration;

pub use error::{Error, Result};
pub use request::{Params, Request};
pub use response::{parse_response, Response};

use crate::endpoint::Endpoint;
use request::selections_params;

pub const API_HOST: &str = "https://api.torn.com/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_key: Secret<String>,
    pub base_url: String,
    /// `None` lets a call block until the transport gives up.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: Secret::new(api_key.to_string()),
            base_url: API_HOST.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking client for the Torn API.
///
/// One HTTP session is opened on construction and reused for every call made
/// through this instance. Every operation in [`crate::endpoints::ENDPOINTS`]
/// is available as a method.
#[derive(Clone, Debug)]
pub struct Client {
    api_key: Secret<String>,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Client {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request for a table operation without sending it.
    pub fn build_request(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        selections: Option<&str>,
    ) -> Request {
        let params = endpoint.selections.then(|| selections_params(selections));
        self.request_for(&endpoint.path(id), params)
    }

    /// Builds a request for an arbitrary API path such as `/user/bounties`.
    pub fn request_for(&self, path: &str, params: Option<Params>) -> Request {
        Request::new(&self.base_url, path, params, &self.api_key)
    }

    /// Dispatches a table operation. Every generated operation method ends
    /// up here.
    pub fn fetch(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        selections: Option<&str>,
    ) -> Result<Response> {
        self.send(self.build_request(endpoint, id, selections))
    }

    /// Calls a path that is not in the endpoint table.
    pub fn get(&self, path: &str, params: Option<Params>) -> Result<Response> {
        self.send(self.request_for(path, params))
    }

    /// Executes one GET. Failures are returned as-is; nothing is retried.
    pub fn send(&self, request: Request) -> Result<Response> {
        debug!("request {} selections={:?}", request.url, request.selections());

        let response = self
            .client
            .get(&request.url)
            .query(&request.params)
            .send()
            .map_err(|e| {
                warn!("request {} failed: {}", request.url, e);
                Error::from(e)
            })?;

        let status = response.status();
        let body = response.text()?;
        debug!("response from {} -> {} ({} bytes)", request.url, status, body.len());

        parse_response(status, body).map_err(|e| {
            warn!("request {} failed: {}", request.url, e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{Category, Identifier};
    use crate::endpoints;

    fn client() -> Client {
        Client::new("ABC123").unwrap()
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::new("k");
        assert_eq!(config.base_url, "https://api.torn.com/v2");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("torn-api/"));
    }

    #[test]
    fn faction_members_request() {
        let endpoint = endpoints::find("faction_members").unwrap();
        let req = client().build_request(endpoint, Some("99"), Some("default"));
        assert_eq!(req.url, "https://api.torn.com/v2/faction/99/members");
        assert_eq!(req.params["selections"], "default");
        assert_eq!(req.params["key"], "ABC123");
        assert_eq!(req.params.len(), 2);
    }

    #[test]
    fn timestamp_request_has_no_selections() {
        let endpoint = endpoints::find("user_timestamp").unwrap();
        let req = client().build_request(endpoint, None, Some("ignored"));
        assert_eq!(req.url, "https://api.torn.com/v2/user/timestamp");
        assert_eq!(req.params.len(), 1);
        assert_eq!(req.params["key"], "ABC123");
    }

    #[test]
    fn every_selections_endpoint_defaults() {
        let client = client();
        for endpoint in endpoints::ENDPOINTS.iter().filter(|e| e.selections) {
            let req = client.build_request(endpoint, Some("1"), None);
            assert_eq!(req.selections(), Some("default"), "{}", endpoint.name);
            assert_eq!(req.params["key"], "ABC123", "{}", endpoint.name);
        }
    }

    #[test]
    fn every_optional_identifier_endpoint_has_both_shapes() {
        let client = client();
        for endpoint in endpoints::ENDPOINTS
            .iter()
            .filter(|e| e.identifier == Identifier::Optional)
        {
            let without = client.build_request(endpoint, None, None);
            let with = client.build_request(endpoint, Some("12345"), None);
            assert_eq!(
                without.url,
                format!("{}/{}/{}", API_HOST, endpoint.category, endpoint.resource)
            );
            assert_eq!(
                with.url,
                format!("{}/{}/12345/{}", API_HOST, endpoint.category, endpoint.resource)
            );
            assert!(!without.url.contains("//faction") && !without.url.ends_with("//"));
        }
    }

    #[test]
    fn faction_chain_routes() {
        let endpoint = endpoints::find("faction_chain").unwrap();
        assert_eq!(endpoint.category, Category::Faction);
        let client = client();
        assert_eq!(
            client.build_request(endpoint, None, None).url,
            "https://api.torn.com/v2/faction/chain"
        );
        assert_eq!(
            client.build_request(endpoint, Some("12345"), None).url,
            "https://api.torn.com/v2/faction/12345/chain"
        );
    }

    #[test]
    fn required_identifier_route_keeps_its_segment() {
        let client = client();
        let race = endpoints::find("racing_race").unwrap();
        assert_eq!(
            client.build_request(race, None, None).url,
            "https://api.torn.com/v2/racing//race"
        );

        let items = endpoints::find("torn_items_by_ids").unwrap();
        assert_eq!(
            client.build_request(items, Some(""), None).url,
            "https://api.torn.com/v2/torn//items"
        );
    }

    #[test]
    fn custom_base_url() {
        let client = Client::with_config(ClientConfig::new("k").base_url("http://127.0.0.1:9/v2"))
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/v2");
        assert_eq!(
            client.request_for("/torn/items", None).url,
            "http://127.0.0.1:9/v2/torn/items"
        );
    }
}
