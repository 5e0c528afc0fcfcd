use secrecy::{ExposeSecret, Secret};
use std::collections::BTreeMap;
use std::fmt;

pub type Params = BTreeMap<String, String>;

pub(crate) const KEY_PARAM: &str = "key";
pub(crate) const SELECTIONS_PARAM: &str = "selections";
pub(crate) const DEFAULT_SELECTIONS: &str = "default";

/// A fully resolved GET request, built per call and discarded afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub params: Params,
}

impl Request {
    /// Joins `base_url` and `path` and stamps the API key over any `key`
    /// the caller passed in.
    pub fn new(base_url: &str, path: &str, params: Option<Params>, api_key: &Secret<String>) -> Self {
        let mut params = params.unwrap_or_default();
        params.insert(KEY_PARAM.to_string(), api_key.expose_secret().clone());

        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
            params,
        }
    }

    pub fn selections(&self) -> Option<&str> {
        self.params.get(SELECTIONS_PARAM).map(String::as_str)
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let params: BTreeMap<&str, &str> = self
            .params
            .iter()
            .map(|(k, v)| {
                let v = if k == KEY_PARAM { "[REDACTED]" } else { v.as_str() };
                (k.as_str(), v)
            })
            .collect();

        f.debug_struct("Request")
            .field("url", &self.url)
            .field("params", &params)
            .finish()
    }
}

/// Parameter map carrying only `selections`, defaulted when absent.
pub(crate) fn selections_params(selections: Option<&str>) -> Params {
    let mut params = Params::new();
    params.insert(
        SELECTIONS_PARAM.to_string(),
        selections.unwrap_or(DEFAULT_SELECTIONS).to_string(),
    );
    params
}
