use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::schema::RawListing;
use crate::{Error, MarketListing, Region, Result, TrackedItem, WaitlistEntry};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

pub const BASE_URL: &str = "https://api.arsha.io";
const API_VERSION: &str = "v2";
const LANG: &str = "en";
// The API rejects requests without a browser-like agent.
const AGENT: &str = "Mozilla/5.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    fn url(&self, region: Region, endpoint: Endpoint) -> Result<Url> {
        let (region, endpoint) = (region.to_string(), endpoint.to_string());
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([API_VERSION, region.as_str(), endpoint.as_str()]);
        Ok(url)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.header(USER_AGENT, AGENT).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Status(status, response.text().await?))
        }
    }

    async fn get(&self, region: Region, endpoint: Endpoint) -> Result<String> {
        let url = self.url(region, endpoint)?;
        log::debug!("GET {url}");

        let response = self.send(self.client.get(url)).await?;
        Ok(response.text().await?)
    }

    async fn post(&self, region: Region, endpoint: Endpoint, payload: Value) -> Result<String> {
        let mut url = self.url(region, endpoint)?;
        url.query_pairs_mut().append_pair("lang", LANG);
        log::debug!("POST {url} {payload}");

        let builder = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload);

        let response = self.send(builder).await?;
        Ok(response.text().await?)
    }
}

/// The API answers with a bare object when there is exactly one result and
/// with an array otherwise.
fn one_or_many<T: DeserializeOwned>(value: Value) -> serde_json::Result<Vec<T>> {
    match value {
        Value::Array(values) => values.into_iter().map(serde_json::from_value).collect(),
        other => Ok(vec![serde_json::from_value(other)?]),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(values) => values.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

/// Decodes a bidding info payload for `item_name`. `Ok(None)` for an empty
/// payload.
pub(crate) fn parse_market_listing(text: &str, item_name: &str) -> Result<Option<MarketListing>> {
    let decoded = serde_json::from_str::<Value>(text).and_then(|value| {
        if is_empty(&value) {
            return Ok(None);
        }
        Ok(one_or_many::<RawListing>(value)?.into_iter().next())
    });

    match decoded {
        Ok(raw) => Ok(raw.map(|raw| MarketListing::from_raw(raw, item_name))),
        Err(source) => {
            log::error!("Error in parse_market_listing for {item_name}: {source}");
            log::error!("Received data: {text}");
            Err(Error::Decode {
                item: item_name.to_string(),
                payload: text.to_string(),
                source,
            })
        }
    }
}

/// Decodes the waitlist entry by entry. Entries that don't fit are logged
/// and skipped so the rest of the queue still gets checked.
pub(crate) fn parse_waitlist(text: &str) -> Result<Vec<WaitlistEntry>> {
    let value = serde_json::from_str::<Value>(text).map_err(|source| Error::MalformedWaitlist {
        payload: text.to_string(),
        source,
    })?;

    let entries = match value {
        Value::Array(values) => values,
        value if is_empty(&value) => Vec::new(),
        value => vec![value],
    };

    Ok(entries
        .iter()
        .filter_map(|entry| match WaitlistEntry::deserialize(entry) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping waitlist entry {entry}: {e}");
                None
            }
        })
        .collect())
}

#[async_trait]
impl MarketClient for HttpClient {
    async fn fetch_market_listing(
        &self,
        item: &TrackedItem,
        region: Region,
    ) -> Result<Option<MarketListing>> {
        let payload = json!([{ "id": item.id, "sid": item.enhancement_level }]);
        let text = self
            .post(region, Endpoint::BiddingInfoList, payload)
            .await?;

        parse_market_listing(&text, &item.name)
    }

    async fn fetch_waitlist(&self, region: Region) -> Result<Vec<WaitlistEntry>> {
        let text = self.get(region, Endpoint::WorldMarketWaitList).await?;
        parse_waitlist(&text)
    }
}
