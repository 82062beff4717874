use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use url::form_urlencoded;

use crate::config::Config;
use crate::error::{AppError, Result};

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (short description lookup service)"
);

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WikipediaResponse {
    pub query: WikipediaQuery,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WikipediaQuery {
    pub pages: BTreeMap<String, WikipediaPage>,
}

/// One entry of `query.pages`. Missing articles come back as a sentinel
/// entry with a negative key and no extract.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WikipediaPage {
    #[serde(rename = "pageid")]
    pub page_id: i64,
    pub title: String,
    pub extract: String,
}

/// Lower-cases the name, then upper-cases the first letter of every
/// whitespace-separated word.
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
            continue;
        }

        if at_word_start {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => result.push(u),
                // multi-char uppercase forms (e.g. ß) stay as they are
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
        at_word_start = false;
    }

    result
}

pub fn wikipedia_api_url(name: &str, lang: &str) -> String {
    let title: String = form_urlencoded::byte_serialize(title_case(name).as_bytes()).collect();
    format!(
        "https://{}.wikipedia.org/w/api.php?action=query&titles={}&prop=extracts&exsentences=1&exintro=1&format=json",
        lang, title
    )
}

/// Decodes an `action=query` response body into its page map.
pub fn decode_pages(body: &[u8]) -> Result<BTreeMap<String, WikipediaPage>> {
    let response: WikipediaResponse = serde_json::from_slice(body)
        .map_err(|e| AppError::Decode(format!("error unmarshaling json response: {}", e)))?;
    Ok(response.query.pages)
}

/// Source of raw upstream response bodies.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.upstream_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    // The status code is deliberately not inspected: whatever body comes
    // back is handed to the decoder.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("error making http request: {}", e)))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Fetch(format!("error reading response body: {}", e)))?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("albert einstein"), "Albert Einstein");
        assert_eq!(title_case("ALBERT EINSTEIN"), "Albert Einstein");
        assert_eq!(title_case("  marie\tcURIE "), "  Marie\tCurie ");
        assert_eq!(title_case("o'neil"), "O'neil");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_is_idempotent() {
        for name in ["albert einstein", "ADA lovelace", "straße der einheit", "jean-paul sartre", "Ελληνικά λέξη"] {
            let once = title_case(name);
            assert_eq!(title_case(&once), once, "input {:?}", name);
        }
    }

    #[test]
    fn api_url_has_lang_host_and_encoded_title() {
        let url = wikipedia_api_url("albert EINSTEIN", "en");
        assert_eq!(
            url,
            "https://en.wikipedia.org/w/api.php?action=query&titles=Albert+Einstein&prop=extracts&exsentences=1&exintro=1&format=json"
        );
    }

    #[test]
    fn api_url_escapes_reserved_characters() {
        let url = wikipedia_api_url("at&t", "de");
        assert!(url.starts_with("https://de.wikipedia.org/"));
        assert!(url.contains("titles=At%26t&"));

        let url = wikipedia_api_url("zoë", "fr");
        assert!(url.contains("titles=Zo%C3%AB&"));
    }

    #[test]
    fn api_url_does_not_validate_lang() {
        let url = wikipedia_api_url("x", "");
        assert!(url.starts_with("https://.wikipedia.org/"));
    }

    #[test]
    fn decode_reads_pages() {
        let body = br#"{"batchcomplete":"","query":{"pages":{"123":{"pageid":123,"ns":0,"title":"Albert Einstein","extract":"<p>Hi.</p>"}}}}"#;
        let pages = decode_pages(body).unwrap();
        let page = &pages["123"];
        assert_eq!(page.page_id, 123);
        assert_eq!(page.title, "Albert Einstein");
        assert_eq!(page.extract, "<p>Hi.</p>");
    }

    #[test]
    fn decode_tolerates_missing_fields() {
        let body = br#"{"query":{"pages":{"-1":{"ns":0,"title":"Nobody","missing":""}}}}"#;
        let pages = decode_pages(body).unwrap();
        assert_eq!(pages["-1"].page_id, 0);
        assert!(pages["-1"].extract.is_empty());

        assert!(decode_pages(br#"{}"#).unwrap().is_empty());
        assert!(decode_pages(br#"{"query":{"pages":{}}}"#).unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = decode_pages(b"<html>Service Unavailable</html>").unwrap_err();
        match err {
            AppError::Decode(msg) => assert!(msg.starts_with("error unmarshaling json response: ")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(matches!(decode_pages(br#"{"query":{"pages":[]}}"#), Err(AppError::Decode(_))));
    }
}
