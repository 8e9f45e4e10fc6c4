//! Page download

use log::{debug, warn};
use placer_core::Dataset;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use crate::error::{FetchError, FetchResult};
use crate::html::parse_first_table;
use crate::options::FetchOptions;

/// Add `username:password@` to an `https://` URL.
///
/// Both parts are percent-encoded. URLs with any other scheme are returned
/// unchanged.
pub fn embed_credentials(url: &str, username: &str, password: &str) -> FetchResult<String> {
    let mut parsed = parse_url(url)?;
    if parsed.scheme() != "https" {
        warn!("not embedding credentials into non-https URL {}", parsed);
        return Ok(url.to_string());
    }

    let rejected = || FetchError::InvalidUrl {
        url: url.to_string(),
        reason: "URL cannot carry credentials".to_string(),
    };
    parsed.set_username(username).map_err(|()| rejected())?;
    parsed.set_password(Some(password)).map_err(|()| rejected())?;
    Ok(parsed.into())
}

/// Fetch the first table of a page with default options.
///
/// Credentials are used only when both are given and non-empty.
pub fn fetch_table(
    url: &str,
    username: Option<&str>,
    password: Option<&str>,
) -> FetchResult<Dataset> {
    TableFetcher::new(FetchOptions::default())?.fetch(url, username, password)
}

/// Blocking HTTP client that reads HTML tables
pub struct TableFetcher {
    client: Client,
}

impl TableFetcher {
    /// Build a client from options
    pub fn new(options: FetchOptions) -> FetchResult<Self> {
        if options.accept_invalid_certs {
            debug!("TLS certificate verification is disabled");
        }
        let mut builder = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .user_agent(options.user_agent);
        if !options.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    /// GET `url` and parse its first `<table>`.
    ///
    /// Fails on transport errors, non-success status and non-HTML content.
    pub fn fetch(
        &self,
        url: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> FetchResult<Dataset> {
        let target = match credentials(username, password) {
            Some((user, pass)) => embed_credentials(url, user, pass)?,
            None => parse_url(url)?.into(),
        };

        debug!("fetching {}", redact(url));
        let response = self.client.get(target.as_str()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: redact(url),
                status: status.as_u16(),
            });
        }

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default().to_ascii_lowercase();
            if !content_type.contains("html") {
                return Err(FetchError::NotHtml {
                    url: redact(url),
                    content_type,
                });
            }
        }

        let body = response.text()?;
        parse_first_table(&body)
    }
}

/// Both credentials, when both are present and non-empty
fn credentials<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    match (username, password) {
        (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
        _ => None,
    }
}

fn parse_url(url: &str) -> FetchResult<Url> {
    Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// URL without any userinfo, for messages
fn redact(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            // only fails for URLs that cannot hold userinfo, which then have none
            let _ = parsed.set_username("");
            let _ = parsed.set_password(None);
            parsed.into()
        }
        Err(_) => url.to_string(),
    }
}
