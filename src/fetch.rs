//! Page fetching over blocking HTTP (ureq)
//!
//! Bodies are decoded with the charset the server declares.

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into page HTML.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// One GET per call with a fixed User-Agent; non-2xx is an error.
pub struct HttpFetcher {
    agent: ureq::Agent,
    body_limit: u64,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(config.timeout)
                .user_agent(config.user_agent.as_str())
                .http_status_as_error(false)
                .build(),
        );

        Self {
            agent,
            body_limit: config.body_limit.unwrap_or(u64::MAX),
        }
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = url::Url::parse(url)?;

        let resp = self.agent.get(parsed.as_str()).call()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let mut body = resp.into_body();
        let text = body
            .with_config()
            .limit(self.body_limit)
            .read_to_string()?;
        Ok(text)
    }
}
