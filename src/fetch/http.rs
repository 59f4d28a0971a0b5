//! Blocking HTTP page source

use super::{FetchError, Page, PageSource, PageStatus};
use log::{debug, warn};
use url::Url;

/// Fetches pages with a single blocking GET
///
/// Uses the client's default timeouts and never retries.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpPageSource;

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
        debug!("GET {url}");

        let response = attohttpc::get(url.as_str()).send().map_err(FetchError::Transport)?;

        let code = response.status().as_u16();
        debug!("{url} answered {code}");

        let Some(status) = PageStatus::from_code(code) else {
            warn!("Unexpected status {code} from {url}");
            return Err(FetchError::Status(code));
        };

        let body = response.text().map_err(FetchError::Transport)?;
        debug!("Read {} bytes of HTML", body.len());

        Ok(Page { status, body })
    }
}
