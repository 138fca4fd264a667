//! Single blocking HTTP GET via libcurl.
//!
//! The whole body is buffered in memory; nothing touches the target file until
//! the transfer has finished with a 2xx status.

use crate::error::FetchError;
use std::time::Duration;

const MAX_REDIRECTS: u32 = 10;

/// Per-request transport settings.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Total time allowed for one request, connect included.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(15),
            user_agent: None,
        }
    }
}

/// GETs `url` and returns the body. Follows redirects.
/// Non-2xx responses are returned as `FetchError::Http` and their body is dropped.
pub fn get(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    tracing::debug!(url, code, bytes = body.len(), "GET complete");
    Ok(body)
}
