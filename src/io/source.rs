//! Input resolution for local files and remote URLs
//!
//! Resolution is explicit and ordered: an existing local file wins, otherwise
//! the input must be an `http` or `https` URL that answers with `200 OK`.
//! Both paths report a missing source as `SourceNotFound`, which keeps them
//! distinguishable from bytes that turn out not to be an image.

use crate::io::configuration::{FETCH_TIMEOUT_SECS, MAX_FETCH_BYTES, USER_AGENT};
use crate::io::error::{Result, source_not_found};
use crate::io::image::decode_image;
use image::DynamicImage;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Where the source image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    /// Existing file on the local filesystem
    Local(PathBuf),
    /// Absolute `http` or `https` URL
    Remote(Url),
}

impl SourceLocator {
    /// Resolve an input string to a local file or a remote URL
    ///
    /// # Errors
    ///
    /// Returns `SourceNotFound` if the input is neither an existing file nor
    /// an absolute `http`/`https` URL
    pub fn parse(input: &str) -> Result<Self> {
        let path = Path::new(input);
        if path.is_file() {
            return Ok(Self::Local(path.to_path_buf()));
        }

        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Remote(url)),
            Ok(url) => Err(source_not_found(
                input,
                &format!("unsupported URL scheme '{}'", url.scheme()),
            )),
            Err(_) => Err(source_not_found(
                input,
                &"not an existing file or an http(s) URL",
            )),
        }
    }

    /// Read the raw bytes behind this locator
    ///
    /// # Errors
    ///
    /// Returns `SourceNotFound` if the file cannot be read, the request fails,
    /// the server answers with anything but `200 OK`, or the body is larger
    /// than [`MAX_FETCH_BYTES`]
    pub fn fetch(&self) -> Result<Vec<u8>> {
        self.fetch_with_limit(MAX_FETCH_BYTES)
    }

    /// Read the raw bytes behind this locator, refusing remote bodies over `max_bytes`
    ///
    /// # Errors
    ///
    /// Same conditions as [`SourceLocator::fetch`], with `max_bytes` as the cap
    pub fn fetch_with_limit(&self, max_bytes: u64) -> Result<Vec<u8>> {
        match self {
            Self::Local(path) => {
                std::fs::read(path).map_err(|e| source_not_found(&self.to_string(), &e))
            }
            Self::Remote(url) => fetch_remote(url, max_bytes),
        }
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

fn fetch_remote(url: &Url, max_bytes: u64) -> Result<Vec<u8>> {
    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build();

    // Non-2xx statuses arrive as `ureq::Error::Status`
    let response = agent
        .get(url.as_str())
        .call()
        .map_err(|e| source_not_found(url.as_str(), &e))?;
    if response.status() != 200 {
        return Err(source_not_found(
            url.as_str(),
            &format!("HTTP status {}", response.status()),
        ));
    }

    // One byte past the cap tells a full body apart from a truncated one
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| source_not_found(url.as_str(), &e))?;
    if bytes.len() as u64 > max_bytes {
        return Err(source_not_found(
            url.as_str(),
            &format!("response exceeds {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

/// Fetch and decode the source image
///
/// # Errors
///
/// Returns `SourceNotFound` if the bytes cannot be obtained and `Decode` if
/// they are not a supported image
pub fn load_source(locator: &SourceLocator) -> Result<DynamicImage> {
    let bytes = locator.fetch()?;
    decode_image(&bytes, &locator.to_string())
}
