use std::env;

use axum::http::HeaderValue;

/// Per-field count ceiling used when `IMFUSE_MAX_COUNT` is unset.
pub const DEFAULT_MAX_COUNT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Largest count accepted for any single vector field.
    pub max_count: u32,
    /// CORS origin, already parsed as a header value; `None` allows any
    /// origin.
    pub allowed_origin: Option<HeaderValue>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            allowed_origin: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_count = match get("IMFUSE_MAX_COUNT") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                eyre::eyre!("IMFUSE_MAX_COUNT must be a non-negative integer, got {raw:?}: {e}")
            })?,
            None => DEFAULT_MAX_COUNT,
        };

        let allowed_origin = get("IMFUSE_ALLOWED_ORIGIN")
            .map(|raw| parse_origin(raw.trim()))
            .transpose()?;

        Ok(Self {
            max_count,
            allowed_origin,
        })
    }
}

fn parse_origin(raw: &str) -> eyre::Result<HeaderValue> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(eyre::eyre!(
            "IMFUSE_ALLOWED_ORIGIN must be an http(s) origin, got {raw:?}"
        ));
    }
    HeaderValue::from_str(raw).map_err(|e| {
        eyre::eyre!("IMFUSE_ALLOWED_ORIGIN is not a valid header value, got {raw:?}: {e}")
    })
}
