use crate::error::CspError;
use crate::headers::options::{ResponseHeaders, ResponseHeadersBuilder};
use crate::monitoring::stats::HeaderStats;
use parking_lot::RwLock;
use std::sync::Arc;

/// Runtime configuration shared by every worker running the middleware.
#[derive(Debug, Clone)]
pub struct HeadersConfig {
    headers: Arc<RwLock<Arc<ResponseHeaders>>>,
    overwrite_existing: bool,
    stats: Arc<HeaderStats>,
}

impl HeadersConfig {
    pub fn new(headers: ResponseHeaders) -> Self {
        Self {
            headers: Arc::new(RwLock::new(Arc::new(headers))),
            overwrite_existing: false,
            stats: Arc::new(HeaderStats::new()),
        }
    }

    /// The headers currently in effect.
    #[inline]
    pub fn headers(&self) -> Arc<ResponseHeaders> {
        self.headers.read().clone()
    }

    /// Swaps in a new set of headers for all subsequent responses.
    pub fn replace(&self, headers: ResponseHeaders) {
        log::debug!("replacing {} response headers", headers.len());
        *self.headers.write() = Arc::new(headers);
        self.stats.increment_config_update_count();
    }

    /// Builds a new set of headers from scratch and swaps it in. The current
    /// headers stay in effect when `configure` or validation fails.
    pub fn reconfigure<F>(&self, configure: F) -> Result<(), CspError>
    where
        F: FnOnce(&mut ResponseHeadersBuilder) -> Result<(), CspError>,
    {
        let mut builder = ResponseHeadersBuilder::new();
        configure(&mut builder)?;
        self.replace(builder.build()?);
        Ok(())
    }

    #[inline]
    pub fn overwrite_existing(&self) -> bool {
        self.overwrite_existing
    }

    #[inline]
    pub fn stats(&self) -> &Arc<HeaderStats> {
        &self.stats
    }
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self::new(ResponseHeaders::default())
    }
}

#[derive(Debug, Default)]
pub struct HeadersConfigBuilder {
    headers: Option<ResponseHeaders>,
    overwrite_existing: bool,
    stats: Option<Arc<HeaderStats>>,
}

impl HeadersConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn headers(mut self, headers: ResponseHeaders) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Replace headers the handler already set instead of keeping them.
    #[inline]
    pub fn with_overwrite_existing(mut self, enabled: bool) -> Self {
        self.overwrite_existing = enabled;
        self
    }

    /// Shares counters with another config.
    #[inline]
    pub fn with_stats(mut self, stats: Arc<HeaderStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn build(self) -> HeadersConfig {
        let mut config = HeadersConfig::new(self.headers.unwrap_or_default());
        config.overwrite_existing = self.overwrite_existing;

        if let Some(stats) = self.stats {
            config.stats = stats;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::{FrameOptionsExt, ResponseHeadersOptions};

    #[test]
    fn test_config_builder_defaults() {
        let config = HeadersConfigBuilder::new().build();

        assert!(config.headers().is_empty());
        assert!(!config.overwrite_existing());
        assert_eq!(config.stats().config_update_count(), 0);
    }

    #[test]
    fn test_reconfigure_swaps_headers() {
        let config = HeadersConfig::default();
        let before = config.headers();

        config
            .reconfigure(|headers| {
                headers.prevent_framing();
                Ok(())
            })
            .unwrap();

        assert!(before.is_empty());
        assert_eq!(config.headers().get("x-frame-options").unwrap(), "DENY");
        assert_eq!(config.stats().config_update_count(), 1);
    }

    #[test]
    fn test_failed_reconfigure_keeps_previous_headers() {
        let config = HeadersConfig::default();
        config
            .reconfigure(|headers| {
                headers.prevent_framing();
                Ok(())
            })
            .unwrap();

        let result = config.reconfigure(|headers| {
            headers.add("bad header", "x");
            Ok(())
        });

        assert!(matches!(result, Err(CspError::InvalidHeaderName(_))));
        assert_eq!(config.headers().len(), 1);
        assert_eq!(config.stats().config_update_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let config = HeadersConfigBuilder::new()
            .with_overwrite_existing(true)
            .build();
        let clone = config.clone();

        config
            .reconfigure(|headers| {
                headers.allow_framing_from_same_origin();
                Ok(())
            })
            .unwrap();

        assert!(clone.overwrite_existing());
        assert_eq!(clone.headers().len(), 1);
    }
}
