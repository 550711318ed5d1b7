use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Counters kept by the response headers middleware.
#[derive(Debug)]
pub struct HeaderStats {
    request_count: AtomicUsize,
    headers_written: AtomicUsize,
    headers_kept: AtomicUsize,
    config_update_count: AtomicUsize,
    start_time: Instant,
}

impl Default for HeaderStats {
    fn default() -> Self {
        Self {
            request_count: Default::default(),
            headers_written: Default::default(),
            headers_kept: Default::default(),
            config_update_count: Default::default(),
            start_time: Instant::now(),
        }
    }
}

impl HeaderStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Headers inserted into responses.
    #[inline]
    pub fn headers_written(&self) -> usize {
        self.headers_written.load(Ordering::Relaxed)
    }

    /// Configured headers not written because the handler had already set them.
    #[inline]
    pub fn headers_kept(&self) -> usize {
        self.headers_kept.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn config_update_count(&self) -> usize {
        self.config_update_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    #[inline]
    pub fn requests_per_second(&self) -> f64 {
        let uptime = self.start_time.elapsed().as_secs_f64();
        if uptime > 0.0 {
            self.request_count() as f64 / uptime
        } else {
            0.0
        }
    }

    #[inline]
    pub(crate) fn record_response(&self, written: usize, kept: usize) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        self.headers_written.fetch_add(written, Ordering::Relaxed);
        self.headers_kept.fetch_add(kept, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn increment_config_update_count(&self) {
        self.config_update_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.request_count.store(0, Ordering::Relaxed);
        self.headers_written.store(0, Ordering::Relaxed);
        self.headers_kept.store(0, Ordering::Relaxed);
        self.config_update_count.store(0, Ordering::Relaxed);
    }
}

impl fmt::Display for HeaderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Response Headers Middleware Statistics:")?;
        writeln!(f, "  Uptime: {} seconds", self.uptime_secs())?;
        writeln!(f, "  Requests processed: {}", self.request_count())?;
        writeln!(
            f,
            "  Requests per second: {:.2}",
            self.requests_per_second()
        )?;
        writeln!(f, "  Headers written: {}", self.headers_written())?;
        writeln!(f, "  Headers kept from handlers: {}", self.headers_kept())?;
        writeln!(f, "  Config updates: {}", self.config_update_count())?;
        Ok(())
    }
}
