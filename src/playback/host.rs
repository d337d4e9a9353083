use crate::options::CacheOptions;

/// Calls the playback layer makes into the rendering/streaming host.
///
/// All calls are fire-and-forget requests. The host decides how (and
/// whether) to honour them.
pub trait Host {
    /// Enter or leave fixed-timestep rendering.
    fn set_movie_mode(&mut self, on: bool);

    /// Ask the content cache to load synchronously (no partial frames).
    fn set_synchronous(&mut self, on: bool);

    /// Drop cached content.
    fn flush_cache(&mut self);

    /// Hand over cache tuning once, at controller construction.
    fn configure_cache(&mut self, cache: &CacheOptions) {
        let _ = cache;
    }
}

/// Host that ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl Host for NullHost {
    fn set_movie_mode(&mut self, _on: bool) {}

    fn set_synchronous(&mut self, _on: bool) {}

    fn flush_cache(&mut self) {}
}

/// Host that logs every request and remembers the current modes.
///
/// Used by headless tools that bake paths without a renderer.
#[derive(Debug, Clone, Default)]
pub struct LogHost {
    /// Whether movie mode is currently requested.
    pub movie: bool,
    /// Whether synchronous loading is currently requested.
    pub synchronous: bool,
    /// Number of cache flushes requested so far.
    pub flushes: usize,
    /// Cache tuning received at construction.
    pub cache: Option<CacheOptions>,
}

impl Host for LogHost {
    fn set_movie_mode(&mut self, on: bool) {
        if self.movie != on {
            log::info!("Movie mode {}", if on { "on" } else { "off" });
        }
        self.movie = on;
    }

    fn set_synchronous(&mut self, on: bool) {
        if self.synchronous != on {
            log::debug!(
                "Synchronous loading {}",
                if on { "on" } else { "off" }
            );
        }
        self.synchronous = on;
    }

    fn flush_cache(&mut self) {
        self.flushes += 1;
        log::info!("Cache flush requested ({} so far)", self.flushes);
    }

    fn configure_cache(&mut self, cache: &CacheOptions) {
        log::debug!(
            "Cache configured: {} entries, {} threads",
            cache.cache_size,
            cache.cache_threads
        );
        self.cache = Some(cache.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_host_tracks_modes() {
        let mut host = LogHost::default();
        host.set_movie_mode(true);
        host.set_synchronous(true);
        host.flush_cache();
        assert!(host.movie);
        assert!(host.synchronous);
        assert_eq!(host.flushes, 1);

        host.set_movie_mode(false);
        assert!(!host.movie);
    }

    #[test]
    fn log_host_keeps_cache_tuning() {
        let mut host = LogHost::default();
        host.configure_cache(&CacheOptions::default());
        assert_eq!(host.cache, Some(CacheOptions::default()));
    }
}
