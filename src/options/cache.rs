use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Cache", inline)]
#[serde(default)]
/// Tile cache tuning handed to the host once at startup.
pub struct CacheOptions {
    /// Pages held per cache.
    #[schemars(title = "Cache Size", range(min = 16, max = 4096))]
    pub cache_size: u32,
    /// Loader threads per cache.
    #[schemars(title = "Loader Threads", range(min = 1, max = 16))]
    pub cache_threads: u32,
    /// Pending page requests kept per cache.
    #[schemars(skip)]
    pub need_queue_size: u32,
    /// Loaded pages awaiting upload per cache.
    #[schemars(skip)]
    pub load_queue_size: u32,
    /// Uploads performed per frame.
    #[schemars(title = "Loads per Frame", range(min = 1, max = 32))]
    pub loads_per_cycle: u32,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            cache_size: 128,
            cache_threads: 2,
            need_queue_size: 32,
            load_queue_size: 8,
            loads_per_cycle: 2,
        }
    }
}
