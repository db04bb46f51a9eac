use alloy::transports::layers::RetryBackoffLayer;

/// Default number of retries on rate-limited responses.
pub const DEFAULT_MAX_RATE_LIMIT_RETRIES: u32 = 10;

/// Default initial backoff in milliseconds.
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;

/// Compute units per second budget assumed for the upstream provider.
pub const DEFAULT_COMPUTE_UNITS_PER_SECOND: u64 = 100;

/// Transport-level retry layer for HTTP RPC clients.
///
/// It only retries responses the provider flags as rate limited (HTTP 429 and equivalent
/// JSON-RPC errors). Every other failure is surfaced to the caller unchanged.
pub fn retry_layer(max_rate_limit_retries: u32, initial_backoff_ms: u64) -> RetryBackoffLayer {
    RetryBackoffLayer::new(
        max_rate_limit_retries,
        initial_backoff_ms,
        DEFAULT_COMPUTE_UNITS_PER_SECOND,
    )
}

/// The retry layer with default settings.
pub fn default_retry_layer() -> RetryBackoffLayer {
    retry_layer(DEFAULT_MAX_RATE_LIMIT_RETRIES, DEFAULT_INITIAL_BACKOFF_MS)
}
