//! Tracing/logging setup shared by storefront binaries.

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize with human-readable output instead of JSON (local development).
pub fn init_pretty() {
    tracing::init_pretty();
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
