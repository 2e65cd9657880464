//! Backing-store adapter capability.

/// A live connection to a backing store.
///
/// Query execution, pooling and teardown belong to the implementation; the
/// registry only stores adapters and hands the same instance back.
pub trait Adapter: Send + Sync {
    /// Returns the name of the driver behind this adapter (e.g. "mysql").
    fn driver_name(&self) -> &'static str;
}
