/// Lifecycle of a compute's cached value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Registered but never run.
    #[default]
    BeforeInit,
    /// A dependency changed since the last run.
    Dirty,
    /// Ran; its update has not arrived through the channel yet.
    Pending,
    /// Cached value matches the last run.
    Clean,
}
