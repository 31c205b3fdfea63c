//! Application-wide constants

/// Number of tasks kept in a dashboard activity history.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;
/// Display name of a history entry whose catalog reference is missing.
pub const DEFAULT_UNNAMED_TASK_LABEL: &str = "Task";
/// Display name of a doer that is not part of the group roster.
pub const DEFAULT_UNKNOWN_USER_LABEL: &str = "Unknown";
/// Relative tolerance used when checking that the balances of a group sum to zero.
pub const BALANCE_EPSILON: f64 = 1e-10;
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/ledger.json";
