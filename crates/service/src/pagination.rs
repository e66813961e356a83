//! Offset pagination for list endpoints.

use sea_orm::QuerySelect;

pub const DEFAULT_LIMIT: u64 = 10;

/// Largest offset/limit the SQL binders accept (both bind as signed 64-bit).
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// `skip`/`limit` window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Pagination {
    /// Values past [`MAX_WINDOW`] are clamped to it.
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip: skip.min(MAX_WINDOW), limit: limit.min(MAX_WINDOW) }
    }

    /// Apply the window to a select. Callers are expected to have ordered it.
    pub fn apply<S: QuerySelect>(self, select: S) -> S {
        select
            .offset(self.skip.min(MAX_WINDOW))
            .limit(self.limit.min(MAX_WINDOW))
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}
