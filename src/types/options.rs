//! Per-call options.

use crate::catalog::MediaProfile;

/// Limit bound into list requests when the caller does not set one.
///
/// Mirrors the remote API's own default, the maximum 32-bit signed integer.
pub const DEFAULT_LIMIT: i32 = i32::MAX;

/// Offset bound into list requests when the caller does not set one.
pub const DEFAULT_OFFSET: i32 = 0;

/// Options accepted by every operation.
///
/// Headers set here replace the operation's default header of the same name
/// (compared case-insensitively). Headers not named here keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub headers: Vec<(String, String)>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an explicit header. Setting the same name again (in any casing)
    /// replaces the earlier value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Shorthand for overriding `Accept` with one of the versioned media types.
    pub fn accept(self, profile: MediaProfile) -> Self {
        self.header("accept", profile.media_type())
    }
}

/// Options accepted by the paginated list operations
/// (`get_activities`, `get_offers`, `get_audiences`).
///
/// Values are plain per-call defaults; nothing is shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    pub sort_by: Option<String>,
    pub call: CallOptions,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.call = self.call.header(name, value);
        self
    }

    pub fn accept(mut self, profile: MediaProfile) -> Self {
        self.call = self.call.accept(profile);
        self
    }

    pub fn effective_limit(&self) -> i32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn effective_offset(&self) -> i32 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }
}
