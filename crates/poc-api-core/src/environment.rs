//! Process environment capture for the admin endpoint.

use std::collections::BTreeMap;

use serde::Serialize;

/// Every environment variable of the current process, ordered by name.
///
/// No filtering is applied; secrets are included as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentSnapshot(BTreeMap<String, String>);

impl EnvironmentSnapshot {
    /// Reads the environment of the running process.
    ///
    /// Names or values that are not valid Unicode are converted lossily
    /// rather than dropped.
    pub fn capture() -> Self {
        Self::from_pairs(std::env::vars_os().map(|(name, value)| {
            (
                name.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    /// Builds a snapshot from explicit pairs. Later duplicates win.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self(pairs.into_iter().collect())
    }

    /// Number of variables captured.
    pub fn var_count(&self) -> usize {
        self.0.len()
    }
}
