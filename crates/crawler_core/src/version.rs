//! Application version, surfaced in exports and update notices.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: &'static str,
    pub release_date: &'static str,
}

pub const CURRENT: AppVersion = AppVersion {
    major: 2,
    minor: 1,
    patch: 1,
    build: "June 2025",
    release_date: "2025-06-24",
};

impl AppVersion {
    /// Dotted version string, e.g. `2.1.1`.
    pub fn full(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Version with build label, e.g. `v2.1.1 (June 2025)`.
    pub fn display(&self) -> String {
        format!("v{} ({})", self.full(), self.build)
    }

    /// Whether this version is strictly newer than a previously stored dotted
    /// version string. Missing or unparsable components read as zero, and an
    /// empty stored string always counts as older.
    pub fn is_newer_than(&self, stored: &str) -> bool {
        if stored.trim().is_empty() {
            return true;
        }
        let mut parts = stored.trim().split('.').map(|p| p.parse::<u32>().unwrap_or(0));
        let stored = [
            parts.next().unwrap_or(0),
            parts.next().unwrap_or(0),
            parts.next().unwrap_or(0),
        ];
        let current = [self.major, self.minor, self.patch];
        for (current_part, stored_part) in current.iter().zip(stored.iter()) {
            if current_part > stored_part {
                return true;
            }
            if current_part < stored_part {
                return false;
            }
        }
        false
    }
}
