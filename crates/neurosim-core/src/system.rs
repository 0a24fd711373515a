//! System dependency types.

use serde::Serialize;

/// Represents the status of a system dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DependencyStatus {
    /// Dependency is installed and available.
    Present { version: String },
    /// Dependency is missing.
    Missing,
}

/// Information about a tool the setup run shells out to.
#[derive(Debug, Clone, Serialize)]
pub struct Dependency {
    /// Name of the dependency (e.g., "cmake", "python3").
    pub name: String,
    /// Current status of the dependency.
    pub status: DependencyStatus,
    /// Description of what this dependency is used for.
    pub description: String,
    /// Whether the setup run fails without it.
    pub required: bool,
    /// Installation instructions or hints.
    pub install_hint: Option<String>,
}

impl Dependency {
    /// Create a new required dependency.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: true,
            install_hint: None,
        }
    }

    /// Create a new optional dependency.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    /// Set installation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Set the status from a probed version, `None` meaning missing.
    #[must_use]
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.status = version.map_or(DependencyStatus::Missing, |version| {
            DependencyStatus::Present { version }
        });
        self
    }

    pub const fn is_missing_required(&self) -> bool {
        self.required && matches!(self.status, DependencyStatus::Missing)
    }
}
