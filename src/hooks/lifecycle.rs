use std::collections::HashMap;

use crate::domain::{BumpKind, Version};

/// Points in a bump where a user command may run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookType {
    /// Before any file or repository change
    Prehook,
    /// After both commits and the release tag exist
    Posthook,
}

impl HookType {
    /// Get the hook name as a string
    pub fn name(&self) -> &'static str {
        match self {
            HookType::Prehook => "prehook",
            HookType::Posthook => "posthook",
        }
    }
}

/// Context information passed to a hook
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Type of hook being executed
    pub hook_type: HookType,
    /// Requested bump
    pub bump_kind: BumpKind,
    /// Version found in the files before the bump
    pub current_version: Version,
    /// Tagged release version, once computed
    pub release_version: Option<Version>,
    /// Development version written after the release, once computed
    pub prerelease_version: Option<Version>,
}

impl HookContext {
    /// Context for the hook run before anything changes
    pub fn prehook(bump_kind: BumpKind, current_version: &Version) -> Self {
        HookContext {
            hook_type: HookType::Prehook,
            bump_kind,
            current_version: current_version.clone(),
            release_version: None,
            prerelease_version: None,
        }
    }

    /// Context for the hook run once the release is committed and tagged
    pub fn posthook(
        bump_kind: BumpKind,
        current_version: &Version,
        release_version: &Version,
        prerelease_version: &Version,
    ) -> Self {
        HookContext {
            hook_type: HookType::Posthook,
            bump_kind,
            current_version: current_version.clone(),
            release_version: Some(release_version.clone()),
            prerelease_version: Some(prerelease_version.clone()),
        }
    }

    /// Convert context to environment variables for the hook command
    ///
    /// Maps context fields to VUP_* environment variables
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        env.insert("VUP_HOOK".to_string(), self.hook_type.name().to_string());
        env.insert("VUP_BUMP_TYPE".to_string(), self.bump_kind.to_string());
        env.insert(
            "VUP_CURRENT_VERSION".to_string(),
            self.current_version.to_string(),
        );

        if let Some(ref release) = self.release_version {
            env.insert("VUP_RELEASE_VERSION".to_string(), release.to_string());
        }

        if let Some(ref prerelease) = self.prerelease_version {
            env.insert("VUP_PRERELEASE_VERSION".to_string(), prerelease.to_string());
        }

        env
    }
}
