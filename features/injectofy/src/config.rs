/// What happens when an identifier is registered a second time
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Last write wins
    #[default]
    Replace,
    /// Overwriting is allowed if the new entry supplies the same type
    SameType,
    /// Every identifier can only be registered once
    Reject,
}

/// Registry behaviour
///
/// The default validates class descriptors when the registry is created,
/// and lets later registrations replace earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Validate all class descriptors on creation instead of first use
    pub eager_validation: bool,
    pub overwrite: OverwritePolicy,
}
impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            eager_validation: true,
            overwrite: OverwritePolicy::Replace,
        }
    }
}
impl RegistryConfig {
    pub fn with_eager_validation(mut self, eager_validation: bool) -> Self {
        self.eager_validation = eager_validation;
        self
    }

    pub fn with_overwrite(mut self, overwrite: OverwritePolicy) -> Self {
        self.overwrite = overwrite;
        self
    }
}
