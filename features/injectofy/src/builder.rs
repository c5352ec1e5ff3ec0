use std::sync::Arc;

use crate::{
    config::RegistryConfig,
    descriptors::{CallDescriptor, ClassDescriptor},
    errors::CreateError,
    registry::{Registry, ServiceKey},
    resolver::Entry,
    types::Injectable,
};

/// Collects the initial services of a [`Registry`]
///
/// `build` registers the entries in order under the configured overwrite policy
/// and validates all class descriptors, so a misconfigured service fails
/// at startup instead of on first use.
pub struct RegistryBuilder<K: ServiceKey = &'static str> {
    pub(crate) config: RegistryConfig,
    pub(crate) entries: Vec<(K, Entry)>,
}
impl<K: ServiceKey> Default for RegistryBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ServiceKey> RegistryBuilder<K> {
    pub fn new() -> Self {
        RegistryBuilder {
            config: RegistryConfig::default(),
            entries: Vec::new(),
        }
    }
}
impl<K: ServiceKey> RegistryBuilder<K> {
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn add_entry(mut self, identifier: K, entry: impl Into<Entry>) -> Self {
        self.entries.push((identifier, entry.into()));
        self
    }

    pub fn add_value<T: Injectable>(self, identifier: K, value: T) -> Self {
        self.add_entry(identifier, Entry::value(value))
    }

    pub fn add_shared<T: Injectable>(self, identifier: K, value: Arc<T>) -> Self {
        self.add_entry(identifier, Entry::shared(value))
    }

    pub fn add_callable<Output, F>(self, identifier: K, func: F) -> Self
    where
        Output: 'static,
        F: Fn() -> Output + Send + Sync + 'static,
    {
        self.add_entry(identifier, Entry::callable(func))
    }

    pub fn add_class<T: Injectable>(self, identifier: K, descriptor: ClassDescriptor<T>) -> Self {
        self.add_entry(identifier, descriptor)
    }

    pub fn add_call<R: Injectable>(self, identifier: K, descriptor: CallDescriptor<R>) -> Self {
        self.add_entry(identifier, descriptor)
    }

    pub fn build(self) -> Result<Registry<K>, CreateError> {
        Registry::create_with_config(self.config, self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        args,
        config::OverwritePolicy,
        descriptors::Parameter,
        errors::{ConfigurationError, RegisterError, UseError},
        function::ServiceFn,
    };

    #[test]
    fn builds_all_entry_kinds() {
        let registry = RegistryBuilder::new()
            .add_value("value", "TEST 2".to_string())
            .add_callable("callable", || "TEST 3")
            .add_class(
                "class",
                ClassDescriptor::from_fn([Parameter::required("name")], |args| {
                    Ok(args.get::<&str>(0)?.to_uppercase())
                })
                .lazy_construct(args!["test"]),
            )
            .add_call(
                "call",
                CallDescriptor::wrap(
                    |args| Ok(args.get::<i32>(0)? + args.get::<i32>(1)?),
                    args![1, 1],
                ),
            )
            .build()
            .unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(*registry.use_as::<String, _>("value").unwrap(), "TEST 2");
        assert_eq!(
            registry
                .use_as::<ServiceFn<(), &str>, _>("callable")
                .unwrap()
                .call(()),
            "TEST 3"
        );
        assert_eq!(*registry.use_as::<String, _>("class").unwrap(), "TEST");
        assert_eq!(*registry.use_as::<i32, _>("call").unwrap(), 2);
    }

    #[test]
    fn build_fails_on_invalid_class() {
        let result = RegistryBuilder::new()
            .add_value("fine", 1_u8)
            .add_class(
                "broken",
                ClassDescriptor::from_fn([Parameter::required("a"), Parameter::required("b")], |_| {
                    Ok(0_u8)
                })
                .lazy_construct(args![1]),
            )
            .build();

        assert!(matches!(
            result,
            Err(CreateError::Configuration(ConfigurationError::MissingParameter {
                required: 2,
                captured: 1,
                ..
            }))
        ));
    }

    #[test]
    fn reject_policy_applies_to_initial_entries() {
        let result = RegistryBuilder::new()
            .config(RegistryConfig::default().with_overwrite(OverwritePolicy::Reject))
            .add_value("a", 1_u8)
            .add_value("b", 2_u8)
            .add_value("a", 3_u8)
            .build();

        assert_eq!(
            result.unwrap_err(),
            CreateError::Register(RegisterError::AlreadyRegistered {
                identifier: "a".to_string()
            })
        );
    }

    #[test]
    fn same_type_policy_applies_to_initial_entries() {
        let result = RegistryBuilder::new()
            .config(RegistryConfig::default().with_overwrite(OverwritePolicy::SameType))
            .add_value("a", 1_u8)
            .add_value("a", 2_u8)
            .add_value("a", "three")
            .build();

        match result {
            Err(CreateError::Register(RegisterError::TypeMismatch {
                registered,
                attempted,
                ..
            })) => {
                assert_eq!(registered.type_name, "u8");
                assert_eq!(attempted.type_name, "&str");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn duplicate_initial_entries_keep_the_last() {
        let registry = RegistryBuilder::new()
            .add_value("a", 1_u8)
            .add_value("b", 2_u8)
            .add_value("a", 3_u8)
            .build()
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(*registry.use_as::<u8, _>("a").unwrap(), 3);
        assert_eq!(registry.identifiers().copied().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn lazy_validation_is_configurable() {
        let registry = RegistryBuilder::new()
            .config(RegistryConfig::default().with_eager_validation(false))
            .add_class(
                "broken",
                ClassDescriptor::from_fn([Parameter::required("a")], |_| Ok(0_u8)),
            )
            .build()
            .unwrap();

        assert!(matches!(
            registry.use_service("broken"),
            Err(UseError::Construct(_))
        ));
    }
}
