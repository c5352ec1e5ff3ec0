use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt::{Debug, Display},
    hash::Hash,
    sync::Arc,
};

use crate::{
    config::{OverwritePolicy, RegistryConfig},
    descriptors::{CallDescriptor, ClassDescriptor},
    errors::{ConfigurationError, CreateError, NotFoundError, RegisterError, UseError},
    resolver::{self, Entry},
    types::{Injectable, Instance},
    validation,
};

/// Identifiers a registry can be keyed by
///
/// Use an enum to get a compile time checked set of services,
/// or `&'static str`/`String` for free form names.
pub trait ServiceKey: Hash + Eq + Display + 'static {}
impl<T: Hash + Eq + Display + 'static> ServiceKey for T {}

/// Registry holding all registered services
///
/// A registry is owned by whoever created it. It provides no synchronization,
/// wrap it in a lock if it must be shared between threads.
pub struct Registry<K: ServiceKey = &'static str> {
    config: RegistryConfig,
    entries: HashMap<K, Slot>,
}

/// A registered entry and the position its identifier was first registered at
struct Slot {
    order: usize,
    entry: Entry,
}

impl<K: ServiceKey> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ServiceKey> Debug for Registry<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (key, entry) in self.ordered() {
            map.entry(
                &format_args!("{key}"),
                &format_args!("{} ({})", entry.kind(), entry.supplies()),
            );
        }
        map.finish()
    }
}

impl<K: ServiceKey> Registry<K> {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// Creates a registry from initial entries
    ///
    /// Initial entries are registered in order under the default [`RegistryConfig`],
    /// so a repeated identifier keeps the last entry.
    /// Class descriptors are validated right away, the first invalid one fails creation.
    pub fn create(entries: impl IntoIterator<Item = (K, Entry)>) -> Result<Self, CreateError> {
        Self::create_with_config(RegistryConfig::default(), entries)
    }

    /// Like [`Registry::create`]
    ///
    /// Initial entries go through [`Registry::register`], a duplicate the
    /// [`OverwritePolicy`] forbids fails creation.
    pub fn create_with_config(
        config: RegistryConfig,
        entries: impl IntoIterator<Item = (K, Entry)>,
    ) -> Result<Self, CreateError> {
        let mut registry = Self::with_config(config);
        for (identifier, entry) in entries {
            if let Err(e) = registry.register(identifier, entry) {
                tracing::warn!("Registry creation failed: {e}");
                return Err(e.into());
            }
        }

        tracing::debug!("Creating registry with {} services", registry.len());

        if registry.config.eager_validation {
            if let Err(e) = registry.validate() {
                tracing::warn!("Registry creation failed for {}: {e}", e.product());
                return Err(e.into());
            }
        }

        Ok(registry)
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers a service under `identifier`
    ///
    /// Returns the replaced entry if the identifier was registered before,
    /// a replaced identifier keeps its original position.
    /// Only fails if the [`OverwritePolicy`] forbids the replacement.
    pub fn register(
        &mut self,
        identifier: K,
        entry: impl Into<Entry>,
    ) -> Result<Option<Entry>, RegisterError> {
        let entry = entry.into();

        if let Some(existing) = self.entries.get_mut(&identifier) {
            let same_type = existing.entry.supplies().same_type(&entry.supplies());
            match self.config.overwrite {
                OverwritePolicy::Replace => {}
                OverwritePolicy::SameType if same_type => {}
                OverwritePolicy::SameType => {
                    return Err(RegisterError::TypeMismatch {
                        identifier: identifier.to_string(),
                        registered: existing.entry.supplies(),
                        attempted: entry.supplies(),
                    });
                }
                OverwritePolicy::Reject => {
                    return Err(RegisterError::AlreadyRegistered {
                        identifier: identifier.to_string(),
                    });
                }
            }
            tracing::debug!("Replacing service '{identifier}' with {}", entry.supplies());
            return Ok(Some(std::mem::replace(&mut existing.entry, entry)));
        }

        tracing::debug!("Registering service '{identifier}' as {}", entry.supplies());
        // Entries are never removed, so the current length is a unique position
        let order = self.entries.len();
        self.entries.insert(identifier, Slot { order, entry });
        Ok(None)
    }

    pub fn register_value<T: Injectable>(
        &mut self,
        identifier: K,
        value: T,
    ) -> Result<Option<Entry>, RegisterError> {
        self.register(identifier, Entry::value(value))
    }

    /// Registers a shared value, using it returns this exact allocation
    pub fn register_shared<T: Injectable>(
        &mut self,
        identifier: K,
        value: Arc<T>,
    ) -> Result<Option<Entry>, RegisterError> {
        self.register(identifier, Entry::shared(value))
    }

    pub fn register_callable<Output, F>(
        &mut self,
        identifier: K,
        func: F,
    ) -> Result<Option<Entry>, RegisterError>
    where
        Output: 'static,
        F: Fn() -> Output + Send + Sync + 'static,
    {
        self.register(identifier, Entry::callable(func))
    }

    pub fn register_class<T: Injectable>(
        &mut self,
        identifier: K,
        descriptor: ClassDescriptor<T>,
    ) -> Result<Option<Entry>, RegisterError> {
        self.register(identifier, descriptor)
    }

    pub fn register_call<R: Injectable>(
        &mut self,
        identifier: K,
        descriptor: CallDescriptor<R>,
    ) -> Result<Option<Entry>, RegisterError> {
        self.register(identifier, descriptor)
    }

    /// Looks up the raw, unresolved entry
    pub fn resolve<Q>(&self, identifier: &Q) -> Result<&Entry, NotFoundError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        match self.entries.get(identifier) {
            Some(slot) => Ok(&slot.entry),
            None => {
                tracing::warn!("Tried to resolve an unregistered service: {identifier}");
                Err(NotFoundError {
                    identifier: identifier.to_string(),
                })
            }
        }
    }

    /// Looks up and resolves a service
    ///
    /// Values and callables are returned as registered, class descriptors are
    /// constructed and call descriptors are invoked.
    pub fn use_service<Q>(&self, identifier: &Q) -> Result<Instance, UseError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let entry = self.resolve(identifier)?;
        tracing::trace!("Using service '{identifier}' ({})", entry.kind());
        Ok(resolver::resolve(entry)?)
    }

    /// Like [`Registry::use_service`], downcast to `T`
    pub fn use_as<T, Q>(&self, identifier: &Q) -> Result<Arc<T>, UseError>
    where
        T: Injectable,
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.use_service(identifier)?
            .downcast::<T>()
            .map_err(|actual_type| UseError::TypeMismatch {
                required_type: std::any::type_name::<T>(),
                actual_type,
            })
    }

    /// Validates every registered class descriptor
    ///
    /// Entries are checked in registration order, the first invalid one is reported.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validation::validate_entries(self.ordered().into_iter().map(|(_, entry)| entry))
    }

    pub fn contains<Q>(&self, identifier: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered identifiers, in registration order
    pub fn identifiers(&self) -> impl Iterator<Item = &K> {
        self.ordered().into_iter().map(|(identifier, _)| identifier)
    }

    fn ordered(&self) -> Vec<(&K, &Entry)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_unstable_by_key(|(_, slot)| slot.order);
        entries
            .into_iter()
            .map(|(identifier, slot)| (identifier, &slot.entry))
            .collect()
    }
}
