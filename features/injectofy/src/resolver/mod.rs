use crate::{errors::ConstructError, types::Instance};

pub mod entry;

pub use entry::{Entry, EntryKind};

/// Produces the usable service of an entry
///
/// - class descriptors are validated and constructed
/// - call descriptors are invoked
/// - values and plain callables are handed out unchanged
pub fn resolve(entry: &Entry) -> Result<Instance, ConstructError> {
    match entry {
        Entry::Class(descriptor) => {
            tracing::trace!("Constructing instance of {}", descriptor.product());
            descriptor.create_instance()
        }
        Entry::Call(descriptor) => {
            tracing::trace!("Invoking call returning {}", descriptor.product());
            descriptor.invoke()
        }
        Entry::Value(instance) | Entry::Callable(instance) => Ok(instance.clone()),
    }
}

/// True if resolving the entry constructs or invokes something
pub fn is_deferred(entry: &Entry) -> bool {
    matches!(entry, Entry::Class(_) | Entry::Call(_))
}

impl Entry {
    pub fn resolve(&self) -> Result<Instance, ConstructError> {
        resolve(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        args,
        descriptors::{CallDescriptor, ClassDescriptor, Construct, Parameter},
        errors::ConfigurationError,
        function::ServiceFn,
        types::DynError,
        Args,
    };

    struct Greeter {
        greeting: String,
    }
    impl Construct for Greeter {
        fn parameters() -> Vec<Parameter> {
            vec![Parameter::required("greeting")]
        }

        fn construct(args: &Args) -> Result<Self, DynError> {
            Ok(Greeter {
                greeting: args.get::<String>(0)?.clone(),
            })
        }
    }

    #[test]
    fn values_pass_through() {
        let value = Arc::new("value".to_string());
        let entry = Entry::shared(value.clone());

        let resolved = resolve(&entry).unwrap();
        assert!(Arc::ptr_eq(&value, &resolved.downcast::<String>().unwrap()));
        assert!(!is_deferred(&entry));
    }

    #[test]
    fn callables_are_not_invoked() {
        let entry = Entry::callable(|| 42);
        assert_eq!(entry.kind(), EntryKind::Callable);
        assert!(!is_deferred(&entry));

        let resolved = resolve(&entry).unwrap();
        let answer = resolved.downcast::<ServiceFn<(), i32>>().unwrap();
        assert_eq!(answer.call(()), 42);
    }

    #[test]
    fn class_descriptors_are_constructed() {
        let entry: Entry = ClassDescriptor::<Greeter>::wrap()
            .lazy_construct(args!["hi".to_string()])
            .into();
        assert!(is_deferred(&entry));

        let first = entry.resolve().unwrap();
        let second = entry.resolve().unwrap();
        assert!(!first.ptr_eq(&second));
        assert_eq!(first.downcast::<Greeter>().unwrap().greeting, "hi");
    }

    #[test]
    fn class_descriptors_are_validated() {
        let entry = Entry::class(ClassDescriptor::<Greeter>::wrap());

        assert!(matches!(
            resolve(&entry),
            Err(ConstructError::Configuration(ConfigurationError::NotConstructed { .. }))
        ));
    }

    #[test]
    fn call_descriptors_are_invoked() {
        let entry: Entry = CallDescriptor::wrap(
            |args| Ok(args.get::<i32>(0)? + args.get::<i32>(1)?),
            args![2, 3],
        )
        .into();
        assert_eq!(entry.kind(), EntryKind::Call);
        assert_eq!(entry.supplies().type_name, "i32");

        assert_eq!(*resolve(&entry).unwrap().downcast::<i32>().unwrap(), 5);
    }
}
