use std::{fmt::Debug, sync::Arc};

use crate::{
    args::Args,
    errors::{ConfigurationError, ConstructError},
    types::{DynError, Injectable, Instance, TypeInfo},
    validation,
};

/// A declared constructor parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    /// Parameters with a default may be left out of the captured arguments
    pub has_default: bool,
}
impl Parameter {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            has_default: false,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            has_default: true,
        }
    }
}

/// A type which can be constructed from captured arguments
///
/// # Example
/// ```rust
/// use injectofy::{Args, Construct, DynError, Parameter};
///
/// struct Greeter {
///     greeting: String,
///     punctuation: char,
/// }
///
/// impl Construct for Greeter {
///     fn parameters() -> Vec<Parameter> {
///         vec![Parameter::required("greeting"), Parameter::optional("punctuation")]
///     }
///
///     fn construct(args: &Args) -> Result<Self, DynError> {
///         Ok(Greeter {
///             greeting: args.get::<String>(0)?.clone(),
///             punctuation: args.get_or(1, '!')?,
///         })
///     }
/// }
/// ```
pub trait Construct: Injectable + Sized {
    /// The declared constructor parameters, in order
    ///
    /// Types without a declared constructor have no parameters.
    fn parameters() -> Vec<Parameter> {
        Vec::new()
    }

    /// Constructs a new instance from the captured arguments
    fn construct(args: &Args) -> Result<Self, DynError>;
}

type Constructor<T> = Arc<dyn Fn(&Args) -> Result<T, DynError> + Send + Sync>;

/// Deferred construction of `T`
///
/// Nothing is constructed when wrapping or capturing arguments.
/// Each call to [`ClassDescriptor::create_instance`] validates and then produces a new instance,
/// the descriptor itself can be reused.
pub struct ClassDescriptor<T: Injectable> {
    constructor: Constructor<T>,
    parameters: Vec<Parameter>,
    required: usize,
    args: Option<Args>,
}

impl<T: Construct> ClassDescriptor<T> {
    pub fn wrap() -> Self {
        Self::from_fn(T::parameters(), T::construct)
    }
}

impl<T: Injectable> ClassDescriptor<T> {
    /// Wraps a constructor function with an explicitly declared parameter list
    pub fn from_fn<F>(parameters: impl IntoIterator<Item = Parameter>, constructor: F) -> Self
    where
        F: Fn(&Args) -> Result<T, DynError> + Send + Sync + 'static,
    {
        let parameters: Vec<Parameter> = parameters.into_iter().collect();
        let required = validation::required_parameter_count(&parameters);
        Self {
            constructor: Arc::new(constructor),
            parameters,
            required,
            args: None,
        }
    }

    /// Captures the constructor arguments, replacing previously captured ones
    pub fn lazy_construct(mut self, args: Args) -> Self {
        self.args = Some(args);
        self
    }

    pub fn args(&self) -> Option<&Args> {
        self.args.as_ref()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn required_parameter_count(&self) -> usize {
        self.required
    }

    pub fn product(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    /// Checks the captured arguments cover all required parameters
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validation::check_arguments(
            std::any::type_name::<T>(),
            self.required,
            self.args.as_ref(),
        )
    }

    /// Validates, then constructs a new instance
    ///
    /// Errors returned by the constructor are passed on unchanged.
    pub fn create_instance(&self) -> Result<T, ConstructError> {
        self.validate()?;

        let no_args = Args::new();
        let args = match &self.args {
            Some(args) if !args.is_empty() => args,
            _ => &no_args,
        };

        (self.constructor)(args).map_err(ConstructError::Failed)
    }
}

impl<T: Injectable> Clone for ClassDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            constructor: self.constructor.clone(),
            parameters: self.parameters.clone(),
            required: self.required,
            args: self.args.clone(),
        }
    }
}

impl<T: Injectable> Debug for ClassDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("product", &std::any::type_name::<T>())
            .field("parameters", &self.parameters)
            .field("args", &self.args)
            .finish()
    }
}

/// Wrapper Trait for class descriptors, producing instances of Any
pub trait DynClassDescriptor: Send + Sync {
    fn product(&self) -> TypeInfo;

    fn required_parameter_count(&self) -> usize;

    fn args(&self) -> Option<&Args>;

    fn validate(&self) -> Result<(), ConfigurationError>;

    fn create_instance(&self) -> Result<Instance, ConstructError>;
}
// Impl DynClassDescriptor for any ClassDescriptor
impl<T: Injectable> DynClassDescriptor for ClassDescriptor<T> {
    fn product(&self) -> TypeInfo {
        ClassDescriptor::product(self)
    }

    fn required_parameter_count(&self) -> usize {
        ClassDescriptor::required_parameter_count(self)
    }

    fn args(&self) -> Option<&Args> {
        ClassDescriptor::args(self)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        ClassDescriptor::validate(self)
    }

    fn create_instance(&self) -> Result<Instance, ConstructError> {
        ClassDescriptor::create_instance(self).map(Instance::new)
    }
}
