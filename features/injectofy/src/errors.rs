use thiserror::Error;

use crate::types::{DynError, TypeInfo};

/// The requested identifier is not registered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Service not found for identifier: {identifier}")]
pub struct NotFoundError {
    pub identifier: String,
}

/// A class descriptor can not be constructed with the arguments it captured
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Required parameters exist, but `lazy_construct` was never called
    #[error("There is a required parameter and it was not constructed! Use lazy_construct(...) to capture the arguments")]
    NotConstructed {
        product: &'static str,
        required: usize,
    },
    /// Arguments were captured, but fewer than the required parameters
    #[error("There is a missing required parameter! Either Adjust the required parameters or correct the construction of the class.")]
    MissingParameter {
        product: &'static str,
        required: usize,
        captured: usize,
    },
}
impl ConfigurationError {
    /// Name of the type the failing descriptor produces
    pub fn product(&self) -> &'static str {
        match self {
            Self::NotConstructed { product, .. } | Self::MissingParameter { product, .. } => {
                product
            }
        }
    }
}

/// Errors while reading captured arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("Arguments not provided for the function - missing argument at index {index}")]
    MissingArgument { index: usize },
    #[error("Argument at index {index} has type '{actual}', expected '{expected}'")]
    ArgumentType {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Errors while constructing or invoking a deferred descriptor
#[derive(Error, Debug)]
pub enum ConstructError {
    /// The descriptor failed validation before construction
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The wrapped constructor or function failed, the error is passed on unchanged
    #[error(transparent)]
    Failed(DynError),
}

/// Errors when registering a service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Service already registered for identifier: {identifier}")]
    AlreadyRegistered { identifier: String },
    #[error("Type mismatch: {identifier} is already registered with a different type")]
    TypeMismatch {
        identifier: String,
        registered: TypeInfo,
        attempted: TypeInfo,
    },
}

/// Errors when creating a registry from initial entries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    /// An initial entry was refused by the overwrite policy
    #[error(transparent)]
    Register(#[from] RegisterError),
    /// Eager validation found a misconfigured class descriptor
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Errors when using a service
#[derive(Error, Debug)]
pub enum UseError {
    /// Lookup failed
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Lookup succeeded, but the entry could not be resolved
    #[error(transparent)]
    Construct(#[from] ConstructError),
    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    TypeMismatch {
        required_type: &'static str,
        actual_type: &'static str,
    },
}
impl From<ConfigurationError> for UseError {
    fn from(error: ConfigurationError) -> Self {
        Self::Construct(error.into())
    }
}
