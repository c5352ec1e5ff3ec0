//! Injectofy is a small, typed service registry with lazily constructed services.
//!
//! Services are registered under an identifier as one of:
//! 1. Values: already constructed instances, handed out as registered
//! 2. Callables: plain functions, handed out without being called
//! 3. Class descriptors: types constructed on use, from arguments captured up front
//! 4. Call descriptors: functions with pre-bound arguments, invoked on use
//!
//! # Examples
//!
//! ```rust
//! use injectofy::{args, wrap_call, wrap_class, Args, Construct, DynError, Parameter, Registry};
//!
//! struct Greeter {
//!     greeting: String,
//! }
//! impl Construct for Greeter {
//!     fn parameters() -> Vec<Parameter> {
//!         vec![Parameter::required("greeting")]
//!     }
//!
//!     fn construct(args: &Args) -> Result<Self, DynError> {
//!         Ok(Greeter { greeting: args.get::<String>(0)?.clone() })
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry
//!     .register("greeter", wrap_class::<Greeter>().lazy_construct(args!["hi".to_string()]))
//!     .unwrap();
//! registry
//!     .register("sum", wrap_call(|args| Ok(args.get::<i32>(0)? + args.get::<i32>(1)?), args![2, 3]))
//!     .unwrap();
//!
//! assert_eq!(registry.use_as::<Greeter, _>("greeter").unwrap().greeting, "hi");
//! assert_eq!(*registry.use_as::<i32, _>("sum").unwrap(), 5);
//! ```
//!
//! Lookup failures are returned as [`UseError::NotFound`], construction failures as
//! [`UseError::Construct`], so callers can tell a missing service from a misconfigured one.

pub mod args;
pub mod builder;
pub mod config;
pub mod descriptors;
pub mod errors;
pub mod function;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod validation;

pub use args::{Arg, Args};
pub use builder::RegistryBuilder;
pub use config::{OverwritePolicy, RegistryConfig};
pub use descriptors::{
    wrap_call, wrap_class, CallDescriptor, ClassDescriptor, Construct, DynCallDescriptor,
    DynClassDescriptor, Parameter,
};
pub use errors::{
    ConfigurationError, ConstructError, CreateError, InvocationError, NotFoundError,
    RegisterError, UseError,
};
pub use function::ServiceFn;
pub use registry::{Registry, ServiceKey};
pub use resolver::{Entry, EntryKind};
pub use types::{DynError, Injectable, Instance, TypeInfo};
