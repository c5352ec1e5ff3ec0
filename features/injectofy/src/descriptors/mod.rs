//! Deferred descriptors
//!
//! Descriptors postpone work until the registry resolves them:
//! - [`ClassDescriptor`] constructs a new instance on every resolution
//! - [`CallDescriptor`] invokes a function with captured arguments on every resolution

pub mod call;
pub mod class;

pub use call::{CallDescriptor, DynCallDescriptor};
pub use class::{ClassDescriptor, Construct, DynClassDescriptor, Parameter};

use crate::{
    args::Args,
    types::{DynError, Injectable},
};

/// Wraps `T` so its construction is deferred until resolution
pub fn wrap_class<T: Construct>() -> ClassDescriptor<T> {
    ClassDescriptor::wrap()
}

/// Wraps `func` with pre-bound `args`, invoked on every resolution
pub fn wrap_call<R, F>(func: F, args: Args) -> CallDescriptor<R>
where
    R: Injectable,
    F: Fn(&Args) -> Result<R, DynError> + Send + Sync + 'static,
{
    CallDescriptor::wrap(func, args)
}
