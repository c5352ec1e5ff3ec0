use std::{fmt::Debug, sync::Arc};

use crate::{
    args::Args,
    errors::ConstructError,
    types::{DynError, Injectable, Instance, TypeInfo},
};

type CallFn<R> = Arc<dyn Fn(&Args) -> Result<R, DynError> + Send + Sync>;

/// A function with pre-bound arguments, invoked on demand
///
/// Arity is not checked up front, a function reading an argument that was
/// never supplied fails with an [`InvocationError`](crate::InvocationError).
/// Invocations are independent, results are not memoized.
pub struct CallDescriptor<R: Injectable> {
    func: CallFn<R>,
    args: Args,
}

impl<R: Injectable> CallDescriptor<R> {
    pub fn wrap<F>(func: F, args: Args) -> Self
    where
        F: Fn(&Args) -> Result<R, DynError> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            args,
        }
    }

    /// Wraps a function without arguments, bind them later with [`CallDescriptor::lazy_call`]
    pub fn wrap_lazy<F>(func: F) -> Self
    where
        F: Fn(&Args) -> Result<R, DynError> + Send + Sync + 'static,
    {
        Self::wrap(func, Args::new())
    }

    /// Re-binds the arguments, last write wins
    pub fn lazy_call(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn product(&self) -> TypeInfo {
        TypeInfo::of::<R>()
    }

    pub fn invoke(&self) -> Result<R, ConstructError> {
        (self.func)(&self.args).map_err(ConstructError::Failed)
    }
}

impl<R: Injectable> Clone for CallDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            args: self.args.clone(),
        }
    }
}

impl<R: Injectable> Debug for CallDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallDescriptor")
            .field("returns", &std::any::type_name::<R>())
            .field("args", &self.args)
            .finish()
    }
}

/// Wrapper Trait for call descriptors, returning instances of Any
pub trait DynCallDescriptor: Send + Sync {
    fn product(&self) -> TypeInfo;

    fn args(&self) -> &Args;

    fn invoke(&self) -> Result<Instance, ConstructError>;
}
impl<R: Injectable> DynCallDescriptor for CallDescriptor<R> {
    fn product(&self) -> TypeInfo {
        CallDescriptor::product(self)
    }

    fn args(&self) -> &Args {
        CallDescriptor::args(self)
    }

    fn invoke(&self) -> Result<Instance, ConstructError> {
        CallDescriptor::invoke(self).map(Instance::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{args, errors::InvocationError};

    fn add(args: &Args) -> Result<i32, DynError> {
        Ok(args.get::<i32>(0)? + args.get::<i32>(1)?)
    }

    #[test]
    fn invokes_with_bound_args() {
        let sum = CallDescriptor::wrap(add, args![2, 3]);
        assert_eq!(sum.invoke().unwrap(), 5);
        assert_eq!(sum.args().len(), 2);
    }

    #[test]
    fn missing_args_fail_on_invoke() {
        let sum = CallDescriptor::wrap_lazy(add);

        match sum.invoke() {
            Err(ConstructError::Failed(err)) => assert_eq!(
                err.downcast_ref::<InvocationError>(),
                Some(&InvocationError::MissingArgument { index: 0 })
            ),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn lazy_call_rebinds_args() {
        let sum = CallDescriptor::wrap(add, args![1, 1]).lazy_call(args![20, 22]);
        assert_eq!(sum.invoke().unwrap(), 42);
    }

    #[test]
    fn every_invoke_calls_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let call = CallDescriptor::wrap_lazy(move |_| Ok(counter.fetch_add(1, Ordering::SeqCst)));

        assert_eq!(call.invoke().unwrap(), 0);
        assert_eq!(call.invoke().unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dyn_descriptor_returns_instances() {
        let call: Box<dyn DynCallDescriptor> = Box::new(CallDescriptor::wrap(add, args![1, 1]));

        assert_eq!(call.product(), TypeInfo::of::<i32>());
        assert_eq!(*call.invoke().unwrap().downcast::<i32>().unwrap(), 2);
    }
}
