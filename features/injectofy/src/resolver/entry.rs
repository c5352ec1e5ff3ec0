use std::{fmt::Debug, sync::Arc};

use crate::{
    descriptors::{CallDescriptor, ClassDescriptor, DynCallDescriptor, DynClassDescriptor},
    function::ServiceFn,
    types::{Injectable, Instance, TypeInfo},
};

/// A registered service
pub enum Entry {
    /// An already constructed value, handed out as is
    Value(Instance),
    /// A plain callable ([`ServiceFn`]), handed out without calling it
    Callable(Instance),
    /// Deferred construction, a new instance per resolution
    Class(Box<dyn DynClassDescriptor>),
    /// Deferred call, invoked per resolution
    Call(Box<dyn DynCallDescriptor>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Value,
    Callable,
    Class,
    Call,
}
impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EntryKind::Value => "value",
            EntryKind::Callable => "callable",
            EntryKind::Class => "class",
            EntryKind::Call => "call",
        })
    }
}

impl Entry {
    pub fn value<T: Injectable>(value: T) -> Self {
        Entry::Value(Instance::new(value))
    }

    /// Registers an existing shared value, resolution returns this exact allocation
    pub fn shared<T: Injectable>(value: Arc<T>) -> Self {
        Entry::Value(Instance::from_arc(value))
    }

    /// A zero argument callable, resolved as `ServiceFn<(), Output>`
    pub fn callable<Output, F>(func: F) -> Self
    where
        Output: 'static,
        F: Fn() -> Output + Send + Sync + 'static,
    {
        Entry::Callable(Instance::new(ServiceFn::from_thunk(func)))
    }

    /// A callable taking `Input`, resolved as `ServiceFn<Input, Output>`
    pub fn callable_with<Input, Output, F>(func: F) -> Self
    where
        Input: 'static,
        Output: 'static,
        F: Fn(Input) -> Output + Send + Sync + 'static,
    {
        Entry::Callable(Instance::new(ServiceFn::new(func)))
    }

    pub fn class<T: Injectable>(descriptor: ClassDescriptor<T>) -> Self {
        Entry::Class(Box::new(descriptor))
    }

    pub fn call<R: Injectable>(descriptor: CallDescriptor<R>) -> Self {
        Entry::Call(Box::new(descriptor))
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Value(_) => EntryKind::Value,
            Entry::Callable(_) => EntryKind::Callable,
            Entry::Class(_) => EntryKind::Class,
            Entry::Call(_) => EntryKind::Call,
        }
    }

    /// The type a resolution of this entry produces
    pub fn supplies(&self) -> TypeInfo {
        match self {
            Entry::Value(instance) | Entry::Callable(instance) => instance.info,
            Entry::Class(descriptor) => descriptor.product(),
            Entry::Call(descriptor) => descriptor.product(),
        }
    }
}

impl<T: Injectable> From<ClassDescriptor<T>> for Entry {
    fn from(descriptor: ClassDescriptor<T>) -> Self {
        Entry::class(descriptor)
    }
}

impl<R: Injectable> From<CallDescriptor<R>> for Entry {
    fn from(descriptor: CallDescriptor<R>) -> Self {
        Entry::call(descriptor)
    }
}

impl Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &self.kind())
            .field("supplies", &self.supplies().type_name)
            .finish()
    }
}
