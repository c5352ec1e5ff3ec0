use std::{any::Any, fmt::Debug, sync::Arc};

use crate::{
    errors::InvocationError,
    types::{Injectable, TypeInfo},
};

/// A single captured argument
#[derive(Clone)]
pub struct Arg {
    info: TypeInfo,
    value: Arc<dyn Any + Send + Sync + 'static>,
}
impl Arg {
    pub fn new<T: Injectable>(value: T) -> Self {
        Arg {
            info: TypeInfo::of::<T>(),
            value: Arc::new(value),
        }
    }

    pub fn type_info(&self) -> TypeInfo {
        self.info
    }

    pub fn downcast_ref<T: Injectable>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}
impl Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info.type_name)
    }
}

/// Argument list captured by a descriptor and handed to its constructor or function
///
/// Arguments are positional. Cloning shares the underlying values, so one
/// list can feed any number of constructions.
#[derive(Clone, Default, Debug)]
pub struct Args(Vec<Arg>);

impl Args {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an argument
    pub fn with<T: Injectable>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    pub fn push<T: Injectable>(&mut self, value: T) {
        self.0.push(Arg::new(value));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arg> {
        self.0.iter()
    }

    /// Reads the argument at `index`
    pub fn get<T: Injectable>(&self, index: usize) -> Result<&T, InvocationError> {
        let arg = self
            .0
            .get(index)
            .ok_or(InvocationError::MissingArgument { index })?;

        arg.downcast_ref::<T>()
            .ok_or_else(|| InvocationError::ArgumentType {
                index,
                expected: std::any::type_name::<T>(),
                actual: arg.info.type_name,
            })
    }

    /// Reads the argument at `index`, falling back to `default` if it was not supplied
    ///
    /// A supplied argument of the wrong type is still an error.
    pub fn get_or<T: Injectable + Clone>(
        &self,
        index: usize,
        default: T,
    ) -> Result<T, InvocationError> {
        match self.get::<T>(index) {
            Ok(value) => Ok(value.clone()),
            Err(InvocationError::MissingArgument { .. }) => Ok(default),
            Err(e) => Err(e),
        }
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Arg>> for Args {
    fn from(args: Vec<Arg>) -> Self {
        Self(args)
    }
}

/// Builds an [`Args`] list from positional values
///
/// ```rust
/// use injectofy::args;
///
/// let args = args!["hi".to_string(), 3_u32];
/// assert_eq!(args.len(), 2);
/// assert_eq!(*args.get::<u32>(1).unwrap(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::from(vec![$($crate::Arg::new($value)),+])
    };
}
