use std::fmt;

/// A plain callable registered as a service
///
/// The registry hands callables back untouched, it never invokes them.
/// Use a [`CallDescriptor`](crate::CallDescriptor) to have the call performed on resolution.
pub struct ServiceFn<Input, Output> {
    func: Box<dyn Fn(Input) -> Output + Send + Sync>,
    type_name: &'static str,
}

impl<Input, Output> ServiceFn<Input, Output> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Input) -> Output + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            type_name: std::any::type_name::<F>(),
        }
    }

    pub fn call(&self, input: Input) -> Output {
        (self.func)(input)
    }
}

impl<Output: 'static> ServiceFn<(), Output> {
    /// Wraps a zero argument callable, call it with `()`
    pub fn from_thunk<F>(func: F) -> Self
    where
        F: Fn() -> Output + Send + Sync + 'static,
    {
        Self {
            func: Box::new(move |()| func()),
            type_name: std::any::type_name::<F>(),
        }
    }
}

impl<Input, Output> fmt::Debug for ServiceFn<Input, Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceFn")
            .field("f", &format_args!("{}", self.type_name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_with_input() {
        let add_one = ServiceFn::new(|x: i32| x + 1);
        assert_eq!(add_one.call(1), 2);
    }

    #[test]
    fn thunk_takes_unit() {
        let answer = ServiceFn::from_thunk(|| 42);
        assert_eq!(answer.call(()), 42);
    }

    #[test]
    fn service_fn_has_useful_debug_impl() {
        let service = ServiceFn::from_thunk(|| "TEST 3");
        assert_eq!(
            "ServiceFn { f: injectofy::function::tests::service_fn_has_useful_debug_impl::{{closure}} }",
            format!("{:?}", service),
        );
    }
}
