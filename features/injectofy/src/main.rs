use std::sync::Arc;

use injectofy::{
    args, wrap_call, wrap_class, Args, Construct, DynError, Parameter, Registry, RegistryBuilder,
    ServiceFn, UseError,
};

fn main() {
    let registry = match app_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!("{:?}", registry);

    match use_services(&registry) {
        Ok(()) => {}
        Err(e) => eprintln!("{e}"),
    }
}

fn app_registry() -> Result<Registry, DynError> {
    let registry = RegistryBuilder::new()
        .add_class(
            "TestService",
            wrap_class::<TestService>().lazy_construct(args!["TEST".to_string()]),
        )
        .add_value("TestService2", TestService::new("TEST 2"))
        .add_callable("TestService3", || "TEST 3")
        .add_call(
            "TestService4",
            wrap_call(
                |args| Ok(args.get::<i32>(0)? + args.get::<i32>(1)?),
                args![1, 1],
            ),
        )
        .build()?;

    Ok(registry)
}

fn use_services(registry: &Registry) -> Result<(), UseError> {
    let constructed: Arc<TestService> = registry.use_as("TestService")?;
    println!("{}", constructed.value());

    let prebuilt: Arc<TestService> = registry.use_as("TestService2")?;
    println!("{}", prebuilt.value());

    let callable: Arc<ServiceFn<(), &str>> = registry.use_as("TestService3")?;
    println!("{}", callable.call(()));

    let sum: Arc<i32> = registry.use_as("TestService4")?;
    println!("{}", sum);

    Ok(())
}

#[derive(Debug)]
struct TestService {
    value: String,
}
impl TestService {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    fn value(&self) -> &str {
        &self.value
    }
}
impl Construct for TestService {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::required("value")]
    }

    fn construct(args: &Args) -> Result<Self, DynError> {
        Ok(TestService::new(args.get::<String>(0)?))
    }
}
