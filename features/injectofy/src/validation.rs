use crate::{
    args::Args,
    descriptors::Parameter,
    errors::ConfigurationError,
    resolver::Entry,
};

/// Number of parameters without a declared default
pub fn required_parameter_count(parameters: &[Parameter]) -> usize {
    parameters.iter().filter(|param| !param.has_default).count()
}

/// Checks whether `captured` satisfies `required` parameters of `product`
///
/// An empty argument list counts as nothing captured.
pub fn check_arguments(
    product: &'static str,
    required: usize,
    captured: Option<&Args>,
) -> Result<(), ConfigurationError> {
    if required == 0 {
        return Ok(());
    }

    match captured.map(Args::len).unwrap_or(0) {
        0 => Err(ConfigurationError::NotConstructed { product, required }),
        captured if captured < required => Err(ConfigurationError::MissingParameter {
            product,
            required,
            captured,
        }),
        _ => Ok(()),
    }
}

/// Validates every class descriptor among `entries`, stopping at the first failure
pub fn validate_entries<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
) -> Result<(), ConfigurationError> {
    for entry in entries {
        if let Entry::Class(descriptor) = entry {
            descriptor.validate()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn counts_parameters_without_default() {
        let parameters = [
            Parameter::required("name"),
            Parameter::optional("greeting"),
            Parameter::required("age"),
        ];
        assert_eq!(required_parameter_count(&parameters), 2);
        assert_eq!(required_parameter_count(&[]), 0);
    }

    #[test]
    fn nothing_required_is_always_valid() {
        assert!(check_arguments("T", 0, None).is_ok());
        assert!(check_arguments("T", 0, Some(&args![1, 2, 3])).is_ok());
    }

    #[test]
    fn not_constructed_when_no_args() {
        assert_eq!(
            check_arguments("T", 1, None),
            Err(ConfigurationError::NotConstructed {
                product: "T",
                required: 1
            })
        );
        assert_eq!(
            check_arguments("T", 1, Some(&args![])),
            Err(ConfigurationError::NotConstructed {
                product: "T",
                required: 1
            })
        );
    }

    #[test]
    fn missing_parameter_when_too_few_args() {
        assert_eq!(
            check_arguments("T", 3, Some(&args!["a", "b"])),
            Err(ConfigurationError::MissingParameter {
                product: "T",
                required: 3,
                captured: 2
            })
        );
        assert!(check_arguments("T", 2, Some(&args!["a", "b"])).is_ok());
        assert!(check_arguments("T", 2, Some(&args!["a", "b", "c"])).is_ok());
    }
}
