use crate::descriptor::TypeDescriptor;
use thiserror::Error;

/// Errors related to registering values and injecting them into functions.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum InjectorError {
    #[error("Provided value is not a function")]
    NotFunction,
    #[error("Provided value is not an interface type")]
    NotInterface,
    #[error("Provided value does not satisfy provided interface")]
    DoesNotImplement,
    #[error("Could not look up type {missing} for argument {index} for {function}\nscopes:\n{scopes}")]
    UnresolvedParameter {
        missing: TypeDescriptor,
        index: usize,
        function: &'static str,
        scopes: String,
    },
    #[error("Tried to downcast instance to incompatible type: {0}")]
    IncompatibleInstance(TypeDescriptor),
}
