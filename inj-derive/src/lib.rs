use crate::interface::{register_interface, register_interface_impl};
use proc_macro::TokenStream;
use syn::{parse_macro_input, Error, Item};

mod interface;

/// Marks a trait as an interface, making `dyn Trait` a valid type witness for
/// `Injector::register_as`. Generic traits are not supported.
#[proc_macro_attribute]
pub fn interface(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as Item);
    register_interface(attr.into(), &item)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Registers a trait implementation, letting `Injector::register_as` accept values of the
/// implementing type as the trait. Implies `#[interface]` for the trait.
#[proc_macro_attribute]
pub fn interface_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as Item);
    register_interface_impl(attr.into(), &item)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
