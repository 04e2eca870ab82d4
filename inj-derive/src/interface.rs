use proc_macro2::TokenStream;
use quote::quote;
use std::ops::Deref;
use syn::spanned::Spanned;
use syn::{Error, Item, Result, Type};

fn ensure_no_arguments(attr: &TokenStream) -> Result<()> {
    if attr.is_empty() {
        Ok(())
    } else {
        Err(Error::new(attr.span(), "Interface attributes take no arguments!"))
    }
}

pub fn register_interface(attr: TokenStream, item: &Item) -> Result<TokenStream> {
    ensure_no_arguments(&attr)?;

    if let Item::Trait(item_trait) = item {
        if !item_trait.generics.params.is_empty() {
            return Err(Error::new(
                item_trait.generics.span(),
                "Generic traits cannot be registered as interfaces!",
            ));
        }

        let ident = &item_trait.ident;

        Ok(quote! {
            #item

            const _: () = {
                fn register() -> inj::interface::InterfaceDefinition {
                    inj::interface::InterfaceDefinition::of::<dyn #ident>()
                }

                inj::interface::internal::submit! {
                    inj::interface::internal::InterfaceRegisterer {
                        register
                    }
                };
            };
        })
    } else {
        Err(Error::new(
            item.span(),
            "Only traits can be registered as interfaces!",
        ))
    }
}

pub fn register_interface_impl(attr: TokenStream, item: &Item) -> Result<TokenStream> {
    ensure_no_arguments(&attr)?;

    if let Item::Impl(item_impl) = item {
        let trait_type = item_impl
            .trait_
            .as_ref()
            .map(|(_, path, ..)| path)
            .ok_or_else(|| Error::new(item.span(), "Missing trait identifier!"))?;

        if !item_impl.generics.params.is_empty() {
            return Err(Error::new(
                item_impl.generics.span(),
                "Generic implementations cannot be registered!",
            ));
        }

        let target_type = if let Type::Path(path) = item_impl.self_ty.deref() {
            &path.path
        } else {
            return Err(Error::new(
                item_impl.self_ty.span(),
                "Registering implementations is only available for named types!",
            ));
        };

        Ok(quote! {
            #item

            const _: () = {
                fn cast(
                    value: ::std::boxed::Box<dyn ::std::any::Any>,
                ) -> ::std::result::Result<inj::instance::Instance, ::std::boxed::Box<dyn ::std::any::Any>> {
                    value.downcast::<#target_type>().map(|value| {
                        inj::instance::Instance::new(
                            inj::instance::InstancePtr::new(*value) as inj::instance::InstancePtr<dyn #trait_type>
                        )
                    })
                }

                fn register() -> inj::interface::ImplementationDefinition {
                    inj::interface::ImplementationDefinition {
                        interface: inj::interface::InterfaceDefinition::of::<dyn #trait_type>(),
                        concrete: inj::descriptor::TypeDescriptor::of::<#target_type>(),
                        cast,
                    }
                }

                inj::interface::internal::submit! {
                    inj::interface::internal::ImplementationRegisterer {
                        register
                    }
                };
            };
        })
    } else {
        Err(Error::new(
            item.span(),
            "Registering implementations is possible only on trait implementations!",
        ))
    }
}
