//! Registering values as interfaces requires knowing, at runtime, which types are interfaces and
//! which concrete types implement them. This information is kept in an [InterfaceRegistry].
//!
//! An interface is a trait. At runtime it's represented by two types: the trait object
//! `dyn Trait` and its handle `InstancePtr<dyn Trait>`, under which values registered as the
//! interface are stored. Functions wanting an interface should therefore take
//! `InstancePtr<dyn Trait>` parameters. Pointers to the trait object, such as `Box<dyn Trait>` or
//! `&dyn Trait`, are accepted wherever an interface is expected and resolve to the same
//! definition.
//!
//! With the `derive` feature enabled, definitions are generated by attributes and collected
//! automatically:
//!
//! ```
//! use inj::descriptor::TypeDescriptor;
//! use inj::injector::Injector;
//! use inj::instance::InstancePtr;
//! use inj::{interface, interface_impl};
//!
//! #[interface]
//! trait Greeter {
//!     fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter;
//!
//! #[interface_impl]
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self) -> String {
//!         "Hello!".to_string()
//!     }
//! }
//!
//! let mut injector = Injector::new();
//! injector
//!     .register_as(EnglishGreeter, TypeDescriptor::of::<dyn Greeter>())
//!     .unwrap();
//!
//! let greeting = injector
//!     .call(|greeter: InstancePtr<dyn Greeter>| greeter.greet(), &[])
//!     .unwrap();
//!
//! assert_eq!(greeting, "Hello!");
//! ```
//!
//! Definitions can also be registered manually, which is useful when the attributes cannot be
//! used:
//!
//! ```
//! use inj::descriptor::TypeDescriptor;
//! use inj::instance::{Instance, InstancePtr};
//! use inj::interface::InterfaceRegistry;
//! use std::any::Any;
//!
//! trait Greeter {}
//!
//! struct EnglishGreeter;
//!
//! impl Greeter for EnglishGreeter {}
//!
//! fn cast(value: Box<dyn Any>) -> Result<Instance, Box<dyn Any>> {
//!     value
//!         .downcast::<EnglishGreeter>()
//!         .map(|value| Instance::new(InstancePtr::new(*value) as InstancePtr<dyn Greeter>))
//! }
//!
//! let mut registry = InterfaceRegistry::default();
//! registry.register_implementation::<dyn Greeter, EnglishGreeter>(cast);
//!
//! assert!(registry
//!     .implementation(&TypeDescriptor::of::<dyn Greeter>(), &TypeDescriptor::of::<EnglishGreeter>())
//!     .is_some());
//! ```

use crate::descriptor::TypeDescriptor;
use crate::instance::{Instance, InstancePtr};
use derivative::Derivative;
use fxhash::FxHashMap;
use itertools::Itertools;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tracing::debug;

/// Converts a boxed concrete value into an [Instance] holding `InstancePtr<dyn Trait>`. Returns
/// the value back if it is not of the expected concrete type.
pub type CastFunction = fn(value: Box<dyn Any>) -> Result<Instance, Box<dyn Any>>;

/// Runtime representation of an interface.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct InterfaceDefinition {
    /// Descriptor of the trait object type, e.g. `dyn Trait`.
    pub interface: TypeDescriptor,
    /// Descriptor of the handle type values are registered under, e.g. `InstancePtr<dyn Trait>`.
    pub handle: TypeDescriptor,
    /// All types accepted as a witness for this interface: the trait object itself and the
    /// pointers to it.
    pub witnesses: [TypeDescriptor; 6],
}

impl InterfaceDefinition {
    pub fn of<I: ?Sized + 'static>() -> Self {
        Self {
            interface: TypeDescriptor::of::<I>(),
            handle: TypeDescriptor::of::<InstancePtr<I>>(),
            witnesses: [
                TypeDescriptor::of::<I>(),
                TypeDescriptor::of::<InstancePtr<I>>(),
                TypeDescriptor::of::<Box<I>>(),
                TypeDescriptor::of::<Arc<I>>(),
                TypeDescriptor::of::<&'static I>(),
                TypeDescriptor::of::<*const I>(),
            ],
        }
    }
}

/// Fact that a concrete type implements an interface.
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug)]
pub struct ImplementationDefinition {
    pub interface: InterfaceDefinition,
    pub concrete: TypeDescriptor,

    /// Cast function for given concrete type. Please see the documentation for [CastFunction]
    /// for details on usage.
    #[derivative(Debug = "ignore")]
    pub cast: CastFunction,
}

/// Known interfaces and their implementations.
#[derive(Clone, Debug, Default)]
pub struct InterfaceRegistry {
    // every witness type points to the same definition
    interfaces: FxHashMap<TypeId, InterfaceDefinition>,
    implementations: FxHashMap<(TypeId, TypeId), ImplementationDefinition>,
}

impl InterfaceRegistry {
    /// Creates a registry containing all definitions generated by the `#[interface]` and
    /// `#[interface_impl]` attributes.
    pub fn from_inventory() -> Self {
        let mut registry = Self::default();

        for registerer in inventory::iter::<internal::InterfaceRegisterer> {
            registry.add_interface((registerer.register)());
        }

        for registerer in inventory::iter::<internal::ImplementationRegisterer> {
            registry.add_implementation((registerer.register)());
        }

        debug!(
            interfaces = registry.interfaces.values().unique().count(),
            implementations = registry.implementations.len(),
            "Collected interface definitions."
        );

        registry
    }

    /// Registers `I` (usually `dyn Trait`) as an interface.
    pub fn register_interface<I: ?Sized + 'static>(&mut self) {
        self.add_interface(InterfaceDefinition::of::<I>());
    }

    /// Registers `C` as an implementation of interface `I`. Implementations imply their
    /// interface, so there's no need to register it separately.
    pub fn register_implementation<I: ?Sized + 'static, C: 'static>(&mut self, cast: CastFunction) {
        self.add_implementation(ImplementationDefinition {
            interface: InterfaceDefinition::of::<I>(),
            concrete: TypeDescriptor::of::<C>(),
            cast,
        });
    }

    pub fn add_interface(&mut self, definition: InterfaceDefinition) {
        for witness in definition.witnesses {
            self.interfaces.insert(witness.type_id(), definition);
        }
    }

    pub fn add_implementation(&mut self, definition: ImplementationDefinition) {
        self.add_interface(definition.interface);
        self.implementations.insert(
            (
                definition.interface.interface.type_id(),
                definition.concrete.type_id(),
            ),
            definition,
        );
    }

    /// Resolves a type witness to an interface, unwrapping pointer indirection: `dyn Trait`,
    /// `InstancePtr<dyn Trait>`, `Box<dyn Trait>`, `Arc<dyn Trait>`, `&dyn Trait` and
    /// `*const dyn Trait` all resolve to the same definition.
    pub fn interface(&self, witness: &TypeDescriptor) -> Option<&InterfaceDefinition> {
        self.interfaces.get(&witness.type_id())
    }

    /// Returns the implementation of given interface for given concrete type, if registered.
    pub fn implementation(
        &self,
        interface: &TypeDescriptor,
        concrete: &TypeDescriptor,
    ) -> Option<&ImplementationDefinition> {
        self.interface(interface).and_then(|definition| {
            self.implementations
                .get(&(definition.interface.type_id(), concrete.type_id()))
        })
    }

    /// Checks if given type is a known interface.
    #[inline]
    pub fn is_interface(&self, witness: &TypeDescriptor) -> bool {
        self.interfaces.contains_key(&witness.type_id())
    }
}

#[doc(hidden)]
pub mod internal {
    use crate::interface::{ImplementationDefinition, InterfaceDefinition};
    use inventory::collect;
    pub use inventory::submit;

    pub struct InterfaceRegisterer {
        pub register: fn() -> InterfaceDefinition,
    }

    pub struct ImplementationRegisterer {
        pub register: fn() -> ImplementationDefinition,
    }

    collect!(InterfaceRegisterer);
    collect!(ImplementationRegisterer);
}
