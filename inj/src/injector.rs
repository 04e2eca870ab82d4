//! The [Injector] maps types to values and invokes functions with parameters resolved from that
//! mapping.
//!
//! ```
//! use inj::injector::Injector;
//!
//! let mut injector = Injector::new();
//! injector.register("foobar".to_string());
//! injector.register(42);
//!
//! let result = injector
//!     .call(|a: i32, b: String| format!("{a} {b}"), &[])
//!     .unwrap();
//!
//! assert_eq!(result, "42 foobar");
//! ```
//!
//! Values are stored by their exact type and handed out as clones. Types which are expensive to
//! clone or should be shared are best registered behind an [InstancePtr](crate::instance::InstancePtr).
//! Registering an `InstancePtr<dyn Trait>` directly is the statically checked way of providing an
//! interface; [Injector::register_as] is the dynamic one.

use crate::callable::{Callable, InjectableFn};
use crate::descriptor::TypeDescriptor;
use crate::error::InjectorError;
use crate::instance::{Instance, InstancePtr};
use crate::interface::InterfaceRegistry;
use crate::scope::{Scope, ScopeChain};
use fxhash::FxHashMap;
use itertools::Itertools;
use std::any::{type_name, Any};
use tracing::debug;

thread_local! {
    // inventory contents are fixed for the whole program, so they are only collected once
    static INVENTORY_INTERFACES: InstancePtr<InterfaceRegistry> =
        InstancePtr::new(InterfaceRegistry::from_inventory());
}

/// Mapping from types to values, used when looking up parameters in [Injector::call].
#[derive(Debug)]
pub struct Injector {
    instances: FxHashMap<TypeDescriptor, Instance>,
    interfaces: InstancePtr<InterfaceRegistry>,
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

impl Injector {
    /// Creates an empty injector, aware of all interfaces registered with attributes. The
    /// definitions are collected on first use and shared by all injectors created this way.
    pub fn new() -> Self {
        Self::with_shared_interface_registry(INVENTORY_INTERFACES.with(InstancePtr::clone))
    }

    /// Creates an empty injector using given interface definitions for [Injector::register_as].
    #[inline]
    pub fn with_interface_registry(interfaces: InterfaceRegistry) -> Self {
        Self::with_shared_interface_registry(InstancePtr::new(interfaces))
    }

    /// Creates an empty injector sharing interface definitions with other injectors.
    pub fn with_shared_interface_registry(interfaces: InstancePtr<InterfaceRegistry>) -> Self {
        Self {
            instances: Default::default(),
            interfaces,
        }
    }

    /// Registers a value under its own type. Returns true if this registration is replacing a
    /// previous one.
    pub fn register<T: Clone + 'static>(&mut self, value: T) -> bool {
        self.insert(Instance::new(value))
    }

    /// Registers a value as an interface described by `witness`, which can be the trait object
    /// type (`dyn Trait`) or a pointer to it, e.g. `InstancePtr<dyn Trait>`, `Box<dyn Trait>` or
    /// `&dyn Trait`. The value is stored as
    /// `InstancePtr<dyn Trait>`, not under its own type. Returns true if this registration is
    /// replacing a previous one.
    ///
    /// Fails if the witness is not a known interface or the value does not implement it.
    pub fn register_as<T: 'static>(
        &mut self,
        value: T,
        witness: TypeDescriptor,
    ) -> Result<bool, InjectorError> {
        let concrete = TypeDescriptor::of::<T>();
        let interface = self.interfaces.interface(&witness).ok_or_else(|| {
            debug!(%witness, "Type witness is not an interface.");
            InjectorError::NotInterface
        })?;

        let implementation = self
            .interfaces
            .implementation(&interface.interface, &concrete)
            .ok_or_else(|| {
                debug!(%concrete, interface = %interface.interface, "No implementation found.");
                InjectorError::DoesNotImplement
            })?;

        let instance = (implementation.cast)(Box::new(value))
            .map_err(|_| InjectorError::DoesNotImplement)?;

        Ok(self.insert(instance))
    }

    /// Typesafe version of [Injector::register_as].
    #[inline]
    pub fn register_as_typed<I: ?Sized + 'static, T: 'static>(
        &mut self,
        value: T,
    ) -> Result<bool, InjectorError> {
        self.register_as(value, TypeDescriptor::of::<I>())
    }

    /// Invokes `function` with parameters populated by registered values. The optional
    /// `additional_scopes` are searched in order when a type isn't registered in this injector.
    pub fn call<F, Args>(
        &self,
        function: F,
        additional_scopes: &[&dyn Scope],
    ) -> Result<F::Output, InjectorError>
    where
        F: InjectableFn<Args>,
    {
        debug!(function = type_name::<F>(), "Calling function.");
        function.invoke(&ScopeChain::new(self, additional_scopes))
    }

    /// Type-erased version of [Injector::call]. The candidate must be a [Callable], otherwise
    /// [InjectorError::NotFunction] is returned.
    pub fn call_dynamic(
        &self,
        candidate: Box<dyn Any>,
        additional_scopes: &[&dyn Scope],
    ) -> Result<Box<dyn Any>, InjectorError> {
        let callable = candidate
            .downcast::<Callable>()
            .map_err(|_| InjectorError::NotFunction)?;

        debug!(function = callable.name(), "Calling function.");
        callable.invoke(&ScopeChain::new(self, additional_scopes))
    }

    /// Checks if a value of given type is registered.
    #[inline]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.contains_descriptor(&TypeDescriptor::of::<T>())
    }

    #[inline]
    pub fn contains_descriptor(&self, descriptor: &TypeDescriptor) -> bool {
        self.instances.contains_key(descriptor)
    }

    /// Returns a clone of the value registered for `T` in this injector only.
    pub fn get<T: Clone + 'static>(&self) -> Option<T> {
        self.instances
            .get(&TypeDescriptor::of::<T>())
            .and_then(|instance| instance.downcast_ref::<T>())
            .cloned()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn insert(&mut self, instance: Instance) -> bool {
        let descriptor = *instance.descriptor();
        let replaced = self.instances.insert(descriptor, instance).is_some();

        debug!(%descriptor, replaced, "Registered value.");
        replaced
    }
}

impl Scope for Injector {
    #[inline]
    fn instance(&self, descriptor: &TypeDescriptor) -> Option<Box<dyn Any>> {
        self.instances
            .get(descriptor)
            .and_then(|instance| instance.cloned())
    }

    fn describe(&self) -> String {
        format!(
            "Injector {{{}}}",
            self.instances
                .keys()
                .map(|descriptor| descriptor.name())
                .sorted()
                .join(", ")
        )
    }
}
