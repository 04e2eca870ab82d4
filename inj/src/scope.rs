//! Values are looked up in [Scope]s - read-only sources of registered instances. The
//! [Injector](crate::injector::Injector) is the primary scope, but any number of additional
//! scopes can be supplied per call. They form a [ScopeChain], which is searched in order: the
//! first scope containing the requested type wins.
//!
//! ```
//! use inj::injector::Injector;
//!
//! let mut primary = Injector::new();
//! primary.register(42);
//!
//! let mut fallback = Injector::new();
//! fallback.register(43);
//! fallback.register("from fallback".to_string());
//!
//! let result = primary
//!     .call(|n: i32, s: String| format!("{n} {s}"), &[&fallback])
//!     .unwrap();
//!
//! assert_eq!(result, "42 from fallback");
//! ```

use crate::descriptor::TypeDescriptor;
use crate::error::InjectorError;
use itertools::Itertools;
#[cfg(test)]
use mockall::automock;
use std::any::Any;
use tracing::{debug, trace};

/// A read-only source of instances.
#[cfg_attr(test, automock)]
pub trait Scope {
    /// Returns a clone of the instance registered for exactly the given type, if present.
    fn instance(&self, descriptor: &TypeDescriptor) -> Option<Box<dyn Any>>;

    /// Renders the scope contents for diagnostics.
    fn describe(&self) -> String;
}

/// Ordered list of scopes consulted during a single function invocation.
pub struct ScopeChain<'a> {
    scopes: Vec<&'a dyn Scope>,
}

impl<'a> ScopeChain<'a> {
    /// Creates a chain searching `primary` first, then `additional_scopes` in the given order.
    pub fn new(primary: &'a dyn Scope, additional_scopes: &[&'a dyn Scope]) -> Self {
        let mut scopes = Vec::with_capacity(additional_scopes.len() + 1);
        scopes.push(primary);
        scopes.extend_from_slice(additional_scopes);

        Self { scopes }
    }

    /// Number of scopes in the chain, including the primary one.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Resolves the value for parameter `index` of `function`, which is used only for error
    /// reporting.
    pub fn resolve<T: 'static>(
        &self,
        index: usize,
        function: &'static str,
    ) -> Result<T, InjectorError> {
        let descriptor = TypeDescriptor::of::<T>();
        let (depth, instance) = self
            .scopes
            .iter()
            .enumerate()
            .find_map(|(depth, scope)| {
                scope
                    .instance(&descriptor)
                    .map(|instance| (depth, instance))
            })
            .ok_or_else(|| {
                debug!(%descriptor, index, function, "Cannot resolve parameter.");
                InjectorError::UnresolvedParameter {
                    missing: descriptor,
                    index,
                    function,
                    scopes: self.describe(),
                }
            })?;

        trace!(%descriptor, index, depth, "Resolved parameter.");

        instance
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| InjectorError::IncompatibleInstance(descriptor))
    }

    /// Renders every scope in the chain, one per line.
    pub fn describe(&self) -> String {
        self.scopes.iter().map(|scope| scope.describe()).join("\n")
    }
}
