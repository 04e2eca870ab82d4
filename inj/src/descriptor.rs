//! Runtime identity of types, used as keys when registering and resolving values.

use derivative::Derivative;
use std::any::{type_name, TypeId};
use std::fmt::{Display, Formatter};

/// Identifier of a concrete type. Two descriptors are equal iff they denote the same type - the
/// name is carried only for diagnostics.
///
/// Descriptors can also be used as type witnesses, e.g. when registering a value as an
/// interface:
///
/// ```
/// use inj::descriptor::TypeDescriptor;
///
/// trait Greeter {}
///
/// let witness = TypeDescriptor::of::<dyn Greeter>();
/// assert_eq!(witness, TypeDescriptor::of::<dyn Greeter>());
/// assert_ne!(witness, TypeDescriptor::of::<i32>());
/// ```
#[derive(Derivative, Clone, Copy, Debug)]
#[derivative(PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    type_id: TypeId,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    name: &'static str,
}

impl TypeDescriptor {
    /// Creates a descriptor for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Human-readable type name. Not guaranteed to be unique nor stable between compiler versions.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::TypeDescriptor;
    use fxhash::FxHashSet;

    trait TestTrait {}

    #[test]
    fn should_compare_by_type_identity() {
        assert_eq!(TypeDescriptor::of::<i32>(), TypeDescriptor::of::<i32>());
        assert_ne!(TypeDescriptor::of::<i32>(), TypeDescriptor::of::<i64>());
        assert_ne!(
            TypeDescriptor::of::<dyn TestTrait>(),
            TypeDescriptor::of::<Box<dyn TestTrait>>()
        );
    }

    #[test]
    fn should_hash_by_type_identity() {
        let descriptors: FxHashSet<_> = [
            TypeDescriptor::of::<String>(),
            TypeDescriptor::of::<String>(),
            TypeDescriptor::of::<&'static str>(),
        ]
        .into_iter()
        .collect();

        assert_eq!(descriptors.len(), 2);
    }

    #[test]
    fn should_display_type_name() {
        let descriptor = TypeDescriptor::of::<u8>();

        assert_eq!(descriptor.to_string(), "u8");
        assert!(descriptor.is::<u8>());
        assert!(!descriptor.is::<i8>());
    }
}
