//! Type-erased storage for registered values. An [Instance] keeps the value together with its
//! [TypeDescriptor] and the means of cloning it, so values can be handed out without knowing
//! their type statically.

use crate::descriptor::TypeDescriptor;
use derivative::Derivative;
use std::any::Any;
use std::rc::Rc;

/// Shared pointer used for values registered as an interface, e.g. `InstancePtr<dyn Trait>`.
pub type InstancePtr<T> = Rc<T>;

/// Clones a type-erased value, provided it is of the type the function was created for.
pub type CloneFunction = fn(value: &dyn Any) -> Option<Box<dyn Any>>;

/// A type-erased registered value. Values are handed out as clones, so a single registration can
/// satisfy any number of parameters and calls.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Instance {
    descriptor: TypeDescriptor,
    #[derivative(Debug = "ignore")]
    value: Box<dyn Any>,
    #[derivative(Debug = "ignore")]
    clone: CloneFunction,
}

fn clone_value<T: Clone + 'static>(value: &dyn Any) -> Option<Box<dyn Any>> {
    value
        .downcast_ref::<T>()
        .map(|value| Box::new(value.clone()) as Box<dyn Any>)
}

impl Instance {
    /// Wraps a value, keyed by its exact type.
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            descriptor: TypeDescriptor::of::<T>(),
            value: Box::new(value),
            clone: clone_value::<T>,
        }
    }

    #[inline]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Returns a boxed clone of the contained value.
    #[inline]
    pub fn cloned(&self) -> Option<Box<dyn Any>> {
        (self.clone)(self.value.as_ref())
    }

    /// Returns a reference to the contained value if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::TypeDescriptor;
    use crate::instance::{Instance, InstancePtr};

    trait TestTrait {
        fn value(&self) -> i32;
    }

    struct TestImplementation;

    impl TestTrait for TestImplementation {
        fn value(&self) -> i32 {
            7
        }
    }

    #[test]
    fn should_clone_contained_value() {
        let instance = Instance::new("foobar".to_string());

        let value = instance.cloned().unwrap().downcast::<String>().unwrap();
        assert_eq!(*value, "foobar");
        assert_eq!(instance.downcast_ref::<String>().unwrap(), "foobar");
        assert_eq!(*instance.descriptor(), TypeDescriptor::of::<String>());
    }

    #[test]
    fn should_key_interface_pointers_by_pointer_type() {
        let instance =
            Instance::new(InstancePtr::new(TestImplementation) as InstancePtr<dyn TestTrait>);

        assert_eq!(
            *instance.descriptor(),
            TypeDescriptor::of::<InstancePtr<dyn TestTrait>>()
        );

        let value = instance
            .cloned()
            .unwrap()
            .downcast::<InstancePtr<dyn TestTrait>>()
            .unwrap();
        assert_eq!(value.value(), 7);
    }

    #[test]
    fn should_not_downcast_to_other_types() {
        let instance = Instance::new(42i32);

        assert!(instance.downcast_ref::<i64>().is_none());
    }
}
