//! Adapters making ordinary functions invocable with injected parameters.
//!
//! Any `FnOnce` taking up to 12 parameters implements [InjectableFn], provided every parameter
//! type is `Clone + 'static`. Parameters are resolved by their exact declared type, so a function
//! wanting an interface should take `InstancePtr<dyn Trait>` rather than a concrete type.
//!
//! Rust functions have a fixed arity, so there is no variadic form to support - a slice or `Vec`
//! parameter is an ordinary type looked up like any other.
//!
//! [Callable] erases the function type completely, which allows passing functions around as
//! `Box<dyn Any>` and invoking them with
//! [Injector::call_dynamic](crate::injector::Injector::call_dynamic).

use crate::descriptor::TypeDescriptor;
use crate::error::InjectorError;
use crate::scope::ScopeChain;
use derivative::Derivative;
use std::any::{type_name, Any};

/// A function whose parameters can be resolved from a [ScopeChain]. `Args` is a tuple of the
/// parameter types and only serves to distinguish implementations for different arities.
pub trait InjectableFn<Args> {
    type Output;

    /// Descriptors of the parameters, in declaration order.
    fn parameters() -> Vec<TypeDescriptor>;

    /// Resolves all parameters from the chain, then invokes the function with them.
    fn invoke(self, chain: &ScopeChain<'_>) -> Result<Self::Output, InjectorError>;
}

macro_rules! impl_injectable_fn {
    ($($index:tt => $param:ident $value:ident),* $(,)?) => {
        impl<Func, Out, $($param),*> InjectableFn<($($param,)*)> for Func
        where
            Func: FnOnce($($param),*) -> Out,
            $($param: Clone + 'static,)*
        {
            type Output = Out;

            fn parameters() -> Vec<TypeDescriptor> {
                vec![$(TypeDescriptor::of::<$param>()),*]
            }

            #[allow(unused_variables)]
            fn invoke(self, chain: &ScopeChain<'_>) -> Result<Out, InjectorError> {
                let function = type_name::<Func>();
                $(let $value = chain.resolve::<$param>($index, function)?;)*
                Ok(self($($value),*))
            }
        }
    };
}

impl_injectable_fn!();
impl_injectable_fn!(0 => P0 p0);
impl_injectable_fn!(0 => P0 p0, 1 => P1 p1);
impl_injectable_fn!(0 => P0 p0, 1 => P1 p1, 2 => P2 p2);
impl_injectable_fn!(0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3);
impl_injectable_fn!(0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3, 4 => P4 p4);
impl_injectable_fn!(0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3, 4 => P4 p4, 5 => P5 p5);
impl_injectable_fn!(
    0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3, 4 => P4 p4, 5 => P5 p5, 6 => P6 p6,
);
impl_injectable_fn!(
    0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3, 4 => P4 p4, 5 => P5 p5, 6 => P6 p6,
    7 => P7 p7,
);
impl_injectable_fn!(
    0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3, 4 => P4 p4, 5 => P5 p5, 6 => P6 p6,
    7 => P7 p7, 8 => P8 p8,
);
impl_injectable_fn!(
    0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3, 4 => P4 p4, 5 => P5 p5, 6 => P6 p6,
    7 => P7 p7, 8 => P8 p8, 9 => P9 p9,
);
impl_injectable_fn!(
    0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3, 4 => P4 p4, 5 => P5 p5, 6 => P6 p6,
    7 => P7 p7, 8 => P8 p8, 9 => P9 p9, 10 => P10 p10,
);
impl_injectable_fn!(
    0 => P0 p0, 1 => P1 p1, 2 => P2 p2, 3 => P3 p3, 4 => P4 p4, 5 => P5 p5, 6 => P6 p6,
    7 => P7 p7, 8 => P8 p8, 9 => P9 p9, 10 => P10 p10, 11 => P11 p11,
);

type ErasedInvocation = Box<dyn FnOnce(&ScopeChain<'_>) -> Result<Box<dyn Any>, InjectorError>>;

/// Type-erased [InjectableFn], capturing the parameter descriptors and a typed invocation
/// closure. The function result is returned as `Box<dyn Any>`.
///
/// ```
/// use inj::callable::Callable;
/// use inj::injector::Injector;
///
/// let mut injector = Injector::new();
/// injector.register(20u8);
///
/// let candidate = Box::new(Callable::new(|value: u8| value * 2));
/// let result = injector.call_dynamic(candidate, &[]).unwrap();
///
/// assert_eq!(*result.downcast::<u8>().unwrap(), 40);
/// ```
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Callable {
    name: &'static str,
    parameters: Vec<TypeDescriptor>,
    #[derivative(Debug = "ignore")]
    invocation: ErasedInvocation,
}

impl Callable {
    pub fn new<F, Args>(function: F) -> Self
    where
        F: InjectableFn<Args> + 'static,
        F::Output: 'static,
        Args: 'static,
    {
        Self {
            name: type_name::<F>(),
            parameters: F::parameters(),
            invocation: Box::new(move |chain: &ScopeChain<'_>| {
                function
                    .invoke(chain)
                    .map(|output| Box::new(output) as Box<dyn Any>)
            }),
        }
    }

    /// Type name of the wrapped function.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn parameters(&self) -> &[TypeDescriptor] {
        &self.parameters
    }

    /// Resolves the parameters and invokes the wrapped function.
    pub fn invoke(self, chain: &ScopeChain<'_>) -> Result<Box<dyn Any>, InjectorError> {
        (self.invocation)(chain)
    }
}
