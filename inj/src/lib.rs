//! A simple mechanism of dependency injection.
//!
//! It combines a type to value map and the capability of invoking a function with parameters
//! supplied based on their types:
//!
//! ```
//! use inj::injector::Injector;
//!
//! let mut injector = Injector::new();
//! injector.register("foobar");
//! injector.register(42);
//!
//! let values = injector
//!     .call(|a: i32, b: &'static str| format!("{a} {b}"), &[])
//!     .unwrap();
//!
//! assert_eq!(values, "42 foobar");
//! ```
//!
//! Please see the [injector], [scope] and [interface] modules for more information.

// lets generated code refer to this crate by name, also from within
extern crate self as inj;

pub mod callable;
pub mod descriptor;
pub mod error;
pub mod injector;
pub mod instance;
pub mod interface;
pub mod scope;

pub use error::InjectorError;

#[cfg(feature = "derive")]
pub use inj_derive::{interface, interface_impl};
