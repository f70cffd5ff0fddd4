//! Builder API and declarative macros.
//!
//! [`DispatcherBuilder`] configures a [`Dispatcher`](crate::dispatch::Dispatcher);
//! the macros in [`macros`] generate case machines, lenses and arrow impls
//! with minimal boilerplate.

pub mod dispatcher;
pub mod error;
pub mod macros;

pub use dispatcher::DispatcherBuilder;
pub use error::BuildError;
