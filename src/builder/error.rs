//! Build errors for dispatcher construction.

use thiserror::Error;

/// Errors that can occur when building a dispatcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Dispatcher label is empty. Pass a non-empty name to .label()")]
    EmptyLabel,
}
