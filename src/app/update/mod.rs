use super::messages::FormField;

mod core;
mod form;
mod library;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    Focus(FormField),
}
