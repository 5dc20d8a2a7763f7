//! Place autocomplete widget
//!
//! `Autocomplete` composes a caller-supplied [`InputField`] with a dropdown
//! of suggestions fetched through the places worker.

mod autocomplete_render;
mod autocomplete_state;
mod autocomplete_widget;
mod input_field;

pub use autocomplete_render::DropdownLayout;
pub use autocomplete_state::{AutocompleteState, ProviderStatus};
pub use autocomplete_widget::Autocomplete;
pub use input_field::{InputField, TextField};
