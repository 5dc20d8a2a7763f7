pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod places;
mod widgets;

#[cfg(test)]
mod test_utils;
