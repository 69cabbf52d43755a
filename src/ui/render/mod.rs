//! UI rendering functions
//!
//! This module contains all the rendering logic for the application,
//! separated by view type.

mod browser;
mod common;

pub use browser::render_browser;
pub use common::{render_catalog_error, render_loading};
