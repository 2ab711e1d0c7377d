//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `select_field`: Dropdown for select fields
//! - `contact_form`: The contact form screen

mod contact_form;
mod field_renderer;
mod select_field;

pub use contact_form::draw_contact_form;
