//! HTTP handlers for the index page and purpose CRUD.

pub mod index;
pub mod purpose;
