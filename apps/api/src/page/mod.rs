// Single-page form for parsing hours in the browser.
// Server-rendered: the form posts back to `/` and the result is rendered in place.

pub mod form;
pub mod handlers;
pub mod render;
