//! Image Provider Module
//!
//! The fetch collaborator of the widget: given a query and a page number it
//! returns one page of image hits together with the provider's match count.
//!
//! ## Submodules
//! - **`client`**: The `ImageSearch` seam and its Pixabay implementation (reqwest).
//! - **`types`**: Query validation and the provider's response DTOs.

pub mod client;
pub mod types;

#[cfg(test)]
mod tests;
