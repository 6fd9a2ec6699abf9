//! Infinite-Scroll Image Gallery Library
//!
//! This library crate holds everything behind the gallery widget. The binary
//! (`main.rs`) only wires configuration, the provider client and the HTTP
//! server together.
//!
//! ## Architecture Modules
//! - **`config`**: Environment-driven settings for the provider and the server.
//! - **`provider`**: The image-search fetch seam (`ImageSearch`) and its Pixabay client.
//! - **`gallery`**: Markup generation for result cards.
//! - **`session`**: Per-page pagination state and the in-flight guards that
//!   keep fetches from overlapping.
//! - **`widget`**: The search and scroll-pagination controllers and the
//!   collaborator traits they drive.
//! - **`web`**: Axum server exposing the widget page and its JSON endpoints.

pub mod config;
pub mod gallery;
pub mod provider;
pub mod session;
pub mod web;
pub mod widget;
