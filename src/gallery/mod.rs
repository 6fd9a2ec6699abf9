//! Gallery Markup Module
//!
//! Turns provider hits into the HTML fragment appended to the gallery
//! container. Pure functions only; DOM insertion is the page's job.

pub mod markup;
