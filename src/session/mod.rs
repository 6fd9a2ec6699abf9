//! Pagination Session Module
//!
//! Holds the state shared by the search and scroll-pagination controllers
//! for one page of the widget.
//!
//! ## Lifecycle
//! 1. **Search start**: `begin_search` resets the cursor and the remaining
//!    counter, re-attaches the scroll listener and bumps the generation.
//! 2. **First page**: `record_first_page` stores the reported total and the
//!    remaining count.
//! 3. **Further pages**: `record_next_page` advances the cursor and
//!    decrements the remaining count. Pages from an older generation are
//!    rejected so a slow fetch cannot write into a newer search.
//! 4. **Stop**: `detach` marks the listener removed until the next search.
//!
//! Concurrent work is fenced by two `InFlightGuard`s, one per controller.
//! A guard is taken with a single atomic compare-and-swap before the fetch is
//! awaited and released on drop, so every exit path releases it.
//!
//! ## Submodules
//! - **`guard`**: The RAII in-flight flag.
//! - **`state`**: The session object and its snapshot type.

pub mod guard;
pub mod state;

#[cfg(test)]
mod tests;
