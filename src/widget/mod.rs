//! Widget Controllers Module
//!
//! The two event handlers of the gallery page and the collaborator seams
//! they drive.
//!
//! ## Overview
//! - The **search controller** runs once per form submission: it validates the
//!   query, resets the session and renders the first page.
//! - The **scroll controller** runs on every scroll event and loads the next
//!   page when the viewport is near the bottom, more results exist and no
//!   other page fetch is outstanding.
//!
//! Controllers never fail: provider errors are logged and turned into a
//! user-facing notice, and every call reports a typed outcome.
//!
//! ## Submodules
//! - **`ports`**: Collaborator traits (notifications, gallery, lightbox, scrolling, loader).
//! - **`frame`**: A recording surface that captures collaborator calls as UI effects.
//! - **`messages`**: User-facing notice texts.
//! - **`search`**: The search controller.
//! - **`scroll`**: The scroll-pagination controller.

pub mod frame;
pub mod messages;
pub mod ports;
pub mod scroll;
pub mod search;
