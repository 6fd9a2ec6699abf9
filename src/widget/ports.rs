//! Collaborator seams of the widget.
//!
//! All calls are fire-and-forget. Implementations must tolerate repeated
//! calls; in particular `refresh_lightbox` may run with no new images.

/// User-facing toast notifications.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn failure(&mut self, message: &str);
    fn info(&mut self, message: &str);
}

/// The results container.
pub trait GalleryView {
    fn clear_gallery(&mut self);
    fn append_markup(&mut self, markup: String);
}

/// The interactive image viewer attached to gallery links.
pub trait Lightbox {
    fn refresh_lightbox(&mut self);
}

/// Viewport adjustment after new content has been appended.
pub trait SmoothScroll {
    fn smooth_scroll(&mut self);
}

pub trait LoadingIndicator {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
}

/// The page's scroll event registration.
pub trait ScrollListener {
    fn detach_scroll(&mut self);
}

/// Everything a controller talks to besides the provider.
pub trait WidgetSurface:
    Notifier + GalleryView + Lightbox + SmoothScroll + LoadingIndicator + ScrollListener
{
}

impl<T> WidgetSurface for T where
    T: Notifier + GalleryView + Lightbox + SmoothScroll + LoadingIndicator + ScrollListener
{
}
