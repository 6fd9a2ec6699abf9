use crate::provider::types::Hit;

use maud::{Markup, html};

/// Signature of a markup generator: hits in, HTML fragment out.
pub type MarkupFn = fn(&[Hit]) -> String;

/// Renders hits as lightbox-ready photo cards.
pub fn gallery_markup(hits: &[Hit]) -> String {
    html! {
        @for hit in hits {
            (photo_card(hit))
        }
    }
    .into_string()
}

fn photo_card(hit: &Hit) -> Markup {
    html! {
        a.gallery__item href=(hit.large_image_url) {
            div.photo-card {
                img.gallery__image src=(hit.webformat_url) alt=(hit.tags) loading="lazy";
                div.info {
                    (info_item("Likes", hit.likes))
                    (info_item("Views", hit.views))
                    (info_item("Comments", hit.comments))
                    (info_item("Downloads", hit.downloads))
                }
            }
        }
    }
}

fn info_item(label: &str, value: u64) -> Markup {
    html! {
        p.info-item { b { (label) } (value) }
    }
}
