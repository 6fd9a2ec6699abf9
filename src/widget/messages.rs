pub const EMPTY_QUERY: &str = "Please, enter a search query.";
pub const NO_MATCHES: &str =
    "Sorry, there are no images matching your search query. Please try again.";
pub const SEARCH_FAILED: &str = "Oops! Something went wrong. Please try again later.";
pub const PAGINATION_FAILED: &str =
    "Oops! Something went wrong while loading more images. Please try again later.";
pub const END_OF_RESULTS: &str = "We're sorry, but you've reached the end of search results.";

pub fn found_images(total_hits: u64) -> String {
    format!("Hooray! We found {} images.", total_hits)
}
