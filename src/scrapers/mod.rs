pub mod browser;
pub mod extract;
pub mod photos;
pub mod types;

pub use browser::ListingBrowser;
pub use extract::PageSnapshot;
pub use photos::PhotoFetcher;
pub use types::InteractionOutcome;
