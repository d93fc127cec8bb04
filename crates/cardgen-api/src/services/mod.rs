pub mod photo_source;

pub use photo_source::PhotoFetcher;
