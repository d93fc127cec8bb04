pub mod identity;
pub mod photo_source;

pub use identity::IdentityFields;
pub use photo_source::PhotoSource;
