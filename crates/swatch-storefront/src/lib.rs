pub mod client;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod types;

pub use client::StorefrontClient;
pub use error::StorefrontError;
pub use loader::{CardLoader, LoadOutcome, LoaderPhase, ProductSource, ShopSource};
pub use normalize::normalize_product;
pub use types::{ProductDocument, ProductOption, StorefrontProduct, StorefrontVariant};
