pub mod amount;
pub mod catalog;
pub mod datetime;
pub mod merchant;
pub mod normalize;
pub mod pipeline;

pub use beleg_core::{Category, ExtractedFields};
pub use catalog::{CatalogError, CategoryRules, MerchantCatalog};
pub use normalize::{normalize, Normalized};
pub use pipeline::Extractor;
