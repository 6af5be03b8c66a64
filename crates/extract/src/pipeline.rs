use tracing::debug;

use beleg_core::ExtractedFields;

use crate::amount;
use crate::catalog::{CategoryRules, MerchantCatalog};
use crate::datetime;
use crate::merchant;
use crate::normalize;

/// Orchestrates: normalize → merchant → date/time → amount → category.
///
/// Total over all string inputs: every invocation yields a complete record,
/// with unresolved fields left at their defaults. Owns its catalog and rule
/// table; `Extractor::default()` uses the builtin ones.
pub struct Extractor {
    merchants: MerchantCatalog,
    categories: CategoryRules,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(MerchantCatalog::builtin(), CategoryRules::builtin())
    }
}

impl Extractor {
    pub fn new(merchants: MerchantCatalog, categories: CategoryRules) -> Self {
        Self { merchants, categories }
    }

    /// Extract structured fields from raw OCR text.
    pub fn extract(&self, raw_text: &str) -> ExtractedFields {
        let normalized = normalize::normalize(raw_text);

        let merchant = merchant::identify(&normalized, &self.merchants);
        let purchase_date = datetime::parse_date(normalized.text);
        let purchase_time = datetime::parse_time(normalized.text);
        let total_amount = amount::extract_amount(normalized.text);
        let category = self.categories.classify(merchant.as_deref().unwrap_or(""));

        let fields = ExtractedFields {
            merchant: merchant.unwrap_or_default(),
            purchase_date: purchase_date.unwrap_or_default(),
            purchase_time: purchase_time.unwrap_or_default(),
            total_amount: total_amount.unwrap_or_default(),
            category,
        };

        debug!(
            merchant = %fields.merchant,
            date = %fields.purchase_date,
            amount = %fields.total_amount,
            category = %fields.category,
            "receipt fields extracted"
        );

        fields
    }
}
