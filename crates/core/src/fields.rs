use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::money::Money;
use crate::month::MonthKey;

/// The structured record produced for one receipt. Field resolution is
/// best-effort: any field the extractor could not resolve is left at its
/// default (empty string, category `Other`) rather than failing the record.
///
/// `purchase_date` is ISO `YYYY-MM-DD` when the source token normalized
/// cleanly, otherwise the raw matched token; `purchase_time` is `HH:MM` or
/// `HH:MM:SS`; `total_amount` keeps the separator as printed on the receipt
/// (`4,56` or `4.56`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub merchant: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total_amount: String,
    pub category: Category,
}

impl ExtractedFields {
    /// The total as a typed amount, if the stored text parses.
    pub fn amount(&self) -> Option<Money> {
        Money::parse_de(&self.total_amount)
    }

    /// The calendar month of the purchase, if the stored date text parses.
    pub fn month(&self) -> Option<MonthKey> {
        MonthKey::from_date_text(&self.purchase_date)
    }
}
