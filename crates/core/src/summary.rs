use std::collections::BTreeMap;

use crate::category::Category;
use crate::fields::ExtractedFields;
use crate::money::Money;
use crate::month::MonthKey;

/// Spend totals across a set of receipts, bucketed by category.
/// Records whose amount text does not parse are skipped entirely, including
/// from `receipt_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendingSummary {
    pub total: Money,
    pub receipt_count: usize,
    pub by_category: BTreeMap<Category, Money>,
}

/// Total parseable receipt amounts overall and per category.
pub fn summarize<'a, I>(records: I) -> SpendingSummary
where
    I: IntoIterator<Item = &'a ExtractedFields>,
{
    let mut summary = SpendingSummary::default();
    for record in records {
        let Some(amount) = record.amount() else {
            continue;
        };
        let slot = summary
            .by_category
            .entry(record.category)
            .or_insert_with(Money::zero);
        *slot = *slot + amount;
        summary.total = summary.total + amount;
        summary.receipt_count += 1;
    }
    summary
}

/// Spend for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: MonthKey,
    pub total: Money,
    pub receipt_count: usize,
}

/// Group receipts by purchase month, ascending. Records with an unusable
/// date or amount are skipped.
pub fn monthly_totals<'a, I>(records: I) -> Vec<MonthlyTotal>
where
    I: IntoIterator<Item = &'a ExtractedFields>,
{
    let mut buckets: BTreeMap<MonthKey, (Money, usize)> = BTreeMap::new();
    for record in records {
        let (Some(month), Some(amount)) = (record.month(), record.amount()) else {
            continue;
        };
        let (total, count) = buckets.entry(month).or_insert((Money::zero(), 0));
        *total = *total + amount;
        *count += 1;
    }
    buckets
        .into_iter()
        .map(|(month, (total, receipt_count))| MonthlyTotal {
            month,
            total,
            receipt_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Category, amount: &str, date: &str) -> ExtractedFields {
        ExtractedFields {
            merchant: String::new(),
            purchase_date: date.to_string(),
            purchase_time: String::new(),
            total_amount: amount.to_string(),
            category,
        }
    }

    #[test]
    fn summarize_totals_by_category() {
        let records = vec![
            record(Category::Grocery, "4,56", "2025-08-16"),
            record(Category::Grocery, "10,00", "2025-08-17"),
            record(Category::GasStation, "60,20", "2025-08-18"),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.receipt_count, 3);
        assert_eq!(summary.total, Money::parse_de("74,76").unwrap());
        assert_eq!(
            summary.by_category[&Category::Grocery],
            Money::parse_de("14,56").unwrap()
        );
        assert_eq!(
            summary.by_category[&Category::GasStation],
            Money::parse_de("60,20").unwrap()
        );
    }

    #[test]
    fn summarize_skips_unparseable_amounts() {
        let records = vec![
            record(Category::Grocery, "4,56", "2025-08-16"),
            record(Category::Grocery, "", "2025-08-16"),
            record(Category::Other, "n/a", "2025-08-16"),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.receipt_count, 1);
        assert_eq!(summary.total, Money::parse_de("4,56").unwrap());
        assert!(!summary.by_category.contains_key(&Category::Other));
    }

    #[test]
    fn summarize_empty_input() {
        let summary = summarize(&[]);
        assert_eq!(summary.receipt_count, 0);
        assert!(summary.total.is_zero());
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn monthly_totals_groups_mixed_date_formats() {
        // A raw German token and an ISO date in the same month land in the
        // same bucket.
        let records = vec![
            record(Category::Grocery, "4,00", "2025-08-16"),
            record(Category::Grocery, "6,00", "17.08.2025"),
            record(Category::Grocery, "1,00", "2025-09-01"),
        ];
        let trends = monthly_totals(&records);
        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].month, MonthKey::new(2025, 8).unwrap());
        assert_eq!(trends[0].total, Money::parse_de("10,00").unwrap());
        assert_eq!(trends[0].receipt_count, 2);
        assert_eq!(trends[1].month, MonthKey::new(2025, 9).unwrap());
    }

    #[test]
    fn monthly_totals_sorted_ascending() {
        let records = vec![
            record(Category::Other, "1,00", "2025-03-01"),
            record(Category::Other, "1,00", "2024-12-01"),
            record(Category::Other, "1,00", "2025-01-15"),
        ];
        let months: Vec<String> = monthly_totals(&records)
            .iter()
            .map(|t| t.month.to_string())
            .collect();
        assert_eq!(months, vec!["2024-12", "2025-01", "2025-03"]);
    }

    #[test]
    fn monthly_totals_skips_dateless_records() {
        let records = vec![
            record(Category::Other, "1,00", ""),
            record(Category::Other, "1,00", "2025-01-15"),
        ];
        assert_eq!(monthly_totals(&records).len(), 1);
    }
}
