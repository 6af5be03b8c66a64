use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::MerchantCatalog;
use crate::normalize::Normalized;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// Loyalty and promo chatter printed around the actual purchase.
re!(re_promo, r"(?i)\b(points?|earned|punkte|payback|bonus|coupon|rabatt)\b");
// Metadata labels: phone, tax id, date/time, terminal and till identifiers.
re!(re_meta_label,
    r"(?i)\b(tel|telefon|fax|ust|ust-?id|steuer|datum|uhrzeit|zeit|terminal|beleg|bon|kasse|trace|tse)\b");
// Totals block labels; a line like "SUMME 12,34" is never the merchant.
re!(re_amount_label,
    r"(?i)\b(summe|gesamt|gesamtbetrag|zwischensumme|betrag|total|mwst|eur)\b");
re!(re_long_digits, r"\d{5,}");
re!(re_url, r"(?i)(https?://|www\.|\w\.(de|com)\b)");
re!(re_payment,
    r"(?i)\b(visa|mastercard|maestro|girocard|amex|kontaktlos|kartenzahlung|ec[- ]karte|debit|kredit)\b");
// Legal-entity suffixes; the dotted forms carry no trailing word boundary.
re!(re_legal_suffix, r"(?i)(\b(gmbh|mbh|ag|ug|kg|ohg)\b|e\.\s?v\.|e\.\s?k\.)");
re!(re_letter_run, r"\p{L}{3,}");
re!(re_digit_run, r"\d{3,}");

/// Lines at or above this length are ignored for catalog matching, to avoid
/// hitting a brand token inside long unrelated text.
const CATALOG_LINE_MAX: usize = 50;
/// Ceiling for the plain-line heuristic fallback.
const FALLBACK_LINE_MAX: usize = 40;

/// Resolve the merchant for one receipt. Catalog tokens are precise for known
/// chains and win outright; the heuristic handles everyone else by skipping
/// obvious noise and favoring legally-suffixed business names.
pub fn identify(normalized: &Normalized<'_>, catalog: &MerchantCatalog) -> Option<String> {
    catalog_match(normalized, catalog).or_else(|| heuristic_match(normalized))
}

/// First catalog token found in the first qualifying line wins; the canonical
/// token is returned, not the raw OCR line.
fn catalog_match(normalized: &Normalized<'_>, catalog: &MerchantCatalog) -> Option<String> {
    for line in &normalized.lines {
        if line.chars().count() >= CATALOG_LINE_MAX {
            continue;
        }
        let upper = line.to_uppercase();
        let cleaned: String = upper
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();
        for token in catalog.tokens() {
            if upper.contains(token.as_str()) || cleaned.contains(token.as_str()) {
                return Some(token.clone());
            }
        }
    }
    None
}

fn heuristic_match(normalized: &Normalized<'_>) -> Option<String> {
    let candidates: Vec<&str> = normalized
        .lines
        .iter()
        .copied()
        .filter(|l| !is_noise_line(l))
        .collect();

    if let Some(line) = candidates.iter().find(|l| re_legal_suffix().is_match(l)) {
        return Some(strip_for_name(line));
    }

    candidates
        .into_iter()
        .find(|l| {
            re_letter_run().is_match(l)
                && l.chars().count() < FALLBACK_LINE_MAX
                && !re_digit_run().is_match(l)
        })
        .map(str::to_string)
}

fn is_noise_line(line: &str) -> bool {
    re_promo().is_match(line)
        || re_payment().is_match(line)
        || re_meta_label().is_match(line)
        || re_amount_label().is_match(line)
        || re_long_digits().is_match(line)
        || re_url().is_match(line)
}

/// Keep letters, digits, whitespace, `&` and `.`; collapse runs of spaces.
fn strip_for_name(line: &str) -> String {
    let kept: String = line
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '&' || *c == '.')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
