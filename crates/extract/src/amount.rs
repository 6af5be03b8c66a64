use std::sync::OnceLock;

use regex::Regex;

/// Total-amount patterns for German receipt layouts, most specific first.
/// Matching is case-insensitive anywhere in the text; the first captured
/// amount wins. Specific labels come before generic ones so an intermediate
/// subtotal or tax line cannot shadow the actual total. The captured group is
/// returned verbatim, separator included. The final entry tolerates the
/// frequent OCR misread of "Total" as "fotal".
const AMOUNT_PATTERNS: &[&str] = &[
    r"(?i)\bSUMME\s*:?\s*(\d+[.,]\d{2})",
    r"(?i)\bGESAMT\s+\d+\s+(\d+[.,]\d{2})",
    r"(?i)\bBetrag:\s*(\d+[.,]\d{2})",
    r"(?i)\bTOTAL\s+EUR\s*:?\s*(\d+[.,]\d{2})",
    r"(?i)\b(?:kontaktlos\s+)?girocard\s+EUR\s*(\d+[.,]\d{2})",
    r"(?i)\bSUMME\s+EUR\s*:?\s*(\d+[.,]\d{2})",
    r"(?i)\bBetrag\s+EUR\s*(\d+[.,]\d{2})",
    r"(?im)\bEUR\s*(\d+[.,]\d{2})\s*$",
    r"(?i)\bKartenzahlung\b\s*:?\s*(\d+[.,]\d{2})",
    r"(?i)\bGesamtbetrag\b.*?(\d+[.,]\d{2})",
    r"(?i)\b(?:Total|Gesamt)\s*:?\s*(?:EUR|€)?\s*(\d+[.,]\d{2})",
    r"(?i)\bfotal\s+(?:EUR|€)?\s*(\d+[.,]\d{2})",
];

fn amount_patterns() -> &'static [Regex] {
    static P: OnceLock<Vec<Regex>> = OnceLock::new();
    P.get_or_init(|| {
        AMOUNT_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("invalid regex"))
            .collect()
    })
}

/// Locate the receipt total. The amount text keeps whatever decimal
/// separator the receipt printed; `None` when no pattern matches.
pub fn extract_amount(text: &str) -> Option<String> {
    amount_patterns().iter().find_map(|re| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summe_label() {
        assert_eq!(extract_amount("SUMME 12,34").as_deref(), Some("12,34"));
    }

    #[test]
    fn summe_beats_generic_trailing_eur() {
        // The specific label wins even when a generic pattern also matches.
        let text = "Pfand EUR 5,00\nSUMME 12,34";
        assert_eq!(extract_amount(text).as_deref(), Some("12,34"));
    }

    #[test]
    fn summe_eur_variant() {
        assert_eq!(extract_amount("SUMME EUR 4,56").as_deref(), Some("4,56"));
    }

    #[test]
    fn gesamt_with_item_count() {
        assert_eq!(extract_amount("GESAMT 3 27,90").as_deref(), Some("27,90"));
    }

    #[test]
    fn betrag_colon_label() {
        assert_eq!(extract_amount("Betrag: 9,99").as_deref(), Some("9,99"));
    }

    #[test]
    fn betrag_eur_label() {
        assert_eq!(extract_amount("Betrag EUR 9,99").as_deref(), Some("9,99"));
    }

    #[test]
    fn total_eur_label() {
        assert_eq!(extract_amount("TOTAL EUR 15,00").as_deref(), Some("15,00"));
    }

    #[test]
    fn girocard_payment_line() {
        assert_eq!(
            extract_amount("girocard EUR 23,45").as_deref(),
            Some("23,45")
        );
        assert_eq!(
            extract_amount("kontaktlos girocard EUR 23,45").as_deref(),
            Some("23,45")
        );
    }

    #[test]
    fn trailing_eur_at_line_end() {
        let text = "Zwischensumme\nEUR 7,80\nVielen Dank";
        assert_eq!(extract_amount(text).as_deref(), Some("7,80"));
    }

    #[test]
    fn kartenzahlung_line() {
        assert_eq!(
            extract_amount("Kartenzahlung 31,07").as_deref(),
            Some("31,07")
        );
    }

    #[test]
    fn gesamtbetrag_multi_token_line() {
        assert_eq!(
            extract_amount("Gesamtbetrag inkl. MwSt 44,10").as_deref(),
            Some("44,10")
        );
    }

    #[test]
    fn generic_total_and_gesamt() {
        assert_eq!(extract_amount("Total: 5,20").as_deref(), Some("5,20"));
        assert_eq!(extract_amount("Gesamt EUR 5,20").as_deref(), Some("5,20"));
    }

    #[test]
    fn ocr_garbled_total() {
        assert_eq!(extract_amount("fotal EUR 8,15").as_deref(), Some("8,15"));
    }

    #[test]
    fn decimal_point_kept_verbatim() {
        assert_eq!(extract_amount("SUMME 12.34").as_deref(), Some("12.34"));
    }

    #[test]
    fn case_insensitive_labels() {
        assert_eq!(extract_amount("summe 12,34").as_deref(), Some("12,34"));
    }

    #[test]
    fn no_amount_yields_none() {
        assert_eq!(extract_amount("KAUFLAND\nDatum: 16.08.2025"), None);
        assert_eq!(extract_amount(""), None);
    }
}
