//! Affiliate tagging for outbound Amazon links.

/// Associate tag appended to every outbound product link.
pub const REFERRAL_TAG: &str = "50674-21";

/// Appends the affiliate tag to `link` unless it is already there.
///
/// This is a plain string operation: the link is never parsed, so malformed
/// URLs come back with the tag appended and otherwise untouched.
pub fn add_referral_code(link: &str) -> String {
    let param = format!("tag={REFERRAL_TAG}");
    if link.contains(&param) {
        return link.to_string();
    }

    let separator = if link.contains('?') { '&' } else { '?' };
    format!("{link}{separator}{param}")
}

/// Tagged product page on amazon.de for the given ASIN.
pub fn amazon_product_link(asin: &str) -> String {
    add_referral_code(&format!("https://amazon.de/dp/{asin}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_query_when_link_has_none() {
        assert_eq!(
            add_referral_code("https://amazon.de/dp/B08N5WRWNW"),
            "https://amazon.de/dp/B08N5WRWNW?tag=50674-21"
        );
    }

    #[test]
    fn merges_into_existing_query() {
        assert_eq!(
            add_referral_code("https://amazon.de/dp/B08N5WRWNW?th=1"),
            "https://amazon.de/dp/B08N5WRWNW?th=1&tag=50674-21"
        );
    }

    #[test]
    fn leaves_tagged_links_alone() {
        let tagged = "https://amazon.de/dp/B08N5WRWNW?psc=1&tag=50674-21";
        assert_eq!(add_referral_code(tagged), tagged);
    }

    #[test]
    fn is_idempotent() {
        for link in [
            "https://amazon.de/dp/B0B7BP6CJN",
            "https://amazon.de/dp/B0B7BP6CJN?ref=abc",
            "not a url at all",
            "",
        ] {
            let once = add_referral_code(link);
            assert_eq!(add_referral_code(&once), once, "link: {link:?}");
        }
    }

    #[test]
    fn malformed_links_only_gain_the_tag() {
        assert_eq!(add_referral_code("amazon dp/x"), "amazon dp/x?tag=50674-21");
        assert_eq!(add_referral_code("??"), "??&tag=50674-21");
    }

    #[test]
    fn builds_tagged_product_page() {
        assert_eq!(
            amazon_product_link("B09JQSZ5QR"),
            "https://amazon.de/dp/B09JQSZ5QR?tag=50674-21"
        );
    }
}
