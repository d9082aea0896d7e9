//! Stand-in for the Amazon product API.
//!
//! A handful of well-known ASINs resolve to fixed listings; anything else
//! gets a plausible generic listing with randomised numbers.

use rand::{Rng, seq::SliceRandom};

use crate::referral::amazon_product_link;

const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400";
const FALLBACK_CATEGORIES: [&str; 4] = ["Electronics", "Kitchen", "Home & Garden", "Books & Media"];

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub title: String,
    pub description: String,
    pub price: String,
    pub original_price: Option<String>,
    pub image: String,
    pub category: String,
    pub rating: f64,
    pub review_count: i32,
    pub discount: Option<i32>,
    pub tags: Vec<String>,
    /// Always carries the referral tag.
    pub link: String,
}

pub fn fetch_amazon_product(asin: &str) -> CatalogProduct {
    known_product(asin).unwrap_or_else(|| generic_product(asin))
}

fn known_product(asin: &str) -> Option<CatalogProduct> {
    let (title, description, price, original_price, image, category, rating, reviews, discount, tags) =
        match asin {
            "B08N5WRWNW" => (
                "Echo Dot (5th Gen, 2022 release) | Smart speaker with Alexa",
                "Our most popular smart speaker with a fabric design. Ready to help with weather, jokes, skills, and more.",
                "29,99€",
                "49,99€",
                "https://images.unsplash.com/photo-1589492477829-5e65395b66cc?w=400",
                "Smart Home",
                4.7,
                245_673,
                40,
                &["smart speaker", "alexa", "echo", "amazon", "voice assistant"][..],
            ),
            "B0B7BP6CJN" => (
                "Apple AirPods Pro (2nd Generation) Wireless Earbuds",
                "Up to 2x more Active Noise Cancellation. Transparency mode. Adaptive Audio. Personalized Spatial Audio.",
                "199,99€",
                "249,00€",
                "https://images.unsplash.com/photo-1606220945770-b5b6c2c55bf1?w=400",
                "Electronics",
                4.8,
                89_234,
                20,
                &["airpods", "apple", "wireless", "earbuds", "noise cancelling"][..],
            ),
            "B09JQSZ5QR" => (
                "Ninja Foodi Personal Blender for Shakes, Smoothies",
                "Powerful nutrient & vitamin extraction. 18 oz. to-go cup with spout lid. Easy-to-clean base and dishwasher-safe cups.",
                "39,95€",
                "79,99€",
                "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400",
                "Kitchen",
                4.5,
                12_456,
                50,
                &["blender", "ninja", "smoothies", "kitchen", "personal"][..],
            ),
            _ => return None,
        };

    Some(CatalogProduct {
        title: title.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        original_price: Some(original_price.to_string()),
        image: image.to_string(),
        category: category.to_string(),
        rating,
        review_count: reviews,
        discount: Some(discount),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        link: amazon_product_link(asin),
    })
}

fn generic_product(asin: &str) -> CatalogProduct {
    let mut rng = rand::thread_rng();
    let price: f64 = rng.gen_range(10.0..210.0);
    let original_price: f64 = rng.gen_range(50.0..350.0);
    let rating = (rng.gen_range(3.0..5.0_f64) * 10.0).round() / 10.0;
    let category = FALLBACK_CATEGORIES
        .choose(&mut rng)
        .copied()
        .unwrap_or(FALLBACK_CATEGORIES[0]);

    CatalogProduct {
        title: format!("Amazon Produkt {asin}"),
        description: format!(
            "Beschreibung für Amazon-Produkt mit ID {asin}. Dieses Produkt bietet großartigen Wert und Kundenzufriedenheit."
        ),
        price: euros(price),
        original_price: Some(euros(original_price)),
        image: FALLBACK_IMAGE.to_string(),
        category: category.to_string(),
        rating,
        review_count: rng.gen_range(1_000..101_000),
        discount: Some(rng.gen_range(10..60)),
        tags: ["amazon", "deal", "product"]
            .iter()
            .map(|tag| tag.to_string())
            .collect(),
        link: amazon_product_link(asin),
    }
}

/// German price notation, matching the fixed listings: `123,45€`.
fn euros(amount: f64) -> String {
    format!("{amount:.2}€").replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_asin_has_fixed_listing() {
        let product = fetch_amazon_product("B0B7BP6CJN");
        assert_eq!(product.price, "199,99€");
        assert_eq!(product.original_price.as_deref(), Some("249,00€"));
        assert_eq!(product.discount, Some(20));
        assert_eq!(product.link, "https://amazon.de/dp/B0B7BP6CJN?tag=50674-21");
    }

    #[test]
    fn euro_amounts_use_decimal_comma() {
        assert_eq!(euros(29.99), "29,99€");
        assert_eq!(euros(120.5), "120,50€");
    }

    #[test]
    fn unknown_asin_gets_generic_listing_in_range() {
        let product = fetch_amazon_product("B000UNKNWN");
        assert_eq!(product.title, "Amazon Produkt B000UNKNWN");
        assert!(FALLBACK_CATEGORIES.contains(&product.category.as_str()));
        assert!((3.0..=5.0).contains(&product.rating));
        assert!((1_000..101_000).contains(&product.review_count));
        assert!(product.price.ends_with('€'));
        assert!(product.price.contains(','));
        assert!(!product.price.contains('.'));
        assert_eq!(product.tags, vec!["amazon", "deal", "product"]);
        assert!(product.link.ends_with("?tag=50674-21"));
    }
}
