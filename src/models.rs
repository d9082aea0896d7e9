use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{banners, products, top_offers};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

/// Public shape of a stored product.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub amazon_id: String,
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
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: String,
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            amazon_id: model.amazon_id,
            title: model.title,
            description: model.description,
            price: model.price,
            original_price: model.original_price,
            image: model.image,
            category: model.category,
            rating: model.rating,
            review_count: model.review_count,
            discount: model.discount,
            tags: model.tags,
            link: model.link,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            status: model.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: Uuid,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<banners::Model> for Banner {
    fn from(model: banners::Model) -> Self {
        Self {
            id: model.id,
            image_url: model.image_url,
            alt_text: model.alt_text,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Top offers are served with their stored column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TopOffer {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub link: String,
    pub category: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<top_offers::Model> for TopOffer {
    fn from(model: top_offers::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            image_url: model.image_url,
            link: model.link,
            category: model.category,
            is_active: model.is_active,
            sort_order: model.sort_order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored_product() -> products::Model {
        let now = Utc::now().fixed_offset();
        products::Model {
            id: Uuid::nil(),
            amazon_id: "B08N5WRWNW".into(),
            title: "Echo Dot".into(),
            description: String::new(),
            price: "29,99€".into(),
            original_price: None,
            image: "https://example.com/echo.jpg".into(),
            category: "Smart Home".into(),
            rating: 4.7,
            review_count: 10,
            discount: None,
            tags: vec!["alexa".into()],
            link: "https://amazon.de/dp/B08N5WRWNW?tag=50674-21".into(),
            status: STATUS_ACTIVE.into(),
            click_count: 3,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn product_fields_are_camel_cased() {
        let value = serde_json::to_value(Product::from(stored_product())).unwrap();
        let object = value.as_object().unwrap();
        for key in ["amazonId", "originalPrice", "reviewCount", "createdAt", "updatedAt"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert!(!object.contains_key("amazon_id"));
        assert!(!object.contains_key("click_count"));
        assert!(!object.contains_key("clickCount"));
    }

    #[test]
    fn absent_optional_fields_stay_null() {
        let value = serde_json::to_value(Product::from(stored_product())).unwrap();
        assert_eq!(value["originalPrice"], json!(null));
        assert_eq!(value["discount"], json!(null));

        let mut discounted = stored_product();
        discounted.original_price = Some("49,99€".into());
        discounted.discount = Some(40);
        let value = serde_json::to_value(Product::from(discounted)).unwrap();
        assert_eq!(value["originalPrice"], json!("49,99€"));
        assert_eq!(value["discount"], json!(40));
    }

    #[test]
    fn top_offer_keeps_snake_case() {
        let now = Utc::now().fixed_offset();
        let offer = TopOffer::from(top_offers::Model {
            id: Uuid::nil(),
            title: "Deal".into(),
            description: None,
            image_url: "https://example.com/a.png".into(),
            link: "https://example.com".into(),
            category: "Top-Angebot".into(),
            is_active: true,
            sort_order: 2,
            created_at: now,
            updated_at: now,
        });
        let value = serde_json::to_value(offer).unwrap();
        assert_eq!(value["image_url"], json!("https://example.com/a.png"));
        assert_eq!(value["sort_order"], json!(2));
    }
}
