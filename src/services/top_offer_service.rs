use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::non_blank,
    dto::top_offers::{TopOfferList, TopOfferRequest},
    entity::top_offers::{ActiveModel, Column, Entity as TopOffers},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::TopOffer,
    response::MessageResponse,
    state::AppState,
};

const DEFAULT_CATEGORY: &str = "Top-Angebot";

/// A request that passed validation, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopOfferFields {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub link: String,
    pub category: String,
    pub is_active: bool,
    pub sort_order: i32,
}

pub async fn list_active_offers(state: &AppState) -> AppResult<TopOfferList> {
    let items = TopOffers::find()
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::SortOrder)
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(TopOffer::from)
        .collect();
    Ok(TopOfferList { items })
}

pub async fn list_all_offers(state: &AppState) -> AppResult<TopOfferList> {
    let items = TopOffers::find()
        .order_by_asc(Column::SortOrder)
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(TopOffer::from)
        .collect();
    Ok(TopOfferList { items })
}

pub async fn create_offer(
    state: &AppState,
    admin: &AdminSession,
    payload: TopOfferRequest,
) -> AppResult<TopOffer> {
    let fields = validate_offer(payload)?;
    let offer = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(fields.title),
        description: Set(fields.description),
        image_url: Set(fields.image_url),
        link: Set(fields.link),
        category: Set(fields.category),
        is_active: Set(fields.is_active),
        sort_order: Set(fields.sort_order),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&*state.orm)
    .await?;

    tracing::info!(actor = %admin.username, offer_id = %offer.id, "top offer created");
    Ok(TopOffer::from(offer))
}

/// Replaces every editable field of an offer.
pub async fn update_offer(
    state: &AppState,
    admin: &AdminSession,
    id: Uuid,
    payload: TopOfferRequest,
) -> AppResult<TopOffer> {
    let fields = validate_offer(payload)?;

    let existing = TopOffers::find_by_id(id).one(&*state.orm).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound("Top offer not found".into())),
    };

    let mut active: ActiveModel = existing.into();
    active.title = Set(fields.title);
    active.description = Set(fields.description);
    active.image_url = Set(fields.image_url);
    active.link = Set(fields.link);
    active.category = Set(fields.category);
    active.is_active = Set(fields.is_active);
    active.sort_order = Set(fields.sort_order);
    active.updated_at = Set(Utc::now().into());
    let offer = active.update(&*state.orm).await?;

    tracing::info!(actor = %admin.username, offer_id = %offer.id, "top offer updated");
    Ok(TopOffer::from(offer))
}

pub async fn delete_offer(
    state: &AppState,
    admin: &AdminSession,
    id: Uuid,
) -> AppResult<MessageResponse> {
    let result = TopOffers::delete_by_id(id).exec(&*state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Top offer not found".into()));
    }

    tracing::info!(actor = %admin.username, offer_id = %id, "top offer deleted");
    Ok(MessageResponse::new("Top offer deleted successfully"))
}

pub fn validate_offer(payload: TopOfferRequest) -> AppResult<TopOfferFields> {
    let (Some(title), Some(image_url), Some(link)) = (
        non_blank(payload.title),
        non_blank(payload.image_url),
        non_blank(payload.link),
    ) else {
        return Err(AppError::BadRequest(
            "Title, image_url, and link are required".into(),
        ));
    };

    Ok(TopOfferFields {
        title,
        description: payload.description,
        image_url,
        link,
        category: non_blank(payload.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        is_active: payload.is_active.unwrap_or(true),
        sort_order: payload.sort_order.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TopOfferRequest {
        TopOfferRequest {
            title: Some("Prime Day".into()),
            image_url: Some("https://example.com/p.png".into()),
            link: Some("https://amazon.de/primeday".into()),
            ..Default::default()
        }
    }

    #[test]
    fn applies_defaults() {
        let fields = validate_offer(request()).unwrap();
        assert_eq!(fields.category, "Top-Angebot");
        assert!(fields.is_active);
        assert_eq!(fields.sort_order, 0);
        assert_eq!(fields.description, None);
    }

    #[test]
    fn keeps_explicit_values() {
        let fields = validate_offer(TopOfferRequest {
            category: Some("Tech".into()),
            is_active: Some(false),
            sort_order: Some(4),
            ..request()
        })
        .unwrap();
        assert_eq!(fields.category, "Tech");
        assert!(!fields.is_active);
        assert_eq!(fields.sort_order, 4);
    }

    #[test]
    fn requires_title_image_and_link() {
        for broken in [
            TopOfferRequest { title: None, ..request() },
            TopOfferRequest { image_url: Some(String::new()), ..request() },
            TopOfferRequest { link: None, ..request() },
        ] {
            assert!(matches!(validate_offer(broken), Err(AppError::BadRequest(_))));
        }
    }
}
