use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
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
    pub status: String,
    pub click_count: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
