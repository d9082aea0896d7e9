pub mod auth_service;
pub mod banner_service;
pub mod product_service;
pub mod top_offer_service;
