pub mod banners;
pub mod products;
pub mod top_offers;

pub use banners::Entity as Banners;
pub use products::Entity as Products;
pub use top_offers::Entity as TopOffers;
