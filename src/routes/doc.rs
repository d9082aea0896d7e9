use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{auth, banners, products, top_offers},
    models::{Banner, Product, TopOffer},
    response::MessageResponse,
    routes::{
        admin, auth as auth_routes, banner, health, products as product_routes,
        top_offers as top_offer_routes,
    },
    session::SESSION_COOKIE,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_session",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth_routes::login,
        auth_routes::verify,
        auth_routes::logout,
        product_routes::list_products,
        product_routes::create_product,
        product_routes::create_manual_product,
        product_routes::get_product,
        product_routes::update_product,
        product_routes::delete_product,
        product_routes::track_click,
        banner::active_banner,
        banner::upload_banner,
        banner::update_banner,
        banner::delete_banner,
        top_offer_routes::list_active_offers,
        admin::list_all_products,
        admin::product_stats,
        admin::list_banners,
        admin::list_top_offers,
        admin::create_top_offer,
        admin::update_top_offer,
        admin::delete_top_offer
    ),
    components(
        schemas(
            Product,
            Banner,
            TopOffer,
            MessageResponse,
            health::HealthData,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::SessionUser,
            auth::VerifyResponse,
            products::CreateProductRequest,
            products::ManualProductRequest,
            products::UpdateProductRequest,
            products::ProductList,
            products::ClickResponse,
            products::ProductStats,
            banners::ActiveBanner,
            banners::BannerList,
            banners::BannerUploadForm,
            banners::BannerUploadResponse,
            banners::UploadedBanner,
            banners::BannerActionRequest,
            banners::BannerIdRequest,
            top_offers::TopOfferRequest,
            top_offers::TopOfferList
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
        (name = "Banner", description = "Storefront banner endpoints"),
        (name = "Top offers", description = "Public top offer endpoints"),
        (name = "Admin", description = "Admin endpoints"),
        (name = "Auth", description = "Admin session endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
