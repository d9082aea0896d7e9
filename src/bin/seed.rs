use deal_curator::{
    catalog::fetch_amazon_product,
    config::database_url,
    db::{create_orm_conn, create_pool, run_migrations},
};
use uuid::Uuid;

const DEMO_ASINS: [&str; 3] = ["B08N5WRWNW", "B0B7BP6CJN", "B09JQSZ5QR"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let database_url = database_url()?;

    // Ensure migrations are applied.
    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;

    let pool = create_pool(&database_url).await?;
    let inserted = seed_products(&pool).await?;
    seed_top_offers(&pool).await?;

    println!("Seed completed. {inserted} new products.");
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<u64> {
    let mut inserted = 0;
    for asin in DEMO_ASINS {
        let listing = fetch_amazon_product(asin);
        let result = sqlx::query(
            r#"
            INSERT INTO products (
                id, amazon_id, title, description, price, original_price, image,
                category, rating, review_count, discount, tags, link, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, 'active')
            ON CONFLICT (amazon_id) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(asin)
        .bind(&listing.title)
        .bind(&listing.description)
        .bind(&listing.price)
        .bind(&listing.original_price)
        .bind(&listing.image)
        .bind(&listing.category)
        .bind(listing.rating)
        .bind(listing.review_count)
        .bind(listing.discount)
        .bind(&listing.tags)
        .bind(&listing.link)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
        println!("Ensured product {asin}");
    }
    Ok(inserted)
}

async fn seed_top_offers(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM top_offers")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("Top offers already present, skipping");
        return Ok(());
    }

    let listing = fetch_amazon_product(DEMO_ASINS[0]);
    sqlx::query(
        r#"
        INSERT INTO top_offers (id, title, description, image_url, link, sort_order)
        VALUES ($1, $2, $3, $4, $5, 0)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&listing.title)
    .bind(&listing.description)
    .bind(&listing.image)
    .bind(&listing.link)
    .execute(pool)
    .await?;

    println!("Seeded top offers");
    Ok(())
}
