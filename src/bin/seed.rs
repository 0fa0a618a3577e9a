use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use rental_inventory::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::materials::{ActiveModel as MaterialActive, Column as MaterialCol, Entity as Materials},
    money,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config).await?;
    run_migrations(&orm).await?;

    seed_materials(&orm).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_materials(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let materials = vec![
        ("Tent", 10, Decimal::new(500, 2)),
        ("Folding chair", 120, Decimal::new(150, 2)),
        ("Banquet table", 30, Decimal::new(1200, 2)),
        ("Sound system", 4, Decimal::new(8500, 2)),
        ("Projector", 6, Decimal::new(4000, 2)),
    ];

    for (name, quantity, price) in materials {
        let existing = Materials::find()
            .filter(MaterialCol::Name.eq(name))
            .one(orm)
            .await?;
        if existing.is_some() {
            println!("Skipped {name}, already present");
            continue;
        }

        MaterialActive {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            available_quantity: Set(quantity),
            rental_price: Set(money::to_cents(price)?),
            created_at: Set(Utc::now().into()),
        }
        .insert(orm)
        .await?;
        println!("Seeded {name}");
    }

    Ok(())
}
