pub mod category;
pub mod menu_item;
pub mod user;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Schema, Set,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::entities::{
    category::Entity as Category, menu_item::Entity as MenuItem, user::Entity as User,
};
use crate::repository;

pub async fn setup_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    //menu_item references category, so it goes last
    let mut statements = [
        schema.create_table_from_entity(Category),
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(MenuItem),
    ];

    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    Ok(())
}

/// Makes sure the configured admin account exists. An existing account is left untouched,
/// so a password changed in the database survives restarts.
pub async fn seed_admin<C: ConnectionTrait>(db: &C, config: &Config) -> Result<(), DbErr> {
    let email = config.admin_email.trim().to_lowercase();

    if repository::user::find_by_email(db, &email).await?.is_some() {
        info!(email = %email, "Admin account already present");
        return Ok(());
    }

    let password_hash = user::hash_password(&config.admin_password)
        .map_err(|err| DbErr::Custom(format!("Failed to hash admin password: {err}")))?;

    repository::user::insert(db, &email, &password_hash).await?;
    info!(email = %email, "Created admin account");

    Ok(())
}

/// Inserts the demo menu when the category table is still empty.
pub async fn seed_menu<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    if Category::find().count(db).await? > 0 {
        warn!("Skipping menu seed, categories already exist");
        return Ok(());
    }

    let now = Utc::now();
    for (name, local_name, items) in SAMPLE_MENU {
        let category = repository::category::insert(db, name, Some(*local_name)).await?;

        for (item_name, description, price) in *items {
            menu_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(item_name.to_string()),
                description: Set(description.to_string()),
                price: Set(*price),
                image_url: Set(None),
                category_id: Set(category.id),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(db)
            .await?;
        }
    }

    info!(categories = SAMPLE_MENU.len(), "Seeded sample menu");
    Ok(())
}

type SampleItem = (&'static str, &'static str, f64);

const SAMPLE_MENU: &[(&str, &str, &[SampleItem])] = &[
    (
        "Grill",
        "جريل",
        &[
            ("Grilled Chicken", "Tender grilled chicken breast with herbs", 15.99),
            ("Grilled Salmon", "Fresh salmon with lemon and herbs", 18.99),
            ("Beef Steak", "Juicy ribeye steak cooked to perfection", 24.99),
        ],
    ),
    (
        "Salads",
        "سلطات",
        &[
            ("Caesar Salad", "Fresh romaine lettuce with Caesar dressing", 8.99),
            ("Greek Salad", "Mixed greens with feta cheese and olives", 9.99),
            ("Garden Salad", "Fresh seasonal vegetables with vinaigrette", 7.99),
        ],
    ),
    (
        "Drinks",
        "مشروبات",
        &[
            ("Coca Cola", "Refreshing cola drink", 2.99),
            ("Orange Juice", "Freshly squeezed orange juice", 3.99),
            ("Coffee", "Hot brewed coffee", 2.49),
        ],
    ),
];
