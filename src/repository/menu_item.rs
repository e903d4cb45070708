use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::{category, menu_item};

pub type Expanded = (menu_item::Model, category::Model);

/// Items joined with their category, sorted by category name and then item name.
pub async fn find_all_expanded<C: ConnectionTrait>(
    db: &C,
    category_id: Option<Uuid>,
) -> Result<Vec<Expanded>, DbErr> {
    let mut query = menu_item::Entity::find().find_also_related(category::Entity);

    if let Some(category_id) = category_id {
        query = query.filter(menu_item::Column::CategoryId.eq(category_id));
    }

    let rows = query
        .order_by_asc(category::Column::Name)
        .order_by_asc(menu_item::Column::Name)
        .all(db)
        .await?;

    //the foreign key keeps the category present, a missing one means a broken row
    Ok(rows
        .into_iter()
        .filter_map(|(item, category)| category.map(|category| (item, category)))
        .collect())
}

pub async fn find_expanded<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<Expanded>, DbErr> {
    let row = menu_item::Entity::find_by_id(id)
        .find_also_related(category::Entity)
        .one(db)
        .await?;

    Ok(row.and_then(|(item, category)| category.map(|category| (item, category))))
}

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<menu_item::Model>, DbErr> {
    menu_item::Entity::find_by_id(id).one(db).await
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    model: menu_item::ActiveModel,
) -> Result<menu_item::Model, DbErr> {
    model.insert(db).await
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: menu_item::ActiveModel,
) -> Result<menu_item::Model, DbErr> {
    model.update(db).await
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
    let result = menu_item::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
