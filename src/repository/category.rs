use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use uuid::Uuid;

use crate::entities::{category, menu_item};
use crate::models::CategoryView;

fn with_counts() -> Select<category::Entity> {
    category::Entity::find()
        .select_only()
        .column(category::Column::Id)
        .column(category::Column::Name)
        .column(category::Column::NameInLocalLanguage)
        .column_as(menu_item::Column::Id.count(), "item_count")
        .join(JoinType::LeftJoin, category::Relation::MenuItem.def())
        .group_by(category::Column::Id)
        .group_by(category::Column::Name)
        .group_by(category::Column::NameInLocalLanguage)
}

pub async fn find_all_with_counts<C: ConnectionTrait>(db: &C) -> Result<Vec<CategoryView>, DbErr> {
    with_counts()
        .order_by_asc(category::Column::Name)
        .into_model::<CategoryView>()
        .all(db)
        .await
}

pub async fn find_with_count<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<CategoryView>, DbErr> {
    with_counts()
        .filter(category::Column::Id.eq(id))
        .into_model::<CategoryView>()
        .one(db)
        .await
}

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<category::Model>, DbErr> {
    category::Entity::find_by_id(id).one(db).await
}

pub async fn find_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<category::Model>, DbErr> {
    category::Entity::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await
}

pub async fn count_items<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
    menu_item::Entity::find()
        .filter(menu_item::Column::CategoryId.eq(id))
        .count(db)
        .await
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    name: &str,
    name_in_local_language: Option<&str>,
) -> Result<category::Model, DbErr> {
    category::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        name_in_local_language: Set(name_in_local_language.map(str::to_owned)),
    }
    .insert(db)
    .await
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: category::ActiveModel,
) -> Result<category::Model, DbErr> {
    model.update(db).await
}

/// Returns the number of removed rows, zero when the id was unknown.
pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
    let result = category::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
