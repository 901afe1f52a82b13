//! SeaORM implementation of TariffRepository
//!
//! Covers types, icons, tariff-types and tariffs. Reading tariffs for a city
//! fans out one query per tariff to collect its tariff-types.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use tracing::{debug, error, info};

use super::db_errors::{db_err, db_internal};
use crate::domain::tariff::{
    Description, Icon, NewIcon, NewTariff, NewTariffType, NewType, Tariff, TariffRepository,
    TariffType, Type,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    city_tariff, icon, kind, tariff, tariff_type, tariff_type_tariff,
};
use crate::shared::join_all_or_first_error;

// ── Conversion helpers ──────────────────────────────────────────

/// Tariff-type joined with its type name and icon path.
#[derive(Debug, FromQueryResult)]
struct TariffTypeRow {
    id: i32,
    name: String,
    description: String,
    title: String,
    subtitle: String,
    icon_id: i32,
    icon_path: String,
    type_id: i32,
    type_name: String,
}

fn encode_descriptions(descriptions: &[Description]) -> DomainResult<String> {
    serde_json::to_string(descriptions).map_err(|e| {
        error!(error = %e, "Failed to encode tariff-type description");
        DomainError::internal(format!("description encode: {}", e))
    })
}

fn decode_descriptions(tariff_type_id: i32, raw: &str) -> DomainResult<Vec<Description>> {
    serde_json::from_str(raw).map_err(|e| {
        error!(tariff_type_id, error = %e, "Stored tariff-type description is not valid JSON");
        DomainError::internal(format!(
            "description decode for tariff-type {}: {}",
            tariff_type_id, e
        ))
    })
}

fn row_to_domain(row: TariffTypeRow) -> DomainResult<TariffType> {
    let description = decode_descriptions(row.id, &row.description)?;
    Ok(TariffType {
        id: row.id,
        name: row.name,
        type_id: row.type_id,
        type_name: row.type_name,
        description,
        title: row.title,
        subtitle: row.subtitle,
        icon_id: row.icon_id,
        icon_path: row.icon_path,
    })
}

fn tariff_to_domain(t: tariff::Model, city_id: i32) -> Tariff {
    Tariff {
        id: t.id,
        price: t.price,
        period_per_pay: t.period_per_pay,
        title: t.title,
        subtitle: t.subtitle,
        short_description: t.short_description,
        types: Vec::new(),
        city_id,
    }
}

// ── Queries ─────────────────────────────────────────────────────

/// Tariff-types with the denormalized type and icon columns.
fn tariff_types_query() -> Select<tariff_type::Entity> {
    tariff_type::Entity::find()
        .select_only()
        .column_as(tariff_type::Column::Id, "id")
        .column_as(tariff_type::Column::Name, "name")
        .column_as(tariff_type::Column::Description, "description")
        .column_as(tariff_type::Column::Title, "title")
        .column_as(tariff_type::Column::Subtitle, "subtitle")
        .column_as(tariff_type::Column::IconId, "icon_id")
        .column_as(icon::Column::Path, "icon_path")
        .column_as(tariff_type::Column::TypeId, "type_id")
        .column_as(kind::Column::Name, "type_name")
        .join(JoinType::InnerJoin, tariff_type::Relation::Kind.def())
        .join(JoinType::InnerJoin, tariff_type::Relation::Icon.def())
        .order_by_asc(tariff_type::Column::Id)
}

async fn fetch_tariff_types(db: &DatabaseConnection, tariff_id: i32) -> DomainResult<Vec<TariffType>> {
    let rows = tariff_types_query()
        .join(
            JoinType::InnerJoin,
            tariff_type::Relation::TariffTypeTariff.def(),
        )
        .filter(tariff_type_tariff::Column::TariffId.eq(tariff_id))
        .into_model::<TariffTypeRow>()
        .all(db)
        .await
        .map_err(db_internal)?;
    rows.into_iter().map(row_to_domain).collect()
}

// ── SeaOrmTariffRepository ──────────────────────────────────────

pub struct SeaOrmTariffRepository {
    db: DatabaseConnection,
}

impl SeaOrmTariffRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TariffRepository for SeaOrmTariffRepository {
    async fn list_types(&self) -> DomainResult<Vec<Type>> {
        let models = kind::Entity::find()
            .order_by_asc(kind::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models
            .into_iter()
            .map(|m| Type {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    async fn list_tariff_types(&self) -> DomainResult<Vec<TariffType>> {
        let rows = tariff_types_query()
            .into_model::<TariffTypeRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(row_to_domain).collect()
    }

    async fn list_tariffs(&self, city_id: i32) -> DomainResult<Vec<Tariff>> {
        let models = tariff::Entity::find()
            .join(JoinType::InnerJoin, tariff::Relation::CityTariff.def())
            .filter(city_tariff::Column::CityId.eq(city_id))
            .order_by_asc(tariff::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let fetches = models.iter().map(|m| {
            let db = self.db.clone();
            let tariff_id = m.id;
            async move { fetch_tariff_types(&db, tariff_id).await }
        });
        let types_per_tariff = join_all_or_first_error(fetches).await?;

        let tariffs: Vec<Tariff> = models
            .into_iter()
            .zip(types_per_tariff)
            .map(|(m, types)| Tariff {
                types,
                ..tariff_to_domain(m, city_id)
            })
            .collect();
        debug!(city_id, count = tariffs.len(), "Tariffs listed");
        Ok(tariffs)
    }

    async fn list_icons(&self) -> DomainResult<Vec<Icon>> {
        let models = icon::Entity::find()
            .order_by_asc(icon::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models
            .into_iter()
            .map(|m| Icon {
                id: m.id,
                path: m.path,
            })
            .collect())
    }

    async fn add_type(&self, t: NewType) -> DomainResult<()> {
        let model = kind::ActiveModel {
            id: NotSet,
            name: Set(t.name.clone()),
        };
        let result = kind::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!(type_id = result.last_insert_id, name = %t.name, "Type added");
        Ok(())
    }

    async fn remove_type(&self, id: i32) -> DomainResult<()> {
        let result = kind::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!(type_id = id, rows = result.rows_affected, "Type removed");
        Ok(())
    }

    async fn add_tariff_type(&self, t: NewTariffType) -> DomainResult<()> {
        let model = tariff_type::ActiveModel {
            id: NotSet,
            name: Set(t.name.clone()),
            description: Set(encode_descriptions(&t.description)?),
            title: Set(t.title),
            subtitle: Set(t.subtitle),
            icon_id: Set(t.icon_id),
            type_id: Set(t.type_id),
        };
        let result = tariff_type::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!(tariff_type_id = result.last_insert_id, name = %t.name, "Tariff-type added");
        Ok(())
    }

    async fn remove_tariff_type(&self, id: i32) -> DomainResult<()> {
        let result = tariff_type::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!(tariff_type_id = id, rows = result.rows_affected, "Tariff-type removed");
        Ok(())
    }

    async fn add_tariff(&self, t: NewTariff) -> DomainResult<()> {
        let model = tariff::ActiveModel {
            id: NotSet,
            price: Set(t.price),
            period_per_pay: Set(t.period_per_pay),
            title: Set(t.title.clone()),
            subtitle: Set(t.subtitle),
            short_description: Set(t.short_description),
        };
        let tariff_id = tariff::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(db_internal)?
            .last_insert_id;

        let links = t.type_ids.iter().map(|&tariff_type_id| {
            let db = self.db.clone();
            async move {
                let link = tariff_type_tariff::ActiveModel {
                    tariff_id: Set(tariff_id),
                    tariff_type_id: Set(tariff_type_id),
                };
                tariff_type_tariff::Entity::insert(link)
                    .exec_without_returning(&db)
                    .await
                    .map_err(db_internal)
            }
        });
        join_all_or_first_error(links).await?;

        let city_link = city_tariff::ActiveModel {
            city_id: Set(t.city_id),
            tariff_id: Set(tariff_id),
        };
        city_tariff::Entity::insert(city_link)
            .exec_without_returning(&self.db)
            .await
            .map_err(db_internal)?;

        info!(
            tariff_id,
            city_id = t.city_id,
            types = t.type_ids.len(),
            title = %t.title,
            "Tariff added"
        );
        Ok(())
    }

    async fn remove_tariff(&self, id: i32) -> DomainResult<()> {
        let result = tariff::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!(tariff_id = id, rows = result.rows_affected, "Tariff removed");
        Ok(())
    }

    async fn add_icon(&self, i: NewIcon) -> DomainResult<()> {
        let model = icon::ActiveModel {
            id: NotSet,
            path: Set(i.path.clone()),
        };
        let result = icon::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!(icon_id = result.last_insert_id, path = %i.path, "Icon added");
        Ok(())
    }

    async fn remove_icon(&self, id: i32) -> DomainResult<String> {
        let found = icon::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Icon", id))?;
        icon::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!(icon_id = id, path = %found.path, "Icon removed");
        Ok(found.path)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::db_errors::REFERENCE_VIOLATION;
    use super::*;
    use crate::infrastructure::database::test_utils::{
        insert_city, seed_type_and_icon, setup_test_db,
    };
    use sea_orm::{ActiveModelTrait, PaginatorTrait};

    fn basic_type(type_id: i32, icon_id: i32, name: &str) -> NewTariffType {
        NewTariffType {
            name: name.into(),
            type_id,
            description: vec![Description {
                title: "A".into(),
                body: "B".into(),
            }],
            title: format!("{} title", name),
            subtitle: String::new(),
            icon_id,
        }
    }

    fn plan(city_id: i32, type_ids: Vec<i32>) -> NewTariff {
        NewTariff {
            price: 100.0,
            period_per_pay: "month".into(),
            title: "Plan".into(),
            subtitle: String::new(),
            short_description: String::new(),
            type_ids,
            city_id,
        }
    }

    #[tokio::test]
    async fn tariff_type_is_listed_with_joined_fields_and_decoded_description() {
        let db = setup_test_db().await;
        let (type_id, icon_id) = seed_type_and_icon(&db).await;
        let repo = SeaOrmTariffRepository::new(db);

        repo.add_tariff_type(basic_type(type_id, icon_id, "Basic"))
            .await
            .unwrap();

        let listed = repo.list_tariff_types().await.unwrap();
        assert_eq!(listed.len(), 1);
        let tt = &listed[0];
        assert_eq!(tt.name, "Basic");
        assert_eq!(tt.type_id, type_id);
        assert_eq!(tt.type_name, "Internet");
        assert_eq!(tt.icon_id, icon_id);
        assert_eq!(tt.icon_path, "http://localhost/assets/icons/wifi.png");
        assert_eq!(
            tt.description,
            vec![Description {
                title: "A".into(),
                body: "B".into()
            }]
        );
    }

    #[tokio::test]
    async fn tariff_type_with_unknown_references_is_conflict() {
        let db = setup_test_db().await;
        let repo = SeaOrmTariffRepository::new(db.clone());

        let err = repo
            .add_tariff_type(basic_type(42, 43, "Ghost"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Conflict(REFERENCE_VIOLATION.into()));
        assert_eq!(tariff_type::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn tariffs_for_city_carry_all_linked_types() {
        let db = setup_test_db().await;
        let (type_id, icon_id) = seed_type_and_icon(&db).await;
        let city_id = insert_city(&db, "Samara").await;
        let repo = SeaOrmTariffRepository::new(db.clone());

        repo.add_tariff_type(basic_type(type_id, icon_id, "Basic"))
            .await
            .unwrap();
        repo.add_tariff_type(basic_type(type_id, icon_id, "Pro"))
            .await
            .unwrap();
        let ids: Vec<i32> = repo
            .list_tariff_types()
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();

        repo.add_tariff(plan(city_id, ids.clone())).await.unwrap();

        assert_eq!(tariff::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(
            tariff_type_tariff::Entity::find().count(&db).await.unwrap(),
            2
        );
        assert_eq!(city_tariff::Entity::find().count(&db).await.unwrap(), 1);

        let tariffs = repo.list_tariffs(city_id).await.unwrap();
        assert_eq!(tariffs.len(), 1);
        let t = &tariffs[0];
        assert_eq!(t.title, "Plan");
        assert_eq!(t.price, 100.0);
        assert_eq!(t.city_id, city_id);
        let mut got: Vec<i32> = t.types.iter().map(|tt| tt.id).collect();
        got.sort();
        assert_eq!(got, ids);
        assert!(t.types.iter().all(|tt| tt.description.len() == 1));
    }

    #[tokio::test]
    async fn tariff_without_types_lists_empty_types() {
        let db = setup_test_db().await;
        let city_id = insert_city(&db, "Ufa").await;
        let repo = SeaOrmTariffRepository::new(db);

        repo.add_tariff(plan(city_id, vec![])).await.unwrap();

        let tariffs = repo.list_tariffs(city_id).await.unwrap();
        assert_eq!(tariffs.len(), 1);
        assert!(tariffs[0].types.is_empty());
    }

    #[tokio::test]
    async fn unknown_city_lists_nothing() {
        let repo = SeaOrmTariffRepository::new(setup_test_db().await);
        assert!(repo.list_tariffs(77).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_description_fails_whole_listing() {
        let db = setup_test_db().await;
        let (type_id, icon_id) = seed_type_and_icon(&db).await;
        let city_id = insert_city(&db, "Tula").await;
        let repo = SeaOrmTariffRepository::new(db.clone());

        repo.add_tariff_type(basic_type(type_id, icon_id, "Good"))
            .await
            .unwrap();
        repo.add_tariff_type(basic_type(type_id, icon_id, "Bad"))
            .await
            .unwrap();
        let types = repo.list_tariff_types().await.unwrap();
        repo.add_tariff(plan(city_id, vec![types[0].id])).await.unwrap();
        repo.add_tariff(plan(city_id, vec![types[1].id])).await.unwrap();

        tariff_type::ActiveModel {
            id: Set(types[1].id),
            description: Set("not json".into()),
            ..Default::default()
        }
        .update(&db)
        .await
        .unwrap();

        let err = repo.list_tariffs(city_id).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn link_to_missing_tariff_type_fails_but_keeps_tariff_row() {
        let db = setup_test_db().await;
        let city_id = insert_city(&db, "Orel").await;
        let repo = SeaOrmTariffRepository::new(db.clone());

        let err = repo.add_tariff(plan(city_id, vec![999])).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
        assert_eq!(tariff::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(city_tariff::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn remove_icon_returns_path_and_deletes_row() {
        let db = setup_test_db().await;
        let repo = SeaOrmTariffRepository::new(db);
        repo.add_icon(NewIcon {
            path: "http://localhost/assets/icons/a.svg".into(),
        })
        .await
        .unwrap();
        let id = repo.list_icons().await.unwrap()[0].id;

        let path = repo.remove_icon(id).await.unwrap();
        assert_eq!(path, "http://localhost/assets/icons/a.svg");
        assert!(repo.list_icons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_missing_icon_is_not_found() {
        let repo = SeaOrmTariffRepository::new(setup_test_db().await);
        let err = repo.remove_icon(5).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn referenced_type_cannot_be_removed() {
        let db = setup_test_db().await;
        let (type_id, icon_id) = seed_type_and_icon(&db).await;
        let repo = SeaOrmTariffRepository::new(db);
        repo.add_tariff_type(basic_type(type_id, icon_id, "Basic"))
            .await
            .unwrap();

        let err = repo.remove_type(type_id).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict(REFERENCE_VIOLATION.into()));
        assert_eq!(repo.list_types().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn referenced_icon_cannot_be_removed() {
        let db = setup_test_db().await;
        let (type_id, icon_id) = seed_type_and_icon(&db).await;
        let repo = SeaOrmTariffRepository::new(db);
        repo.add_tariff_type(basic_type(type_id, icon_id, "Basic"))
            .await
            .unwrap();

        let err = repo.remove_icon(icon_id).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict(REFERENCE_VIOLATION.into()));
        assert_eq!(repo.list_icons().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn removing_tariff_drops_its_links() {
        let db = setup_test_db().await;
        let (type_id, icon_id) = seed_type_and_icon(&db).await;
        let city_id = insert_city(&db, "Kursk").await;
        let repo = SeaOrmTariffRepository::new(db.clone());
        repo.add_tariff_type(basic_type(type_id, icon_id, "Basic"))
            .await
            .unwrap();
        let tt = repo.list_tariff_types().await.unwrap()[0].id;
        repo.add_tariff(plan(city_id, vec![tt])).await.unwrap();
        let tariff_id = repo.list_tariffs(city_id).await.unwrap()[0].id;

        repo.remove_tariff(tariff_id).await.unwrap();
        repo.remove_tariff(tariff_id).await.unwrap();

        assert!(repo.list_tariffs(city_id).await.unwrap().is_empty());
        assert_eq!(
            tariff_type_tariff::Entity::find().count(&db).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn types_can_be_added_and_removed() {
        let repo = SeaOrmTariffRepository::new(setup_test_db().await);
        repo.add_type(NewType {
            name: "TV".into(),
        })
        .await
        .unwrap();
        let types = repo.list_types().await.unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "TV");

        repo.remove_type(types[0].id).await.unwrap();
        assert!(repo.list_types().await.unwrap().is_empty());
    }
}
