//! In-memory catalog for development and testing
//!
//! Mirrors the relational store's behavior closely enough for the use-case
//! layer: tariff-types may not reference missing or removed types and icons,
//! and removing a row drops its links.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    City, CityRepository, CityTariff, DomainError, DomainResult, Icon, IconStorage, NewCity,
    NewIcon, NewTariff, NewTariffType, NewType, RepositoryProvider, Tariff, TariffRepository,
    TariffType, Type,
};

const REFERENCE_VIOLATION: &str = "referenced record is missing or still in use";

/// Stored tariff-type; type name and icon path are resolved on read.
#[derive(Clone)]
struct StoredTariffType {
    id: i32,
    data: NewTariffType,
}

#[derive(Clone)]
struct StoredTariff {
    id: i32,
    data: NewTariff,
}

/// In-memory implementation of both catalog repositories
pub struct InMemoryCatalog {
    cities: DashMap<i32, City>,
    types: DashMap<i32, Type>,
    icons: DashMap<i32, Icon>,
    tariff_types: DashMap<i32, StoredTariffType>,
    tariffs: DashMap<i32, StoredTariff>,
    city_tariffs: DashMap<(i32, i32), ()>,
    tariff_type_tariffs: DashMap<(i32, i32), ()>,
    counter: AtomicI32,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            cities: DashMap::new(),
            types: DashMap::new(),
            icons: DashMap::new(),
            tariff_types: DashMap::new(),
            tariffs: DashMap::new(),
            city_tariffs: DashMap::new(),
            tariff_type_tariffs: DashMap::new(),
            counter: AtomicI32::new(1),
        }
    }

    fn next_id(&self) -> i32 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    fn resolve(&self, stored: &StoredTariffType) -> DomainResult<TariffType> {
        let type_name = self
            .types
            .get(&stored.data.type_id)
            .map(|t| t.name.clone())
            .ok_or_else(|| DomainError::internal("dangling type reference"))?;
        let icon_path = self
            .icons
            .get(&stored.data.icon_id)
            .map(|i| i.path.clone())
            .ok_or_else(|| DomainError::internal("dangling icon reference"))?;
        Ok(TariffType {
            id: stored.id,
            name: stored.data.name.clone(),
            type_id: stored.data.type_id,
            type_name,
            description: stored.data.description.clone(),
            title: stored.data.title.clone(),
            subtitle: stored.data.subtitle.clone(),
            icon_id: stored.data.icon_id,
            icon_path,
        })
    }

    fn sorted<T: Clone>(map: &DashMap<i32, T>) -> Vec<T> {
        let mut entries: Vec<(i32, T)> = map.iter().map(|e| (*e.key(), e.value().clone())).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, v)| v).collect()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CityRepository for InMemoryCatalog {
    async fn list_cities(&self) -> DomainResult<Vec<City>> {
        Ok(Self::sorted(&self.cities))
    }

    async fn add_city(&self, city: NewCity) -> DomainResult<()> {
        let id = self.next_id();
        self.cities.insert(
            id,
            City {
                id,
                name: city.name,
            },
        );
        Ok(())
    }

    async fn remove_city(&self, id: i32) -> DomainResult<()> {
        self.cities.remove(&id);
        self.city_tariffs.retain(|(city_id, _), _| *city_id != id);
        Ok(())
    }

    async fn remove_city_tariff(&self, link: CityTariff) -> DomainResult<()> {
        self.city_tariffs.remove(&(link.city_id, link.tariff_id));
        Ok(())
    }
}

#[async_trait]
impl TariffRepository for InMemoryCatalog {
    async fn list_types(&self) -> DomainResult<Vec<Type>> {
        Ok(Self::sorted(&self.types))
    }

    async fn list_tariff_types(&self) -> DomainResult<Vec<TariffType>> {
        Self::sorted(&self.tariff_types)
            .iter()
            .map(|s| self.resolve(s))
            .collect()
    }

    async fn list_tariffs(&self, city_id: i32) -> DomainResult<Vec<Tariff>> {
        let mut result = Vec::new();
        for stored in Self::sorted(&self.tariffs) {
            if !self.city_tariffs.contains_key(&(city_id, stored.id)) {
                continue;
            }
            let linked: HashSet<i32> = self
                .tariff_type_tariffs
                .iter()
                .filter(|e| e.key().0 == stored.id)
                .map(|e| e.key().1)
                .collect();
            let types = Self::sorted(&self.tariff_types)
                .iter()
                .filter(|tt| linked.contains(&tt.id))
                .map(|tt| self.resolve(tt))
                .collect::<DomainResult<Vec<_>>>()?;
            result.push(Tariff {
                id: stored.id,
                price: stored.data.price,
                period_per_pay: stored.data.period_per_pay,
                title: stored.data.title,
                subtitle: stored.data.subtitle,
                short_description: stored.data.short_description,
                types,
                city_id,
            });
        }
        Ok(result)
    }

    async fn list_icons(&self) -> DomainResult<Vec<Icon>> {
        Ok(Self::sorted(&self.icons))
    }

    async fn add_type(&self, t: NewType) -> DomainResult<()> {
        let id = self.next_id();
        self.types.insert(id, Type { id, name: t.name });
        Ok(())
    }

    async fn remove_type(&self, id: i32) -> DomainResult<()> {
        if self.tariff_types.iter().any(|tt| tt.data.type_id == id) {
            return Err(DomainError::Conflict(REFERENCE_VIOLATION.into()));
        }
        self.types.remove(&id);
        Ok(())
    }

    async fn add_tariff_type(&self, t: NewTariffType) -> DomainResult<()> {
        if !self.types.contains_key(&t.type_id) || !self.icons.contains_key(&t.icon_id) {
            return Err(DomainError::Conflict(REFERENCE_VIOLATION.into()));
        }
        let id = self.next_id();
        self.tariff_types
            .insert(id, StoredTariffType { id, data: t });
        Ok(())
    }

    async fn remove_tariff_type(&self, id: i32) -> DomainResult<()> {
        self.tariff_types.remove(&id);
        self.tariff_type_tariffs.retain(|(_, tt), _| *tt != id);
        Ok(())
    }

    async fn add_tariff(&self, t: NewTariff) -> DomainResult<()> {
        let id = self.next_id();
        self.tariffs.insert(
            id,
            StoredTariff {
                id,
                data: t.clone(),
            },
        );
        for type_id in &t.type_ids {
            if !self.tariff_types.contains_key(type_id) {
                return Err(DomainError::internal(format!(
                    "unknown tariff-type {}",
                    type_id
                )));
            }
            self.tariff_type_tariffs.insert((id, *type_id), ());
        }
        if !self.cities.contains_key(&t.city_id) {
            return Err(DomainError::internal(format!("unknown city {}", t.city_id)));
        }
        self.city_tariffs.insert((t.city_id, id), ());
        Ok(())
    }

    async fn remove_tariff(&self, id: i32) -> DomainResult<()> {
        self.tariffs.remove(&id);
        self.city_tariffs.retain(|(_, tariff_id), _| *tariff_id != id);
        self.tariff_type_tariffs.retain(|(tariff_id, _), _| *tariff_id != id);
        Ok(())
    }

    async fn add_icon(&self, icon: NewIcon) -> DomainResult<()> {
        let id = self.next_id();
        self.icons.insert(
            id,
            Icon {
                id,
                path: icon.path,
            },
        );
        Ok(())
    }

    async fn remove_icon(&self, id: i32) -> DomainResult<String> {
        if self.tariff_types.iter().any(|tt| tt.data.icon_id == id) {
            return Err(DomainError::Conflict(REFERENCE_VIOLATION.into()));
        }
        self.icons
            .remove(&id)
            .map(|(_, icon)| icon.path)
            .ok_or_else(|| DomainError::not_found("Icon", id))
    }
}

/// Repository provider handing out one shared [`InMemoryCatalog`].
#[derive(Clone, Default)]
pub struct InMemoryRepositoryProvider {
    catalog: Arc<InMemoryCatalog>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn cities(&self) -> Arc<dyn CityRepository> {
        self.catalog.clone()
    }

    fn tariffs(&self) -> Arc<dyn TariffRepository> {
        self.catalog.clone()
    }
}

/// Icon files kept in a map, keyed by stored filename
pub struct InMemoryIconStorage {
    files: DashMap<String, Vec<u8>>,
    public_url: String,
}

impl InMemoryIconStorage {
    pub fn new(public_url: &str) -> Self {
        Self {
            files: DashMap::new(),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl IconStorage for InMemoryIconStorage {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> DomainResult<String> {
        let filename = super::local::unique_filename(original_name);
        self.files.insert(filename.clone(), bytes.to_vec());
        Ok(filename)
    }

    async fn remove(&self, filename: &str) -> DomainResult<()> {
        self.files
            .remove(filename)
            .map(|_| ())
            .ok_or_else(|| DomainError::internal(format!("icon file {} not found", filename)))
    }

    fn public_path(&self, filename: &str) -> String {
        format!("{}/assets/icons/{}", self.public_url, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn icon_in_use_is_conflict() {
        let catalog = InMemoryCatalog::new();
        catalog
            .add_type(NewType {
                name: "TV".into(),
            })
            .await
            .unwrap();
        catalog
            .add_icon(NewIcon {
                path: "http://localhost/assets/icons/tv.png".into(),
            })
            .await
            .unwrap();
        let type_id = catalog.list_types().await.unwrap()[0].id;
        let icon_id = catalog.list_icons().await.unwrap()[0].id;
        catalog
            .add_tariff_type(NewTariffType {
                name: "Basic".into(),
                type_id,
                description: vec![],
                title: String::new(),
                subtitle: String::new(),
                icon_id,
            })
            .await
            .unwrap();

        let err = catalog.remove_icon(icon_id).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict(REFERENCE_VIOLATION.into()));
        assert_eq!(catalog.list_icons().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn removing_tariff_cascades_to_links() {
        let catalog = InMemoryCatalog::new();
        catalog
            .add_city(NewCity {
                name: "Vladimir".into(),
            })
            .await
            .unwrap();
        let city_id = catalog.list_cities().await.unwrap()[0].id;
        catalog
            .add_tariff(NewTariff {
                price: 1.0,
                period_per_pay: "day".into(),
                title: "Day".into(),
                subtitle: String::new(),
                short_description: String::new(),
                type_ids: vec![],
                city_id,
            })
            .await
            .unwrap();
        let tariff_id = catalog.list_tariffs(city_id).await.unwrap()[0].id;

        catalog.remove_tariff(tariff_id).await.unwrap();
        assert!(catalog.list_tariffs(city_id).await.unwrap().is_empty());
        assert!(catalog.city_tariffs.is_empty());
    }

    #[tokio::test]
    async fn missing_file_removal_fails() {
        let storage = InMemoryIconStorage::new("http://localhost");
        let name = storage.save("a.png", b"png").await.unwrap();
        storage.remove(&name).await.unwrap();
        assert!(storage.remove(&name).await.is_err());
    }
}
