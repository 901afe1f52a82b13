//! Tariff domain entities

use serde::{Deserialize, Serialize};

/// One localized description entry of a tariff-type.
///
/// A tariff-type keeps an ordered list of these; the list is persisted as a
/// single serialized value and decoded on read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Description {
    pub title: String,
    pub body: String,
}

/// Classification category for tariff-types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewType {
    pub name: String,
}

/// Uploaded image referenced by tariff-types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub id: i32,
    /// Public URL of the stored image
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIcon {
    pub path: String,
}

/// A tariff feature block, e.g. "Internet 100 Mbit/s".
///
/// `type_name` and `icon_path` are copied from the referenced type and icon
/// when read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffType {
    pub id: i32,
    pub name: String,
    pub type_id: i32,
    pub type_name: String,
    pub description: Vec<Description>,
    pub title: String,
    pub subtitle: String,
    pub icon_id: i32,
    pub icon_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTariffType {
    pub name: String,
    pub type_id: i32,
    pub description: Vec<Description>,
    pub title: String,
    pub subtitle: String,
    pub icon_id: i32,
}

/// Tariff offered in a city, with its tariff-types populated on read.
#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    pub id: i32,
    pub price: f64,
    pub period_per_pay: String,
    pub title: String,
    pub subtitle: String,
    pub short_description: String,
    pub types: Vec<TariffType>,
    /// City the tariff was listed for
    pub city_id: i32,
}

/// Input for creating a tariff together with its links.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTariff {
    pub price: f64,
    pub period_per_pay: String,
    pub title: String,
    pub subtitle: String,
    pub short_description: String,
    /// Ids of the tariff-types to attach
    pub type_ids: Vec<i32>,
    pub city_id: i32,
}
