//! City domain entities

/// A city tariffs can be offered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i32,
    pub name: String,
}

/// Input for creating a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    pub name: String,
}

/// Link between a city and a tariff offered there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CityTariff {
    pub city_id: i32,
    pub tariff_id: i32,
}
