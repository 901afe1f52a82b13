//! Application services
//!
//! Use-cases over the catalog repositories. Every call runs under the
//! configured deadline and returns the repository's result unchanged.

mod city;
mod deadline;
mod tariff;

pub use city::CityService;
pub use tariff::TariffService;
