//! Lookup seams between the engine and its reference tables.
//!
//! The resolver, selector and calculator only see these traits. The
//! in-memory [`ReferenceData`](crate::reference::ReferenceData) store
//! implements all of them; tests can supply smaller tables.

use time::Date;

use crate::model::{CargoType, City, CostFactors, RouteSegment, VehicleType};

/// Provides the recorded route segments.
pub trait RouteSource {
    /// All segments, in table order. Resolution tie-breaks follow this order.
    fn segments(&self) -> &[RouteSegment];

    /// Segments with `city` at either end, in table order.
    fn segments_touching<'a>(
        &'a self,
        city: &'a str,
    ) -> impl Iterator<Item = &'a RouteSegment> + 'a {
        self.segments().iter().filter(move |segment| segment.touches(city))
    }
}

/// Provides the vehicle classes available for dispatch.
pub trait VehicleCatalog {
    /// All vehicles, in catalog order.
    fn vehicles(&self) -> &[VehicleType];
}

pub trait CargoCatalog {
    fn cargo(&self, id: &str) -> Option<&CargoType>;
}

pub trait CityDirectory {
    fn city(&self, id: &str) -> Option<&City>;
}

/// Provides pricing inputs by effective date.
pub trait CostFactorSource {
    /// The factor set with the latest effective date.
    fn current_factors(&self) -> &CostFactors;

    /// The latest factor set effective on or before `date`, falling back to
    /// the current set when `date` precedes all history.
    fn factors_for(&self, date: Date) -> &CostFactors;
}
