//! Vehicle class selection.

use tracing::warn;

use crate::model::{Capability, VehicleType};
use crate::traits::VehicleCatalog;

/// What a shipment needs from a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleRequirements {
    pub refrigeration: bool,
    pub off_road: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSelection<'a> {
    pub vehicle: &'a VehicleType,
    /// No vehicle met every constraint; `vehicle` is the largest in the catalog.
    pub fallback: bool,
}

/// Pick a vehicle for the shipment, falling back to the largest vehicle when
/// nothing qualifies. Returns `None` only for an empty catalog.
pub fn select_vehicle<C>(
    catalog: &C,
    weight_kg: f64,
    requires_refrigeration: bool,
    requires_off_road: bool,
) -> Option<&VehicleType>
where
    C: VehicleCatalog,
{
    let requirements = VehicleRequirements {
        refrigeration: requires_refrigeration,
        off_road: requires_off_road,
    };
    choose_vehicle(catalog, weight_kg, requirements).map(|selection| selection.vehicle)
}

/// Like [`select_vehicle`], but reports whether the fallback was taken.
///
/// Among qualifying vehicles the least over-provisioned wins: fewest
/// capabilities the shipment did not ask for, then smallest capacity, then
/// catalog order.
///
/// Capacity alone is not enough: a 2000 kg dry load on a paved road must get
/// the 3000 kg light truck, not the 2000 kg 4x4 that also fits.
pub fn choose_vehicle<C>(
    catalog: &C,
    weight_kg: f64,
    requirements: VehicleRequirements,
) -> Option<VehicleSelection<'_>>
where
    C: VehicleCatalog,
{
    let vehicles = catalog.vehicles();

    let best = vehicles
        .iter()
        .filter(|vehicle| vehicle_can_carry(vehicle, weight_kg, requirements))
        .min_by(|a, b| {
            unrequested_capabilities(a, requirements)
                .cmp(&unrequested_capabilities(b, requirements))
                .then(a.capacity.total_cmp(&b.capacity))
        });

    if let Some(vehicle) = best {
        return Some(VehicleSelection {
            vehicle,
            fallback: false,
        });
    }

    // First of the largest on ties, matching catalog order.
    let largest = vehicles.iter().reduce(|largest, vehicle| {
        if vehicle.capacity > largest.capacity { vehicle } else { largest }
    })?;

    warn!(
        weight_kg,
        refrigeration = requirements.refrigeration,
        off_road = requirements.off_road,
        vehicle = %largest.id,
        "no vehicle satisfies shipment, using largest"
    );

    Some(VehicleSelection {
        vehicle: largest,
        fallback: true,
    })
}

/// Check if a vehicle meets the weight band and required capabilities.
fn vehicle_can_carry(
    vehicle: &VehicleType,
    weight_kg: f64,
    requirements: VehicleRequirements,
) -> bool {
    let fits = vehicle.capacity >= weight_kg && vehicle.min_weight() <= weight_kg;
    let cold = !requirements.refrigeration || vehicle.is_refrigerated();
    let rough = !requirements.off_road || vehicle.is_off_road();
    fits && cold && rough
}

fn unrequested_capabilities(vehicle: &VehicleType, requirements: VehicleRequirements) -> usize {
    vehicle
        .capabilities
        .iter()
        .filter(|capability| match capability {
            Capability::Refrigerated => !requirements.refrigeration,
            Capability::FourByFour | Capability::OffRoad => !requirements.off_road,
        })
        .count()
}
