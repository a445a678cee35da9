//! Route resolution over the segment table.
//!
//! A direct segment wins. Otherwise the first hub reachable from the origin
//! that also links to the destination is chained into a composite route.
//! There is no second hop and no search for the cheapest hub.

use tracing::debug;

use crate::model::{ResolvedRoute, RouteSegment};
use crate::traits::RouteSource;

/// Hours added to composite routes for transloading and rest at the hub.
pub const DEFAULT_TRANSFER_PENALTY_HOURS: f64 = 4.0;

/// Resolve a route with the default transfer penalty.
pub fn resolve_route<S>(source: &S, origin: &str, destination: &str) -> Option<ResolvedRoute>
where
    S: RouteSource,
{
    resolve_route_with_penalty(source, origin, destination, DEFAULT_TRANSFER_PENALTY_HOURS)
}

pub fn resolve_route_with_penalty<S>(
    source: &S,
    origin: &str,
    destination: &str,
    transfer_penalty_hours: f64,
) -> Option<ResolvedRoute>
where
    S: RouteSource,
{
    if origin == destination {
        return None;
    }

    if let Some(direct) = find_direct(source, origin, destination) {
        debug!(%origin, %destination, segment = %direct.id, "direct route");
        return Some(ResolvedRoute {
            segment: direct.clone(),
            hub: None,
        });
    }

    for first_leg in source.segments_touching(origin) {
        let Some(hub) = first_leg.other_end(origin) else {
            continue;
        };
        let Some(second_leg) = find_direct(source, hub, destination) else {
            continue;
        };
        if second_leg.id == first_leg.id {
            continue;
        }
        debug!(%origin, %destination, %hub, "composite route via hub");
        return Some(ResolvedRoute {
            segment: merge_legs(
                origin,
                hub,
                destination,
                first_leg,
                second_leg,
                transfer_penalty_hours,
            ),
            hub: Some(hub.to_string()),
        });
    }

    debug!(%origin, %destination, "no route");
    None
}

/// The segment joining `a` and `b` in either orientation.
pub fn find_direct<'a, S>(source: &'a S, a: &str, b: &str) -> Option<&'a RouteSegment>
where
    S: RouteSource,
{
    source.segments().iter().find(|segment| segment.connects(a, b))
}

fn merge_legs(
    origin: &str,
    hub: &str,
    destination: &str,
    first: &RouteSegment,
    second: &RouteSegment,
    transfer_penalty_hours: f64,
) -> RouteSegment {
    RouteSegment {
        id: format!("{}-{}-{}", origin, hub, destination),
        origin: origin.to_string(),
        destination: destination.to_string(),
        distance: first.distance + second.distance,
        road_condition: first.road_condition.worst(second.road_condition),
        dry_season_time: first.dry_season_time
            + second.dry_season_time
            + transfer_penalty_hours,
        rainy_season_time: first.rainy_season_time
            + second.rainy_season_time
            + transfer_penalty_hours,
        security_level: first.security_level.max(second.security_level),
        checkpoints: first.checkpoints + second.checkpoints,
        notes: Some(format!(
            "Multi-leg route via {}. {} / {}",
            hub,
            first.notes.as_deref().unwrap_or_default(),
            second.notes.as_deref().unwrap_or_default()
        )),
    }
}
