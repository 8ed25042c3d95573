#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geo/distance_test.rs"]
mod distance_test;

use crate::models::{Coordinate, NodeId, RoadNetwork};
use crate::utils::{compare_floats, Float, RouteError, RouteResult};
use std::cmp::Ordering;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: Float = 6_371_000.;

/// Calculates great-circle distance in meters between two coordinates using haversine formula.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Float {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let s1 = (d_lat / 2.).sin();
    let s2 = (d_lon / 2.).sin();
    let h = (s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2).clamp(0., 1.);

    2. * EARTH_RADIUS * h.sqrt().asin()
}

/// Calculates geodesic distance between two graph nodes.
pub fn node_distance<G: RoadNetwork + ?Sized>(graph: &G, from: NodeId, to: NodeId) -> RouteResult<Float> {
    let coordinate = |node: NodeId| {
        graph.coordinate(node).ok_or_else(|| RouteError::missing_node_attribute("coordinate", node))
    };

    Ok(haversine_distance(&coordinate(from)?, &coordinate(to)?))
}

/// Returns the graph node closest to the given coordinate, ties are resolved in favor of lower id.
pub fn nearest_node<G: RoadNetwork + ?Sized>(graph: &G, lat: Float, lon: Float) -> Option<NodeId> {
    let point = Coordinate::new(lat, lon);

    graph
        .nodes()
        .filter_map(|node| graph.coordinate(node).map(|coordinate| (node, haversine_distance(&point, &coordinate))))
        .min_by(|(a_node, a_distance), (b_node, b_distance)| match compare_floats(*a_distance, *b_distance) {
            Ordering::Equal => a_node.cmp(b_node),
            order => order,
        })
        .map(|(node, _)| node)
}
