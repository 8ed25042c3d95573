use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{create_logging_environment, create_test_router};
use crate::models::{Edge, Node, RoadGraph};
use crate::routing::{FallbackConfig, TierConfig};
use crate::storage::{InMemoryStore, StoreKey};

fn create_tiers(fallback_cache: bool, pruned_search: bool, ant_colony: bool) -> RoutingConfig {
    RoutingConfig { tiers: TierConfig { fallback_cache, pruned_search, ant_colony }, ..RoutingConfig::default() }
}

#[test]
fn can_return_direct_route_without_blockage() {
    let graph = create_cycle_graph(5);
    let (router, _) = create_test_router(RoutingConfig::default());

    let route = router.route(&graph, 0, 1, &BlockedSet::default()).unwrap();

    assert_eq!(route, Route { path: vec![0, 1], resolution: Resolution::Direct, blocked: vec![] });
}

#[test]
fn can_return_direct_route_when_blockage_is_off_route() {
    let graph = create_two_routes_graph();
    let (router, _) = create_test_router(RoutingConfig::default());

    let route = router.route(&graph, 0, 3, &create_blocked(&[2])).unwrap();

    assert_eq!(route.path, vec![0, 1, 3]);
    assert_eq!(route.resolution, Resolution::Direct);
    assert_eq!(route.blocked, vec![2]);
}

#[test]
fn can_reroute_with_pruned_search() {
    let graph = create_two_routes_graph();
    let (router, _) = create_test_router(RoutingConfig::default());

    let route = router.route(&graph, 0, 3, &create_blocked(&[1])).unwrap();

    assert_eq!(route.path, vec![0, 2, 3]);
    assert_eq!(route.resolution, Resolution::PrunedSearch);
    assert!(route.is_complete());
}

#[test]
fn can_reroute_with_fallback_cache() {
    let graph = create_two_routes_graph();
    let (router, _) = create_test_router(RoutingConfig::default());

    let cached = router.precompute_fallbacks(&graph, 0, 3, &BlockedSet::default()).unwrap();
    let route = router.route(&graph, 0, 3, &create_blocked(&[1])).unwrap();

    assert_eq!(cached, vec![vec![0, 1, 3], vec![0, 2, 3]]);
    assert_eq!(route.path, vec![0, 2, 3]);
    assert_eq!(route.resolution, Resolution::FallbackCache);
}

#[test]
fn can_reroute_with_ant_colony() {
    let graph = create_two_routes_graph();
    let (router, store) = create_test_router(create_tiers(true, false, true));

    let route = router.route(&graph, 0, 3, &create_blocked(&[1])).unwrap();

    assert_eq!(route.path, vec![0, 2, 3]);
    assert_eq!(route.resolution, Resolution::AntColony);
    assert!(store.contains(&StoreKey::pheromone(0, 3)));
}

#[test]
fn can_keep_prefix_before_blockage() {
    let graph = create_grid_graph(3);
    let (router, _) = create_test_router(RoutingConfig::default());
    let blocked = create_blocked(&[4]);

    let direct = router.route(&graph, 0, 8, &BlockedSet::default()).unwrap();
    let route = router.route(&graph, 0, 8, &blocked).unwrap();

    assert!(route.is_complete());
    assert!(route.reaches(8));
    assert_eq!(route.path.first(), Some(&0));
    assert!(!route.path.iter().any(|node| blocked.contains(node)));
    if let Some(index) = direct.path.iter().position(|node| *node == 4) {
        assert_eq!(route.path[..index], direct.path[..index]);
    }
}

#[test]
fn can_return_degraded_route_when_all_tiers_fail() {
    let graph = create_line_graph(5);
    let (router, _) = create_test_router(RoutingConfig::default());

    let route = router.route(&graph, 0, 4, &create_blocked(&[2])).unwrap();

    assert_eq!(route, Route { path: vec![0, 1], resolution: Resolution::Degraded, blocked: vec![2] });
    assert!(!route.is_complete());
    assert!(!route.reaches(4));
}

#[test]
fn can_return_degraded_route_when_target_is_blocked() {
    let graph = create_line_graph(3);
    let (router, _) = create_test_router(RoutingConfig::default());

    let route = router.route(&graph, 0, 2, &create_blocked(&[2])).unwrap();

    assert_eq!(route.path, vec![0, 1]);
    assert_eq!(route.resolution, Resolution::Degraded);
}

#[test]
fn can_return_empty_degraded_route_when_source_is_blocked() {
    let graph = create_line_graph(3);
    let (router, _) = create_test_router(RoutingConfig::default());

    let route = router.route(&graph, 0, 2, &create_blocked(&[0])).unwrap();

    assert_eq!(route, Route { path: vec![], resolution: Resolution::Degraded, blocked: vec![0] });
}

#[test]
fn can_skip_stale_cached_paths() {
    let graph = create_two_routes_graph();
    let (router, _) = create_test_router(create_tiers(true, false, false));

    router.precompute_fallbacks(&graph, 0, 3, &BlockedSet::default()).unwrap();
    let route = router.route(&graph, 0, 3, &create_blocked(&[1, 2])).unwrap();

    assert_eq!(route.path, vec![0]);
    assert_eq!(route.resolution, Resolution::Degraded);
}

#[test]
fn can_return_degraded_route_when_all_tiers_are_disabled() {
    let graph = create_two_routes_graph();
    let (router, _) = create_test_router(create_tiers(false, false, false));

    let route = router.route(&graph, 0, 3, &create_blocked(&[1])).unwrap();

    assert_eq!(route.path, vec![0]);
    assert_eq!(route.resolution, Resolution::Degraded);
}

#[test]
fn can_fail_when_target_is_unreachable() {
    let graph = create_graph(&[(0, 0., 0.), (1, 0., 0.001), (2, 0., 0.002)], &[(0, 1)]);
    let (router, _) = create_test_router(RoutingConfig::default());

    let result = router.route(&graph, 0, 2, &BlockedSet::default());

    assert_eq!(result, Err(RouteError::Unreachable { from: 0, to: 2 }));
}

#[test]
fn can_propagate_missing_attribute_from_tier() {
    let mut graph = RoadGraph::default();
    graph
        .add_node(Node::new(0, 0., 0.).with_risk(0.))
        .add_node(Node::new(1, 0.0005, 0.002).with_risk(0.))
        .add_node(Node::new(2, 0.003, 0.002))
        .add_node(Node::new(3, 0., 0.004).with_risk(0.));
    [(0, 1), (1, 3), (0, 2), (2, 3)].into_iter().for_each(|(from, to)| {
        graph.add_edge(from, to, Edge::with_congestion(1)).unwrap();
    });
    let (router, _) = create_test_router(create_tiers(false, false, true));

    let result = router.route(&graph, 0, 3, &create_blocked(&[1]));

    assert_eq!(result, Err(RouteError::missing_node_attribute("blockage_risk", 2)));
}

#[test]
fn can_reject_invalid_config() {
    let config = RoutingConfig { fallback: FallbackConfig { k: 0, cutoff: 10 }, ..Default::default() };

    let result = HybridRouter::new(config, Arc::new(InMemoryStore::default()), Arc::new(Environment::default()));

    assert!(result.is_err());
}

#[test]
fn can_log_reroute_decisions() {
    let graph = create_line_graph(5);
    let (environment, messages) = create_logging_environment();
    let router = HybridRouter::new(RoutingConfig::default(), Arc::new(InMemoryStore::default()), environment).unwrap();

    router.route(&graph, 0, 4, &create_blocked(&[2])).unwrap();

    let messages = messages.borrow();
    assert_eq!(messages.first().map(String::as_str), Some("blockage at node 2, rerouting from 1 to 4"));
    assert!(messages.iter().any(|msg| msg.starts_with("FallbackCache failed:")));
    assert!(messages.iter().any(|msg| msg.starts_with("PrunedSearch failed:")));
    assert!(messages.iter().any(|msg| msg.starts_with("AntColony failed:")));
    assert_eq!(messages.last().map(String::as_str), Some("all reroutes failed, returning partial path"));
}

parameterized_test! {can_splice_paths, (prefix, suffix, expected), {
    can_splice_paths_impl(prefix, suffix, expected);
}}

can_splice_paths! {
    case01_simple_join: (vec![0, 1], vec![1, 2, 3], vec![0, 1, 2, 3]),
    case02_empty_prefix: (vec![], vec![0, 2, 3], vec![0, 2, 3]),
    case03_back_to_prefix: (vec![0, 1, 2], vec![2, 1, 5], vec![0, 1, 5]),
    case04_back_to_source: (vec![0, 1], vec![1, 0, 4], vec![0, 4]),
    case05_single_node: (vec![0], vec![0], vec![0]),
}

fn can_splice_paths_impl(prefix: Vec<NodeId>, suffix: Vec<NodeId>, expected: Vec<NodeId>) {
    assert_eq!(splice(prefix.as_slice(), suffix.as_slice()), expected);
}
