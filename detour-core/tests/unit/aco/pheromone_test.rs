use super::*;
use crate::helpers::models::create_cycle_graph;

#[test]
fn can_create_uniform_map() {
    let map = PheromoneMap::uniform(&create_cycle_graph(4), 2.);

    assert_eq!(map.len(), 4);
    assert_eq!(map.get(0, 1), Some(2.));
    assert_eq!(map.get(1, 0), Some(2.));
    assert_eq!(map.get(3, 0), Some(2.));
    assert_eq!(map.get(0, 2), None);
}

parameterized_test! {can_evaporate_without_going_negative, (decay, expected), {
    can_evaporate_without_going_negative_impl(decay, expected);
}}

can_evaporate_without_going_negative! {
    case01_no_decay: (0., 2.),
    case02_half: (0.5, 1.),
    case03_almost_all: (0.75, 0.5),
    case04_above_range: (1.5, 0.),
    case05_below_range: (-1., 2.),
}

fn can_evaporate_without_going_negative_impl(decay: Float, expected: Float) {
    let mut map = PheromoneMap::uniform(&create_cycle_graph(3), 2.);

    map.evaporate(decay);

    assert!(map.iter().all(|(_, weight)| weight == expected));
}

#[test]
fn can_deposit_on_path_edges() {
    let mut map = PheromoneMap::uniform(&create_cycle_graph(4), 1.);

    map.deposit(&[0, 1, 2], 0.5);
    map.deposit(&[2, 1], 0.25);

    assert_eq!(map.get(0, 1), Some(1.5));
    assert_eq!(map.get(1, 2), Some(1.75));
    assert_eq!(map.get(2, 3), Some(1.));
}

#[test]
fn can_start_unknown_edge_from_zero() {
    let mut map = PheromoneMap::default();

    map.deposit(&[7, 3], 0.5);
    map.deposit(&[3, 9], -1.);

    assert_eq!(map.get(3, 7), Some(0.5));
    assert_eq!(map.get(3, 9), Some(0.));
}

#[test]
fn can_clamp_negative_weights_on_collect() {
    let map = [(EdgeKey::new(1, 2), -3.), (EdgeKey::new(2, 3), 4.)].into_iter().collect::<PheromoneMap>();

    assert_eq!(map.get(1, 2), Some(0.));
    assert_eq!(map.get(3, 2), Some(4.));
    assert!(!map.is_empty());
}
