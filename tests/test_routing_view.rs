use link_state_sim::domain::routing_view::{RouterReport, build_lsdb, build_neighbour_table, build_report, build_routing_table};
use link_state_sim::domain::topology::TopologyStore;
use link_state_sim::domain::utils::id::RouterId;

fn id(name: &str) -> RouterId {
    RouterId::new(name)
}

fn create_topology(links: &[(&str, &str, i64)]) -> TopologyStore {
    let mut topology = TopologyStore::new();
    for (a, b, cost) in links {
        topology.apply_link(&id(a), &id(b), *cost).unwrap();
    }
    topology
}

fn lsdb_lines(topology: &TopologyStore) -> Vec<String> {
    build_lsdb(topology).iter().map(ToString::to_string).collect()
}

fn routing_lines(topology: &TopologyStore, router: &str) -> Vec<String> {
    build_routing_table(topology, &id(router))
        .unwrap()
        .iter()
        .map(|route| format!("{}|{}|{}", route.destination, route.first_hop, route.cost))
        .collect()
}

#[test]
fn test_three_router_line_scenario() {
    let mut topology = create_topology(&[("A", "B", 3), ("B", "C", 2)]);
    topology.initialize(id("C"));

    assert_eq!(routing_lines(&topology, "A"), vec!["B|B|3", "C|B|5"]);
    assert_eq!(lsdb_lines(&topology), vec!["A|B|3", "B|C|2"]);
}

#[test]
fn test_deleted_link_reroutes_through_remaining_path() {
    let mut topology = create_topology(&[("A", "B", 3), ("A", "C", 1), ("C", "B", 1)]);
    topology.apply_link(&id("A"), &id("B"), -1).unwrap();

    assert_eq!(routing_lines(&topology, "A"), vec!["B|C|2", "C|C|1"]);
}

#[test]
fn test_first_hop_is_resolved_over_long_chains() {
    let topology = create_topology(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "E", 1), ("A", "E", 10)]);

    assert_eq!(routing_lines(&topology, "A"), vec!["B|B|1", "C|B|2", "D|B|3", "E|B|4"]);
    assert_eq!(routing_lines(&topology, "E"), vec!["A|D|4", "B|D|3", "C|D|2", "D|D|1"]);
}

#[test]
fn test_direct_neighbour_routed_elsewhere_when_cheaper() {
    let topology = create_topology(&[("A", "B", 5), ("A", "C", 1), ("B", "C", 1)]);

    assert_eq!(routing_lines(&topology, "A"), vec!["B|C|2", "C|C|1"]);
}

#[test]
fn test_equal_cost_paths_use_smaller_first_hop() {
    let topology = create_topology(&[("S", "M", 1), ("S", "K", 1), ("M", "T", 1), ("K", "T", 1)]);

    assert_eq!(routing_lines(&topology, "S"), vec!["K|K|1", "M|M|1", "T|K|2"]);
}

#[test]
fn test_unreachable_destinations_are_omitted() {
    let mut topology = create_topology(&[("A", "B", 1), ("C", "D", 1)]);
    topology.initialize(id("E"));

    assert_eq!(routing_lines(&topology, "A"), vec!["B|B|1"]);
    assert_eq!(lsdb_lines(&topology), vec!["A|B|1", "C|D|1"], "LSDB is global and includes unreachable links");
}

#[test]
fn test_lsdb_contains_each_link_once() {
    let topology = create_topology(&[("B", "A", 4), ("A", "C", 2), ("C", "B", 9), ("D", "C", 1)]);

    assert_eq!(lsdb_lines(&topology), vec!["A|B|4", "A|C|2", "B|C|9", "C|D|1"]);
}

#[test]
fn test_neighbour_table_is_sorted_by_neighbour() {
    let topology = create_topology(&[("A", "Z", 1), ("A", "M", 2), ("A", "B", 3)]);

    let table: Vec<String> = build_neighbour_table(&topology, &id("A")).iter().map(|n| format!("{}|{}", n.neighbour, n.cost)).collect();

    assert_eq!(table, vec!["B|3", "M|2", "Z|1"]);
    assert!(build_neighbour_table(&topology, &id("Nope")).is_empty());
}

#[test]
fn test_report_of_unknown_router_is_empty() {
    let topology = create_topology(&[("A", "B", 1)]);

    let report = build_report(&topology, &id("Ghost")).unwrap();

    assert_eq!(report, RouterReport::empty(id("Ghost")));
}

#[test]
fn test_report_of_router_whose_links_were_removed_is_empty() {
    let mut topology = create_topology(&[("A", "B", 1), ("B", "C", 1)]);
    topology.apply_link(&id("A"), &id("B"), -1).unwrap();

    let report = build_report(&topology, &id("A")).unwrap();

    assert!(report.is_empty(), "A has no neighbours left, so all three blocks are empty");
}

#[test]
fn test_report_combines_all_three_views() {
    let topology = create_topology(&[("A", "B", 3), ("B", "C", 2)]);

    let report = build_report(&topology, &id("B")).unwrap();

    assert_eq!(report.router, id("B"));
    assert_eq!(report.neighbours.len(), 2);
    assert_eq!(report.lsdb, build_lsdb(&topology));
    assert_eq!(report.routing_table, build_routing_table(&topology, &id("B")).unwrap());
}

#[test]
fn test_routing_table_with_maximum_link_cost() {
    let topology = create_topology(&[("A", "B", i64::MAX), ("B", "C", 1)]);

    assert_eq!(routing_lines(&topology, "A"), vec![format!("B|B|{}", i64::MAX), "C|B|9223372036854775808".to_string()]);
}
