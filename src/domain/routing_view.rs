use std::fmt;

use crate::domain::shortest_path::{PathCost, ShortestPathResult, compute_shortest_paths};
use crate::domain::topology::TopologyStore;
use crate::domain::utils::id::RouterId;
use crate::error::RoutingError;

/// Canonical form of one undirected link: endpoints ordered by router id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkStateRecord {
    pub lesser: RouterId,
    pub greater: RouterId,
    pub cost: i64,
}

impl fmt::Display for LinkStateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.lesser, self.greater, self.cost)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighbourEntry {
    pub neighbour: RouterId,
    pub cost: i64,
}

/// One row of a router's routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingEntry {
    pub destination: RouterId,
    /// The direct neighbour through which the shortest path to `destination` leaves the router.
    pub first_hop: RouterId,
    /// Total path cost, which may exceed the range of a single link cost.
    pub cost: PathCost,
}

/// Everything displayed for one router after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterReport {
    pub router: RouterId,
    pub neighbours: Vec<NeighbourEntry>,
    pub lsdb: Vec<LinkStateRecord>,
    pub routing_table: Vec<RoutingEntry>,
}

impl RouterReport {
    pub fn empty(router: RouterId) -> Self {
        Self { router, neighbours: Vec::new(), lsdb: Vec::new(), routing_table: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty() && self.lsdb.is_empty() && self.routing_table.is_empty()
    }
}

/// Builds the link-state database: one record per undirected link.
///
/// Each link is seen twice while scanning the adjacency, but only the direction
/// `lesser -> greater` emits a record. Records are ordered by their rendered
/// `lesser|greater|cost` text, so `A|BC|1` sorts before `A|B|2`.
pub fn build_lsdb(topology: &TopologyStore) -> Vec<LinkStateRecord> {
    let mut records: Vec<LinkStateRecord> = topology
        .adjacency_entries()
        .filter(|(router, neighbour, _)| router < neighbour)
        .map(|(router, neighbour, cost)| LinkStateRecord { lesser: router.clone(), greater: neighbour.clone(), cost })
        .collect();

    records.sort_by_cached_key(|record| record.to_string());
    records
}

/// The direct adjacency of `router`, ordered by neighbour id. Empty for unknown routers.
pub fn build_neighbour_table(topology: &TopologyStore, router: &RouterId) -> Vec<NeighbourEntry> {
    topology
        .neighbours(router)
        .map(|neighbours| neighbours.iter().map(|(neighbour, cost)| NeighbourEntry { neighbour: neighbour.clone(), cost: *cost }).collect())
        .unwrap_or_default()
}

/// Walks the predecessor chain backwards from `destination` until the router right after `source`.
///
/// For a direct neighbour whose shortest path is the direct link, the first hop is the destination itself.
/// The walk is bounded by the number of routers in `paths`; a chain that ends or loops before reaching
/// `source` is reported as `RoutingError::BrokenPredecessorChain`.
pub fn first_hop(paths: &ShortestPathResult, destination: &RouterId) -> Result<RouterId, RoutingError> {
    let source = paths.source();
    let broken = || RoutingError::BrokenPredecessorChain { router: source.clone(), destination: destination.clone() };

    let mut hop = destination;
    for _ in 0..paths.len() {
        let predecessor = paths.predecessor(hop).ok_or_else(broken)?;
        if predecessor == source {
            return Ok(hop.clone());
        }
        hop = predecessor;
    }

    Err(broken())
}

/// Computes the routing table of `router`, ordered by destination.
///
/// Unknown routers and routers without neighbours get an empty table.
/// Unreachable destinations are left out.
pub fn build_routing_table(topology: &TopologyStore, router: &RouterId) -> Result<Vec<RoutingEntry>, RoutingError> {
    if !has_links(topology, router) {
        return Ok(Vec::new());
    }

    let paths = compute_shortest_paths(topology, router);
    let mut table = Vec::new();

    for (destination, distance) in paths.reachable() {
        if destination == router {
            continue;
        }

        let first_hop = first_hop(&paths, destination)?;
        table.push(RoutingEntry { destination: destination.clone(), first_hop, cost: distance });
    }

    log::debug!("Routing table of {}: {} of {} routers reachable", router, table.len(), paths.len().saturating_sub(1));
    Ok(table)
}

/// Builds the full report of `router`: neighbour table, LSDB and routing table.
///
/// A router that is unknown or has no neighbours gets three empty blocks, including an empty LSDB.
pub fn build_report(topology: &TopologyStore, router: &RouterId) -> Result<RouterReport, RoutingError> {
    if !has_links(topology, router) {
        log::debug!("Router {} is unknown or isolated, reporting empty tables", router);
        return Ok(RouterReport::empty(router.clone()));
    }

    Ok(RouterReport {
        router: router.clone(),
        neighbours: build_neighbour_table(topology, router),
        lsdb: build_lsdb(topology),
        routing_table: build_routing_table(topology, router)?,
    })
}

fn has_links(topology: &TopologyStore, router: &RouterId) -> bool {
    topology.neighbours(router).is_some_and(|neighbours| !neighbours.is_empty())
}
