use std::collections::BTreeMap;

use crate::domain::link_event::DELETE_SENTINEL;
use crate::domain::utils::id::RouterId;
use crate::error::TopologyError;

/// Models the undirected, weighted router graph of the simulated network.
///
/// The `TopologyStore` is the only owner of the adjacency data. It guarantees:
/// * **Symmetry**: a link `A-B` is always present in both `A`'s and `B`'s neighbour map with the same cost.
/// * **Stable membership**: once a router is known it stays known, even after all of its links are removed.
///
/// Neighbour maps are ordered by router id, so every traversal over the store is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyStore {
    /// Maps each router to its direct neighbours and the cost of the connecting link.
    adjacency: BTreeMap<RouterId, BTreeMap<RouterId, i64>>,
}

impl TopologyStore {
    pub fn new() -> Self {
        Self { adjacency: BTreeMap::new() }
    }

    /// Registers `router` without any links. Does nothing if the router is already known.
    pub fn initialize(&mut self, router: RouterId) {
        self.adjacency.entry(router).or_default();
    }

    /// Applies a link event to the graph.
    ///
    /// A cost of [`DELETE_SENTINEL`] removes the link between both routers (in both directions)
    /// and leaves the routers themselves in place; removing a link that does not exist is a no-op.
    /// Any other non-negative cost creates the routers if necessary and sets the cost in both directions.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NegativeCost` for any other negative cost. The store is left unchanged.
    pub fn apply_link(&mut self, node1: &RouterId, node2: &RouterId, cost: i64) -> Result<(), TopologyError> {
        if cost == DELETE_SENTINEL {
            self.remove_link(node1, node2);
            return Ok(());
        }

        if cost < 0 {
            return Err(TopologyError::NegativeCost { node1: node1.clone(), node2: node2.clone(), cost });
        }

        self.adjacency.entry(node1.clone()).or_default().insert(node2.clone(), cost);
        self.adjacency.entry(node2.clone()).or_default().insert(node1.clone(), cost);

        log::debug!("Link {}-{} set to cost {}", node1, node2, cost);
        Ok(())
    }

    fn remove_link(&mut self, node1: &RouterId, node2: &RouterId) {
        let mut removed = false;

        if let Some(neighbours) = self.adjacency.get_mut(node1) {
            removed |= neighbours.remove(node2).is_some();
        }

        if let Some(neighbours) = self.adjacency.get_mut(node2) {
            removed |= neighbours.remove(node1).is_some();
        }

        if removed {
            log::debug!("Link {}-{} removed", node1, node2);
        } else {
            log::debug!("Link {}-{} does not exist, nothing to remove", node1, node2);
        }
    }

    pub fn contains(&self, router: &RouterId) -> bool {
        self.adjacency.contains_key(router)
    }

    /// The direct neighbours of `router`, or `None` if the router is unknown.
    pub fn neighbours(&self, router: &RouterId) -> Option<&BTreeMap<RouterId, i64>> {
        self.adjacency.get(router)
    }

    /// Cost of the link between `node1` and `node2`, if such a link exists.
    pub fn cost(&self, node1: &RouterId, node2: &RouterId) -> Option<i64> {
        self.adjacency.get(node1).and_then(|neighbours| neighbours.get(node2)).copied()
    }

    /// All known routers in ascending id order.
    pub fn routers(&self) -> impl Iterator<Item = &RouterId> {
        self.adjacency.keys()
    }

    /// Every adjacency entry as `(router, neighbour, cost)`. Each undirected link appears twice.
    pub fn adjacency_entries(&self) -> impl Iterator<Item = (&RouterId, &RouterId, i64)> {
        self.adjacency
            .iter()
            .flat_map(|(router, neighbours)| neighbours.iter().map(move |(neighbour, cost)| (router, neighbour, *cost)))
    }

    pub fn router_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> RouterId {
        RouterId::new(name)
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut topology = TopologyStore::new();
        topology.initialize(id("X"));
        topology.apply_link(&id("X"), &id("Y"), 4).unwrap();
        topology.initialize(id("X"));

        assert_eq!(topology.router_count(), 2);
        assert_eq!(topology.cost(&id("X"), &id("Y")), Some(4), "Re-initializing must not drop existing links");
    }

    #[test]
    fn test_negative_cost_leaves_store_untouched() {
        let mut topology = TopologyStore::new();
        topology.apply_link(&id("A"), &id("B"), 1).unwrap();
        let before = topology.clone();

        let err = topology.apply_link(&id("A"), &id("C"), -5).unwrap_err();

        assert_eq!(err, TopologyError::NegativeCost { node1: id("A"), node2: id("C"), cost: -5 });
        assert_eq!(topology, before);
    }

    #[test]
    fn test_link_count_counts_undirected_links_once() {
        let mut topology = TopologyStore::new();
        topology.apply_link(&id("A"), &id("B"), 1).unwrap();
        topology.apply_link(&id("B"), &id("C"), 1).unwrap();
        topology.apply_link(&id("B"), &id("A"), 7).unwrap();

        assert_eq!(topology.link_count(), 2);
        assert_eq!(topology.adjacency_entries().count(), 4);
    }
}
