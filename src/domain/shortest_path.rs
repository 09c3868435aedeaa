use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::domain::topology::TopologyStore;
use crate::domain::utils::id::RouterId;

/// Sum of link costs along a path.
///
/// Link costs are `i64`; path sums are widened so that no chain of valid links can overflow.
pub type PathCost = i128;

/// Distance and predecessor of one router, as seen from the source of a [`ShortestPathResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct PathEntry {
    /// `None` while the router is unreachable.
    distance: Option<PathCost>,
    /// The router preceding this one on the chosen shortest path. `None` for the source and unreachable routers.
    predecessor: Option<RouterId>,
}

impl PathEntry {
    fn unreachable() -> Self {
        Self { distance: None, predecessor: None }
    }
}

/// Single-source shortest paths over a snapshot of the topology.
///
/// The result holds an entry for every router known to the topology at computation time.
/// It is a transient value; it is never updated when the topology changes.
#[derive(Debug, Clone)]
pub struct ShortestPathResult {
    source: RouterId,
    entries: BTreeMap<RouterId, PathEntry>,
}

impl ShortestPathResult {
    pub fn source(&self) -> &RouterId {
        &self.source
    }

    pub fn distance(&self, router: &RouterId) -> Option<PathCost> {
        self.entries.get(router).and_then(|entry| entry.distance)
    }

    pub fn predecessor(&self, router: &RouterId) -> Option<&RouterId> {
        self.entries.get(router).and_then(|entry| entry.predecessor.as_ref())
    }

    /// All routers with a finite distance (source included), in ascending id order.
    pub fn reachable(&self) -> impl Iterator<Item = (&RouterId, PathCost)> {
        self.entries.iter().filter_map(|(router, entry)| entry.distance.map(|distance| (router, distance)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs Dijkstra's algorithm from `source`.
///
/// ### Algorithm Logic
/// 1. Every known router starts unreachable; the source starts at distance `0`.
/// 2. A min-heap keyed by `(distance, router id)` yields the next router to settle.
///    On equal distances the lexicographically smaller router id is settled first, which
///    decides the winning predecessor whenever several equal-cost shortest paths exist.
/// 3. Heap entries whose distance is larger than the best known distance are stale and skipped
///    (lazy deletion instead of decrease-key).
/// 4. Neighbours are relaxed with a strict `<`, so the first settled predecessor keeps its place on ties.
///    A candidate distance that does not fit into [`PathCost`] is never an improvement.
///
/// A source that is not part of the topology yields a result in which only the source itself is reachable.
pub fn compute_shortest_paths(topology: &TopologyStore, source: &RouterId) -> ShortestPathResult {
    let mut entries: BTreeMap<RouterId, PathEntry> = topology.routers().map(|router| (router.clone(), PathEntry::unreachable())).collect();
    entries.insert(source.clone(), PathEntry { distance: Some(0), predecessor: None });

    let mut queue: BinaryHeap<Reverse<(PathCost, RouterId)>> = BinaryHeap::new();
    queue.push(Reverse((0, source.clone())));

    while let Some(Reverse((current_distance, current))) = queue.pop() {
        let best_known = entries.get(&current).and_then(|entry| entry.distance);
        if best_known.is_some_and(|best| current_distance > best) {
            log::trace!("Skipping stale queue entry ({}, {})", current_distance, current);
            continue;
        }

        let Some(neighbours) = topology.neighbours(&current) else {
            continue;
        };

        for (neighbour, weight) in neighbours {
            let Some(candidate) = current_distance.checked_add(PathCost::from(*weight)) else {
                log::warn!("Path cost to {} via {} overflows, ignoring", neighbour, current);
                continue;
            };
            let entry = entries.entry(neighbour.clone()).or_insert_with(PathEntry::unreachable);

            if entry.distance.is_none_or(|distance| candidate < distance) {
                log::trace!("Relaxed {} via {}: distance {}", neighbour, current, candidate);
                entry.distance = Some(candidate);
                entry.predecessor = Some(current.clone());
                queue.push(Reverse((candidate, neighbour.clone())));
            }
        }
    }

    ShortestPathResult { source: source.clone(), entries }
}
