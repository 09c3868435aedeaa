/*
 * The routing core: the topology graph, shortest paths over it, the per-router
 * views derived from those paths, and the driver that replays link events.
 */

pub mod link_event;
pub mod routing_view;
pub mod shortest_path;
pub mod simulation;
pub mod topology;
pub mod utils;
