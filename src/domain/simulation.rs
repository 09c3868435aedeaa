use serde::Deserialize;

use crate::domain::link_event::{LinkEvent, Section};
use crate::domain::routing_view::{RouterReport, build_report};
use crate::domain::topology::TopologyStore;
use crate::domain::utils::id::RouterId;
use crate::error::Result;

/// What a `LINKSTATE` event with an empty affected list displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyLinkStateDisplay {
    /// No router is displayed.
    #[default]
    Nothing,
    /// Every router currently known to the topology is displayed.
    AllRouters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPolicy {
    pub empty_linkstate: EmptyLinkStateDisplay,
}

/// Receives the reports produced while replaying events.
pub trait ReportSink {
    fn emit(&mut self, report: &RouterReport) -> Result<()>;
}

impl ReportSink for Vec<RouterReport> {
    fn emit(&mut self, report: &RouterReport) -> Result<()> {
        self.push(report.clone());
        Ok(())
    }
}

/// Replays link events against a topology it owns and emits reports for the affected routers.
///
/// Each event is applied and fully reported before the next one is looked at.
#[derive(Debug, Default)]
pub struct Simulation {
    topology: TopologyStore,
    policy: DisplayPolicy,
    events_applied: usize,
    reports_emitted: usize,
}

impl Simulation {
    pub fn new(policy: DisplayPolicy) -> Self {
        Self { topology: TopologyStore::new(), policy, events_applied: 0, reports_emitted: 0 }
    }

    pub fn topology(&self) -> &TopologyStore {
        &self.topology
    }

    pub fn events_applied(&self) -> usize {
        self.events_applied
    }

    pub fn reports_emitted(&self) -> usize {
        self.reports_emitted
    }

    /// Registers the routers listed before the first section marker.
    pub fn seed<I>(&mut self, routers: I)
    where
        I: IntoIterator<Item = RouterId>,
    {
        for router in routers {
            self.topology.initialize(router);
        }
        log::info!("Topology seeded with {} routers", self.topology.router_count());
    }

    /// Applies one event and emits a report for every router it asks to display.
    pub fn apply(&mut self, event: &LinkEvent, sink: &mut dyn ReportSink) -> Result<()> {
        self.topology.apply_link(&event.node1, &event.node2, event.cost).inspect_err(|e| {
            log::error!("Line {}: {}", event.line, e);
        })?;
        self.events_applied += 1;
        log::debug!("Applied event {} (line {})", event, event.line);

        for router in self.routers_to_display(event) {
            let report = build_report(&self.topology, &router)?;
            sink.emit(&report)?;
            self.reports_emitted += 1;
        }

        Ok(())
    }

    /// Applies all events in order, stopping at the first error.
    pub fn replay<'a, I>(&mut self, events: I, sink: &mut dyn ReportSink) -> Result<()>
    where
        I: IntoIterator<Item = &'a LinkEvent>,
    {
        for event in events {
            self.apply(event, sink)?;
        }

        log::info!(
            "Replay finished: {} events applied, {} reports emitted, {} routers and {} links in final topology",
            self.events_applied,
            self.reports_emitted,
            self.topology.router_count(),
            self.topology.link_count()
        );
        Ok(())
    }

    fn routers_to_display(&self, event: &LinkEvent) -> Vec<RouterId> {
        match event.section {
            Section::LinkState if event.affected.is_empty() => match self.policy.empty_linkstate {
                EmptyLinkStateDisplay::Nothing => Vec::new(),
                EmptyLinkStateDisplay::AllRouters => self.topology.routers().cloned().collect(),
            },
            Section::LinkState | Section::Update => event.affected.iter().cloned().collect(),
            Section::Init => Vec::new(),
        }
    }
}
