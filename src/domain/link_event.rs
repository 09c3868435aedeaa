use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::domain::utils::id::RouterId;

/// Cost value that requests removal of a link instead of setting a weight.
pub const DELETE_SENTINEL: i64 = -1;

/// The input section a line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Init,
    LinkState,
    Update,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Init => write!(f, "init"),
            Section::LinkState => write!(f, "linkstate"),
            Section::Update => write!(f, "update"),
        }
    }
}

/// A single link mutation read from a `LINKSTATE` or `UPDATE` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEvent {
    pub section: Section,
    pub node1: RouterId,
    pub node2: RouterId,
    pub cost: i64,

    /// Routers whose state is displayed after the event is applied.
    /// Kept as an ordered set so iteration already yields the display order.
    pub affected: BTreeSet<RouterId>,

    /// 1-based line number in the input, for diagnostics.
    pub line: usize,
}

impl LinkEvent {
    pub fn new(section: Section, node1: impl Into<RouterId>, node2: impl Into<RouterId>, cost: i64) -> Self {
        Self { section, node1: node1.into(), node2: node2.into(), cost, affected: BTreeSet::new(), line: 0 }
    }

    pub fn with_affected<I, R>(mut self, routers: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RouterId>,
    {
        self.affected.extend(routers.into_iter().map(Into::into));
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn is_removal(&self) -> bool {
        self.cost == DELETE_SENTINEL
    }
}

impl fmt::Display for LinkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{} {}", self.section, self.node1, self.node2, self.cost)
    }
}
