use std::io::BufRead;

use crate::domain::link_event::{LinkEvent, Section};
use crate::domain::utils::id::RouterId;
use crate::error::{Error, Result};

const LINKSTATE_MARKER: &str = "LINKSTATE";
const UPDATE_MARKER: &str = "UPDATE";
const END_MARKER: &str = "END";

/// The parsed content of a network description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInput {
    /// Routers listed before the first section marker, in input order.
    pub initial_routers: Vec<RouterId>,
    /// Link events from the `LINKSTATE` and `UPDATE` sections, in input order.
    pub events: Vec<LinkEvent>,
}

/// Reads a network description line by line.
///
/// Format:
/// ```text
/// X                  <- routers seeded before any marker
/// LINKSTATE
/// X-Y 2 X,Y          <- endpoints, cost, optional routers to display
/// UPDATE
/// X-Y -1 Y           <- cost -1 removes the link
/// END
/// ```
/// Lines are trimmed and blank lines are skipped. Reading stops at `END`; anything after it is ignored.
pub fn parse_network_input<R: BufRead>(reader: R) -> Result<NetworkInput> {
    let mut input = NetworkInput::default();
    let mut section = Section::Init;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            LINKSTATE_MARKER => section = Section::LinkState,
            UPDATE_MARKER => section = Section::Update,
            END_MARKER => break,
            _ => match section {
                Section::Init => input.initial_routers.push(RouterId::new(line)),
                Section::LinkState | Section::Update => input.events.push(parse_link_line(line, section, line_number)?),
            },
        }
    }

    log::info!("Parsed {} initial routers and {} link events", input.initial_routers.len(), input.events.len());
    Ok(input)
}

pub fn parse_network_str(input: &str) -> Result<NetworkInput> {
    parse_network_input(input.as_bytes())
}

/// Parses `A-B COST [R1,R2,...]`.
fn parse_link_line(line: &str, section: Section, line_number: usize) -> Result<LinkEvent> {
    let parse_error = |reason: String| Error::InputParseError { line: line_number, reason };

    let mut tokens = line.split_whitespace();

    let endpoints = tokens.next().ok_or_else(|| parse_error("missing link endpoints".to_string()))?;
    let (node1, node2) = endpoints
        .split_once('-')
        .filter(|(node1, node2)| !node1.is_empty() && !node2.is_empty() && !node2.contains('-'))
        .ok_or_else(|| parse_error(format!("expected two endpoints joined by '-', found '{}'", endpoints)))?;

    let cost_token = tokens.next().ok_or_else(|| parse_error(format!("missing cost for link {}", endpoints)))?;
    let cost: i64 = cost_token.parse().map_err(|_| parse_error(format!("invalid cost '{}'", cost_token)))?;

    let affected = match tokens.next() {
        Some(list) => parse_router_list(list).ok_or_else(|| parse_error(format!("empty router name in list '{}'", list)))?,
        None => Vec::new(),
    };

    if let Some(extra) = tokens.next() {
        return Err(parse_error(format!("unexpected trailing token '{}'", extra)));
    }

    Ok(LinkEvent::new(section, node1, node2, cost).with_affected(affected).at_line(line_number))
}

fn parse_router_list(list: &str) -> Option<Vec<RouterId>> {
    list.split(',').map(|name| (!name.is_empty()).then(|| RouterId::new(name))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_line_with_affected_routers() {
        let event = parse_link_line("X-Y 7 Y,X,Y", Section::Update, 3).unwrap();

        assert_eq!(event.node1, RouterId::new("X"));
        assert_eq!(event.node2, RouterId::new("Y"));
        assert_eq!(event.cost, 7);
        assert_eq!(event.line, 3);
        let affected: Vec<&str> = event.affected.iter().map(|r| r.as_str()).collect();
        assert_eq!(affected, vec!["X", "Y"], "Affected routers should be sorted and deduplicated");
    }

    #[test]
    fn test_parse_link_line_rejects_bad_endpoints() {
        for line in ["XY 1", "-Y 1", "X- 1", "X-Y-Z 1"] {
            let err = parse_link_line(line, Section::LinkState, 1).unwrap_err();
            assert!(matches!(err, Error::InputParseError { line: 1, .. }), "'{}' should be rejected, got {:?}", line, err);
        }
    }

    #[test]
    fn test_parse_router_list_rejects_empty_names() {
        assert_eq!(parse_router_list("A,,B"), None);
        assert_eq!(parse_router_list("A,B"), Some(vec![RouterId::new("A"), RouterId::new("B")]));
    }
}
