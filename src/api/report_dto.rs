use serde::Serialize;

use crate::domain::routing_view::RouterReport;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterReportDto {
    pub router: String,
    pub neighbours: Vec<NeighbourDto>,
    pub lsdb: Vec<LinkStateDto>,
    pub routing_table: Vec<RouteDto>,
}

#[derive(Debug, Serialize)]
pub struct NeighbourDto {
    pub neighbour: String,
    pub cost: i64,
}

#[derive(Debug, Serialize)]
pub struct LinkStateDto {
    pub lesser: String,
    pub greater: String,
    pub cost: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub destination: String,
    pub first_hop: String,
    pub cost: i128,
}

impl From<&RouterReport> for RouterReportDto {
    fn from(report: &RouterReport) -> Self {
        RouterReportDto {
            router: report.router.to_string(),
            neighbours: report.neighbours.iter().map(|n| NeighbourDto { neighbour: n.neighbour.to_string(), cost: n.cost }).collect(),
            lsdb: report
                .lsdb
                .iter()
                .map(|record| LinkStateDto { lesser: record.lesser.to_string(), greater: record.greater.to_string(), cost: record.cost })
                .collect(),
            routing_table: report
                .routing_table
                .iter()
                .map(|route| RouteDto { destination: route.destination.to_string(), first_hop: route.first_hop.to_string(), cost: route.cost })
                .collect(),
        }
    }
}
