//! Transport hub entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;

/// Kind of transport hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HubKind {
    BusStation,
    Metro,
    TaxiRank,
    FerryTerminal,
    RailStation,
}

impl HubKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HubKind::BusStation => "bus_station",
            HubKind::Metro => "metro",
            HubKind::TaxiRank => "taxi_rank",
            HubKind::FerryTerminal => "ferry_terminal",
            HubKind::RailStation => "rail_station",
        }
    }
}

impl fmt::Display for HubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A station or rank listed in the transport directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportHub {
    pub id: String,
    pub name: String,
    pub kind: HubKind,
    pub address: String,
    pub phone: Option<String>,
    /// Opening hours as displayed, e.g. "05:00 - 00:30"
    pub hours: String,
    /// Line or route names served here
    pub routes: Vec<String>,
    pub tags: Vec<String>,
}

impl Searchable for TransportHub {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.address.as_str()];
        fields.extend(self.routes.iter().map(String::as_str));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}
