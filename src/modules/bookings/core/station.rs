use crate::modules::bookings::core::actor::Actor;
use serde::{Deserialize, Serialize};

/// Port layout and ownership of a station, as published by the station service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationTopology {
    pub station_id: String,
    pub name: String,
    pub owner_id: String,
    pub port_ids: Vec<u32>,
    pub total_ports: u32,
}

impl StationTopology {
    /// Ports are numbered `1..=total_ports`.
    pub fn new(
        station_id: impl Into<String>,
        name: impl Into<String>,
        owner_id: impl Into<String>,
        total_ports: u32,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            name: name.into(),
            owner_id: owner_id.into(),
            port_ids: (1..=total_ports).collect(),
            total_ports,
        }
    }

    pub fn has_port(&self, port_id: u32) -> bool {
        self.port_ids.contains(&port_id)
    }

    pub fn is_managed_by(&self, actor: &Actor) -> bool {
        actor.is_admin() || actor.is(&self.owner_id)
    }
}
