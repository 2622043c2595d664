use crate::modules::bookings::adapters::outbound::stations::StationDirectory;
use crate::modules::bookings::core::station::StationTopology;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStationDirectory {
    stations: RwLock<HashMap<String, StationTopology>>,
    is_offline: bool,
}

impl InMemoryStationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn register(&self, topology: StationTopology) {
        self.stations
            .write()
            .await
            .insert(topology.station_id.clone(), topology);
    }

    /// Grows the station to `total_ports`, appending ports after the last one.
    /// Shrinking a station is refused.
    pub async fn resize_ports(
        &self,
        station_id: &str,
        total_ports: u32,
    ) -> anyhow::Result<StationTopology> {
        let mut guard = self.stations.write().await;
        let topology = guard
            .get_mut(station_id)
            .ok_or_else(|| anyhow::anyhow!("station {station_id} not found"))?;
        if total_ports < topology.total_ports {
            anyhow::bail!(
                "station {station_id} cannot shrink from {} to {total_ports} ports",
                topology.total_ports
            );
        }
        let next = topology.port_ids.iter().max().copied().unwrap_or(0) + 1;
        let added = total_ports - topology.total_ports;
        topology.port_ids.extend(next..next + added);
        topology.total_ports = total_ports;
        Ok(topology.clone())
    }
}

#[async_trait::async_trait]
impl StationDirectory for InMemoryStationDirectory {
    async fn topology(&self, station_id: &str) -> anyhow::Result<Option<StationTopology>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Station directory offline"));
        }
        Ok(self.stations.read().await.get(station_id).cloned())
    }
}
