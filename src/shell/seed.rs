// Optional bootstrap data for the in-memory station and user directories.

use crate::modules::bookings::core::station::StationTopology;
use crate::shell::state::InMemoryDeps;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub stations: Vec<SeedStation>,
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize)]
pub struct SeedStation {
    pub station_id: String,
    pub name: String,
    pub owner_id: String,
    pub total_ports: u32,
}

#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub user_id: String,
    pub display_name: String,
}

pub fn load(path: &Path) -> anyhow::Result<SeedFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
}

pub async fn apply(deps: &InMemoryDeps, seed: SeedFile) {
    let (stations, users) = (seed.stations.len(), seed.users.len());
    for station in seed.stations {
        deps.stations
            .register(StationTopology::new(
                station.station_id,
                station.name,
                station.owner_id,
                station.total_ports,
            ))
            .await;
    }
    for user in seed.users {
        deps.users.register(user.user_id, user.display_name).await;
    }
    tracing::info!(stations, users, "seed applied");
}
