use crate::modules::bookings::core::station::StationTopology;

pub fn single_port_station() -> StationTopology {
    StationTopology::new("st-fixed-0001", "Fixed Depot", "owner-fixed-0001", 1)
}

pub fn four_port_station() -> StationTopology {
    StationTopology::new("st-fixed-0001", "Fixed Depot", "owner-fixed-0001", 4)
}
