//! Record kinds carried by the outer disk envelope.

pub const USER: &str = "user";
pub const NAVIGATION_PATH: &str = "navigation_path";
pub const PEER_LIST: &str = "peer_list";

/// Storage payload kinds shared by alerts, filters and dispute agents.
pub const ALERT: &str = "alert";
pub const FILTER: &str = "filter";
pub const ARBITRATOR: &str = "arbitrator";
pub const MEDIATOR: &str = "mediator";
