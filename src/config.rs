use lazy_static::lazy_static;
use std::env;

// Process-wide settings, read once from the environment
pub struct Config {
    pub server_address: String, // SERVER_ADDRESS, host:port to bind
    pub probe_address: String,  // MOUSER_PROBE_ADDR, used only to learn the outbound interface
    pub verbose: bool,          // MOUSER_VERBOSE
}

impl Config {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            server_address: lookup("SERVER_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            probe_address: lookup("MOUSER_PROBE_ADDR").unwrap_or_else(|| "8.8.8.8:80".to_string()),
            verbose: lookup("MOUSER_VERBOSE")
                .map(|v| !matches!(v.as_str(), "" | "0" | "false"))
                .unwrap_or(false),
        }
    }

    pub fn port(&self) -> &str {
        self.server_address
            .rsplit_once(':')
            .map(|(_, port)| port)
            .unwrap_or("8080")
    }
}

lazy_static! {
    pub static ref CONFIG: Config = Config::from_lookup(|key| env::var(key).ok());
}
