use std::env;

use log::*;

const DEFAULT_PT_HOST: &str = "127.0.0.1";
const DEFAULT_PT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_PT_HOST.to_string(), port: DEFAULT_PT_PORT, database_url: String::default() }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("PT_HOST").ok().unwrap_or_else(|| DEFAULT_PT_HOST.into());
        let port = env::var("PT_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid port for PT_PORT. {e} Using the default, {DEFAULT_PT_PORT}, instead.");
                    DEFAULT_PT_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_PT_PORT);
        let database_url = env::var("PT_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ PT_DATABASE_URL is not set. Please set it to the URL for the orders database.");
            String::default()
        });
        Self { host, port, database_url }
    }
}
