use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use clap::Parser;
use weather_core::{Config, OpenWeatherProvider, provider::openweather::DEFAULT_BASE_URL};

use crate::server;

/// Top-level CLI struct.
///
/// `API_KEY` and `PORT` come from the environment; flags take precedence.
#[derive(Debug, Parser)]
#[command(name = "weather-proxy", version, about = "Weather proxy for OpenWeatherMap")]
pub struct Cli {
    /// Port to listen on. Overrides `PORT`.
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Base URL of the OpenWeatherMap-compatible API.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub upstream: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.resolve(Config::from_env().context("Failed to load configuration")?);

        let provider = OpenWeatherProvider::new(config.api_key.clone())
            .with_base_url(&self.upstream)
            .context("Failed to configure upstream weather API")?;
        let app = server::router(Arc::new(provider));

        server::serve(SocketAddr::new(self.bind, config.port), app).await
    }

    fn resolve(&self, mut config: Config) -> Config {
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}
