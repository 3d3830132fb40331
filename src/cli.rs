//! Command-line interface parsing for the FluidSurveys client
//!
//! Credentials and connection settings are global options; each query the
//! library exposes is a subcommand.

use clap::{Parser, Subcommand};

use crate::data::{SurveysClient, DEFAULT_BASE_URL, DEFAULT_CACHE_TIMEOUT_SECS};

/// FluidSurveys API client - list surveys and fetch survey details
#[derive(Parser, Debug)]
#[command(name = "fluidsurveys")]
#[command(about = "Query the FluidSurveys API")]
#[command(version)]
pub struct Cli {
    /// API key (Basic auth user name)
    #[arg(long, env = "FLUIDSURVEYS_KEY")]
    pub key: String,

    /// API password (Basic auth password)
    #[arg(long, env = "FLUIDSURVEYS_SECRET", hide_env_values = true)]
    pub secret: String,

    /// API root URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds the survey listing is reused before refetching
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_CACHE_TIMEOUT_SECS)]
    pub cache_ttl: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Queries available from the command line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List available surveys
    Surveys,
    /// Show the details of one survey
    Details {
        /// Survey id
        id: String,
    },
    /// Show the details of the first survey with the given name
    Named {
        /// Exact survey name
        name: String,
    },
}

impl Cli {
    /// Builds a client from the parsed connection options
    pub fn client(&self) -> SurveysClient {
        SurveysClient::new(self.key.as_str(), self.secret.as_str())
            .with_base_url(self.base_url.as_str())
            .with_cache_timeout(self.cache_ttl)
    }
}
