use std::path::Path;
use std::sync::OnceLock;

use config::Config;
use serde::{Deserialize, Serialize};
use transform::MAX_NTT_LEN;

use crate::counter::Method;
use crate::error::TriplesError;

static CONFIG: OnceLock<TriplesConfig> = OnceLock::new();

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TriplesConfig {
    // counter used when `--method` is not given
    pub method: Method,

    // reject characters other than `0`/`1`
    pub strict: bool,

    // longest input the `progression` method accepts, in characters
    pub max_len: usize,

    // fractional digits printed by `spectrum`
    pub precision: usize,
}

impl Default for TriplesConfig {
    fn default() -> Self {
        Self {
            method: Method::Literal,
            strict: false,
            // the self-convolution needs `2n` NTT points
            max_len: MAX_NTT_LEN / 2,
            precision: 6,
        }
    }
}

impl TriplesConfig {
    /// The process-wide configuration, defaults if [`TriplesConfig::init`] was not called.
    pub fn config() -> &'static Self {
        CONFIG.get_or_init(Self::default)
    }

    pub fn init(f: Option<&Path>) -> Result<&'static Self, TriplesError> {
        if let Some(c) = CONFIG.get() {
            log::warn!("configuration already initialized, ignore the new sources");
            return Ok(c);
        }

        let c = Self::load(f)?;
        Ok(CONFIG.get_or_init(|| c))
    }

    /// Layers the defaults, then the file `f`, then `TRIPLES__*` environment variables.
    pub fn load(f: Option<&Path>) -> Result<Self, TriplesError> {
        let cfg_err = |e: config::ConfigError| TriplesError::ConfigFailed(format!("{e}"));

        let default_config = Config::try_from(&TriplesConfig::default()).map_err(cfg_err)?;
        let mut config = Config::builder().add_source(default_config);

        if let Some(f) = f {
            config = config.add_source(config::File::from(f).required(true));
        }

        config = config.add_source(
            config::Environment::with_prefix("TRIPLES")
                .try_parsing(true)
                .separator("__"),
        );

        let mut c: TriplesConfig = config
            .build()
            .map_err(cfg_err)?
            .try_deserialize()
            .map_err(cfg_err)?;

        c.max_len = c.max_len.min(MAX_NTT_LEN / 2);
        log::trace!("{:?}", c);

        Ok(c)
    }
}
