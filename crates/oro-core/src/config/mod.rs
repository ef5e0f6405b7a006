//! Configuration for the oro models.
//! TOML-based, resolved as: environment (`ORO_*`) > config file > compiled defaults.

pub mod chain_config;
pub mod defaults;
pub mod freshness_config;
pub mod logging_config;
pub mod oro_config;

pub use chain_config::ChainConfig;
pub use freshness_config::{DecayCurve, FreshnessConfig, LabelThresholds};
pub use logging_config::LoggingConfig;
pub use oro_config::{AppliedOverride, OroConfig};
