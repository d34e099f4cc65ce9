mod config_warnings;

pub use config_warnings::warn_misspelled_env;

use vf_config::VfConfig;
use vf_gateway::Gateway;
use vf_session::Session;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub session: Session<Gateway>,
    pub config: VfConfig,
}

impl AppContext {
    pub fn init(config: VfConfig) -> anyhow::Result<Self> {
        let session = Session::from_config(&config)?;
        Ok(Self { session, config })
    }
}
