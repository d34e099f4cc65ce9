use anyhow::Context;
use vf_config::VfConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VfConfig> {
    let config = VfConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: VfConfig, flags: &GlobalFlags) -> anyhow::Result<VfConfig> {
    if let Some(url) = &flags.gateway_url {
        config.gateway.url.clone_from(url);
    }
    if let Some(dir) = &flags.data_dir {
        config.storage.data_dir.clone_from(dir);
    }
    config
        .validate()
        .context("invalid command-line override")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use vf_config::VfConfig;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(gateway_url: Option<&str>, data_dir: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            gateway_url: gateway_url.map(str::to_string),
            data_dir: data_dir.map(str::to_string),
        }
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let config = apply_overrides(
            VfConfig::default(),
            &flags(Some("https://classifier.example/api"), Some("/tmp/vf")),
        )
        .expect("overrides should apply");
        assert_eq!(config.gateway.url, "https://classifier.example/api");
        assert_eq!(config.storage.data_dir, "/tmp/vf");
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        let config = apply_overrides(VfConfig::default(), &flags(None, None))
            .expect("defaults are valid");
        assert_eq!(config.gateway.url, VfConfig::default().gateway.url);
    }

    #[test]
    fn invalid_override_url_is_rejected() {
        let err = apply_overrides(VfConfig::default(), &flags(Some("ftp://nope"), None))
            .expect_err("non-http url should fail");
        assert!(format!("{err:#}").contains("gateway.url"));
    }
}
