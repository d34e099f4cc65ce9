use vf_config::ENV_PREFIX;

/// Config sections that can be set through `VERIFACT_<SECTION>__<KEY>`.
const SECTIONS: &[(&str, &str)] = &[("GATEWAY", "URL"), ("STORAGE", "DATA_DIR")];

/// Emit warnings for env vars that use a single underscore after the section
/// name and are therefore silently ignored.
pub fn warn_misspelled_env() {
    for warning in collect_misspelled_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_misspelled_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    SECTIONS
        .iter()
        .filter(|(section, _)| has_single_underscore_key(&env_keys, section))
        .map(|(section, example)| {
            format!(
                "{ENV_PREFIX}{section}_* env vars are ignored. Use double underscores (example: {ENV_PREFIX}{section}__{example})."
            )
        })
        .collect()
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{ENV_PREFIX}{section}_");
    let double = format!("{ENV_PREFIX}{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
