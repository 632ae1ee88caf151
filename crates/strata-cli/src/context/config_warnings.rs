use strata_config::StrataConfig;

/// Warn about `STRATA_SITE*` variables that look mistyped and left the site
/// origin unset.
pub fn warn_unconfigured(config: &StrataConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &StrataConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();
    let site_keys = env
        .into_iter()
        .any(|(key, _)| key.starts_with("STRATA_SITE") && !key.starts_with("STRATA_SITE__"));

    if !config.site.is_configured() && site_keys {
        warnings.push(
            "Site origin is unset while STRATA_SITE* env vars exist. Use double underscores (example: STRATA_SITE__ORIGIN_LAT)."
                .to_string(),
        );
    }

    warnings
}
