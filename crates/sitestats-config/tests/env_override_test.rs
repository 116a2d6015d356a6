// Environment overrides layered over the config file.
//
// Kept in its own test binary: `Jail` sets process-wide environment
// variables that would leak into default-config tests running alongside.

use std::path::Path;
use std::time::Duration;

use figment::Jail;
use pretty_assertions::assert_eq;

use sitestats_config::load_config_from;
use sitestats_core::{CachePolicyKind, LabelId, LabelProvider, StoreSettings};

#[test]
fn env_vars_override_file_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
            [defaults]
            refresh = "refresh_only"
            cache_ttl_secs = 60
            max_groups = 3

            [labels]
            stats_insights_view_more = "See all"
            "#,
        )?;
        jail.set_env("SITESTATS_DEFAULTS__MAX_GROUPS", 11);
        jail.set_env("SITESTATS_DEFAULTS__REFRESH", "always");
        jail.set_env("SITESTATS_LABELS__STATS_INSIGHTS_VIEW_MORE", "Everything");

        let config = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;

        assert_eq!(config.cache_policy(), CachePolicyKind::Always);
        assert_eq!(
            config.store_settings().map_err(|e| e.to_string())?,
            StoreSettings {
                ttl: Duration::from_secs(60),
                max_groups: 11,
            }
        );
        assert_eq!(
            config.catalog().render(LabelId::StatsInsightsViewMore, &[]),
            "Everything"
        );
        Ok(())
    });
}

#[test]
fn env_vars_apply_without_a_file() {
    Jail::expect_with(|jail| {
        jail.set_env("SITESTATS_DEFAULTS__CACHE_TTL_SECS", 5);

        let config = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;

        assert_eq!(config.defaults.cache_ttl_secs, 5);
        assert_eq!(config.defaults.max_groups, 6);
        assert_eq!(config.cache_policy(), CachePolicyKind::RefreshOnly);
        Ok(())
    });
}
