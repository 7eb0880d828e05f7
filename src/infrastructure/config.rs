use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub poll: PollSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    /// Base URL of the status API, e.g. "http://127.0.0.1:5000".
    pub base_url: String,
    /// Zone selector: "all" for dual mode, "merah" for the alternate zone,
    /// anything else for the default zone.
    #[serde(default)]
    pub zone: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollSettings {
    #[serde(default = "default_data_interval_secs")]
    pub data_interval_secs: u64,
    #[serde(default = "default_clock_interval_secs")]
    pub clock_interval_secs: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            data_interval_secs: default_data_interval_secs(),
            clock_interval_secs: default_clock_interval_secs(),
        }
    }
}

fn default_data_interval_secs() -> u64 {
    10
}

fn default_clock_interval_secs() -> u64 {
    1
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let parsed: DashboardConfig = toml::from_str(
            r#"
            [server]
            base_url = "http://10.0.0.5:5000"
            zone = "all"

            [poll]
            data_interval_secs = 5
            clock_interval_secs = 2
            "#,
        )
        .unwrap();

        assert_eq!(parsed.server.base_url, "http://10.0.0.5:5000");
        assert_eq!(parsed.server.zone, "all");
        assert_eq!(parsed.poll.data_interval_secs, 5);
        assert_eq!(parsed.poll.clock_interval_secs, 2);
    }

    #[test]
    fn intervals_and_zone_default_when_omitted() {
        let parsed: DashboardConfig = toml::from_str(
            r#"
            [server]
            base_url = "http://localhost:5000"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.server.zone, "");
        assert_eq!(parsed.poll.data_interval_secs, 10);
        assert_eq!(parsed.poll.clock_interval_secs, 1);
    }
}
