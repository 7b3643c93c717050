use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Runtime knobs for the pipeline. Everything has a default so the tool runs
/// with an empty environment; env vars override for ad-hoc tuning.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for per-listing snapshots and the combined dataset.
    pub output_dir: PathBuf,
    /// Root directory for downloaded photos, one subdirectory per listing.
    pub image_dir: PathBuf,
    /// Fixed delay between listings.
    pub pacing: Duration,
    /// Page-load timeout; exceeding it fails the listing, not the run.
    pub nav_timeout: Duration,
    /// Settle delay after navigation completes.
    pub settle: Duration,
    /// Scroll steps inside the photo gallery to force lazy image loads.
    pub gallery_scroll_steps: u32,
    /// Redirect cap for photo downloads.
    pub max_redirects: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("scrape-results"),
            image_dir: PathBuf::from("images/airbnb"),
            pacing: Duration::from_millis(2000),
            nav_timeout: Duration::from_secs(45),
            settle: Duration::from_millis(3000),
            gallery_scroll_steps: 10,
            max_redirects: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            output_dir: env_path("SCOUT_OUTPUT_DIR", defaults.output_dir),
            image_dir: env_path("SCOUT_IMAGE_DIR", defaults.image_dir),
            pacing: env_ms("SCOUT_PACING_MS", defaults.pacing),
            nav_timeout: env_ms("SCOUT_NAV_TIMEOUT_MS", defaults.nav_timeout),
            settle: env_ms("SCOUT_SETTLE_MS", defaults.settle),
            gallery_scroll_steps: env_value("SCOUT_GALLERY_SCROLLS", defaults.gallery_scroll_steps),
            max_redirects: env_value("SCOUT_MAX_REDIRECTS", defaults.max_redirects),
        }
    }
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or(default)
}

fn env_ms(key: &str, default: Duration) -> Duration {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

fn env_value<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = Config::default();
        assert_eq!(cfg.output_dir, PathBuf::from("scrape-results"));
        assert_eq!(cfg.pacing, Duration::from_secs(2));
        assert_eq!(cfg.max_redirects, 5);
    }
}
