use crate::config::Config;
use crate::scrapers::types::InteractionOutcome;
use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Close-button aria-labels of the transient overlays the site shows on
/// load (cookie banner, translation prompt, app nudge).
const OVERLAY_CLOSE_LABELS: &[&str] = &["關閉", "Close", "知道了", "確定"];

/// Visible-text predicates (JS expressions over `t`, the button text) that
/// locate the progressive-disclosure controls.
const AMENITIES_BUTTON: &str =
    "t.includes('顯示全部') && (t.includes('設備') || t.toLowerCase().includes('amenities'))";
const GALLERY_BUTTON: &str = "t.includes('顯示所有照片') || t.includes('Show all photos')";

const GALLERY_SCROLL_STEP_PX: u32 = 600;

/// Navigation and interaction controller for the single shared browsing
/// session. One Chrome process, one tab, owned by the runner for the whole
/// batch. CDP round-trips are synchronous; the settle waits between them
/// are the long poles and suspend cooperatively.
pub struct ListingBrowser {
    #[allow(dead_code)]
    browser: Browser,
    tab: Arc<Tab>,
    settle: Duration,
    gallery_scroll_steps: u32,
}

impl ListingBrowser {
    pub fn launch(config: &Config) -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1280, 900)))
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;
        let tab = browser.new_tab()?;
        tab.set_default_timeout(config.nav_timeout);
        tab.set_user_agent(USER_AGENT, Some("zh-TW"), None)?;

        Ok(Self {
            browser,
            tab,
            settle: config.settle,
            gallery_scroll_steps: config.gallery_scroll_steps,
        })
    }

    /// Load a listing page and wait until it settles. Failure here aborts
    /// the listing, not the batch.
    pub async fn open_listing(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        sleep(self.settle).await;
        Ok(())
    }

    /// Current outerHTML of the page, for out-of-browser parsing.
    pub fn capture_html(&self) -> Result<String> {
        let result = self
            .tab
            .evaluate("document.documentElement.outerHTML", false)?;
        let html = result
            .value
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        if html.is_empty() {
            anyhow::bail!("page returned empty HTML");
        }
        Ok(html)
    }

    /// Best-effort dismissal of known transient overlays. Returns how many
    /// were closed; individual failures are swallowed.
    pub async fn dismiss_overlays(&self) -> usize {
        let mut dismissed = 0;
        for label in OVERLAY_CLOSE_LABELS {
            let script = format!(
                r#"(() => {{
                    const btn = document.querySelector('button[aria-label="{label}"]');
                    if (btn) {{ btn.click(); return true; }}
                    return false;
                }})()"#
            );
            match self.eval_bool(&script) {
                Ok(true) => {
                    dismissed += 1;
                    sleep(Duration::from_millis(500)).await;
                }
                Ok(false) => {}
                Err(e) => debug!(label, error = %e, "Overlay dismissal failed"),
            }
        }
        dismissed
    }

    /// Expand the "show all amenities" panel and leave it open for
    /// extraction.
    pub async fn expand_amenities(&self) -> InteractionOutcome {
        self.expand_panel(AMENITIES_BUTTON, Duration::from_millis(2500))
            .await
    }

    /// Expand the photo gallery, then scroll through it to force lazy
    /// images to load.
    pub async fn expand_gallery(&self) -> InteractionOutcome {
        let outcome = self
            .expand_panel(GALLERY_BUTTON, Duration::from_millis(3000))
            .await;
        if outcome.is_applied() {
            self.scroll_gallery().await;
        }
        outcome
    }

    /// Close whatever modal is open so the session is clean for the next
    /// step.
    pub async fn close_dialog(&self) -> InteractionOutcome {
        match self.tab.press_key("Escape") {
            Ok(_) => {
                sleep(Duration::from_millis(500)).await;
                InteractionOutcome::Applied
            }
            Err(e) => {
                debug!(error = %e, "Dialog dismissal failed");
                InteractionOutcome::Failed
            }
        }
    }

    async fn expand_panel(&self, predicate: &str, settle: Duration) -> InteractionOutcome {
        let find = format!(
            r#"(() => {{
                const btn = [...document.querySelectorAll('button')]
                    .find(b => {{ const t = b.textContent || ''; return {predicate}; }});
                if (!btn) return false;
                btn.scrollIntoView({{block: 'center'}});
                return true;
            }})()"#
        );
        match self.eval_bool(&find) {
            Ok(true) => {}
            Ok(false) => return InteractionOutcome::Skipped,
            Err(e) => {
                debug!(error = %e, "Panel control lookup failed");
                return InteractionOutcome::Failed;
            }
        }
        sleep(Duration::from_millis(500)).await;

        let click = format!(
            r#"(() => {{
                const btn = [...document.querySelectorAll('button')]
                    .find(b => {{ const t = b.textContent || ''; return {predicate}; }});
                if (!btn) return false;
                btn.click();
                return true;
            }})()"#
        );
        match self.eval_bool(&click) {
            Ok(true) => {
                sleep(settle).await;
                InteractionOutcome::Applied
            }
            Ok(false) => InteractionOutcome::Skipped,
            Err(e) => {
                debug!(error = %e, "Panel activation failed");
                InteractionOutcome::Failed
            }
        }
    }

    async fn scroll_gallery(&self) {
        let step = format!(
            r#"(() => {{
                const modal = document.querySelector('[role="dialog"]') || document;
                const scrollable = modal.querySelector('[style*="overflow"]');
                if (scrollable) scrollable.scrollBy(0, {GALLERY_SCROLL_STEP_PX});
                else window.scrollBy(0, {GALLERY_SCROLL_STEP_PX});
                return true;
            }})()"#
        );
        for _ in 0..self.gallery_scroll_steps {
            if let Err(e) = self.eval_bool(&step) {
                debug!(error = %e, "Gallery scroll step failed");
                break;
            }
            sleep(Duration::from_millis(600)).await;
        }
    }

    fn eval_bool(&self, script: &str) -> Result<bool> {
        let result = self.tab.evaluate(script, false)?;
        Ok(result.value.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}
