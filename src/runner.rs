use crate::config::Config;
use crate::models::{Listing, ListingRecord};
use crate::scrapers::{extract, InteractionOutcome, ListingBrowser, PageSnapshot, PhotoFetcher};
use crate::storage;
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Drives the per-listing pipeline over a slice of the catalog. Owns the
/// shared browsing session and the photo fetcher for the whole batch; no
/// other component touches them.
pub struct Runner {
    browser: ListingBrowser,
    fetcher: PhotoFetcher,
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Result<Self> {
        let browser = ListingBrowser::launch(&config)?;
        let fetcher = PhotoFetcher::new(&config.image_dir, config.max_redirects)?;
        Ok(Self {
            browser,
            fetcher,
            config,
        })
    }

    /// Process catalog indices `[start, end)` in order, one listing at a
    /// time. A listing's failure is logged and the batch moves on; after
    /// the loop the whole batch is upserted into the combined dataset.
    pub async fn run(&self, catalog: &[Listing], start: usize, end: usize) -> Result<RunReport> {
        let (start, end) = clamp_range(start, end, catalog.len());
        let mut batch = Vec::new();
        let mut failed = 0;

        for idx in start..end {
            let listing = &catalog[idx];
            info!(
                "[{}/{}] Scraping {} ({})",
                idx + 1,
                catalog.len(),
                listing.label,
                listing.external_id
            );

            match self.scrape_listing(listing).await {
                Ok(record) => {
                    storage::write_listing(&self.config.output_dir, &record).await?;
                    batch.push(record);
                }
                Err(e) => {
                    warn!(listing = %listing.external_id, error = %e, "Listing failed, moving on");
                    failed += 1;
                }
            }

            // politeness pause toward the source site
            if idx + 1 < end {
                tokio::time::sleep(self.config.pacing).await;
            }
        }

        let total = storage::upsert_records(&self.config.output_dir, &batch).await?;
        info!("Combined dataset now holds {} listings", total);

        Ok(RunReport {
            succeeded: batch.len(),
            failed,
        })
    }

    async fn scrape_listing(&self, listing: &Listing) -> Result<ListingRecord> {
        self.browser
            .open_listing(&listing.source_url)
            .await
            .context("Failed to load listing page")?;

        let dismissed = self.browser.dismiss_overlays().await;
        if dismissed > 0 {
            debug!(dismissed, "Closed overlay dialogs");
        }

        let html = self.browser.capture_html()?;
        let mut snapshot = PageSnapshot::extract(&html);

        match self.browser.expand_amenities().await {
            InteractionOutcome::Applied => {
                if let Ok(modal_html) = self.browser.capture_html() {
                    let modal = extract::modal_amenities(&modal_html);
                    if modal.len() > snapshot.amenities.len() {
                        snapshot.amenities = modal;
                    }
                }
                self.browser.close_dialog().await;
            }
            outcome => debug!(?outcome, "Amenities panel not expanded"),
        }

        match self.browser.expand_gallery().await {
            InteractionOutcome::Applied => {
                if let Ok(gallery_html) = self.browser.capture_html() {
                    let gallery = extract::collect_photos(&gallery_html);
                    if gallery.len() > snapshot.photos.len() {
                        snapshot.photos = gallery;
                    }
                }
                self.browser.close_dialog().await;
            }
            outcome => debug!(?outcome, "Photo gallery not expanded"),
        }

        let local_photos = self
            .fetcher
            .fetch_all(&listing.external_id, &snapshot.photos)
            .await?;

        info!(
            "  {} amenities, {} photos ({} on disk)",
            snapshot.amenities.len(),
            snapshot.photos.len(),
            local_photos.len()
        );

        Ok(assemble_record(listing, snapshot, local_photos))
    }
}

/// Clamp a requested inclusive-exclusive range to the catalog bounds.
pub(crate) fn clamp_range(start: usize, end: usize, len: usize) -> (usize, usize) {
    let end = end.min(len);
    let start = start.min(end);
    (start, end)
}

fn assemble_record(
    listing: &Listing,
    snapshot: PageSnapshot,
    local_photos: Vec<String>,
) -> ListingRecord {
    ListingRecord {
        label: listing.label.clone(),
        catalog_name: listing.catalog_name.clone(),
        external_id: listing.external_id.clone(),
        source_url: listing.source_url.clone(),
        title: snapshot.title,
        rating: snapshot.rating,
        review_count: snapshot.review_count,
        guest_capacity: snapshot.guest_capacity,
        bedroom_count: snapshot.bedroom_count,
        bed_count: snapshot.bed_count,
        bathroom_count: snapshot.bathroom_count,
        property_type: snapshot.property_type,
        check_in_rule: snapshot.check_in_rule,
        check_out_rule: snapshot.check_out_rule,
        description: snapshot.description,
        amenities: snapshot.amenities,
        photos: snapshot.photos,
        local_photos,
        scraped_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_clamped_to_catalog_bounds() {
        assert_eq!(clamp_range(2, 5, 10), (2, 5));
        assert_eq!(clamp_range(0, 99, 10), (0, 10));
        assert_eq!(clamp_range(8, 3, 10), (3, 3));
        assert_eq!(clamp_range(5, 5, 10), (5, 5));
        assert_eq!(clamp_range(0, 0, 0), (0, 0));
    }

    #[test]
    fn requested_slice_yields_exactly_those_indices() {
        let (start, end) = clamp_range(2, 5, 10);
        let indices: Vec<usize> = (start..end).collect();
        assert_eq!(indices, vec![2, 3, 4]);
    }

    #[test]
    fn assembled_record_carries_identity_and_download_results() {
        let listing = Listing {
            label: "L1".to_string(),
            catalog_name: "Loft".to_string(),
            external_id: "123".to_string(),
            source_url: "https://example.test/123".to_string(),
        };
        let snapshot = PageSnapshot {
            title: "Cozy Loft".to_string(),
            photos: vec!["https://a0.muscache.com/pictures/a.jpg".to_string()],
            ..Default::default()
        };
        let record = assemble_record(&listing, snapshot, vec!["images/123/01.jpg".to_string()]);

        assert_eq!(record.external_id, "123");
        assert_eq!(record.title, "Cozy Loft");
        assert_eq!(record.photos.len(), 1);
        assert_eq!(record.local_photos, vec!["images/123/01.jpg"]);
        assert_eq!(record.rating, "");
    }
}
