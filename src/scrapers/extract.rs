use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use serde_json::Value;
use std::collections::HashSet;
use url::Url;

/// JSON-LD `@type` markers that identify the lodging metadata block.
const LODGING_TYPES: &[&str] = &["VacationRental", "Apartment", "House", "LodgingBusiness"];

/// Tunable noise filters for amenity candidates, calibrated against the
/// source site's markup rather than any domain rule.
pub const AMENITY_MIN_CHARS: usize = 2;
pub const AMENITY_MAX_CHARS_INLINE: usize = 20;
pub const AMENITY_MAX_CHARS_MODAL: usize = 25;

const DESCRIPTION_MIN_CHARS: usize = 20;
const DESCRIPTION_UI_PHRASES: &[&str] = &["顯示更多內容", "顯示較少內容"];

const AMENITY_EXCLUDES_INLINE: &[&str] = &["顯示", "有提供", "設備", "服務", "不提供"];
const AMENITY_EXCLUDES_MODAL: &[&str] = &["顯示", "關閉", "有提供", "設備與服務", "不提供"];

/// Photo sources must live on the asset host under a pictures path; these
/// markers knock out avatars, platform chrome and map tiles.
const PHOTO_HOST: &str = "muscache.com";
const PHOTO_PATH_MARKER: &str = "/pictures/";
const PHOTO_EXCLUDES: &[&str] = &["avatar", "user", "platform-assets", "search-bar", "Map", "map"];

lazy_static! {
    static ref RATING_TEXT: Regex = Regex::new(r"★\s*([\d.]+)").unwrap();
    static ref REVIEWS_TEXT: Regex = Regex::new(r"(\d+)\s*則評價").unwrap();
    static ref GUESTS_SUMMARY: Regex = Regex::new(r"(\d+)\s*位").unwrap();
    static ref GUESTS_ITEM: Regex = Regex::new(r"(?i)(\d+)\s*位\s*(?:旅客|房客|来宾|guest)").unwrap();
    static ref BEDROOMS_SUMMARY: Regex = Regex::new(r"(\d+)\s*間.*?臥室").unwrap();
    static ref BEDROOMS_ITEM: Regex = Regex::new(r"(\d+)\s*間\s*臥室").unwrap();
    static ref BEDS_SUMMARY: Regex = Regex::new(r"(\d+)\s*張.*?床").unwrap();
    static ref BEDS_ITEM: Regex = Regex::new(r"(\d+)\s*張\s*床").unwrap();
    static ref BATHROOMS_SUMMARY: Regex = Regex::new(r"([\d.]+)\s*間.*?(?:衛浴|浴室)").unwrap();
    static ref BATHROOMS_ITEM: Regex = Regex::new(r"([\d.]+)\s*間\s*(?:衛浴|浴室)").unwrap();
    static ref CHECK_IN_LABELED: Regex = Regex::new(r"入住[時間时间]*[：:]\s*(.+?)(?:\n|退房|$)").unwrap();
    static ref CHECK_IN_RANGE: Regex =
        Regex::new(r"下午\s*[\d:：]+\s*[-~]\s*(?:下午|晚上)\s*[\d:：]+").unwrap();
    static ref CHECK_IN_AFTER: Regex = Regex::new(r"(下午\s*\d+[：:]\d+)\s*(?:後|以後|之後)").unwrap();
    static ref CHECK_OUT_LABELED: Regex = Regex::new(r"退房[時間时间]*[：:]\s*(.+?)(?:\n|入住|$)").unwrap();
    static ref CHECK_OUT_BEFORE: Regex = Regex::new(r"(上午\s*[\d:：]+)\s*(?:前|之前)").unwrap();
}

/// Best-effort structured snapshot of a loaded listing page. Every field
/// defaults to empty; extraction never errors on missing content.
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub title: String,
    pub rating: String,
    pub review_count: String,
    pub guest_capacity: String,
    pub bedroom_count: String,
    pub bed_count: String,
    pub bathroom_count: String,
    pub property_type: String,
    pub check_in_rule: String,
    pub check_out_rule: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
}

/// Raw text/metadata signals pulled from the page once, shared by all the
/// field fallback chains.
struct Signals {
    full_text: String,
    summary_text: String,
    summary_items: Vec<String>,
    policies_text: String,
    metadata: Option<Value>,
}

type Strategy = fn(&Signals) -> Option<String>;

// Ordered fallback chains, first non-empty match wins. The order is a
// precedence contract: page text beats metadata, the summary list beats its
// individual items.
const RATING_CHAIN: &[Strategy] = &[rating_from_text, rating_from_metadata];
const REVIEWS_CHAIN: &[Strategy] = &[reviews_from_text, reviews_from_metadata];
const GUESTS_CHAIN: &[Strategy] = &[guests_from_summary, guests_from_items, guests_from_metadata];
const BEDROOMS_CHAIN: &[Strategy] = &[bedrooms_from_summary, bedrooms_from_items];
const BEDS_CHAIN: &[Strategy] = &[beds_from_summary, beds_from_items];
const BATHROOMS_CHAIN: &[Strategy] = &[bathrooms_from_summary, bathrooms_from_items];
const CHECK_IN_CHAIN: &[Strategy] = &[check_in_labeled, check_in_range, check_in_after];
const CHECK_OUT_CHAIN: &[Strategy] = &[check_out_labeled, check_out_before];

impl PageSnapshot {
    /// Extract a snapshot from captured page HTML.
    pub fn extract(html: &str) -> Self {
        let doc = Html::parse_document(html);
        let signals = Signals::collect(&doc);

        Self {
            title: first_heading(&doc),
            rating: first_match(&signals, RATING_CHAIN),
            review_count: first_match(&signals, REVIEWS_CHAIN),
            guest_capacity: first_match(&signals, GUESTS_CHAIN),
            bedroom_count: first_match(&signals, BEDROOMS_CHAIN),
            bed_count: first_match(&signals, BEDS_CHAIN),
            bathroom_count: first_match(&signals, BATHROOMS_CHAIN),
            property_type: property_type(signals.metadata.as_ref()),
            check_in_rule: first_match(&signals, CHECK_IN_CHAIN),
            check_out_rule: first_match(&signals, CHECK_OUT_CHAIN),
            description: description(&doc, signals.metadata.as_ref()),
            amenities: inline_amenities(&doc),
            photos: photos_from_doc(&doc),
        }
    }
}

impl Signals {
    fn collect(doc: &Html) -> Self {
        let ol_sel = Selector::parse("ol").unwrap();
        let li_sel = Selector::parse("ol li").unwrap();
        let policies_sel = Selector::parse(r#"[data-section-id="POLICIES_DEFAULT"]"#).unwrap();

        let summary_text = doc
            .select(&ol_sel)
            .next()
            .map(|ol| ol.text().collect::<String>())
            .unwrap_or_default();
        let summary_items = doc.select(&li_sel).map(element_text).collect();
        let policies_text = doc
            .select(&policies_sel)
            .next()
            .map(lines_of)
            .unwrap_or_default();

        Self {
            full_text: visible_text(doc),
            summary_text,
            summary_items,
            policies_text,
            metadata: lodging_metadata(doc),
        }
    }
}

/// The page's visible text: body text nodes, skipping script and style
/// subtrees. Embedded page state ships the same localized markers the
/// text patterns look for, so it must not feed the text-first chains.
fn visible_text(doc: &Html) -> String {
    let body_sel = Selector::parse("body").unwrap();
    let mut text = String::new();
    if let Some(body) = doc.select(&body_sel).next() {
        push_visible_text(body, &mut text);
    }
    text
}

fn push_visible_text(el: ElementRef, out: &mut String) {
    if matches!(el.value().name(), "script" | "style") {
        return;
    }
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    push_visible_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

fn first_match(signals: &Signals, chain: &[Strategy]) -> String {
    chain
        .iter()
        .find_map(|strategy| strategy(signals).filter(|v| !v.is_empty()))
        .unwrap_or_default()
}

fn first_heading(doc: &Html) -> String {
    let h1_sel = Selector::parse("h1").unwrap();
    doc.select(&h1_sel).next().map(element_text).unwrap_or_default()
}

/// Concatenated, trimmed text of an element.
fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of an element with one line per text node, approximating how the
/// section renders; keeps the labeled policy patterns anchored on lines.
fn lines_of(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// --- structured metadata -------------------------------------------------

/// First embedded JSON-LD block whose `@type` marks a lodging entity.
fn lodging_metadata(doc: &Html) -> Option<Value> {
    let sel = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
    for script in doc.select(&sel) {
        let raw = script.text().collect::<String>();
        let Ok(ld) = serde_json::from_str::<Value>(&raw) else {
            continue;
        };
        if ld
            .get("@type")
            .and_then(Value::as_str)
            .is_some_and(|t| LODGING_TYPES.contains(&t))
        {
            return Some(ld);
        }
    }
    None
}

fn property_type(metadata: Option<&Value>) -> String {
    metadata
        .and_then(|ld| ld.get("@type"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// JSON-LD scalars come through as either strings or numbers.
fn metadata_scalar(metadata: Option<&Value>, pointer: &str) -> Option<String> {
    match metadata?.pointer(pointer)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// --- field strategies ----------------------------------------------------

fn rating_from_text(s: &Signals) -> Option<String> {
    capture(&RATING_TEXT, &s.full_text)
}

fn rating_from_metadata(s: &Signals) -> Option<String> {
    metadata_scalar(s.metadata.as_ref(), "/aggregateRating/ratingValue")
}

fn reviews_from_text(s: &Signals) -> Option<String> {
    capture(&REVIEWS_TEXT, &s.full_text)
}

fn reviews_from_metadata(s: &Signals) -> Option<String> {
    metadata_scalar(s.metadata.as_ref(), "/aggregateRating/ratingCount")
}

fn guests_from_summary(s: &Signals) -> Option<String> {
    capture(&GUESTS_SUMMARY, &s.summary_text)
}

fn guests_from_items(s: &Signals) -> Option<String> {
    capture_items(&GUESTS_ITEM, &s.summary_items)
}

fn guests_from_metadata(s: &Signals) -> Option<String> {
    metadata_scalar(s.metadata.as_ref(), "/containsPlace/occupancy/value")
}

fn bedrooms_from_summary(s: &Signals) -> Option<String> {
    capture(&BEDROOMS_SUMMARY, &s.summary_text)
}

fn bedrooms_from_items(s: &Signals) -> Option<String> {
    capture_items(&BEDROOMS_ITEM, &s.summary_items)
}

fn beds_from_summary(s: &Signals) -> Option<String> {
    capture(&BEDS_SUMMARY, &s.summary_text)
}

fn beds_from_items(s: &Signals) -> Option<String> {
    capture_items(&BEDS_ITEM, &s.summary_items)
}

fn bathrooms_from_summary(s: &Signals) -> Option<String> {
    capture(&BATHROOMS_SUMMARY, &s.summary_text)
}

fn bathrooms_from_items(s: &Signals) -> Option<String> {
    capture_items(&BATHROOMS_ITEM, &s.summary_items)
}

fn check_in_labeled(s: &Signals) -> Option<String> {
    capture(&CHECK_IN_LABELED, &s.policies_text).map(|v| v.trim().to_string())
}

fn check_in_range(s: &Signals) -> Option<String> {
    CHECK_IN_RANGE
        .find(&s.policies_text)
        .map(|m| m.as_str().to_string())
}

fn check_in_after(s: &Signals) -> Option<String> {
    capture(&CHECK_IN_AFTER, &s.policies_text).map(|v| format!("{v}以後"))
}

fn check_out_labeled(s: &Signals) -> Option<String> {
    capture(&CHECK_OUT_LABELED, &s.policies_text).map(|v| v.trim().to_string())
}

fn check_out_before(s: &Signals) -> Option<String> {
    capture(&CHECK_OUT_BEFORE, &s.policies_text).map(|v| format!("{v}之前"))
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|c| c[1].to_string())
}

fn capture_items(re: &Regex, items: &[String]) -> Option<String> {
    items.iter().find_map(|item| capture(re, item))
}

// --- description ---------------------------------------------------------

fn description(doc: &Html, metadata: Option<&Value>) -> String {
    let section_sel = Selector::parse(r#"[data-section-id="DESCRIPTION_DEFAULT"]"#).unwrap();
    if let Some(section) = doc.select(&section_sel).next() {
        let span_sel = Selector::parse("span").unwrap();
        let paragraphs: Vec<String> = section
            .select(&span_sel)
            .map(element_text)
            .filter(|t| t.chars().count() > DESCRIPTION_MIN_CHARS)
            .collect();
        if !paragraphs.is_empty() {
            return paragraphs.join("\n");
        }

        let mut fallback = element_text(section);
        for phrase in DESCRIPTION_UI_PHRASES {
            fallback = fallback.replace(phrase, "");
        }
        let fallback = fallback.trim().to_string();
        if !fallback.is_empty() {
            return fallback;
        }
    }

    metadata
        .and_then(|ld| ld.get("description"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// --- amenities -----------------------------------------------------------

fn amenity_candidate(text: &str, max_chars: usize, excludes: &[&str]) -> bool {
    let chars = text.chars().count();
    chars >= AMENITY_MIN_CHARS
        && chars <= max_chars
        && !text.contains('。')
        && !text.contains('，')
        && !excludes.iter().any(|e| text.contains(e))
}

/// Amenities visible on the base page, from the inline summary section.
fn inline_amenities(doc: &Html) -> Vec<String> {
    let section_sel = Selector::parse(r#"[data-section-id="AMENITIES_DEFAULT"]"#).unwrap();
    let div_sel = Selector::parse("div[class]").unwrap();
    let Some(section) = doc.select(&section_sel).next() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut amenities = Vec::new();
    for div in section.select(&div_sel) {
        let text = element_text(div);
        if amenity_candidate(&text, AMENITY_MAX_CHARS_INLINE, AMENITY_EXCLUDES_INLINE)
            && seen.insert(text.clone())
        {
            amenities.push(text);
        }
    }
    amenities
}

/// Amenities from the expanded panel. The modal is authoritative when it
/// yields more items than the inline section, which truncates.
pub fn modal_amenities(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let dialog_sel =
        Selector::parse(r#"[role="dialog"], [data-testid="modal-container"]"#).unwrap();
    let div_sel = Selector::parse("div").unwrap();
    let Some(dialog) = doc.select(&dialog_sel).next() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut amenities = Vec::new();
    for row in dialog.select(&div_sel) {
        let text = element_text(row);
        if amenity_candidate(&text, AMENITY_MAX_CHARS_MODAL, AMENITY_EXCLUDES_MODAL)
            && is_text_leaf(row, &text)
            && seen.insert(text.clone())
        {
            amenities.push(text);
        }
    }
    amenities
}

/// Keep an element only if no descendant div carries the identical text, so
/// a container and its child are not captured redundantly.
fn is_text_leaf(el: ElementRef, text: &str) -> bool {
    let mut child_divs = 0usize;
    let mut repeated = false;
    for node in el.descendants().skip(1) {
        let Some(child) = ElementRef::wrap(node) else {
            continue;
        };
        if child.value().name() == "div" {
            child_divs += 1;
            if element_text(child) == text {
                repeated = true;
            }
        }
    }
    !repeated || child_divs <= 1
}

// --- photos --------------------------------------------------------------

/// All listing photo URLs on the page, canonicalized and deduplicated in
/// discovery order. Public so gallery recaptures reuse it.
pub fn collect_photos(html: &str) -> Vec<String> {
    photos_from_doc(&Html::parse_document(html))
}

fn photos_from_doc(doc: &Html) -> Vec<String> {
    let img_sel = Selector::parse("img").unwrap();
    let mut seen = HashSet::new();
    let mut photos = Vec::new();
    for img in doc.select(&img_sel) {
        let src = img
            .value()
            .attr("src")
            .or_else(|| img.value().attr("data-src"))
            .unwrap_or_default();
        if let Some(canonical) = canonical_photo_url(src) {
            if seen.insert(canonical.clone()) {
                photos.push(canonical);
            }
        }
    }
    photos
}

/// Canonical form of a photo source: asset host, pictures path, no query or
/// fragment. Returns None for non-content imagery.
fn canonical_photo_url(src: &str) -> Option<String> {
    if src.is_empty() || PHOTO_EXCLUDES.iter().any(|marker| src.contains(marker)) {
        return None;
    }
    let mut url = Url::parse(src).ok()?;
    let host = url.host_str()?;
    if host != PHOTO_HOST && !host.ends_with(&format!(".{PHOTO_HOST}")) {
        return None;
    }
    if !url.path().contains(PHOTO_PATH_MARKER) {
        return None;
    }
    url.set_query(None);
    url.set_fragment(None);
    Some(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_PAGE: &str = r#"<html><body>
        <h1>Cozy Loft</h1>
        <div><span>★4.80</span> · <span>12 則評價</span></div>
        <ol>
            <li>2 位房客</li><li>1 間臥室</li><li>1 張床</li><li>1 間衛浴</li>
        </ol>
    </body></html>"#;

    #[test]
    fn scenario_page_extracts_all_scalars() {
        let snap = PageSnapshot::extract(SCENARIO_PAGE);
        assert_eq!(snap.title, "Cozy Loft");
        assert_eq!(snap.rating, "4.80");
        assert_eq!(snap.review_count, "12");
        assert_eq!(snap.guest_capacity, "2");
        assert_eq!(snap.bedroom_count, "1");
        assert_eq!(snap.bed_count, "1");
        assert_eq!(snap.bathroom_count, "1");
    }

    #[test]
    fn unrecognizable_page_defaults_to_empty() {
        let snap = PageSnapshot::extract("<html><body><p>nothing here</p></body></html>");
        assert_eq!(snap.title, "");
        assert_eq!(snap.rating, "");
        assert_eq!(snap.review_count, "");
        assert_eq!(snap.guest_capacity, "");
        assert_eq!(snap.bedroom_count, "");
        assert_eq!(snap.bed_count, "");
        assert_eq!(snap.bathroom_count, "");
        assert_eq!(snap.check_in_rule, "");
        assert_eq!(snap.check_out_rule, "");
        assert_eq!(snap.description, "");
        assert!(snap.amenities.is_empty());
        assert!(snap.photos.is_empty());
    }

    #[test]
    fn embedded_page_state_does_not_feed_the_text_chains() {
        let page = r#"<html><head>
            <script>window.__STATE__ = {"label": "99 則評價", "star": "★1.23"};</script>
        </head><body>
            <h1>Cozy Loft</h1>
            <script>var more = "888 則評價";</script>
            <style>.x::before { content: "★9.99"; }</style>
            <div><span>★4.80</span> · <span>12 則評價</span></div>
        </body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert_eq!(snap.rating, "4.80");
        assert_eq!(snap.review_count, "12");
    }

    #[test]
    fn metadata_backfills_rating_reviews_and_guests() {
        let page = r#"<html><head>
            <script type="application/ld+json">{
                "@type": "VacationRental",
                "aggregateRating": {"ratingValue": 4.9, "ratingCount": 33},
                "containsPlace": {"occupancy": {"value": 4}},
                "description": "A quiet stay."
            }</script>
        </head><body><h1>Hideaway</h1></body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert_eq!(snap.rating, "4.9");
        assert_eq!(snap.review_count, "33");
        assert_eq!(snap.guest_capacity, "4");
        assert_eq!(snap.property_type, "VacationRental");
        assert_eq!(snap.description, "A quiet stay.");
    }

    #[test]
    fn summary_list_takes_precedence_over_metadata() {
        let page = r#"<html><head>
            <script type="application/ld+json">{
                "@type": "Apartment",
                "containsPlace": {"occupancy": {"value": 6}}
            }</script>
        </head><body><ol><li>2 位房客</li></ol></body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert_eq!(snap.guest_capacity, "2");
    }

    #[test]
    fn photos_are_deduplicated_after_query_stripping() {
        let page = r#"<html><body>
            <img src="https://a0.muscache.com/pictures/a.jpg?w=200">
            <img src="https://a0.muscache.com/pictures/a.jpg?w=800">
            <img src="https://a0.muscache.com/pictures/b.jpg?w=400">
        </body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert_eq!(
            snap.photos,
            vec![
                "https://a0.muscache.com/pictures/a.jpg",
                "https://a0.muscache.com/pictures/b.jpg",
            ]
        );
    }

    #[test]
    fn non_content_imagery_is_excluded() {
        let page = r#"<html><body>
            <img src="https://a0.muscache.com/pictures/avatar/host.jpg">
            <img src="https://a0.muscache.com/pictures/map/tile.png">
            <img src="https://cdn.other.com/pictures/x.jpg">
            <img src="https://a0.muscache.com/banners/promo.jpg">
        </body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert!(snap.photos.is_empty());
    }

    #[test]
    fn description_prefers_long_spans_over_ui_affordances() {
        let page = r#"<html><body>
            <div data-section-id="DESCRIPTION_DEFAULT">
                <span>A bright loft two minutes from the station.</span>
                <span>顯示更多內容</span>
            </div>
        </body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert_eq!(snap.description, "A bright loft two minutes from the station.");
    }

    #[test]
    fn inline_amenities_filter_headers_and_noise() {
        let page = r#"<html><body>
            <div data-section-id="AMENITIES_DEFAULT">
                <div class="a">Wifi</div>
                <div class="a">吹風機</div>
                <div class="a">顯示全部 30 項設備</div>
                <div class="a">這是一段很長很長很長很長很長很長很長很長的說明文字</div>
            </div>
        </body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert_eq!(snap.amenities, vec!["Wifi", "吹風機"]);
    }

    #[test]
    fn modal_amenities_keep_leaf_nodes_only() {
        let html = r#"<html><body>
            <div role="dialog">
                <div><div>Wifi</div></div>
                <div>廚房</div>
                <div>不提供：洗衣機</div>
            </div>
        </body></html>"#;
        let amenities = modal_amenities(html);
        assert_eq!(amenities, vec!["Wifi", "廚房"]);
    }

    #[test]
    fn modal_amenities_without_dialog_are_empty() {
        assert!(modal_amenities("<html><body><div>Wifi</div></body></html>").is_empty());
    }

    #[test]
    fn labeled_policy_patterns_win_over_range_formats() {
        let page = r#"<html><body>
            <div data-section-id="POLICIES_DEFAULT">
                <div>入住時間：下午3:00後</div>
                <div>退房時間：上午11:00前</div>
            </div>
        </body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert_eq!(snap.check_in_rule, "下午3:00後");
        assert_eq!(snap.check_out_rule, "上午11:00前");
    }

    #[test]
    fn policy_qualifier_patterns_are_the_last_resort() {
        let page = r#"<html><body>
            <div data-section-id="POLICIES_DEFAULT">
                <div>下午3:00 之後可入住</div>
                <div>上午10:00 之前退房</div>
            </div>
        </body></html>"#;
        let snap = PageSnapshot::extract(page);
        assert_eq!(snap.check_in_rule, "下午3:00以後");
        assert_eq!(snap.check_out_rule, "上午10:00之前");
    }
}
