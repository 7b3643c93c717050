use crate::models::Listing;

const ROOMS_BASE_URL: &str = "https://www.airbnb.com.tw/rooms";

/// All managed listings from the room inventory, in processing order.
/// (label, catalog name, external id); the catalog name is empty where the
/// inventory has no display name for the room.
const ROOMS: &[(&str, &str, &str)] = &[
    ("京都", "", "32369171"),
    ("405", "NK Homes Namba", "28440628"),
    ("406", "Shinsaibashi Family Room", "13808333"),
    ("806", "Osaka Nest 大阪之巢", "39588682"),
    ("904", "愛彼家庭房", "1411658292659990663"),
    ("1305", "クリスタルエグゼ リヴィエラ", "1191616569289275531"),
    ("西九条", "桜川・西九条", "42631189"),
    ("DAIDODO", "DAIDODO", "1313041401243092434"),
    ("谷六", "The Nomad inn Osaka", "1326417920271287072"),
    ("住之江", "芸舎", "1462715957355003327"),
    ("鷺洲2樓", "台香", "1462702559380319721"),
    ("鷺洲3樓", "台香", "1462711404983544336"),
    ("波除", "ハウス大福", "1326407907379451880"),
    ("三先", "", "1373123947611639228"),
    ("角屋", "十一鳴", "1372891258852120566"),
    ("大正", "文華苑 大正 Guest House", "1278927863693438873"),
    ("艾屋", "よもぎの屋", "1543539317236403832"),
    ("都島", "光", "1462723475374263402"),
    ("天蓬-2F天和", "天蓬の宿", "1593290188413619025"),
    ("天蓬-2F天洋", "天蓬の宿", "1593269693497404617"),
    ("天蓬-3F蓬和", "天蓬の宿", "1593303138764010764"),
    ("天蓬-3F蓬洋", "天蓬の宿", "1572512577917857134"),
    ("天蓬-4F最上", "天蓬の宿", "1594625499363067746"),
];

/// Build the ordered listing catalog.
pub fn listings() -> Vec<Listing> {
    ROOMS
        .iter()
        .map(|&(label, catalog_name, external_id)| Listing {
            label: label.to_string(),
            catalog_name: catalog_name.to_string(),
            external_id: external_id.to_string(),
            source_url: format!("{ROOMS_BASE_URL}/{external_id}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_keys_are_unique() {
        let catalog = listings();
        let ids: HashSet<_> = catalog.iter().map(|l| l.external_id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn source_urls_embed_the_external_id() {
        for listing in listings() {
            assert!(listing.source_url.ends_with(&listing.external_id));
        }
    }
}
