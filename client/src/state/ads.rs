//! Static discovery-feed catalog keyed by personalization category.
//!
//! The server only returns a category id from `/v1/get_ads`; the copy and
//! images live here. Unknown ids map to an empty feed.

#[cfg(test)]
#[path = "ads_test.rs"]
mod ads_test;

use super::prefs::Lang;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ad {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

const fn ad(title: &'static str, description: &'static str, image: &'static str) -> Ad {
    Ad { title, description, image }
}

const SAVER: [Ad; 3] = [
    ad("Economisește mai ușor", "Vezi cele mai bune conturi de economii.", "images/ads/economyAccount.jpg"),
    ad("Termen lung, câștig mare", "Depozite avantajoase pentru tine.", "images/ads/depositFavorable.jpg"),
    ad("Analizează-ți cheltuielile", "Grafice lunare pentru control financiar.", "images/ads/financialGraphic.jpg"),
];

const SPENDER: [Ad; 3] = [
    ad("Ai cheltuieli mari?", "Descoperă cardurile de credit smart.", "images/ads/smartCard.jpg"),
    ad("Credit rapid, fără griji", "Aplică 100% online pentru împrumut.", "images/ads/loan.jpg"),
    ad("Folosește la maxim overdraft-ul", "Vezi limitele disponibile.", "images/ads/overdraft.jpg"),
];

const ANTI_USER: [Ad; 3] = [
    ad("George te poate ajuta", "Descoperă beneficiile contului digital.", "images/ads/digitalAccount.jpg"),
    ad("Transferuri mai rapide", "Încearcă plățile instant.", "images/ads/contactless.jpg"),
    ad("Economisește fără efort", "Setează un plan automat.", "images/ads/financePlan.jpg"),
];

const YOUNG: [Ad; 3] = [
    ad("Trimite bani rapid", "Transfer instant către prieteni.", "images/ads/fastTransfers.jpg"),
    ad("Economii simple", "Economisește automat când cheltui.", "images/ads/economyAuto.jpg"),
    ad("Cheltuie smart", "Vezi unde se duc banii tăi.", "images/ads/moneyLocation.jpg"),
];

/// Ads shown for `category`.
#[must_use]
pub fn ads_for(category: i32) -> &'static [Ad] {
    match category {
        0 => &SAVER,
        1 => &SPENDER,
        2 => &ANTI_USER,
        3 => &YOUNG,
        _ => &[],
    }
}

/// Human-readable category name.
#[must_use]
pub fn category_label(category: i32, lang: Lang) -> &'static str {
    match (category, lang) {
        (0, Lang::Ro) => "Econom",
        (0, Lang::En) => "Saver",
        (1, Lang::Ro) => "Cheltuitor",
        (1, Lang::En) => "Spender",
        (2, Lang::Ro) => "Utilizator ocazional",
        (2, Lang::En) => "Occasional user",
        (3, Lang::Ro) => "Tânăr",
        (3, Lang::En) => "Young",
        (_, Lang::Ro) => "Necunoscut",
        (_, Lang::En) => "Unknown",
    }
}

/// State of the discovery page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdsState {
    pub category: Option<i32>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AdsState {
    #[must_use]
    pub fn ads(&self) -> &'static [Ad] {
        match self.category {
            Some(category) => ads_for(category),
            None => &[],
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a `/v1/get_ads` result. Errors keep the previous category.
    pub fn finish(&mut self, result: Result<i32, String>) {
        self.loading = false;
        match result {
            Ok(category) => self.category = Some(category),
            Err(message) => self.error = Some(message),
        }
    }
}
