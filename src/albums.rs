use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::musicbrainz::ReleaseGroup;

static LEADING_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{4})").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub title: String,
    /// 0 when the release date is missing or unparseable.
    pub year: u32,
}

/// Year from a partial ISO date such as "1977-03-04".
///
/// Only the first four characters count, and only if they are all ASCII
/// digits. Anything else gives 0, which sorts before every real year.
pub fn year_from_date(date: &str) -> u32 {
    LEADING_YEAR
        .captures(date)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0)
}

/// Keep the plain studio albums, i.e. release groups with no secondary types.
/// Input order is preserved.
pub fn studio_albums(release_groups: Vec<ReleaseGroup>) -> Vec<Album> {
    release_groups
        .into_iter()
        .filter_map(|rg| {
            if !rg.secondary_types.is_empty() {
                debug!(id = %rg.id, title = %rg.title, secondary = ?rg.secondary_types, "skipping");
                return None;
            }
            Some(Album {
                year: year_from_date(&rg.first_release_date),
                title: rg.title,
            })
        })
        .collect()
}

/// Oldest first. Stable, so albums from the same year keep the service's order.
pub fn sort_by_year(albums: &mut [Album]) {
    albums.sort_by_key(|a| a.year);
}
