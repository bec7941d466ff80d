//! List an artist's studio albums, oldest first, from the MusicBrainz web
//! service.
//!
//! The pipeline is linear: resolve the artist, fetch its album release
//! groups, keep the ones without secondary types, sort by year.

pub mod albums;
pub mod error;
pub mod musicbrainz;
pub mod report;

use tracing::info;

pub use crate::albums::Album;
pub use crate::error::{Error, Result};
pub use crate::musicbrainz::{Artist, MusicBrainz, ReleaseGroup};

/// Where artists and their release groups come from.
pub trait Catalog {
    /// The best match for a free-text artist query.
    fn find_artist(&self, query: &str) -> Result<Artist>;

    /// Album release groups of an artist, in the order the source returns them.
    fn release_groups(&self, artist_id: &str) -> Result<Vec<ReleaseGroup>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discography {
    pub artist: Artist,
    /// Studio albums only, oldest first.
    pub albums: Vec<Album>,
}

/// Resolve `query` to an artist and collect its studio albums.
///
/// Both lookups finish before this returns, so callers can print the whole
/// result or nothing at all.
pub fn discography(catalog: &impl Catalog, query: &str) -> Result<Discography> {
    if query.is_empty() {
        return Err(Error::MissingArtist);
    }

    let artist = catalog.find_artist(query)?;
    info!(id = %artist.id, name = %artist.name, "resolved artist");

    let release_groups = catalog.release_groups(&artist.id)?;
    let total = release_groups.len();

    let mut albums = albums::studio_albums(release_groups);
    albums::sort_by_year(&mut albums);
    info!(total, studio = albums.len(), "release groups");

    Ok(Discography { artist, albums })
}
