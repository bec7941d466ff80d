//! Blocking client for the two MusicBrainz web service endpoints we use.

use std::time::Instant;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::Catalog;
use crate::error::{Error, Result};

pub const API_BASE: &str = "http://musicbrainz.org";

pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " ( ",
    env!("CARGO_PKG_REPOSITORY"),
    " )"
);

/// The search is ranked by relevance, so only the best match is requested.
const ARTIST_SEARCH_LIMIT: &str = "1";
/// Release groups beyond this are not fetched; there is no paging.
const RELEASE_GROUP_LIMIT: &str = "100";

// ── API response types ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    pub id: String,
    pub title: String,
    /// The service sends `null` for release groups it has not classified.
    pub primary_type: Option<String>,
    /// Tags such as "Live" or "Compilation". Empty for a plain studio album.
    pub secondary_types: Vec<String>,
    /// Partial ISO date: "1977", "1977-03", "1977-03-04" or "".
    pub first_release_date: String,
}

#[derive(Deserialize)]
struct ArtistSearch {
    artists: Vec<Artist>,
}

#[derive(Deserialize)]
struct ReleaseGroupList {
    #[serde(rename = "release-groups")]
    release_groups: Vec<ReleaseGroup>,
}

// ── HTTP client ────────────────────────────────────────────────

pub struct MusicBrainz {
    base: String,
    agent: ureq::Agent,
}

impl Default for MusicBrainz {
    fn default() -> Self {
        Self::new()
    }
}

impl MusicBrainz {
    pub fn new() -> Self {
        Self::with_base(API_BASE)
    }

    /// Point the client at another host, e.g. a local stub server.
    pub fn with_base(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            // No timeout: a stalled server blocks until the OS gives up.
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
        }
    }

    /// GET `path` with `params` and decode the JSON body into `T`.
    ///
    /// The body is read in full before decoding so a truncated transfer is
    /// reported as a transport failure rather than as bad JSON.
    fn get<T: DeserializeOwned>(
        &self,
        label: &str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{path}", self.base);

        let mut req = self.agent.get(&url);
        for &(k, v) in params {
            req = req.query(k, v);
        }

        let start = Instant::now();
        let resp = req.call().map_err(|e| Error::Http {
            url: url.clone(),
            source: Box::new(e),
        })?;
        let status = resp.status();

        let body = resp
            .into_string()
            .map_err(|source| Error::Body { url: url.clone(), source })?;

        debug!(
            endpoint = label,
            %url,
            status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            bytes = body.len(),
            "GET"
        );

        serde_json::from_str(&body).map_err(|source| Error::Decode { url, source })
    }
}

impl Catalog for MusicBrainz {
    fn find_artist(&self, query: &str) -> Result<Artist> {
        let query_param = format!("artist:{query}");
        let resp: ArtistSearch = self.get(
            "artist-search",
            "/ws/2/artist/",
            &[
                ("query", query_param.as_str()),
                ("limit", ARTIST_SEARCH_LIMIT),
                ("fmt", "json"),
            ],
        )?;

        resp.artists
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoArtist(query.to_string()))
    }

    fn release_groups(&self, artist_id: &str) -> Result<Vec<ReleaseGroup>> {
        let resp: ReleaseGroupList = self.get(
            "release-groups",
            "/ws/2/release-group/",
            &[
                ("artist", artist_id),
                ("type", "album"),
                ("limit", RELEASE_GROUP_LIMIT),
                ("fmt", "json"),
            ],
        )?;
        Ok(resp.release_groups)
    }
}
