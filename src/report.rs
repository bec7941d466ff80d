use std::io::{self, Write};

use crate::Discography;

/// Print the listing: a header then one `YYYY Title` line per album, or a
/// single "has no albums yet" line when there is nothing to list.
pub fn write_listing(out: &mut impl Write, discography: &Discography) -> io::Result<()> {
    let name = &discography.artist.name;

    if discography.albums.is_empty() {
        writeln!(out, "{name} has no albums yet")?;
        return out.flush();
    }

    writeln!(out, "Albums by {name}")?;
    for album in &discography.albums {
        writeln!(out, "{:04} {}", album.year, album.title)?;
    }
    out.flush()
}
