//! Command implementations
//!
//! Each command writes its report to the given writer so the binary can
//! target stdout and tests can capture it.

use cantor_core::{AlbumId, Catalog, TrackId};
use cantor_queue::PlayerSession;
use std::io::Write;

/// Print every album with its number of tracks
pub fn list_albums<C: Catalog>(catalog: &C, out: &mut impl Write) -> anyhow::Result<()> {
    for album in catalog.albums() {
        let tracks = catalog.tracks_by_album(&album.id);
        writeln!(
            out,
            "{:<16} {:<24} {} track(s)",
            album.id.as_str(),
            album.title,
            tracks.len()
        )?;
    }
    Ok(())
}

/// Print an album's tracks in playback order
pub fn list_tracks<C: Catalog>(
    catalog: &C,
    album_id: &AlbumId,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let album = catalog
        .album(album_id)
        .ok_or_else(|| anyhow::anyhow!("Album not found: {}", album_id))?;

    writeln!(out, "{}", album.title)?;
    for (index, track) in catalog.tracks_by_album(album_id).iter().enumerate() {
        writeln!(
            out,
            "{:>3}. [{:>4}] {} {}",
            index + 1,
            track.id.get(),
            track.title,
            if track.is_playable() { "" } else { "(unreleased)" }
        )?;
    }
    Ok(())
}

/// Which way to step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    Peek,
}

/// Open `album/track`, take one step, print the destination
pub fn step<C: Catalog>(
    session: &mut PlayerSession<C>,
    album_id: AlbumId,
    track_id: TrackId,
    step: Step,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    session.open(album_id, track_id)?;

    let destination = match step {
        Step::Next => session.next(),
        Step::Previous => session.previous(),
        Step::Peek => session.peek_next(),
    };

    match destination {
        Some(locator) => writeln!(out, "{}", locator)?,
        None => writeln!(out, "(none)")?,
    }
    Ok(())
}

/// Open `album/track` and let up to `steps` tracks end in a row
///
/// Stops early at the end of the queue.
pub fn walk<C: Catalog>(
    session: &mut PlayerSession<C>,
    album_id: AlbumId,
    track_id: TrackId,
    steps: usize,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    session.open(album_id, track_id)?;

    let mut walked = 0;
    while walked < steps {
        let Some(locator) = session.track_ended() else {
            break;
        };
        walked += 1;

        let title = session
            .current_track()
            .map(|t| t.title)
            .unwrap_or_default();
        writeln!(out, "{:>3}. {} {}", walked, locator, title)?;
    }

    tracing::debug!("Walked {} of {} step(s)", walked, steps);
    Ok(walked)
}
