//! songs/* templates

use std::fmt::Write;

use super::escape;
use crate::db::repos::Song;

pub(super) fn index(songs: &[Song]) -> String {
    let mut html = String::from("<h1>Songs</h1>\n<ul>\n");
    for song in songs {
        let _ = writeln!(
            html,
            "  <li><a href=\"/songs/{}\">{}</a> ({})</li>",
            song.id,
            escape(&song.title),
            escape(&song.album)
        );
    }
    html.push_str("</ul>");
    html
}

pub(super) fn show(song: &Song) -> String {
    let mut html = format!(
        "<h1>{}</h1>\n<p>Album: {}</p>\n",
        escape(&song.title),
        escape(&song.album)
    );
    if !song.preview_url.is_empty() {
        let _ = writeln!(
            html,
            "<audio controls src=\"{}\"></audio>",
            escape(&song.preview_url)
        );
    }
    let _ = write!(
        html,
        "<p><a href=\"/artists/{}\">Artist</a></p>",
        song.artist_id
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_links_back_to_artist() {
        let song = Song {
            id: 4,
            artist_id: 9,
            title: "Heroes".into(),
            album: "\"Heroes\"".into(),
            preview_url: String::new(),
        };
        let html = show(&song);

        assert!(html.contains("href=\"/artists/9\""));
        assert!(html.contains("&quot;Heroes&quot;"));
        assert!(!html.contains("<audio"));
    }
}
