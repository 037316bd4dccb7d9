//! HTML views
//!
//! Each `View` variant is one template plus the entity data it shows.
//! Values from the database or the request are always passed through
//! [`escape`] before they reach the page.

mod artists;
mod songs;

use std::fmt::Write;

use axum::http::StatusCode;
use axum::response::Html;

use crate::db::repos::{Artist, Song};

/// A renderable page.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Home,
    ArtistsIndex { artists: &'a [Artist] },
    ArtistsNew,
    ArtistsEdit { artist: &'a Artist },
    ArtistShow { artist: &'a Artist, songs: &'a [Song] },
    SongsIndex { songs: &'a [Song] },
    SongShow { song: &'a Song },
    Error { status: StatusCode, message: &'a str },
}

impl View<'_> {
    /// Template identifier, as used in logs.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ArtistsIndex { .. } => "artists/index",
            Self::ArtistsNew => "artists/new",
            Self::ArtistsEdit { .. } => "artists/edit",
            Self::ArtistShow { .. } => "artists/artist_id",
            Self::SongsIndex { .. } => "songs/index",
            Self::SongShow { .. } => "songs/song_id",
            Self::Error { .. } => "error",
        }
    }

    /// Render the full HTML document.
    pub fn render(&self) -> Html<String> {
        tracing::trace!(template = self.template(), "rendering view");

        let (title, body) = match *self {
            Self::Home => ("Tunr".to_owned(), home()),
            Self::ArtistsIndex { artists } => ("Artists".to_owned(), artists::index(artists)),
            Self::ArtistsNew => ("New Artist".to_owned(), artists::new_form()),
            Self::ArtistsEdit { artist } => {
                (format!("Edit {}", artist.name), artists::edit_form(artist))
            }
            Self::ArtistShow { artist, songs } => {
                (artist.name.clone(), artists::show(artist, songs))
            }
            Self::SongsIndex { songs } => ("Songs".to_owned(), songs::index(songs)),
            Self::SongShow { song } => (song.title.clone(), songs::show(song)),
            Self::Error { status, message } => (status.to_string(), error(status, message)),
        };

        Html(layout(&title, &body))
    }
}

fn home() -> String {
    r#"<h1>Tunr</h1>
<p>A catalog of artists and their songs.</p>
<ul>
  <li><a href="/artists">Artists</a></li>
  <li><a href="/songs">Songs</a></li>
</ul>"#
        .to_owned()
}

fn error(status: StatusCode, message: &str) -> String {
    format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Home</a></p>",
        escape(&status.to_string()),
        escape(message)
    )
}

fn layout(title: &str, body: &str) -> String {
    let mut page = String::with_capacity(body.len() + 256);
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title} | Tunr</title>
</head>
<body>
  <nav><a href="/">Tunr</a> | <a href="/artists">Artists</a> | <a href="/songs">Songs</a></nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    );
    page
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prince() -> Artist {
        Artist {
            id: 7,
            name: "Prince".into(),
            photo_url: "http://x/p.jpg".into(),
            nationality: "American".into(),
        }
    }

    fn song(id: i32, artist_id: i32, title: &str) -> Song {
        Song {
            id,
            artist_id,
            title: title.into(),
            album: "Purple Rain".into(),
            preview_url: String::new(),
        }
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn template_identifiers() {
        let artist = prince();
        assert_eq!(View::Home.template(), "home");
        assert_eq!(View::ArtistsNew.template(), "artists/new");
        assert_eq!(
            View::ArtistShow { artist: &artist, songs: &[] }.template(),
            "artists/artist_id"
        );
        assert_eq!(View::SongsIndex { songs: &[] }.template(), "songs/index");
    }

    #[test]
    fn layout_wraps_body() {
        let Html(page) = View::Home.render();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Tunr | Tunr</title>"));
        assert!(page.contains("href=\"/artists\""));
    }

    #[test]
    fn artist_page_lists_only_given_songs() {
        let artist = prince();
        let songs = [song(1, 7, "Kiss"), song(2, 7, "When Doves Cry")];
        let Html(page) = View::ArtistShow { artist: &artist, songs: &songs }.render();

        assert!(page.contains("Prince"));
        assert!(page.contains("American"));
        assert!(page.contains("href=\"/songs/1\""));
        assert!(page.contains("When Doves Cry"));
        assert!(page.contains("href=\"/artists/7/edit\""));
    }

    #[test]
    fn artist_name_is_escaped() {
        let artist = Artist {
            name: "<script>".into(),
            ..prince()
        };
        let Html(page) = View::ArtistShow { artist: &artist, songs: &[] }.render();

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn error_page_shows_status() {
        let Html(page) = View::Error {
            status: StatusCode::NOT_FOUND,
            message: "artist '9' not found",
        }
        .render();

        assert!(page.contains("404 Not Found"));
        assert!(page.contains("artist &#39;9&#39; not found"));
    }
}
