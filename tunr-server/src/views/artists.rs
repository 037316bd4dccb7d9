//! artists/* templates

use std::fmt::Write;

use super::escape;
use crate::db::repos::{Artist, Song};

pub(super) fn index(artists: &[Artist]) -> String {
    let mut html = String::from(
        "<h1>Artists</h1>\n<p><a href=\"/artists/new\">New artist</a></p>\n<ul>\n",
    );
    for artist in artists {
        let _ = writeln!(
            html,
            "  <li><a href=\"/artists/{}\">{}</a></li>",
            artist.id,
            escape(&artist.name)
        );
    }
    html.push_str("</ul>");
    html
}

pub(super) fn new_form() -> String {
    format!(
        r#"<h1>New Artist</h1>
<form method="post" action="/artists/new">
{fields}
  <button type="submit">Create</button>
</form>"#,
        fields = fields(None),
    )
}

pub(super) fn edit_form(artist: &Artist) -> String {
    format!(
        r#"<h1>Edit {name}</h1>
<form method="post" action="/artists/{id}">
  <input type="hidden" name="_method" value="put">
{fields}
  <button type="submit">Save</button>
</form>
<p><a href="/artists/{id}">Back</a></p>"#,
        name = escape(&artist.name),
        id = artist.id,
        fields = fields(Some(artist)),
    )
}

pub(super) fn show(artist: &Artist, songs: &[Song]) -> String {
    let mut html = format!(
        r#"<h1>{name}</h1>
<img src="{photo}" alt="{name}">
<p>Nationality: {nationality}</p>
<h2>Songs</h2>
<ul>
"#,
        name = escape(&artist.name),
        photo = escape(&artist.photo_url),
        nationality = escape(&artist.nationality),
    );
    for song in songs {
        let _ = writeln!(
            html,
            "  <li><a href=\"/songs/{}\">{}</a></li>",
            song.id,
            escape(&song.title)
        );
    }
    let _ = write!(
        html,
        r#"</ul>
<p><a href="/artists/{id}/edit">Edit</a></p>
<form method="post" action="/artists/{id}">
  <input type="hidden" name="_method" value="delete">
  <button type="submit">Delete</button>
</form>"#,
        id = artist.id,
    );
    html
}

fn fields(artist: Option<&Artist>) -> String {
    let (name, photo_url, nationality) = match artist {
        Some(a) => (escape(&a.name), escape(&a.photo_url), escape(&a.nationality)),
        None => Default::default(),
    };
    format!(
        r#"  <label>Name <input type="text" name="name" value="{name}"></label>
  <label>Photo URL <input type="text" name="photo_url" value="{photo_url}"></label>
  <label>Nationality <input type="text" name="nationality" value="{nationality}"></label>"#
    )
}
