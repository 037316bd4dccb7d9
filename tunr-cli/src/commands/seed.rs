//! Sample data command

use anyhow::{Context, Result};
use clap::Parser;
use tunr_server::create_pool_with_options;
use tunr_server::db::repos::{ArtistRepo, NewSong, SongRepo};
use tunr_server::models::ArtistForm;

use super::DatabaseArgs;
use crate::config::TunrConfig;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

struct SeedArtist {
    name: &'static str,
    photo_url: &'static str,
    nationality: &'static str,
    songs: &'static [(&'static str, &'static str)],
}

const SEED: &[SeedArtist] = &[
    SeedArtist {
        name: "Prince",
        photo_url: "https://example.com/photos/prince.jpg",
        nationality: "American",
        songs: &[
            ("Purple Rain", "Purple Rain"),
            ("When Doves Cry", "Purple Rain"),
            ("Kiss", "Parade"),
        ],
    },
    SeedArtist {
        name: "David Bowie",
        photo_url: "https://example.com/photos/bowie.jpg",
        nationality: "British",
        songs: &[("Heroes", "\"Heroes\""), ("Life on Mars?", "Hunky Dory")],
    },
    SeedArtist {
        name: "Fela Kuti",
        photo_url: "https://example.com/photos/fela.jpg",
        nationality: "Nigerian",
        songs: &[("Zombie", "Zombie"), ("Water No Get Enemy", "Expensive Shit")],
    },
];

/// Insert sample artists and their songs
pub async fn run_seed(args: SeedArgs, config: &TunrConfig) -> Result<()> {
    let database_url = config.database_url(args.db.database_url);
    let max_connections = config.max_connections(args.db.max_connections);
    let pool = create_pool_with_options(&database_url, max_connections)
        .await
        .context("Failed to create database pool")?;
    let mut conn = pool.acquire().await.context("Failed to acquire connection")?;

    let mut song_count = 0;
    for seed in SEED {
        let artist = ArtistRepo::new(&mut conn)
            .create(&ArtistForm {
                name: seed.name.to_owned(),
                photo_url: seed.photo_url.to_owned(),
                nationality: seed.nationality.to_owned(),
            })
            .await
            .with_context(|| format!("Failed to insert artist {}", seed.name))?;

        let mut songs = SongRepo::new(&mut conn);
        for (title, album) in seed.songs {
            songs
                .insert(&NewSong {
                    artist_id: artist.id,
                    title: (*title).to_owned(),
                    album: (*album).to_owned(),
                    preview_url: String::new(),
                })
                .await
                .with_context(|| format!("Failed to insert song {}", title))?;
            song_count += 1;
        }
    }

    tracing::info!(artists = SEED.len(), songs = song_count, "Seed data inserted");
    Ok(())
}
