//! Seed command - populates storage with sample authors and books

use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::services::{AuthorInput, BookInput};

const SAMPLE_AUTHORS: &[(&str, &str, &str)] = &[
    (
        "Ursula K. Le Guin",
        "American author of speculative fiction.",
        "1929-10-21",
    ),
    (
        "Jorge Luis Borges",
        "Argentine short-story writer and essayist.",
        "1899-08-24",
    ),
    (
        "Octavia E. Butler",
        "American science fiction author.",
        "1947-06-22",
    ),
    (
        "Italo Calvino",
        "Italian journalist and writer of short stories and novels.",
        "1923-10-15",
    ),
    (
        "Stanisław Lem",
        "Polish writer of science fiction and essays.",
        "1921-09-12",
    ),
];

const SAMPLE_TITLES: &[&str] = &[
    "The Silent Archive",
    "A Field Guide to Lost Rivers",
    "Letters from the Interior",
    "The Cartographer's Apprentice",
    "Notes on an Unfinished City",
    "The Glass Meridian",
    "Harvest of Small Hours",
    "The Paper Orchard",
];

/// Seed storage with sample data
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config).await?;
    let mut rng = rand::thread_rng();

    let mut book_count = 0usize;

    for (name, bio, birth_date) in SAMPLE_AUTHORS {
        let author = state
            .author_service
            .create(AuthorInput {
                name: name.to_string(),
                bio: Some(bio.to_string()),
                birth_date: birth_date.parse::<NaiveDate>()?,
            })
            .await?;

        let books_for_author = rng.gen_range(1..=3);

        for _ in 0..books_for_author {
            let title = SAMPLE_TITLES[rng.gen_range(0..SAMPLE_TITLES.len())];
            let year = rng.gen_range(1950..=2020);
            let publish_date = NaiveDate::from_ymd_opt(year, rng.gen_range(1..=12), 1)
                .ok_or_else(|| anyhow::anyhow!("invalid publish date"))?;

            state
                .book_service
                .create(BookInput {
                    author_id: crate::domain::RecordId::new(author.id),
                    title: title.to_string(),
                    description: None,
                    publish_date,
                })
                .await?;

            book_count += 1;
        }
    }

    info!(
        authors = SAMPLE_AUTHORS.len(),
        books = book_count,
        "Seeding complete"
    );

    Ok(())
}
