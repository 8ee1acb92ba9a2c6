//! Built-in sample posts used on first run and after recovering from an
//! unreadable payload.

use crate::domain::{format_timestamp, generate_id, Post};
use chrono::{DateTime, Utc};

/// Returns the two sample posts, stamped with `now`.
#[must_use]
pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
    let date = format_timestamp(now);
    let mut posts = vec![
        Post {
            id: generate_id(now),
            title: "Sunrise at Tiger Hill".to_string(),
            location: "Darjeeling, India".to_string(),
            content: "Woke up at 4:30am and watched the clouds roll under the hills. \
                      Tea shops open early nearby, a must!"
                .to_string(),
            mood: "relax".to_string(),
            photo: String::new(),
            date: date.clone(),
        },
        Post {
            id: generate_id(now),
            title: "Street Food Crawl".to_string(),
            location: "Kolkata, India".to_string(),
            content: "Try the kathi rolls at Park Street and phuchka at Vivekananda Park. \
                      Cash-only stalls are the best."
                .to_string(),
            mood: "food".to_string(),
            photo: String::new(),
            date,
        },
    ];

    while posts[0].id == posts[1].id {
        posts[1].id = generate_id(now);
    }

    posts
}
