//! End-to-end journal flows over the on-disk store.

use std::path::Path;

use wandernotes::app::STATUS_SAVED;
use wandernotes::photo::{FilePhotoReader, PhotoSelection};
use wandernotes::domain::PostDraft;
use wandernotes::feed;
use wandernotes::storage::{
    decode_posts, FileStore, KeyValueStore, LoadOutcome, MemoryStore, PostStore,
    CORRUPT_BACKUP_SLOT, POSTS_SLOT,
};
use wandernotes::{handle_event, initialize, submit_post, Action, AppState, Config, Event, Mood, MoodFilter};

fn config(dir: &Path) -> Config {
    Config {
        data_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

fn fill(state: &mut AppState<FileStore>, title: &str, content: &str, mood: Mood) {
    handle_event(
        state,
        &Event::FormEdited {
            title: title.to_string(),
            location: "Pune, India".to_string(),
            content: content.to_string(),
            mood,
        },
    )
    .unwrap();
}

#[tokio::test]
async fn created_post_leads_the_feed_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = initialize(&config(dir.path())).unwrap();
    assert_eq!(state.store.list().len(), 2);

    fill(&mut state, "Evening Walk", "Quiet lanes after the rain.", Mood::Relax);
    submit_post(&mut state, &FilePhotoReader, &PhotoSelection::NotSelected)
        .await
        .unwrap();

    assert_eq!(state.status.as_deref(), Some(STATUS_SAVED));
    let page = wandernotes::ui::render(&state);
    let walk = page.find("Evening Walk").unwrap();
    assert!(walk < page.find("Sunrise at Tiger Hill").unwrap());
    assert!(walk < page.find("Street Food Crawl").unwrap());

    let reopened = initialize(&config(dir.path())).unwrap();
    let titles: Vec<_> = reopened.store.list().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles[0], "Evening Walk");
    assert_eq!(titles.len(), 3);
}

#[test]
fn relax_feed_after_evening_walk() {
    let mut store = PostStore::open(MemoryStore::default());
    let sunrise = store.list()[0].id.clone();

    let walk = store
        .create(PostDraft::new("Evening Walk", "Pune, India", "Quiet lanes.", Mood::Relax))
        .unwrap();

    let relax = feed::derive(store.list(), "", MoodFilter::Only(Mood::Relax));
    let ids: Vec<&str> = relax.iter().map(|p| p.id.as_str()).collect();
    let titles: Vec<&str> = relax.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(ids, vec![walk.id.as_str(), sunrise.as_str()]);
    assert_eq!(titles, vec!["Evening Walk", "Sunrise at Tiger Hill"]);
}

#[tokio::test]
async fn photo_is_stored_inline() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("tea.png");
    std::fs::write(&photo, [0x89, b'P', b'N', b'G']).unwrap();

    let mut state = initialize(&config(&dir.path().join("data"))).unwrap();
    fill(&mut state, "Tea Garden", "Rows of green.", Mood::Culture);
    submit_post(&mut state, &FilePhotoReader, &PhotoSelection::File(photo))
        .await
        .unwrap();

    let post = &state.store.list()[0];
    assert_eq!(post.photo, "data:image/png;base64,iVBORw==");
    assert_eq!(post.mood, "culture");
}

#[tokio::test]
async fn unreadable_photo_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = initialize(&config(dir.path())).unwrap();

    fill(&mut state, "Lost Photo", "Never saved.", Mood::Adventure);
    submit_post(
        &mut state,
        &FilePhotoReader,
        &PhotoSelection::File(dir.path().join("missing.jpg")),
    )
    .await
    .unwrap();

    assert_eq!(state.store.list().len(), 2);
    assert!(state.status.as_deref().unwrap().starts_with("Could not read the photo"));
}

#[test]
fn search_and_mood_filter_narrow_the_feed() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = initialize(&config(dir.path())).unwrap();

    handle_event(&mut state, &Event::SearchInput("KOLKATA".to_string())).unwrap();
    let vm = state.compute_viewmodel();
    assert_eq!(vm.cards.len(), 1);
    assert_eq!(vm.cards[0].title, "Street Food Crawl");

    handle_event(&mut state, &Event::SearchInput(String::new())).unwrap();
    handle_event(&mut state, &Event::MoodFilterChanged(MoodFilter::Only(Mood::Relax))).unwrap();
    let vm = state.compute_viewmodel();
    assert_eq!(vm.cards.len(), 1);
    assert_eq!(vm.cards[0].title, "Sunrise at Tiger Hill");

    handle_event(&mut state, &Event::MoodFilterChanged(MoodFilter::Only(Mood::Culture))).unwrap();
    let page = wandernotes::ui::render(&state);
    assert!(page.contains("No posts match your search."));
}

#[test]
fn markup_in_posts_is_rendered_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = initialize(&config(dir.path())).unwrap();

    fill(&mut state, "<script>alert(1)</script>", "<b>bold</b>", Mood::Food);
    let draft = state.form.to_draft(String::new());
    handle_event(&mut state, &Event::CreatePost(draft)).unwrap();
    let id = state.store.list()[0].id.clone();
    handle_event(&mut state, &Event::OpenPost(id)).unwrap();

    let page = wandernotes::ui::render(&state);
    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(!page.contains("<b>bold</b>"));
    assert!(page.contains("&lt;script&gt;"));
}

#[test]
fn confirmed_delete_and_clear_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = initialize(&config(dir.path())).unwrap();
    let id = state.store.list()[0].id.clone();

    let (_, actions) = handle_event(&mut state, &Event::DeleteRequested(id.clone())).unwrap();
    assert!(matches!(actions.as_slice(), [Action::RequestConfirmation { .. }]));
    handle_event(&mut state, &Event::Cancel).unwrap();
    assert!(state.store.get(&id).is_some());

    handle_event(&mut state, &Event::DeleteRequested(id.clone())).unwrap();
    handle_event(&mut state, &Event::Confirm).unwrap();
    assert!(initialize(&config(dir.path())).unwrap().store.get(&id).is_none());

    handle_event(&mut state, &Event::ClearAllRequested).unwrap();
    handle_event(&mut state, &Event::Confirm).unwrap();
    let reopened = initialize(&config(dir.path())).unwrap();
    assert!(reopened.store.list().is_empty());
    assert!(wandernotes::ui::render(&reopened).contains("No posts yet. Add your first story above!"));
}

#[test]
fn corrupt_slot_is_backed_up_and_reseeded() {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = FileStore::open(dir.path().to_path_buf()).unwrap();
    backend.set(POSTS_SLOT, "{not json").unwrap();

    let store = PostStore::open(backend);
    assert_eq!(store.list().len(), 2);

    let backend = FileStore::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(backend.get(CORRUPT_BACKUP_SLOT).unwrap().as_deref(), Some("{not json"));
    let healed = decode_posts(&backend.get(POSTS_SLOT).unwrap().unwrap()).unwrap();
    assert_eq!(healed.len(), 2);
}

#[test]
fn undecodable_slot_is_kept_before_the_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileStore::open(dir.path().to_path_buf()).unwrap();
    let raw = b"[{\"id\":\"a\",\"title\":\"caf\xe9\"}]";
    std::fs::write(backend.slot_path(POSTS_SLOT), raw).unwrap();

    let mut store = PostStore::new(backend);
    assert!(matches!(store.load(), LoadOutcome::Recovered { backed_up: true, .. }));
    store
        .create(PostDraft::new("Evening Walk", "Pune, India", "Quiet lanes.", Mood::Relax))
        .unwrap();

    let backend = store.backend();
    assert_eq!(std::fs::read(backend.slot_path(CORRUPT_BACKUP_SLOT)).unwrap(), raw);
    let saved = decode_posts(&backend.get(POSTS_SLOT).unwrap().unwrap()).unwrap();
    assert_eq!(saved[0].title, "Evening Walk");
    assert_eq!(saved.len(), 3);
}

#[test]
fn export_contains_every_post() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = initialize(&config(dir.path())).unwrap();

    let (render, actions) = handle_event(&mut state, &Event::Export).unwrap();
    assert!(!render);
    let [Action::ExportFile { filename, contents }] = actions.as_slice() else {
        panic!("expected a single export action, got {actions:?}");
    };

    assert_eq!(filename, "wandernotes_posts.json");
    let exported = decode_posts(contents).unwrap();
    assert_eq!(exported, state.store.list());
}
