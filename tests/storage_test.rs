//! JSON-file store and profile manager behavior against a real directory.

use std::sync::Arc;
use tastevin_core::{
    Choice, EngineConfig, GenreDim, Interaction, InteractionKind, JsonFileStore, ProfileManager,
    ProfileStore, QuizSession, SessionAdvance, TasteProfile, TasteVector,
};
use tempfile::TempDir;
use uuid::Uuid;

async fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::open(dir.path().join("profiles")).await.unwrap()
}

#[tokio::test]
async fn file_store_round_trips_a_profile() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;

    let mut profile = TasteProfile::new(vec!["true-story".to_string()]);
    profile.vector.set(GenreDim::Documentary.into(), 0.9);
    store.save(&profile).await.unwrap();

    let loaded = store.load(profile.id).await.unwrap().unwrap();
    assert_eq!(loaded.id, profile.id);
    assert_eq!(loaded.cluster_ids, profile.cluster_ids);
    assert!((loaded.vector.genre(GenreDim::Documentary) - 0.9).abs() < 1e-6);
}

#[tokio::test]
async fn file_store_lists_and_clears() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;

    let a = TasteProfile::new(Vec::new());
    let b = TasteProfile::new(Vec::new());
    store.save(&a).await.unwrap();
    store.save(&b).await.unwrap();

    let mut expected = vec![a.id, b.id];
    expected.sort();
    assert_eq!(store.list().await.unwrap(), expected);

    store.clear(a.id).await.unwrap();
    store.clear(a.id).await.unwrap(); // absent is fine
    assert_eq!(store.list().await.unwrap(), vec![b.id]);
    assert!(store.load(a.id).await.unwrap().is_none());
}

#[tokio::test]
async fn file_store_ignores_foreign_files() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;
    let profile = TasteProfile::new(Vec::new());
    store.save(&profile).await.unwrap();

    tokio::fs::write(store.dir().join("notes.txt"), b"not a profile")
        .await
        .unwrap();
    tokio::fs::write(store.dir().join("not-a-uuid.json"), b"{}")
        .await
        .unwrap();

    assert_eq!(store.list().await.unwrap(), vec![profile.id]);
}

#[tokio::test]
async fn missing_profile_is_none_not_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;
    assert!(store.load(Uuid::new_v4()).await.unwrap().is_none());
}

fn complete_a_session(clusters: Vec<String>) -> tastevin_core::QuizOutcome {
    let mut session = QuizSession::new(EngineConfig::default(), clusters).unwrap();
    loop {
        let ids: Vec<String> = session
            .current_pairs()
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        for id in ids {
            session
                .submit_answer(&id, Choice::A, chrono::Utc::now())
                .unwrap();
        }
        match session.advance().unwrap() {
            SessionAdvance::NextPhase { .. } => {}
            SessionAdvance::Complete(outcome) => return outcome,
        }
    }
}

#[tokio::test]
async fn manager_persists_quiz_outcome_through_file_store() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_in(&dir).await);
    let manager = ProfileManager::new(store.clone(), EngineConfig::default());

    let clusters = vec!["horror-midnight".to_string()];
    let outcome = complete_a_session(clusters.clone());
    let expected = outcome.vector.clone();

    let profile = manager.get_or_create(None).await.unwrap();
    manager
        .complete_quiz(profile.id, outcome, clusters)
        .await
        .unwrap();

    // Fresh manager over the same directory sees the same state.
    let reopened = ProfileManager::new(
        Arc::new(JsonFileStore::open(store.dir().to_path_buf()).await.unwrap()),
        EngineConfig::default(),
    );
    let loaded = reopened.get_or_create(Some(profile.id)).await.unwrap();
    assert_eq!(loaded.quiz_baseline, Some(expected.clone()));
    assert_eq!(loaded.vector, expected);
}

#[tokio::test]
async fn concurrent_interactions_are_all_retained() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_in(&dir).await);
    let manager = Arc::new(ProfileManager::new(store, EngineConfig::default()));
    let profile = manager.get_or_create(None).await.unwrap();

    let mut content = TasteVector::zero();
    content.set(GenreDim::Comedy.into(), 0.8);

    let mut handles = Vec::new();
    for i in 0..16 {
        let manager = manager.clone();
        let content = content.clone();
        let id = profile.id;
        handles.push(tokio::spawn(async move {
            let interaction = Interaction::new(
                format!("tt{:04}", i),
                content,
                InteractionKind::Clicked,
                chrono::Utc::now(),
            );
            manager.record_interaction(id, interaction).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Per-profile locking means no read-modify-write cycle was lost.
    let final_state = manager.get_or_create(Some(profile.id)).await.unwrap();
    assert_eq!(final_state.interactions.len(), 16);
}
