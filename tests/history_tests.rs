use verivoice::{Classification, HistoryStore, Language, Verdict};

fn verdict(language: Language, score: f64) -> Verdict {
    Verdict {
        language,
        classification: Classification::Human,
        confidence_score: score,
        explanation: "Steady natural cadence.".to_string(),
    }
}

#[test]
fn test_record_prepends() {
    let mut store = HistoryStore::new();

    store.record(verdict(Language::Tamil, 0.1), "first.mp3");
    store.record(verdict(Language::Hindi, 0.2), "second.mp3");
    store.record(verdict(Language::Telugu, 0.3), "third.mp3");

    let names: Vec<&str> = store.list().map(|item| item.file_name.as_str()).collect();
    assert_eq!(names, ["third.mp3", "second.mp3", "first.mp3"]);
}

#[test]
fn test_record_copies_verdict_verbatim() {
    let mut store = HistoryStore::new();

    let item = store.record(verdict(Language::English, 0.93), "clip.mp3").clone();

    assert_eq!(item.verdict, verdict(Language::English, 0.93));
    assert_eq!(item.file_name, "clip.mp3");
    assert!(!item.id.is_empty());
}

#[test]
fn test_record_does_not_deduplicate() {
    let mut store = HistoryStore::new();

    store.record(verdict(Language::English, 0.5), "same.mp3");
    store.record(verdict(Language::English, 0.5), "same.mp3");

    assert_eq!(store.len(), 2);
    let ids: Vec<&str> = store.list().map(|item| item.id.as_str()).collect();
    assert_ne!(ids[0], ids[1], "Every entry gets its own id");
}

#[test]
fn test_timestamps_follow_insertion_order() {
    let mut store = HistoryStore::new();

    store.record(verdict(Language::English, 0.5), "a.mp3");
    store.record(verdict(Language::English, 0.5), "b.mp3");

    let items = store.to_vec();
    assert!(items[0].timestamp >= items[1].timestamp);
}

#[test]
fn test_clear_then_reuse() {
    let mut store = HistoryStore::new();
    store.record(verdict(Language::English, 0.5), "a.mp3");
    store.record(verdict(Language::English, 0.5), "b.mp3");

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.list().count(), 0);

    store.record(verdict(Language::Tamil, 0.7), "c.mp3");
    assert_eq!(store.len(), 1);
    assert_eq!(store.to_vec()[0].file_name, "c.mp3");
}

#[test]
fn test_limit_evicts_oldest() {
    let mut store = HistoryStore::with_limit(Some(2));

    store.record(verdict(Language::English, 0.1), "old.mp3");
    store.record(verdict(Language::English, 0.2), "mid.mp3");
    store.record(verdict(Language::English, 0.3), "new.mp3");

    let names: Vec<&str> = store.list().map(|item| item.file_name.as_str()).collect();
    assert_eq!(names, ["new.mp3", "mid.mp3"]);
}

#[test]
fn test_unbounded_by_default() {
    let mut store = HistoryStore::with_limit(None);
    for i in 0..500 {
        store.record(verdict(Language::English, 0.5), format!("clip-{}.mp3", i));
    }
    assert_eq!(store.len(), 500);
}

#[test]
fn test_history_item_serialization() {
    let mut store = HistoryStore::new();
    let item = store.record(verdict(Language::Hindi, 0.25), "x.mp3").clone();

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["fileName"], "x.mp3");
    assert_eq!(json["language"], "Hindi");
    assert_eq!(json["classification"], "HUMAN");
    assert_eq!(json["confidenceScore"], 0.25);
    assert!(json["id"].is_string());
    assert!(json["timestamp"].is_string());
}
