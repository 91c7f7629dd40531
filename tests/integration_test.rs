use std::fs::{self, File};
use std::io::Write;
use std::time::{Duration, Instant};

use swiftread::analytics::{SessionSink, SessionStore};
use swiftread::engine::{
    decompose, tokenize, PivotMode, PlaybackController, PlaybackState, TimingConfig,
};
use swiftread::input;

#[test]
fn end_to_end_reading() {
    let path = std::env::temp_dir().join(format!("swiftread_e2e_{}.txt", std::process::id()));
    let content = "Hello world! This is a test of the RSVP reader.";

    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let loaded = input::load_path(path.to_str().unwrap()).expect("should load file");
    assert_eq!(loaded.text, content);

    let mut controller = PlaybackController::with_text(&TimingConfig::default(), &loaded.text);
    assert_eq!(controller.len(), 10);
    assert_eq!(controller.current_unit(), Some("Hello"));
    assert_eq!(controller.current_unit(), tokenize(content).first().map(|s| s.as_str()));

    let now = Instant::now();
    controller.set_rate(300);
    controller.play(now);
    assert_eq!(controller.state(), PlaybackState::Playing);

    // Two ticks at 200ms each
    assert!(controller.poll(now + Duration::from_millis(200)));
    assert!(controller.poll(now + Duration::from_millis(400)));
    assert_eq!(controller.current_unit(), Some("This"));

    // The snapshot carries everything a renderer needs
    let snap = controller.snapshot();
    assert_eq!(snap.position, 2);
    assert_eq!(snap.total, 10);
    assert_eq!(
        format!(
            "{}{}{}",
            snap.decomposition.left, snap.decomposition.pivot, snap.decomposition.right
        ),
        "This"
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn pause_seek_resume_round_trip() {
    let mut controller =
        PlaybackController::with_text(&TimingConfig::default(), "one two three four five");
    let now = Instant::now();

    controller.play(now);
    assert!(controller.poll(now + Duration::from_millis(200)));
    controller.pause();
    assert_eq!(controller.state(), PlaybackState::Paused);
    assert_eq!(controller.position(), 1);

    // Seeking while paused takes effect without starting playback
    controller.seek(3);
    assert_eq!(controller.current_unit(), Some("four"));
    assert_eq!(controller.state(), PlaybackState::Paused);

    let later = now + Duration::from_secs(1);
    controller.play(later);
    assert!(controller.poll(later + Duration::from_millis(200)));
    assert_eq!(controller.current_unit(), Some("five"));

    // The advancement after the last word returns to the start, idle
    assert!(controller.poll(later + Duration::from_millis(400)));
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.position(), 0);
}

#[test]
fn text_replacement_mid_playback_is_safe() {
    let mut controller =
        PlaybackController::with_text(&TimingConfig::default(), "a b c d e f g h");
    let now = Instant::now();
    controller.play(now);
    controller.poll(now + Duration::from_millis(200));

    controller.set_source_text("fresh words");
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.position(), 0);

    // Ticks scheduled against the old sequence can never fire
    assert!(!controller.poll(now + Duration::from_secs(60)));
    assert_eq!(controller.current_unit(), Some("fresh"));
}

#[test]
fn decomposition_matches_displayed_unit_for_every_word() {
    let text = "The quick brown fox jumps over the extraordinarily lazy dog.";
    let mut controller = PlaybackController::with_text(&TimingConfig::default(), text);
    let total = controller.len();

    for index in 0..total {
        controller.seek(index);
        let snap = controller.snapshot();
        let unit = snap.current_unit.expect("in-bounds position has a unit");
        for mode in [PivotMode::Recognition, PivotMode::Center] {
            let d = decompose(&unit, mode);
            assert_eq!(format!("{}{}{}", d.left, d.pivot, d.right), unit);
        }
    }
}

#[test]
fn session_store_records_across_instances() {
    let path = std::env::temp_dir().join(format!("swiftread_e2e_{}.tsv", std::process::id()));
    let _ = fs::remove_file(&path);

    {
        let mut store = SessionStore::new(&path);
        store.record(250, 300);
        store.record(90, 450);
    }

    // A fresh handle over the same file sees the history
    let mut store = SessionStore::new(&path);
    let summary = store.summary();
    assert_eq!(summary.total_sessions, 2);
    assert_eq!(summary.total_words, 340);

    store.clear();
    assert_eq!(store.summary().total_sessions, 0);
}
