use url::Url;

use youtube_quick_jump::resolver::qualifies;
use youtube_quick_jump::{
    resolve_with, BoundingRect, PageSnapshot, Settings, VideoCandidate, Viewport,
    MAIN_PLAYER_CLASS,
};

fn snapshot(videos: Vec<VideoCandidate>) -> PageSnapshot {
    let mut snapshot = PageSnapshot::new(
        Url::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
        Viewport::new(1280.0, 720.0),
    );
    snapshot.videos = videos;
    snapshot
}

fn video(left: f64, top: f64, width: f64, height: f64) -> VideoCandidate {
    VideoCandidate {
        ready_state: 4,
        rect: BoundingRect::new(left, top, width, height),
        duration: 212.0,
        ..Default::default()
    }
}

fn main_player(mut v: VideoCandidate) -> VideoCandidate {
    v.class_list = vec!["video-stream".to_string(), MAIN_PLAYER_CLASS.to_string()];
    v
}

// Test the largest visible video wins
#[test]
fn test_largest_area_wins() {
    let snap = snapshot(vec![
        video(0.0, 0.0, 320.0, 180.0),
        video(0.0, 200.0, 640.0, 360.0),
        video(700.0, 0.0, 160.0, 90.0),
    ]);
    let (index, chosen) =
        resolve_with(&snap, &Settings::default()).expect("a video should qualify");
    assert_eq!(index, 1);
    assert_eq!(chosen.rect.area(), 640.0 * 360.0);
}

// Test the 100 vs 400 px² case with and without a main player flag
#[test]
fn test_main_player_overrides_area() {
    // A 10x10 box sits exactly on the default threshold, so lower it
    let settings = Settings {
        min_visible_px: 5.0,
        ..Settings::default()
    };
    let area_100 = video(0.0, 0.0, 10.0, 10.0);
    let area_400 = video(50.0, 0.0, 20.0, 20.0);

    let snap = snapshot(vec![area_100.clone(), area_400.clone()]);
    assert_eq!(resolve_with(&snap, &settings).map(|(i, _)| i), Some(1));

    let snap = snapshot(vec![main_player(area_100), area_400]);
    assert_eq!(resolve_with(&snap, &settings).map(|(i, _)| i), Some(0));
}

// Test ties are broken by DOM order
#[test]
fn test_tie_keeps_first() {
    let snap = snapshot(vec![
        video(0.0, 0.0, 320.0, 180.0),
        video(400.0, 0.0, 320.0, 180.0),
    ]);
    let (index, _) = resolve_with(&snap, &Settings::default()).unwrap();
    assert_eq!(index, 0);
}

// Test videos that have not started loading are excluded
#[test]
fn test_unloaded_excluded() {
    let mut big = video(0.0, 0.0, 1280.0, 720.0);
    big.ready_state = 0;
    let snap = snapshot(vec![big, video(0.0, 0.0, 320.0, 180.0)]);
    let (index, _) = resolve_with(&snap, &Settings::default()).unwrap();
    assert_eq!(index, 1);
}

// Test an unloaded main player is not chosen
#[test]
fn test_unloaded_main_player_excluded() {
    let mut main = main_player(video(0.0, 0.0, 1280.0, 720.0));
    main.ready_state = 0;
    let snap = snapshot(vec![main, video(0.0, 0.0, 320.0, 180.0)]);
    let (index, _) = resolve_with(&snap, &Settings::default()).unwrap();
    assert_eq!(index, 1);
}

// Test CSS-hidden and off-screen videos are excluded
#[test]
fn test_hidden_excluded() {
    let settings = Settings::default();
    let viewport = Viewport::new(1280.0, 720.0);

    let mut hidden = video(0.0, 0.0, 640.0, 360.0);
    hidden.visibility = "hidden".to_string();
    assert!(!qualifies(&hidden, &viewport, &settings));

    let mut undisplayed = video(0.0, 0.0, 640.0, 360.0);
    undisplayed.display = "none".to_string();
    assert!(!qualifies(&undisplayed, &viewport, &settings));

    let below_fold = video(0.0, 720.0, 640.0, 360.0);
    assert!(!qualifies(&below_fold, &viewport, &settings));

    let right_of_view = video(1280.0, 0.0, 640.0, 360.0);
    assert!(!qualifies(&right_of_view, &viewport, &settings));

    let tiny = video(0.0, 0.0, 8.0, 8.0);
    assert!(!qualifies(&tiny, &viewport, &settings));

    let snap = snapshot(vec![hidden, undisplayed, below_fold, right_of_view, tiny]);
    assert!(resolve_with(&snap, &settings).is_none());
}

// Test an empty page resolves to nothing
#[test]
fn test_no_videos() {
    let snap = snapshot(Vec::new());
    assert!(resolve_with(&snap, &Settings::default()).is_none());
}
