use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use youtube_quick_jump::{jump, parse_timestamp, MemoryPage, PageSnapshot, VideoPage};

// A watch page as a page script would capture it: a main player and a
// muted preview thumbnail in the sidebar
const SNAPSHOT: &str = r#"{
    "location": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    "viewport": { "width": 1280, "height": 720 },
    "videos": [
        {
            "readyState": 1,
            "rect": { "left": 900, "top": 120, "width": 168, "height": 94 },
            "duration": null
        },
        {
            "readyState": 4,
            "rect": { "left": 24, "top": 80, "width": 854, "height": 480 },
            "classList": ["video-stream", "html5-main-video"],
            "duration": 212.0,
            "paused": true
        }
    ]
}"#;

/// Parse a timestamp from the command line and jump a simulated page to it
fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = std::env::args().nth(1).unwrap_or_else(|| "1:23".to_string());

    // Step 1: Check the input on its own
    match parse_timestamp(&input) {
        Some(seconds) => println!("{:?} parses to {} seconds", input, seconds),
        None => {
            println!("Invalid time. Try 1:23:45 or 95s or 123");
            return Ok(());
        }
    }

    // Step 2: Build a page from the captured snapshot
    let mut page = MemoryPage::from_snapshot(PageSnapshot::from_json(SNAPSHOT)?);

    // Step 3: Parse and seek in one go
    let outcome = jump(&mut page, &input)?;
    println!("Outcome: {:?}", outcome);

    // Step 4: Inspect what the page saw
    let after = page.snapshot();
    for (index, video) in after.videos.iter().enumerate() {
        println!(
            "video {}: currentTime={:?} paused={}",
            index,
            page.current_time(index),
            video.paused
        );
    }

    Ok(())
}
