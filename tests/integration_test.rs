#![allow(missing_docs)]

use std::time::Duration;

use tempfile::TempDir;

use folio::cli::{animate, print_page, LiveLine};
use folio::config::FolioConfig;
use folio::log::{JsonlLogger, RunRecord, StopReason};
use folio::portfolio::{PageRenderer, Portfolio, Reveal, Section};
use folio::typewriter::{Cycler, Mode, Typewriter};

const TEST_CONFIG: &str = r#"
[typewriter]
speed_ms = 100
cursor = "|"
cursor_mode = "typing"

[reveal]
stagger_ms = 10

[layout]
width = 50

[profile]
name = "Grace Hopper"
tagline = "It's easier to ask forgiveness than it is to get permission."
location = "Arlington, Virginia"
email = "mailto:grace@example.com"
github = "https://example.com/grace"
roles = ["AB", "C"]
skills = ["COBOL", "FLOW-MATIC", "Compilers"]
hobbies = ["Nanoseconds"]

[[profile.achievements]]
year = "1952"
what = "A-0 System"
"#;

/// Full run: config → page → typewriter animation → run log.
#[tokio::test(start_paused = true)]
async fn test_render_and_animate_end_to_end() {
    let config = FolioConfig::parse(TEST_CONFIG).unwrap();
    let portfolio = config.portfolio();
    let renderer = PageRenderer::new(config.layout.width);
    let mut reveal = Reveal::new(config.reveal.stagger());

    // Step 1: print the page
    let mut page = Vec::new();
    print_page(
        &renderer,
        &portfolio,
        &Section::ALL,
        &portfolio.roles.join(" · "),
        &mut reveal,
        &mut page,
    )
    .await
    .unwrap();

    let page = String::from_utf8(page).unwrap();
    assert!(page.contains("Grace"));
    assert!(page.contains("FLOW-MATIC"));
    assert!(page.contains("A-0 System"));
    assert!(page.contains("grace@example.com"));
    for section in Section::ALL {
        assert!(reveal.is_revealed(section));
    }

    // Step 2: animate one full AB/C cycle (100+100+50+50+100+50 = 450ms)
    let mut typewriter = Typewriter::new(
        portfolio.roles.clone(),
        config.typewriter.interval(),
        config.typewriter.cursor(),
    );
    let mut line = LiveLine::new(Vec::new());
    let stopped_by = animate(&mut typewriter, &mut line, async {
        tokio::time::sleep(Duration::from_millis(470)).await;
        StopReason::Elapsed
    })
    .await
    .unwrap();

    assert_eq!(stopped_by, StopReason::Elapsed);
    assert_eq!(typewriter.ticks(), 6);
    assert_eq!(typewriter.current(), "|");

    let frames = String::from_utf8(line.into_inner()).unwrap();
    assert!(frames.contains("A|"));
    assert!(frames.contains("C"));

    // Step 3: log the run and read it back
    let temp_dir = TempDir::new().unwrap();
    let logger = JsonlLogger::new(temp_dir.path()).unwrap();
    logger
        .append(&RunRecord {
            timestamp: chrono::Utc::now(),
            sections: Section::ALL.to_vec(),
            roles: typewriter.word_count(),
            ticks: typewriter.ticks(),
            duration_ms: 470,
            stopped_by,
        })
        .unwrap();

    let records = logger.read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].roles, 2);
    assert_eq!(records[0].ticks, 6);
    assert_eq!(records[0].stopped_by, StopReason::Elapsed);
}

/// The built-in roles keep every invariant over many full cycles.
#[test]
fn test_default_roles_cycle_invariants() {
    let roles = Portfolio::default().roles;
    let mut cycler = Cycler::new(roles.clone(), Duration::from_millis(70));

    let mut advances = 0;
    let mut prev_index = 0;
    for _ in 0..5_000 {
        let before_mode = cycler.mode();
        let before_len = cycler.text().chars().count();
        let delay = cycler.tick().unwrap();

        let word = &roles[cycler.index()];
        assert!(word.starts_with(cycler.text()));

        let len = cycler.text().chars().count();
        match before_mode {
            Mode::Typing => assert_eq!(len, before_len + 1),
            Mode::Deleting => assert_eq!(len + 1, before_len),
        }

        let expected_delay = match cycler.mode() {
            Mode::Typing => Duration::from_millis(70),
            Mode::Deleting => Duration::from_millis(35),
        };
        assert_eq!(delay, expected_delay);

        if cycler.index() != prev_index {
            assert_eq!(cycler.index(), (prev_index + 1) % roles.len());
            assert_eq!(len, 0);
            advances += 1;
        }
        prev_index = cycler.index();
    }
    assert!(advances > 0);
}

/// A profile without roles prints the page and never schedules a tick.
#[tokio::test(start_paused = true)]
async fn test_profile_without_roles_is_static() {
    let config = FolioConfig::parse("[profile]\nname = \"Anon\"\n").unwrap();
    let portfolio = config.portfolio();

    let mut typewriter = Typewriter::new(
        portfolio.roles.clone(),
        config.typewriter.interval(),
        config.typewriter.cursor(),
    );
    typewriter.start();
    assert!(!typewriter.is_running());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(typewriter.ticks(), 0);
    assert_eq!(typewriter.current(), "");
}
