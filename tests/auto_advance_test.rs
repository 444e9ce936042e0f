use site_carousel::{
    AutoAdvance, AutoAdvanceConfig, Carousel, CarouselItem, Direction, StartPolicy,
    TransitionEvent,
};
use std::time::Duration;
use tokio::time::Instant;
use tokio_test::{assert_err, assert_ok};

fn autumn() -> Carousel {
    Carousel::new(
        vec![
            CarouselItem::present("September 2024", "photos/September2024.jpeg"),
            CarouselItem::present("October 2024", "photos/October2024.jpeg"),
            CarouselItem::present("November 2024", "photos/November2024.jpeg"),
        ],
        StartPolicy::Last,
    )
    .unwrap()
}

fn config(reset_on_manual: bool) -> AutoAdvanceConfig {
    AutoAdvanceConfig {
        interval: Duration::from_millis(8000),
        transition_delay: Duration::from_millis(1500),
        reset_on_manual,
    }
}

/// 暫停時鐘下的計時誤差容忍 (毫秒對齊)
fn assert_at(start: Instant, expected_ms: u64) {
    let elapsed = start.elapsed();
    let expected = Duration::from_millis(expected_ms);
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(5),
        "expected event at {:?}, got {:?}",
        expected,
        elapsed
    );
}

#[tokio::test(start_paused = true)]
async fn test_begin_commit_schedule() {
    let start = Instant::now();
    let (_handle, mut events) = AutoAdvance::start(autumn(), config(false)).unwrap();

    let begin = events.recv().await.unwrap();
    assert_at(start, 8000);
    assert_eq!(
        begin,
        TransitionEvent::Begin {
            outgoing: CarouselItem::present("November 2024", "photos/November2024.jpeg"),
            index: 2,
        }
    );

    let commit = events.recv().await.unwrap();
    assert_at(start, 9500);
    assert_eq!(commit.index(), 0);
    assert_eq!(commit.item().label, "September 2024");

    let next_begin = events.recv().await.unwrap();
    assert_at(start, 16000);
    assert!(matches!(next_begin, TransitionEvent::Begin { index: 0, .. }));

    let next_commit = events.recv().await.unwrap();
    assert_at(start, 17500);
    assert_eq!(next_commit.item().label, "October 2024");
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_does_not_reset_timer_by_default() {
    let start = Instant::now();
    let (handle, mut events) = AutoAdvance::start(autumn(), config(false)).unwrap();

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(handle.advance(Direction::Backward).label, "October 2024");

    let begin = events.recv().await.unwrap();
    assert_at(start, 8000);
    // 計時器與手動導覽共用同一個索引
    assert_eq!(begin.index(), 1);

    let commit = events.recv().await.unwrap();
    assert_eq!(commit.item().label, "November 2024");
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_resets_timer_when_configured() {
    let start = Instant::now();
    let (handle, mut events) = AutoAdvance::start(autumn(), config(true)).unwrap();

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_ok!(handle.jump_to(0));

    let begin = events.recv().await.unwrap();
    assert_at(start, 13000);
    assert_eq!(begin.index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_reset_during_fade_counts_from_manual_action() {
    let start = Instant::now();
    let (handle, mut events) = AutoAdvance::start(autumn(), config(true)).unwrap();

    let begin = events.recv().await.unwrap();
    assert_at(start, 8000);
    assert_eq!(begin.index(), 2);

    // 淡出進行中手動跳轉
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_ok!(handle.jump_to(0));

    // 進行中的 commit 照常發生，從跳轉後的位置前進
    let commit = events.recv().await.unwrap();
    assert_at(start, 9500);
    assert_eq!(commit.index(), 1);
    assert_eq!(commit.item().label, "October 2024");

    let next_begin = events.recv().await.unwrap();
    assert_at(start, 16_500);
    assert!(matches!(next_begin, TransitionEvent::Begin { index: 1, .. }));
}

#[tokio::test(start_paused = true)]
async fn test_pause_during_fade_still_commits() {
    let start = Instant::now();
    let (handle, mut events) = AutoAdvance::start(autumn(), config(false)).unwrap();

    assert!(matches!(events.recv().await.unwrap(), TransitionEvent::Begin { .. }));
    handle.pause();

    let commit = events.recv().await.unwrap();
    assert_at(start, 9500);
    assert_eq!(commit.index(), 0);

    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert!(events.try_recv().is_err());
    assert_eq!(handle.index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_out_of_range_jump_is_rejected_through_handle() {
    let (handle, _events) = AutoAdvance::start(autumn(), config(false)).unwrap();

    assert_err!(handle.jump_to(3));
    assert_err!(handle.jump_to(-1));
    assert_eq!(handle.index(), 2);
    assert_eq!(handle.current().label, "November 2024");
}

#[tokio::test(start_paused = true)]
async fn test_pause_and_resume() {
    let start = Instant::now();
    let (handle, mut events) = AutoAdvance::start(autumn(), config(false)).unwrap();

    handle.pause();
    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert!(events.try_recv().is_err());
    assert_eq!(handle.index(), 2);

    handle.resume();
    let begin = events.recv().await.unwrap();
    assert_at(start, 28_000);
    assert_eq!(begin.index(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_stop_cancels_timer() {
    let (mut handle, mut events) = AutoAdvance::start(autumn(), config(false)).unwrap();
    assert!(handle.is_running());

    handle.stop();
    handle.stop();

    tokio::time::sleep(Duration::from_millis(60_000)).await;
    assert!(events.recv().await.is_none());
    assert_eq!(handle.index(), 2);
    assert!(!handle.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_stop_mid_transition_skips_commit() {
    let (mut handle, mut events) = AutoAdvance::start(autumn(), config(false)).unwrap();

    let begin = events.recv().await.unwrap();
    assert!(matches!(begin, TransitionEvent::Begin { .. }));

    handle.stop();
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(events.recv().await.is_none());
    assert_eq!(handle.index(), 2);
}

#[tokio::test]
async fn test_invalid_timing_is_rejected() {
    let bad = AutoAdvanceConfig {
        interval: Duration::from_millis(1000),
        transition_delay: Duration::from_millis(1500),
        reset_on_manual: false,
    };
    assert!(AutoAdvance::start(autumn(), bad).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_receiver_ends_timer() {
    let (handle, events) = AutoAdvance::start(autumn(), config(false)).unwrap();
    drop(events);

    tokio::time::sleep(Duration::from_millis(9000)).await;
    tokio::task::yield_now().await;
    assert!(!handle.is_running());
    assert_eq!(handle.index(), 2);
}
