use std::time::Duration;

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::watch;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use vitrine_core::model::Catalog;
use vitrine_core::{
    AdvanceReason, AutoplayInterval, CarouselController, CarouselError,
    CarouselKey, CarouselRuntime, StorefrontRuntime, StorefrontSettings,
};

fn hero(interval_ms: i64) -> CarouselController<&'static str> {
    CarouselController::try_new(
        CarouselKey::Hero,
        vec!["a", "b", "c"],
        1,
        interval_ms,
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn autoplay_advances_once_per_interval() {
    let runtime = CarouselRuntime::new();
    let handle = runtime.spawn(hero(5_000));
    let mut changes = handle.changes();
    let start = Instant::now();

    let change = changes.recv().await.unwrap();
    assert_eq!(change.to, 1);
    assert_eq!(change.reason, AdvanceReason::Autoplay);
    assert_eq!(start.elapsed(), Duration::from_millis(5_000));
    assert_eq!(handle.snapshot().page, vec!["b"]);

    let change = changes.recv().await.unwrap();
    assert_eq!(change.to, 2);
    assert_eq!(start.elapsed(), Duration::from_millis(10_000));
}

#[tokio::test(start_paused = true)]
async fn hover_skips_ticks_without_shifting_phase() {
    let handle = CarouselRuntime::new().spawn(hero(5_000));
    let mut changes = handle.changes();
    let start = Instant::now();

    handle.set_hovered(true).await.unwrap();
    sleep(Duration::from_millis(12_000)).await;
    assert_eq!(handle.snapshot().current_index, 0);
    assert!(handle.snapshot().hover_paused);

    handle.set_hovered(false).await.unwrap();
    let change = changes.recv().await.unwrap();
    assert_eq!(change.to, 1);
    assert_eq!(start.elapsed(), Duration::from_millis(15_000));
}

#[tokio::test(start_paused = true)]
async fn manual_navigation_is_serialized_with_ticks() {
    let handle = CarouselRuntime::new().spawn(hero(0));
    let mut changes = handle.changes();

    handle.next().await.unwrap();
    handle.prev().await.unwrap();
    handle.go_to(2).await.unwrap();

    let reasons: Vec<_> = [
        changes.recv().await.unwrap(),
        changes.recv().await.unwrap(),
        changes.recv().await.unwrap(),
    ]
    .into_iter()
    .map(|change| (change.reason, change.to))
    .collect();
    assert_eq!(
        reasons,
        vec![
            (AdvanceReason::ManualNext, 1),
            (AdvanceReason::ManualPrev, 0),
            (AdvanceReason::Jump, 2),
        ]
    );

    let err = handle.go_to(7).await.unwrap_err();
    assert_eq!(
        err,
        CarouselError::OutOfRange {
            index: 7,
            page_count: 3
        }
    );
    assert_eq!(handle.snapshot().current_index, 2);
}

#[tokio::test(start_paused = true)]
async fn interval_change_restarts_the_countdown() {
    let handle = CarouselRuntime::new().spawn(hero(5_000));
    let mut changes = handle.changes();
    let start = Instant::now();

    sleep(Duration::from_millis(3_000)).await;
    handle
        .set_autoplay_interval(AutoplayInterval::from_millis(5_000).unwrap())
        .await
        .unwrap();

    changes.recv().await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(8_000));
}

#[tokio::test(start_paused = true)]
async fn shutdown_disposes_the_controller() {
    let handle = CarouselRuntime::new().spawn(hero(5_000));
    let mut changes = handle.changes();

    let controller = handle.shutdown().await.unwrap();
    assert!(!controller.autoplay().is_armed());

    sleep(Duration::from_secs(60)).await;
    assert!(matches!(changes.try_recv(), Err(TryRecvError::Closed)));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_ticks() {
    let handle = CarouselRuntime::new().spawn(hero(5_000));
    let mut changes = handle.changes();
    let commander = handle.commander();
    drop(handle);

    sleep(Duration::from_secs(60)).await;
    assert!(matches!(changes.try_recv(), Err(TryRecvError::Closed)));
    assert!(matches!(
        commander.next().await,
        Err(CarouselError::RuntimeStopped(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn cancel_all_stops_every_spawned_carousel() {
    let runtime = CarouselRuntime::new();
    let first = runtime.spawn(hero(5_000));
    let second = runtime.spawn(hero(1_000));
    let mut first_changes = first.changes();
    let mut second_changes = second.changes();

    sleep(Duration::from_millis(1_500)).await;
    assert_eq!(second_changes.recv().await.unwrap().to, 1);

    runtime.cancel_all();
    sleep(Duration::from_secs(60)).await;

    assert!(!first.is_running());
    assert!(!second.is_running());
    assert!(matches!(first_changes.try_recv(), Err(TryRecvError::Empty)));
    assert!(matches!(second_changes.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(first.snapshot().current_index, 0);
    assert!(matches!(
        second.next().await,
        Err(CarouselError::RuntimeStopped(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn parent_cancellation_reaches_child_tasks() {
    let parent = CancellationToken::new();
    let handle = CarouselRuntime::with_parent(&parent).spawn(hero(5_000));
    let token = handle.cancellation_token();
    assert!(!token.is_cancelled());

    parent.cancel();
    token.cancelled().await;
    sleep(Duration::from_secs(30)).await;
    assert!(!handle.is_running());
    assert_eq!(handle.snapshot().current_index, 0);
}

#[tokio::test(start_paused = true)]
async fn cancelling_a_handle_token_leaves_siblings_running() {
    let runtime = CarouselRuntime::new();
    let stopped = runtime.spawn(hero(5_000));
    let running = runtime.spawn(hero(5_000));
    let mut changes = running.changes();

    stopped.cancellation_token().cancel();
    assert_eq!(changes.recv().await.unwrap().to, 1);
    assert!(!stopped.is_running());
    assert_eq!(stopped.snapshot().current_index, 0);
}

#[tokio::test(start_paused = true)]
async fn storefront_runtime_follows_the_viewport() {
    let (widths_tx, widths) = watch::channel(1024u32);
    let runtime = StorefrontRuntime::start(
        &Catalog::storefront(),
        &StorefrontSettings::default(),
        widths,
    );

    let mut testimonials = runtime.testimonials.subscribe();
    testimonials
        .wait_for(|snapshot| snapshot.group_size == 2)
        .await
        .unwrap();

    widths_tx.send(600).unwrap();
    let snapshot = testimonials
        .wait_for(|snapshot| snapshot.group_size == 1)
        .await
        .unwrap()
        .clone();
    assert_eq!(snapshot.page_count, 4);

    runtime.set_hovered(CarouselKey::Deals, true).await.unwrap();
    assert!(matches!(
        runtime.set_hovered(CarouselKey::Custom("x"), true).await,
        Err(CarouselError::UnknownCarousel(_))
    ));

    runtime.shutdown().await.unwrap();
}
