//! Real-time storefront run

use std::future;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tokio::time::{Instant, sleep, sleep_until};
use tracing::{info, warn};
use vitrine_core::model::Catalog;
use vitrine_core::{
    CarouselKey, CarouselSnapshot, PageChange, StorefrontRuntime,
    StorefrontSettings,
};

use crate::args::RunArgs;

/// Final state of one carousel after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSummary {
    pub key: CarouselKey,
    pub changes: usize,
    pub current_index: usize,
    pub page_count: usize,
    pub group_size: usize,
}

impl CarouselSummary {
    fn new<T>(snapshot: &CarouselSnapshot<T>, changes: usize) -> Self {
        Self {
            key: snapshot.key,
            changes,
            current_index: snapshot.current_index,
            page_count: snapshot.page_count,
            group_size: snapshot.group_size,
        }
    }
}

impl std::fmt::Display for CarouselSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<13} {:>3} page change(s), on page {}/{} (group size {})",
            self.key.as_str(),
            self.changes,
            self.current_index + 1,
            self.page_count,
            self.group_size
        )
    }
}

#[derive(Default)]
struct Counters {
    hero: usize,
    deals: usize,
    testimonials: usize,
}

impl Counters {
    fn record(&mut self, change: &PageChange) {
        match change.key {
            CarouselKey::Hero => self.hero += 1,
            CarouselKey::Deals => self.deals += 1,
            CarouselKey::Testimonials => self.testimonials += 1,
            CarouselKey::Custom(_) => {}
        }
    }
}

async fn recv_change(
    changes: &mut broadcast::Receiver<PageChange>,
) -> Option<PageChange> {
    loop {
        match changes.recv().await {
            Ok(change) => return Some(change),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "page change log fell behind");
            }
            Err(RecvError::Closed) => return None,
        }
    }
}

async fn resize_due(at: Option<Instant>) {
    match at {
        Some(at) => sleep_until(at).await,
        None => future::pending().await,
    }
}

fn describe(runtime: &StorefrontRuntime, key: CarouselKey) -> String {
    match key {
        CarouselKey::Hero => runtime
            .hero
            .snapshot()
            .page
            .first()
            .map(|slide| slide.heading.clone())
            .unwrap_or_default(),
        CarouselKey::Deals => runtime
            .deals
            .snapshot()
            .page
            .first()
            .map(|slide| slide.title.clone())
            .unwrap_or_default(),
        CarouselKey::Testimonials => runtime
            .testimonials
            .snapshot()
            .page
            .iter()
            .map(|quote| quote.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        CarouselKey::Custom(_) => String::new(),
    }
}

/// Drive every carousel until `args.duration` has elapsed.
pub async fn run(
    catalog: &Catalog,
    settings: &StorefrontSettings,
    args: &RunArgs,
) -> Result<Vec<CarouselSummary>> {
    let (widths_tx, widths) = watch::channel(args.width);
    let runtime = StorefrontRuntime::start(catalog, settings, widths);

    for carousel in &args.hover {
        let key = CarouselKey::from(*carousel);
        runtime
            .set_hovered(key, true)
            .await
            .with_context(|| format!("failed to hover {key}"))?;
        info!(carousel = %key, "pointer parked over carousel");
    }

    let mut hero = runtime.hero.changes();
    let mut deals = runtime.deals.changes();
    let mut testimonials = runtime.testimonials.changes();

    let mut resizes = args.resize_at.clone();
    resizes.sort_by_key(|resize| resize.after);
    let mut resizes = resizes.into_iter().peekable();

    let start = Instant::now();
    let deadline = sleep(args.duration);
    tokio::pin!(deadline);
    let mut counters = Counters::default();

    info!(
        duration = %humantime::format_duration(args.duration),
        width = args.width,
        "storefront run started"
    );

    loop {
        let next_resize = resizes.peek().map(|resize| start + resize.after);
        let change = tokio::select! {
            _ = &mut deadline => break,
            _ = resize_due(next_resize) => {
                if let Some(resize) = resizes.next() {
                    info!(width = resize.width, "viewport resized");
                    widths_tx.send_replace(resize.width);
                }
                None
            }
            Some(change) = recv_change(&mut hero) => Some(change),
            Some(change) = recv_change(&mut deals) => Some(change),
            Some(change) = recv_change(&mut testimonials) => Some(change),
        };

        if let Some(change) = change {
            counters.record(&change);
            let elapsed = elapsed_ms(start);
            info!(
                carousel = %change.key,
                from = change.from,
                to = change.to,
                reason = ?change.reason,
                elapsed_ms = elapsed,
                showing = %describe(&runtime, change.key),
                "page changed"
            );
        }
    }

    let summaries = vec![
        CarouselSummary::new(&runtime.hero.snapshot(), counters.hero),
        CarouselSummary::new(&runtime.deals.snapshot(), counters.deals),
        CarouselSummary::new(
            &runtime.testimonials.snapshot(),
            counters.testimonials,
        ),
    ];

    runtime
        .shutdown()
        .await
        .context("storefront runtime did not shut down cleanly")?;
    info!("storefront run finished");
    Ok(summaries)
}

fn elapsed_ms(start: Instant) -> u64 {
    let elapsed: Duration = start.elapsed();
    elapsed.as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{CarouselArg, ResizeAt};

    fn args(seconds: u64) -> RunArgs {
        RunArgs {
            duration: Duration::from_secs(seconds),
            width: 1024,
            hover: Vec::new(),
            resize_at: Vec::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn counts_autoplay_changes_per_carousel() {
        let summaries = run(
            &Catalog::storefront(),
            &StorefrontSettings::default(),
            &args(13),
        )
        .await
        .unwrap();

        assert_eq!(summaries[0].key, CarouselKey::Hero);
        assert_eq!(summaries[0].changes, 2);
        assert_eq!(summaries[1].changes, 2);
        assert_eq!(summaries[2].changes, 2);
        assert_eq!(summaries[2].group_size, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn hovered_carousels_hold_still() {
        let mut args = args(18);
        args.hover = vec![CarouselArg::Deals];
        let summaries = run(
            &Catalog::storefront(),
            &StorefrontSettings::default(),
            &args,
        )
        .await
        .unwrap();
        assert_eq!(summaries[1].changes, 0);
        assert_eq!(summaries[1].current_index, 0);
        assert_eq!(summaries[0].changes, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_resize_regroups_testimonials() {
        let mut args = args(3);
        args.resize_at = vec![ResizeAt {
            after: Duration::from_secs(1),
            width: 600,
        }];
        let summaries = run(
            &Catalog::storefront(),
            &StorefrontSettings::default(),
            &args,
        )
        .await
        .unwrap();
        assert_eq!(summaries[2].group_size, 1);
        assert_eq!(summaries[2].page_count, 4);
    }
}
