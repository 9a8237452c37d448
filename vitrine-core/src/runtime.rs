//! Real-time carousel actors
//!
//! Each carousel runs in its own tokio task that owns the controller. Commands
//! arrive over an `mpsc` channel and autoplay ticks come from a
//! [`tokio::time::Interval`]; a single `select!` loop handles both so they can
//! never race. Observable state is published through a `watch` channel and
//! every page change is broadcast.
//!
//! Dropping a [`CarouselHandle`] cancels its task. No tick fires afterwards.

use std::future;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};
use vitrine_model::{Catalog, DealSlide, HeroSlide, Testimonial};

use crate::carousel::{
    AutoplayInterval, CarouselController, CarouselKey, CarouselSnapshot,
    PageChange,
};
use crate::error::{CarouselError, Result};
use crate::responsive::{GroupingPolicy, ResponsiveGrouping};
use crate::settings::StorefrontSettings;

const COMMAND_BUFFER: usize = 32;
const CHANGE_BUFFER: usize = 64;

/// Message accepted by a running carousel task.
#[derive(Debug)]
pub enum CarouselCommand {
    Next,
    Prev,
    GoTo {
        index: usize,
        reply: oneshot::Sender<Result<()>>,
    },
    SetHovered(bool),
    SetGroupSize {
        size: usize,
        reply: oneshot::Sender<Result<()>>,
    },
    SetAutoplayInterval(AutoplayInterval),
}

/// Cloneable sender half of a carousel task.
#[derive(Debug, Clone)]
pub struct CarouselCommander {
    key: CarouselKey,
    commands: mpsc::Sender<CarouselCommand>,
}

impl CarouselCommander {
    pub fn key(&self) -> CarouselKey {
        self.key
    }

    pub async fn send(&self, command: CarouselCommand) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| CarouselError::RuntimeStopped(self.key.to_string()))
    }

    pub async fn next(&self) -> Result<()> {
        self.send(CarouselCommand::Next).await
    }

    pub async fn prev(&self) -> Result<()> {
        self.send(CarouselCommand::Prev).await
    }

    pub async fn go_to(&self, index: usize) -> Result<()> {
        let (reply, response) = oneshot::channel();
        self.send(CarouselCommand::GoTo { index, reply }).await?;
        self.await_reply(response).await
    }

    pub async fn set_hovered(&self, hovered: bool) -> Result<()> {
        self.send(CarouselCommand::SetHovered(hovered)).await
    }

    pub async fn set_group_size(&self, size: usize) -> Result<()> {
        let (reply, response) = oneshot::channel();
        self.send(CarouselCommand::SetGroupSize { size, reply }).await?;
        self.await_reply(response).await
    }

    pub async fn set_autoplay_interval(
        &self,
        interval: AutoplayInterval,
    ) -> Result<()> {
        self.send(CarouselCommand::SetAutoplayInterval(interval)).await
    }

    async fn await_reply(
        &self,
        response: oneshot::Receiver<Result<()>>,
    ) -> Result<()> {
        response
            .await
            .map_err(|_| CarouselError::RuntimeStopped(self.key.to_string()))?
    }
}

/// Owner of a running carousel task.
#[derive(Debug)]
pub struct CarouselHandle<T> {
    commander: CarouselCommander,
    snapshots: watch::Receiver<CarouselSnapshot<T>>,
    changes: broadcast::Sender<PageChange>,
    cancel: CancellationToken,
    task: Option<JoinHandle<CarouselController<T>>>,
}

impl<T> CarouselHandle<T>
where
    T: Clone,
{
    pub fn key(&self) -> CarouselKey {
        self.commander.key
    }

    pub fn commander(&self) -> CarouselCommander {
        self.commander.clone()
    }

    /// Latest published state.
    pub fn snapshot(&self) -> CarouselSnapshot<T> {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot<T>> {
        self.snapshots.clone()
    }

    /// Stream of page changes, in the order they were applied.
    pub fn changes(&self) -> broadcast::Receiver<PageChange> {
        self.changes.subscribe()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub async fn next(&self) -> Result<()> {
        self.commander.next().await
    }

    pub async fn prev(&self) -> Result<()> {
        self.commander.prev().await
    }

    pub async fn go_to(&self, index: usize) -> Result<()> {
        self.commander.go_to(index).await
    }

    pub async fn set_hovered(&self, hovered: bool) -> Result<()> {
        self.commander.set_hovered(hovered).await
    }

    pub async fn set_group_size(&self, size: usize) -> Result<()> {
        self.commander.set_group_size(size).await
    }

    pub async fn set_autoplay_interval(
        &self,
        interval: AutoplayInterval,
    ) -> Result<()> {
        self.commander.set_autoplay_interval(interval).await
    }

    /// Stop the task and hand back the disposed controller.
    pub async fn shutdown(mut self) -> Result<CarouselController<T>> {
        self.cancel.cancel();
        let key = self.key();
        let task = self
            .task
            .take()
            .ok_or_else(|| CarouselError::RuntimeStopped(key.to_string()))?;
        task.await.map_err(|err| {
            warn!(carousel = %key, error = %err, "carousel task failed");
            CarouselError::RuntimeStopped(key.to_string())
        })
    }
}

impl<T> Drop for CarouselHandle<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawns carousel tasks onto the current tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct CarouselRuntime {
    cancel: CancellationToken,
}

impl CarouselRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks spawned by this runtime stop when `parent` is cancelled.
    pub fn with_parent(parent: &CancellationToken) -> Self {
        Self {
            cancel: parent.child_token(),
        }
    }

    /// Cancel every task spawned by this runtime.
    pub fn cancel_all(&self) {
        self.cancel.cancel();
    }

    pub fn spawn<T>(
        &self,
        controller: CarouselController<T>,
    ) -> CarouselHandle<T>
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        let key = controller.key();
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshots_tx, snapshots_rx) =
            watch::channel(controller.snapshot());
        let (changes_tx, _) = broadcast::channel(CHANGE_BUFFER);
        let cancel = self.cancel.child_token();

        let task = tokio::spawn(drive(
            controller,
            commands_rx,
            snapshots_tx,
            changes_tx.clone(),
            cancel.clone(),
        ));
        info!(carousel = %key, "carousel task started");

        CarouselHandle {
            commander: CarouselCommander {
                key,
                commands: commands_tx,
            },
            snapshots: snapshots_rx,
            changes: changes_tx,
            cancel,
            task: Some(task),
        }
    }
}

fn ticker_for<T>(controller: &CarouselController<T>) -> Option<Interval> {
    if !controller.autoplay().is_armed() {
        return None;
    }
    let period = controller.autoplay().interval().period()?;
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    Some(ticker)
}

async fn next_tick(ticker: &mut Option<Interval>) -> Instant {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => future::pending().await,
    }
}

fn reply_with(
    reply: oneshot::Sender<Result<()>>,
    result: Result<Option<PageChange>>,
) -> Option<PageChange> {
    let (change, outcome) = match result {
        Ok(change) => (change, Ok(())),
        Err(err) => (None, Err(err)),
    };
    // The caller may have given up waiting.
    let _ = reply.send(outcome);
    change
}

fn apply<T>(
    controller: &mut CarouselController<T>,
    command: CarouselCommand,
) -> Option<PageChange> {
    match command {
        CarouselCommand::Next => controller.next(),
        CarouselCommand::Prev => controller.prev(),
        CarouselCommand::GoTo { index, reply } => {
            reply_with(reply, controller.go_to(index))
        }
        CarouselCommand::SetHovered(hovered) => {
            controller.set_hovered(hovered);
            None
        }
        CarouselCommand::SetGroupSize { size, reply } => {
            reply_with(reply, controller.set_group_size(size))
        }
        CarouselCommand::SetAutoplayInterval(interval) => {
            controller.set_autoplay_interval(interval);
            None
        }
    }
}

async fn drive<T>(
    mut controller: CarouselController<T>,
    mut commands: mpsc::Receiver<CarouselCommand>,
    snapshots: watch::Sender<CarouselSnapshot<T>>,
    changes: broadcast::Sender<PageChange>,
    cancel: CancellationToken,
) -> CarouselController<T>
where
    T: Clone + PartialEq,
{
    let key = controller.key();
    let mut ticker = ticker_for(&controller);
    let mut generation = controller.autoplay().generation();

    loop {
        let change = tokio::select! {
            biased;

            _ = cancel.cancelled() => break,
            command = commands.recv() => match command {
                Some(command) => apply(&mut controller, command),
                None => break,
            },
            _ = next_tick(&mut ticker) => {
                let period = controller
                    .autoplay()
                    .interval()
                    .period()
                    .unwrap_or(Duration::ZERO);
                controller.advance(period)
            }
        };

        if controller.autoplay().generation() != generation {
            generation = controller.autoplay().generation();
            ticker = ticker_for(&controller);
            debug!(carousel = %key, generation, "autoplay re-armed");
        }

        if let Some(change) = change {
            // No subscribers is fine.
            let _ = changes.send(change);
        }
        let snapshot = controller.snapshot();
        snapshots.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }

    controller.dispose();
    snapshots.send_replace(controller.snapshot());
    info!(carousel = %key, "carousel task stopped");
    controller
}

/// The three storefront carousels running together, plus the viewport
/// observer that regroups testimonials.
#[derive(Debug)]
pub struct StorefrontRuntime {
    pub hero: CarouselHandle<HeroSlide>,
    pub deals: CarouselHandle<DealSlide>,
    pub testimonials: CarouselHandle<Testimonial>,
    viewport: Option<JoinHandle<()>>,
    cancel: CancellationToken,
    _guard: DropGuard,
}

impl StorefrontRuntime {
    /// Spawn every carousel and start following `widths`.
    pub fn start(
        catalog: &Catalog,
        settings: &StorefrontSettings,
        widths: watch::Receiver<u32>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let runtime = CarouselRuntime::with_parent(&cancel);

        let hero = runtime.spawn(CarouselController::new(
            CarouselKey::Hero,
            catalog.hero_slides.clone(),
            settings.hero,
        ));
        let deals = runtime.spawn(CarouselController::new(
            CarouselKey::Deals,
            catalog.deals.clone(),
            settings.deals,
        ));
        let testimonials = runtime.spawn(CarouselController::new(
            CarouselKey::Testimonials,
            catalog.testimonials.clone(),
            settings.testimonials,
        ));

        let viewport = tokio::spawn(follow_viewport(
            settings.responsive,
            widths,
            testimonials.commander(),
            cancel.child_token(),
        ));

        Self {
            hero,
            deals,
            testimonials,
            viewport: Some(viewport),
            _guard: cancel.clone().drop_guard(),
            cancel,
        }
    }

    pub fn commander(&self, key: CarouselKey) -> Result<CarouselCommander> {
        match key {
            CarouselKey::Hero => Ok(self.hero.commander()),
            CarouselKey::Deals => Ok(self.deals.commander()),
            CarouselKey::Testimonials => Ok(self.testimonials.commander()),
            CarouselKey::Custom(name) => {
                Err(CarouselError::UnknownCarousel(name.to_string()))
            }
        }
    }

    pub async fn set_hovered(
        &self,
        key: CarouselKey,
        hovered: bool,
    ) -> Result<()> {
        self.commander(key)?.set_hovered(hovered).await
    }

    /// Cancel every task and wait for them to finish.
    pub async fn shutdown(mut self) -> Result<()> {
        self.cancel.cancel();
        if let Some(viewport) = self.viewport.take()
            && let Err(err) = viewport.await
        {
            warn!(error = %err, "viewport observer failed");
        }
        let StorefrontRuntime {
            hero,
            deals,
            testimonials,
            ..
        } = self;
        hero.shutdown().await?;
        deals.shutdown().await?;
        testimonials.shutdown().await?;
        Ok(())
    }
}

/// Apply the current width immediately, then once per change.
async fn follow_viewport(
    policy: GroupingPolicy,
    mut widths: watch::Receiver<u32>,
    testimonials: CarouselCommander,
    cancel: CancellationToken,
) {
    widths.mark_unchanged();
    let mut grouping = ResponsiveGrouping::new(policy, widths.clone());
    let mut size = grouping.attach();

    loop {
        if let Err(err) = testimonials.set_group_size(size.get()).await {
            debug!(error = %err, "viewport observer detached");
            break;
        }

        tokio::select! {
            biased;

            _ = cancel.cancelled() => break,
            changed = widths.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }

        widths.mark_unchanged();
        match grouping.measure() {
            Some(next) => size = next,
            None => break,
        }
    }

    grouping.detach();
}
