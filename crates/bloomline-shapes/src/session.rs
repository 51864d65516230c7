//! Submission lifecycle: the `Idle`/`Submitting` state machine and the
//! end-to-end submission flow.

use crate::decorate::Decorate;
use crate::render::{ImageLoader, Renderer, Surface};
use crate::request::FormSnapshot;
use crate::types::DecorateError;

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Ready for a new submission.
    #[default]
    Idle,
    /// A submission is being decorated or rendered.
    Submitting,
}

impl Phase {
    /// `true` while a submission is in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Somewhere the current [`Phase`] is kept (a UI signal, a `Cell`, ...).
pub trait PhaseCell {
    /// Current phase.
    fn phase(&self) -> Phase;
    /// Replace the phase.
    fn set_phase(&mut self, phase: Phase);
}

impl PhaseCell for std::cell::Cell<Phase> {
    fn phase(&self) -> Phase {
        self.get()
    }

    fn set_phase(&mut self, phase: Phase) {
        self.set(phase);
    }
}

impl<T: PhaseCell> PhaseCell for &mut T {
    fn phase(&self) -> Phase {
        (**self).phase()
    }

    fn set_phase(&mut self, phase: Phase) {
        (**self).set_phase(phase);
    }
}

/// Holds the phase at [`Phase::Submitting`] for its lifetime.
///
/// Dropping the guard returns to [`Phase::Idle`], whichever way the
/// submission ended.
#[must_use = "dropping the guard immediately ends the submission"]
pub struct BusyGuard<C: PhaseCell> {
    cell: C,
}

impl<C: PhaseCell> BusyGuard<C> {
    /// Enter [`Phase::Submitting`].
    ///
    /// Returns `None` without touching the cell if a submission is
    /// already in flight.
    pub fn acquire(mut cell: C) -> Option<Self> {
        if cell.phase().is_busy() {
            return None;
        }
        cell.set_phase(Phase::Submitting);
        Some(Self { cell })
    }
}

impl<C: PhaseCell> Drop for BusyGuard<C> {
    fn drop(&mut self) {
        self.cell.set_phase(Phase::Idle);
    }
}

/// Build, send and draw one submission.
///
/// The request is built before anything else, so a bad custom shape
/// fails without any network traffic.
///
/// # Errors
///
/// Whatever the builder, the decorator or the renderer reports.
pub async fn submit<D, L, S>(
    snapshot: &FormSnapshot,
    decorator: &D,
    renderer: &Renderer<'_, L>,
    base: &mut S,
    overlay: &mut S,
) -> Result<(), DecorateError>
where
    D: Decorate,
    L: ImageLoader,
    S: Surface<Image = L::Image>,
{
    let request = snapshot.build()?;
    log::info!(
        "decorating {} at density {}",
        snapshot.shape.key(),
        request.density
    );

    let response = decorator.decorate(&request).await?;
    log::debug!("received {} flower placements", response.flower_path.len());

    renderer.render(&response, base, overlay).await
}
