// ui/overlay.rs
//
// Envelope + letter reveal sequencing.
//
// Each trigger applies one half of its transition immediately and the other
// half after `delay` seconds, so a CSS transition on the first half can finish
// before the second half starts. Time only moves when the host calls `tick`.
//
// Usage:
//   let mut overlay = OverlayController::new(0.5);
//   overlay.open();
//   overlay.tick(dt);                // once per frame
//   for change in overlay.drain_changes() { apply_to_dom(change); }

/// CSS class put on the envelope while it is open.
pub const CLASS_OPEN: &str = "open";
/// CSS class put on the letter while it is shown.
pub const CLASS_VISIBLE: &str = "visible";
/// CSS class put on the letter while it is hidden.
pub const CLASS_HIDDEN: &str = "hidden-letter";

/// The two elements the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayElement {
    Envelope,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOp {
    Add,
    Remove,
}

/// One class-list mutation for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassChange {
    pub element: OverlayElement,
    pub op: ClassOp,
    pub class: &'static str,
}

impl ClassChange {
    const fn add(element: OverlayElement, class: &'static str) -> Self {
        Self { element, op: ClassOp::Add, class }
    }

    const fn remove(element: OverlayElement, class: &'static str) -> Self {
        Self { element, op: ClassOp::Remove, class }
    }
}

/// Where the overlay is in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Envelope closed, letter hidden.
    Sealed,
    /// Envelope open, letter reveal pending.
    Opening,
    /// Envelope open, letter shown.
    Revealed,
    /// Letter hidden, envelope close pending.
    Hiding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    RevealLetter,
    CloseEnvelope,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    step: Step,
    remaining: f32,
}

/// Open/close state machine for the envelope and its letter.
#[derive(Debug)]
pub struct OverlayController {
    delay: f32,
    envelope_open: bool,
    letter_visible: bool,
    pending: Option<Pending>,
    changes: Vec<ClassChange>,
}

impl OverlayController {
    /// `delay` is the gap in seconds between the two halves of a transition.
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            envelope_open: false,
            letter_visible: false,
            pending: None,
            changes: Vec::with_capacity(8),
        }
    }

    /// Envelope activated: open it now, reveal the letter after the delay.
    /// Supersedes a close that is still waiting to shut the envelope.
    pub fn open(&mut self) {
        self.envelope_open = true;
        self.changes.push(ClassChange::add(OverlayElement::Envelope, CLASS_OPEN));
        self.schedule(Step::RevealLetter);
    }

    /// Close requested: hide the letter now, close the envelope after the delay.
    /// Supersedes an open that is still waiting to reveal the letter.
    pub fn close(&mut self) {
        self.letter_visible = false;
        self.changes.push(ClassChange::remove(OverlayElement::Letter, CLASS_VISIBLE));
        self.changes.push(ClassChange::add(OverlayElement::Letter, CLASS_HIDDEN));
        self.schedule(Step::CloseEnvelope);
    }

    /// Advance pending timers by `dt` seconds, firing a step once its delay has elapsed.
    pub fn tick(&mut self, dt: f32) {
        let Some(mut pending) = self.pending else {
            return;
        };
        pending.remaining -= dt.max(0.0);
        if pending.remaining > 0.0 {
            self.pending = Some(pending);
            return;
        }
        self.pending = None;
        self.apply(pending.step);
    }

    /// Take every class change recorded since the last drain, in order.
    pub fn drain_changes(&mut self) -> Vec<ClassChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn envelope_open(&self) -> bool {
        self.envelope_open
    }

    pub fn letter_visible(&self) -> bool {
        self.letter_visible
    }

    /// Seconds until the pending step fires, if any.
    pub fn pending_remaining(&self) -> Option<f32> {
        self.pending.map(|p| p.remaining)
    }

    pub fn phase(&self) -> OverlayPhase {
        match (self.pending.map(|p| p.step), self.letter_visible) {
            (Some(Step::RevealLetter), _) => OverlayPhase::Opening,
            (Some(Step::CloseEnvelope), _) => OverlayPhase::Hiding,
            (None, true) => OverlayPhase::Revealed,
            (None, false) if self.envelope_open => OverlayPhase::Opening,
            (None, false) => OverlayPhase::Sealed,
        }
    }

    fn schedule(&mut self, step: Step) {
        if let Some(prev) = self.pending {
            if prev.step != step {
                log::debug!("overlay: {:?} superseded by {:?}", prev.step, step);
            }
        }
        if self.delay <= 0.0 {
            self.pending = None;
            self.apply(step);
        } else {
            self.pending = Some(Pending {
                step,
                remaining: self.delay,
            });
        }
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::RevealLetter => {
                self.letter_visible = true;
                self.changes.push(ClassChange::remove(OverlayElement::Letter, CLASS_HIDDEN));
                self.changes.push(ClassChange::add(OverlayElement::Letter, CLASS_VISIBLE));
            }
            Step::CloseEnvelope => {
                self.envelope_open = false;
                self.changes.push(ClassChange::remove(OverlayElement::Envelope, CLASS_OPEN));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_for(overlay: &mut OverlayController, seconds: f32) {
        let frames = (seconds / FRAME).round() as usize;
        for _ in 0..frames {
            overlay.tick(FRAME);
        }
    }

    #[test]
    fn starts_sealed() {
        let overlay = OverlayController::new(0.5);
        assert_eq!(overlay.phase(), OverlayPhase::Sealed);
        assert!(!overlay.envelope_open());
        assert!(!overlay.letter_visible());
    }

    #[test]
    fn open_opens_envelope_immediately() {
        let mut overlay = OverlayController::new(0.5);
        overlay.open();
        assert!(overlay.envelope_open());
        assert!(!overlay.letter_visible());
        assert_eq!(overlay.phase(), OverlayPhase::Opening);
        assert_eq!(
            overlay.drain_changes(),
            vec![ClassChange::add(OverlayElement::Envelope, CLASS_OPEN)]
        );
    }

    #[test]
    fn letter_revealed_after_delay_not_before() {
        let mut overlay = OverlayController::new(0.5);
        overlay.open();
        overlay.drain_changes();

        overlay.tick(0.4);
        assert!(!overlay.letter_visible());
        assert!(overlay.drain_changes().is_empty());

        overlay.tick(0.1);
        assert!(overlay.letter_visible());
        assert_eq!(overlay.phase(), OverlayPhase::Revealed);
        assert_eq!(
            overlay.drain_changes(),
            vec![
                ClassChange::remove(OverlayElement::Letter, CLASS_HIDDEN),
                ClassChange::add(OverlayElement::Letter, CLASS_VISIBLE),
            ]
        );
    }

    #[test]
    fn close_hides_letter_then_closes_envelope() {
        let mut overlay = OverlayController::new(0.5);
        overlay.open();
        run_for(&mut overlay, 0.6);
        overlay.drain_changes();

        overlay.close();
        assert!(!overlay.letter_visible());
        assert!(overlay.envelope_open());
        assert_eq!(overlay.phase(), OverlayPhase::Hiding);
        assert_eq!(
            overlay.drain_changes(),
            vec![
                ClassChange::remove(OverlayElement::Letter, CLASS_VISIBLE),
                ClassChange::add(OverlayElement::Letter, CLASS_HIDDEN),
            ]
        );

        run_for(&mut overlay, 0.55);
        assert!(!overlay.envelope_open());
        assert_eq!(overlay.phase(), OverlayPhase::Sealed);
        assert_eq!(
            overlay.drain_changes(),
            vec![ClassChange::remove(OverlayElement::Envelope, CLASS_OPEN)]
        );
    }

    #[test]
    fn close_during_reveal_cancels_reveal() {
        let mut overlay = OverlayController::new(0.5);
        overlay.open();
        overlay.tick(0.2);
        overlay.close();
        run_for(&mut overlay, 1.0);

        assert!(!overlay.letter_visible());
        assert!(!overlay.envelope_open());
        let changes = overlay.drain_changes();
        assert!(!changes.contains(&ClassChange::add(OverlayElement::Letter, CLASS_VISIBLE)));
    }

    #[test]
    fn open_during_hide_keeps_envelope_open() {
        let mut overlay = OverlayController::new(0.5);
        overlay.open();
        run_for(&mut overlay, 0.6);
        overlay.close();
        overlay.tick(0.1);
        overlay.open();
        run_for(&mut overlay, 0.6);

        assert!(overlay.envelope_open());
        assert!(overlay.letter_visible());
    }

    #[test]
    fn zero_delay_applies_both_halves_at_once() {
        let mut overlay = OverlayController::new(0.0);
        overlay.open();
        assert!(overlay.letter_visible());
        assert_eq!(overlay.pending_remaining(), None);
        assert_eq!(overlay.drain_changes().len(), 3);
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut overlay = OverlayController::new(0.5);
        overlay.open();
        overlay.tick(-1.0);
        assert_eq!(overlay.pending_remaining(), Some(0.5));
    }
}
