pub mod overlay;

pub use overlay::{
    ClassChange, ClassOp, OverlayController, OverlayElement, OverlayPhase,
    CLASS_HIDDEN, CLASS_OPEN, CLASS_VISIBLE,
};
