//! Monthly report lifecycle workflow.
//!
//! This module gates who may edit, submit, approve, remand, and finalize a
//! month's report. It is independent of the numeric pipeline: it only
//! decides whether the pipeline's inputs may currently be mutated and which
//! timestamps to record when the report moves between states.

mod transition;

pub use transition::{
    attempt_transition, may_edit, Actor, ActorRole, SideEffect, TransitionAction,
    TransitionOutcome, TransitionRejection,
};
