//! Process abstraction.
//!
//! `ChainedProcess` is monomorphised: the compiler knows the concrete type of
//! every stage in the chain and inlines the whole thing. Each stage still
//! gets its `needs_apply` fast path, so clean input stays borrowed end to end.
use crate::stage::{NFC, NFD, NfcStage, NfdStage, RemoveNonspacingMarks, Stage};
use std::borrow::Cow;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let current = self.previous.process(text);
        self.stage.run(current)
    }
}

/// NFD → remove non-spacing marks → NFC.
pub type StripMarks = ChainedProcess<
    NfcStage,
    ChainedProcess<RemoveNonspacingMarks, ChainedProcess<NfdStage, EmptyProcess>>,
>;

/// The mark-stripping normalizer.
pub const STRIP_MARKS: StripMarks = ChainedProcess {
    stage: NFC,
    previous: ChainedProcess {
        stage: RemoveNonspacingMarks,
        previous: ChainedProcess {
            stage: NFD,
            previous: EmptyProcess,
        },
    },
};

/// Remove diacritics and other non-spacing marks from `text`.
///
/// Idempotent. Borrowed output means the text had nothing to strip.
#[inline]
pub fn strip_marks(text: &str) -> Cow<'_, str> {
    STRIP_MARKS.process(Cow::Borrowed(text))
}
