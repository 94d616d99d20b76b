//! Draft and committed inputs for an interactive calculator
//!
//! Edits go to the draft and never touch the displayed result. Only
//! [`Session::commit`] hands a complete snapshot to the calculator.
//!
//! ```rust
//! use ebmstat::prelude::*;
//!
//! let mut session = Session::new(ExposureTable::default_risk(), AnalysisOptions::default());
//! session.draft_mut().c = 15.0;
//! session.draft_mut().d = 85.0;
//! assert_eq!(session.output().number_needed(), Some(NumberNeeded::Treat(20)));
//!
//! session.commit();
//! assert_eq!(session.output().effect, Effect::NoDifference);
//! ```

use crate::calculators::{AnalysisOptions, Calculate};

/// Owner of the draft input, the committed input and the last result
#[derive(Debug, Clone)]
pub struct Session<I: Calculate + Clone> {
    draft: I,
    committed: I,
    output: I::Output,
    options: AnalysisOptions,
}

impl<I: Calculate + Clone> Session<I> {
    /// Start with `initial` already committed and calculated
    pub fn new(initial: I, options: AnalysisOptions) -> Self {
        let output = initial.calculate(&options);
        Self {
            draft: initial.clone(),
            committed: initial,
            output,
            options,
        }
    }

    pub fn draft(&self) -> &I {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut I {
        &mut self.draft
    }

    /// Replace the draft wholesale
    pub fn set_draft(&mut self, draft: I) {
        self.draft = draft;
    }

    pub fn committed(&self) -> &I {
        &self.committed
    }

    /// Result for the committed input
    pub fn output(&self) -> &I::Output {
        &self.output
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Commit the draft and recalculate
    pub fn commit(&mut self) -> &I::Output {
        tracing::trace!("committing draft input");
        self.committed = self.draft.clone();
        self.output = self.committed.calculate(&self.options);
        &self.output
    }

    /// Throw away uncommitted edits
    pub fn discard(&mut self) {
        self.draft = self.committed.clone();
    }

    /// Change options and recalculate the committed input
    pub fn set_options(&mut self, options: AnalysisOptions) -> &I::Output {
        self.options = options;
        self.output = self.committed.calculate(&self.options);
        &self.output
    }
}
