pub mod options;

use std::error::Error as StdError;

use crate::error::Error;
use crate::taxonomy::NOT_FOUND_CODE;
use crate::taxonomy::shapes::{Shape, shape_of};

pub use options::ClassifyOptions;

/// Iterator over an error and its `source()` links, outermost first, bounded by a link budget.
pub struct ErrorChain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
    remaining: usize,
}

impl<'a> ErrorChain<'a> {
    pub fn new(err: &'a (dyn StdError + 'static), max_links: usize) -> Self {
        Self {
            next: Some(err),
            remaining: max_links,
        }
    }
}

impl<'a> Iterator for ErrorChain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = current.source();
        Some(current)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    options: ClassifyOptions,
}

impl Classifier {
    pub fn new(options: ClassifyOptions) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Decide whether `err` means the requested metadata item does not exist.
    ///
    /// An operation error anywhere in the chain is authoritative: its status text alone
    /// decides. Only when there is none does the first structured error's code count, and a
    /// wrapped metadata error is looked through rather than trusted for its fallback code.
    pub fn is_not_found(&self, err: Option<&(dyn StdError + 'static)>) -> bool {
        match err {
            Some(err) => self.not_found_within(err, self.options.max_chain_depth),
            None => false,
        }
    }

    fn not_found_within(&self, err: &(dyn StdError + 'static), budget: usize) -> bool {
        let mut chain = ErrorChain::new(err, budget);
        if let Some(op) = chain.find_map(|link| shape_of(link).as_operation()) {
            return op.is_not_found_status();
        }

        for (depth, link) in ErrorChain::new(err, budget).enumerate() {
            match shape_of(link) {
                Shape::Api(api) => return api.code == NOT_FOUND_CODE,
                Shape::Metadata(wrapped) => {
                    let remaining = budget.saturating_sub(depth + 1);
                    return self.not_found_within(wrapped.cause(), remaining);
                }
                Shape::Operation(_) | Shape::Opaque => {}
            }
        }

        false
    }
}

/// [`Classifier::is_not_found`] with default options.
pub fn is_not_found(err: Option<&(dyn StdError + 'static)>) -> bool {
    Classifier::default().is_not_found(err)
}
