use std::{cell::Cell, rc::Rc};

/// Hands out increasing tokens for loads into one view region.
///
/// A response may only be applied while its token is still the latest one
/// issued; anything older is stale and must be dropped.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_latest(&self, token: u64) -> bool {
        self.latest.get() == token
    }
}
