#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Revision(u64);

impl Revision {
    fn advance(&mut self) {
        self.0 += 1
    }
}

/// Tracks whether the drawn spinner is stale.
///
/// Every observer keeps its own [`Revision`] and asks [`Invalidation::needs_redraw`]
/// before painting.
#[derive(Debug)]
pub struct Invalidation {
    revision: Revision,
}

impl Invalidation {
    pub fn new() -> Self {
        Self {
            revision: Revision(0),
        }
    }

    pub fn invalidate(&mut self) {
        self.revision.advance()
    }

    pub fn register(&self) -> Revision {
        self.revision
    }

    pub fn needs_redraw(&self, seen: &mut Revision) -> bool {
        let stale = self.revision != *seen;
        *seen = self.revision;
        stale
    }
}

impl Default for Invalidation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observers_see_each_invalidation_once() {
        let mut invalidation = Invalidation::new();
        let mut first = invalidation.register();

        assert!(!invalidation.needs_redraw(&mut first));

        invalidation.invalidate();
        invalidation.invalidate();

        let mut second = Revision(0);
        assert!(invalidation.needs_redraw(&mut first));
        assert!(!invalidation.needs_redraw(&mut first));
        assert!(invalidation.needs_redraw(&mut second));
    }
}
