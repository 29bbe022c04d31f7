use crate::error::ChartResult;

/// Renderer data cached until invalidated.
///
/// Starts invalidated, so the first read always recomputes. The data record
/// is reused across recomputes. A failed recompute leaves the cache
/// invalidated and the error is returned to the caller.
#[derive(Debug, Clone)]
pub struct LazyViewData<D> {
    data: D,
    invalidated: bool,
}

impl<D: Default> Default for LazyViewData<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D> LazyViewData<D> {
    #[must_use]
    pub fn new(initial: D) -> Self {
        Self {
            data: initial,
            invalidated: true,
        }
    }

    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    #[must_use]
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Runs `recompute` over the cached record if invalidated, then returns
    /// the record.
    pub fn get_or_recompute<F>(&mut self, recompute: F) -> ChartResult<&D>
    where
        F: FnOnce(&mut D) -> ChartResult<()>,
    {
        if self.invalidated {
            recompute(&mut self.data)?;
            self.invalidated = false;
        }
        Ok(&self.data)
    }

    /// Last computed record, possibly stale.
    #[must_use]
    pub fn peek(&self) -> &D {
        &self.data
    }
}
