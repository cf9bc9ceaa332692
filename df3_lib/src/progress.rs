/// Observer of encoding/decoding progress.
/// Called after each layer with number of finished layers and total layers.
pub trait Progress {
    fn update(&mut self, done: usize, total: usize);
}

impl<F> Progress for F
where
    F: FnMut(usize, usize),
{
    fn update(&mut self, done: usize, total: usize) {
        self(done, total)
    }
}

/// Ignores all updates
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _done: usize, _total: usize) {}
}
