/// Image carousel position: `index ∈ [0, len)` with wrapping transitions.
/// Persistent for the lifetime of the page view; no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` images, starting at index 0. A record with no
    /// images still gets a single-slot carousel.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Always ≥ 1; `new` clamps, so there is no empty carousel.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Moves to `i` when it is a valid position, otherwise does nothing.
    pub fn jump_to(&mut self, i: usize) {
        if i < self.len {
            self.index = i;
        }
    }
}
