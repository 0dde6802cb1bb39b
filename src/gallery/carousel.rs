/// Cycles through a fixed, non-empty list with wraparound.
///
/// The list must hold at least one item: building a carousel from an empty list is a caller
/// bug, only caught by a debug assertion. Every other operation keeps the index in range.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        debug_assert!(!items.is_empty(), "a carousel needs at least one item");

        Self { items, current: 0 }
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.items.len();
        self.current
    }

    pub fn previous(&mut self) -> usize {
        let len = self.items.len();

        self.current = (self.current + len - 1) % len;
        self.current
    }

    /// Selects an item directly, e.g. from a thumbnail strip.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.current = index % self.items.len();
        self.current
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
