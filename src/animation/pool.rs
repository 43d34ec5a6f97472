use crate::animation::curve_owner::OwnerKey;

/// Growable object pool: a live prefix of a reusable buffer.
///
/// `reset_all` frees every record logically by rewinding the live length;
/// capacity grows to the high-water mark of concurrently live records and
/// is never shrunk, so steady-state use allocates nothing.
#[derive(Debug)]
pub struct Pool<T: Default> {
    items: Vec<T>,
    live: usize,
}

impl<T: Default> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> Pool<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            live: 0,
        }
    }

    /// Hands out the next record, reset to its default state.
    pub fn acquire(&mut self) -> &mut T {
        if self.live == self.items.len() {
            self.items.push(T::default());
        } else {
            self.items[self.live] = T::default();
        }
        let item = &mut self.items[self.live];
        self.live += 1;
        item
    }

    /// Logically frees all records; the backing storage is kept.
    pub fn reset_all(&mut self) {
        self.live = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// High-water mark of records ever live at once.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn live(&self) -> &[T] {
        &self.items[..self.live]
    }

    pub fn live_mut(&mut self) -> &mut [T] {
        &mut self.items[..self.live]
    }
}

/// Pairs a source-state curve with a destination-state curve that drive the
/// same owner during one transition. A `None` side means the property exists
/// only in the other state's clip (or, in fixed-pose mode, that the source
/// comes from the owner's frozen snapshot).
#[derive(Debug, Clone, Default)]
pub struct CrossCurveData {
    pub owner: OwnerKey,
    pub src_curve: Option<usize>,
    pub dest_curve: Option<usize>,
}
