//! Single-open accordion state used by the FAQ section.

/// At most one of `len` items is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All `len` items closed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Open `index`, or close it if it is already open.
    ///
    /// Opening an item closes the previous one. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Whether `index` is the open item.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// The open item, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Close everything.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no items at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let accordion = Accordion::new(7);
        assert_eq!(accordion.open_index(), None);
        assert!((0..7).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn opening_another_closes_previous() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(0);
        accordion.toggle(2);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(0);
        accordion.toggle(5);
        assert_eq!(accordion.open_index(), Some(0));

        let mut empty = Accordion::new(0);
        empty.toggle(0);
        assert!(empty.is_empty());
        assert_eq!(empty.open_index(), None);
    }

    #[test]
    fn close_resets() {
        let mut accordion = Accordion::new(4);
        accordion.toggle(3);
        accordion.close();
        assert_eq!(accordion.open_index(), None);
        assert_eq!(accordion.len(), 4);
    }
}
