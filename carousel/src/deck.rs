//! Validated, fixed-length slide sequences.

use std::collections::HashSet;

use crate::error::CarouselError;

/// Anything the carousel can rotate through.
///
/// The controller only needs a stable identifier; every other field
/// (title, colors, image) is passed through to the view untouched.
pub trait Slide {
    /// Identifier that is unique within a deck and stable across renders.
    fn id(&self) -> &str;
}

/// An ordered, non-empty sequence of slides with unique ids.
///
/// The length is fixed for the lifetime of the deck, which is what lets the
/// controller keep its index in range with a single bounds check.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDeck<T> {
    slides: Vec<T>,
}

impl<T: Slide> SlideDeck<T> {
    /// Build a deck, rejecting empty input and duplicate ids.
    pub fn new(slides: Vec<T>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id()) {
                return Err(CarouselError::DuplicateSlideId(slide.id().to_string()));
            }
        }

        Ok(Self { slides })
    }
}

impl<T> SlideDeck<T> {
    /// Number of slides. Always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; decks cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slides.get(index)
    }

    /// All slides in display order.
    pub fn as_slice(&self) -> &[T] {
        &self.slides
    }

    /// Iterate slides in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slides.iter()
    }

    pub(crate) fn successor(&self, index: usize) -> usize {
        (index + 1) % self.slides.len()
    }
}

impl<'a, T> IntoIterator for &'a SlideDeck<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct TestSlide(pub &'static str);

    impl Slide for TestSlide {
        fn id(&self) -> &str {
            self.0
        }
    }

    pub(crate) fn deck_of(n: usize) -> SlideDeck<TestSlide> {
        const IDS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
        SlideDeck::new(IDS[..n].iter().copied().map(TestSlide).collect()).expect("valid deck")
    }

    #[test]
    fn rejects_empty_deck() {
        let result = SlideDeck::<TestSlide>::new(vec![]);
        assert_eq!(result.unwrap_err(), CarouselError::EmptyDeck);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = SlideDeck::new(vec![TestSlide("coconut"), TestSlide("oil"), TestSlide("coconut")]);
        assert_eq!(
            result.unwrap_err(),
            CarouselError::DuplicateSlideId("coconut".into())
        );
    }

    #[test]
    fn successor_wraps_to_first() {
        let deck = deck_of(3);
        assert_eq!(deck.successor(0), 1);
        assert_eq!(deck.successor(2), 0);
    }

    #[test]
    fn single_slide_deck_is_its_own_successor() {
        let deck = deck_of(1);
        assert_eq!(deck.successor(0), 0);
    }
}
