//! Iterator: walk a collection without exposing how it is stored.

use crate::util::transcript::Transcript;

/// Position-tracking iterator over a word list, forwards or backwards.
#[derive(Debug, Clone)]
pub struct AlphabeticalOrderIterator<'a> {
    collection: &'a [String],
    /// Next index to yield, counted from the front or the back
    position: usize,
    reverse: bool,
}

impl<'a> AlphabeticalOrderIterator<'a> {
    pub fn new(collection: &'a [String], reverse: bool) -> Self {
        Self {
            collection,
            position: 0,
            reverse,
        }
    }
}

impl<'a> Iterator for AlphabeticalOrderIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.collection.len();
        if self.position >= len {
            return None;
        }
        let idx = if self.reverse {
            len - 1 - self.position
        } else {
            self.position
        };
        self.position += 1;
        Some(self.collection[idx].as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.collection.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordsCollection {
    items: Vec<String>,
}

impl WordsCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn iter(&self) -> AlphabeticalOrderIterator<'_> {
        AlphabeticalOrderIterator::new(&self.items, false)
    }

    pub fn reverse_iter(&self) -> AlphabeticalOrderIterator<'_> {
        AlphabeticalOrderIterator::new(&self.items, true)
    }
}

impl<'a> IntoIterator for &'a WordsCollection {
    type Item = &'a str;
    type IntoIter = AlphabeticalOrderIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for WordsCollection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn demo(words: &[String]) -> Transcript {
    let mut out = Transcript::new();
    let mut collection = WordsCollection::new();
    for word in words {
        collection.add_item(word.as_str());
    }

    out.line("1. ----------------");
    for word in &collection {
        out.line(word);
    }
    out.blank();

    out.line("2. ----------------");
    for word in collection.reverse_iter() {
        out.line(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_yields_nothing() {
        let collection = WordsCollection::new();
        assert_eq!(collection.iter().next(), None);
        assert_eq!(collection.reverse_iter().next(), None);
    }

    #[test]
    fn test_size_hint_shrinks() {
        let collection: WordsCollection = ["a", "b"].into_iter().collect();
        let mut it = collection.iter();
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.next();
        assert_eq!(it.size_hint(), (1, Some(1)));
    }
}
