//! Iterator, themed: hand out pizza slices one at a time.

use std::fmt;

use crate::util::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PizzaItem {
    pub number: usize,
}

impl fmt::Display for PizzaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slice of pizza numbered: {}", self.number)
    }
}

/// Explicit `has_next`/`next` cursor over the slices.
#[derive(Debug, Clone)]
pub struct PizzaSliceIterator<'a> {
    slices: &'a [PizzaItem],
    index: usize,
}

impl<'a> PizzaSliceIterator<'a> {
    pub fn has_next(&self) -> bool {
        self.index < self.slices.len()
    }
}

impl<'a> Iterator for PizzaSliceIterator<'a> {
    type Item = &'a PizzaItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.slices.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

#[derive(Debug, Clone)]
pub struct PizzaAggregate {
    slices: Vec<PizzaItem>,
}

impl PizzaAggregate {
    /// A pizza cut into `amount` slices numbered from 1.
    pub fn new(amount: usize) -> Self {
        Self {
            slices: (1..=amount).map(|number| PizzaItem { number }).collect(),
        }
    }

    pub fn amount_slices(&self) -> usize {
        self.slices.len()
    }

    pub fn iterator(&self) -> PizzaSliceIterator<'_> {
        PizzaSliceIterator {
            slices: &self.slices,
            index: 0,
        }
    }
}

pub fn demo(slices: usize) -> Transcript {
    let mut out = Transcript::new();
    let pizza = PizzaAggregate::new(slices);
    out.line(format!(
        "Prepared pizza and cut into {} slices",
        pizza.amount_slices()
    ));

    let mut iterator = pizza.iterator();
    while iterator.has_next() {
        if let Some(item) = iterator.next() {
            out.line(item.to_string());
        }
    }
    out
}
