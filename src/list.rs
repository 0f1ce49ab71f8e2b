use std::fmt::{self, Debug, Formatter};
use std::slice;
use std::vec;

/// An ordered sequence owning its elements, used as the output queue, the
/// operator stack and the evaluation stack.
///
/// Elements enter at the tail and leave from the tail; iteration goes from
/// first to last. Moving the tail into another list is a move, so an element
/// belongs to exactly one list at any time.
///
/// # Examples
///
/// ```
/// # use tally::TokenList;
/// let mut operators: TokenList<&str> = vec!["(", "+"].into_iter().collect();
/// let mut output = TokenList::new();
///
/// assert!(operators.move_tail_to(&mut output));
/// assert_eq!(output.last(), Some(&"+"));
/// assert_eq!(operators.len(), 1);
/// ```
#[derive(Clone, PartialEq)]
pub struct TokenList<T> {
    items: Vec<T>,
}

impl<T> TokenList<T> {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `item` at the tail
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the tail, if any
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Move the tail of this list to the tail of `dest`. Returns `false`, and
    /// leaves both lists untouched, if this list is empty.
    pub fn move_tail_to(&mut self, dest: &mut Self) -> bool {
        match self.items.pop() {
            Some(item) => {
                dest.items.push(item);
                true
            }
            None => false,
        }
    }

    /// The head of the list
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The tail of the list, the top of a stack
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list holds no element
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from first to last
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for TokenList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TokenList<T> {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for TokenList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for TokenList<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TokenList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
