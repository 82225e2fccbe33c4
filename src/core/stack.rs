//! Generic last-in-first-out container.

/// A strict LIFO stack.
///
/// Items are only ever added to and removed from the top. There is no
/// random access and no reordering.
///
/// # Example
///
/// ```rust
/// use pushdown::core::Stack;
///
/// let mut stack = Stack::new();
/// stack.push("bottom");
/// stack.push("top");
///
/// assert_eq!(stack.peek(), Some(&"top"));
/// assert_eq!(stack.pop(), Some("top"));
/// assert_eq!(stack.pop(), Some("bottom"));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` items before it
    /// has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Put an item on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutably borrow the top item without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
