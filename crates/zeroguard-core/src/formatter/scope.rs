//! List decoration and its scope guard.

use std::ops::{Deref, DerefMut};

use super::Formatter;

/// Text placed before each line of an item list.
pub const ITEM_LIST_PREFIX: &str = "* ";

/// Kind of prefix a decoration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    None,
    Bullet,
    Numbered,
}

/// Prefix and indent applied to formatter output inside a list scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    kind: DecorationKind,
    indent: usize,
    counter: usize,
}

impl Decoration {
    /// Decoration forcing an indent without any prefix.
    pub fn indent_only(indent: usize) -> Self {
        Self::new(DecorationKind::None, indent)
    }

    /// Decoration of an item (bullet) list.
    pub fn bullet(indent: usize) -> Self {
        Self::new(DecorationKind::Bullet, indent)
    }

    /// Decoration of a numbered list.
    pub fn numbered(indent: usize) -> Self {
        Self::new(DecorationKind::Numbered, indent)
    }

    fn new(kind: DecorationKind, indent: usize) -> Self {
        Self {
            kind,
            indent,
            counter: 0,
        }
    }

    pub fn kind(&self) -> DecorationKind {
        self.kind
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Number of lines rendered so far in a numbered list.
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Prefix for the next rendered line, advancing the counter of numbered
    /// lists.
    pub(crate) fn next_prefix(&mut self) -> Option<String> {
        match self.kind {
            DecorationKind::None => None,
            DecorationKind::Bullet => Some(ITEM_LIST_PREFIX.to_string()),
            DecorationKind::Numbered => {
                self.counter += 1;
                Some(format!("{}. ", self.counter))
            }
        }
    }
}

/// Guard returned by [`Formatter::begin_item_list`] and
/// [`Formatter::begin_numbered_list`].
///
/// The guard dereferences to the formatter, so output inside the scope goes
/// through it. Dropping the guard restores the decoration that was active
/// before the scope began, whether the scope ends normally, through an early
/// return or during unwinding. Opening a scope from inside another one stacks
/// the decorations.
#[must_use = "the list decoration ends as soon as the scope is dropped"]
pub struct ListScope<'a> {
    formatter: &'a mut Formatter,
    previous: Option<Decoration>,
}

impl<'a> ListScope<'a> {
    pub(crate) fn enter(formatter: &'a mut Formatter, decoration: Decoration) -> Self {
        let previous = formatter.decoration.replace(decoration);
        Self {
            formatter,
            previous,
        }
    }
}

impl Deref for ListScope<'_> {
    type Target = Formatter;

    fn deref(&self) -> &Formatter {
        self.formatter
    }
}

impl DerefMut for ListScope<'_> {
    fn deref_mut(&mut self) -> &mut Formatter {
        self.formatter
    }
}

impl Drop for ListScope<'_> {
    fn drop(&mut self) {
        self.formatter.decoration = self.previous.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_prefix_is_constant() {
        let mut decoration = Decoration::bullet(1);
        assert_eq!(decoration.next_prefix().as_deref(), Some("* "));
        assert_eq!(decoration.next_prefix().as_deref(), Some("* "));
        assert_eq!(decoration.counter(), 0);
    }

    #[test]
    fn test_numbered_prefix_counts_from_one() {
        let mut decoration = Decoration::numbered(0);
        let prefixes: Vec<_> = (0..3).filter_map(|_| decoration.next_prefix()).collect();
        assert_eq!(prefixes, vec!["1. ", "2. ", "3. "]);
        assert_eq!(decoration.counter(), 3);
    }

    #[test]
    fn test_indent_only_has_no_prefix() {
        let mut decoration = Decoration::indent_only(2);
        assert_eq!(decoration.next_prefix(), None);
        assert_eq!(decoration.indent(), 2);
        assert_eq!(decoration.kind(), DecorationKind::None);
    }
}
