//! Per-user suggestion list: a doubly-linked sequence of movies.
//!
//! The suggestion merge extends the list on both ends at once, and
//! take-off removes movies from the middle, so this needs a real
//! doubly-linked structure. Rather than raw pointers, nodes live in a
//! slot arena and link to each other by stable index; freed slots are
//! recycled through a free list. The back-links are navigation aids
//! only: the list owns every node between `head` and `tail`.

use catalog::{MovieId, MovieInfo};

/// Index of a slot inside the arena.
type SlotIndex = usize;

#[derive(Debug, Clone, Copy)]
struct Slot {
    info: MovieInfo,
    prev: Option<SlotIndex>,
    next: Option<SlotIndex>,
}

/// Insertion cursor into a [`SuggestionList`].
///
/// The suggestion merge keeps two of these, one walking right from the
/// original head and one walking left from the original tail. A vacant
/// cursor means the walk has not placed a node yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestCursor(Option<SlotIndex>);

impl SuggestCursor {
    /// Cursor for a walk that has not placed a node yet.
    pub fn vacant() -> Self {
        Self(None)
    }
}

/// Doubly-linked sequence of suggested movies.
///
/// Invariants: `head` has no predecessor, `tail` has no successor, and
/// for every adjacent pair `a.next == b` implies `b.prev == a`.
#[derive(Debug, Default)]
pub struct SuggestionList {
    slots: Vec<Slot>,
    free: Vec<SlotIndex>,
    head: Option<SlotIndex>,
    tail: Option<SlotIndex>,
    len: usize,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor anchored at the current head (vacant when empty).
    pub fn head_cursor(&self) -> SuggestCursor {
        SuggestCursor(self.head)
    }

    /// Cursor anchored at the current tail (vacant when empty).
    pub fn tail_cursor(&self) -> SuggestCursor {
        SuggestCursor(self.tail)
    }

    fn alloc(&mut self, info: MovieInfo) -> SlotIndex {
        let slot = Slot {
            info,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = slot;
                index
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: SlotIndex) {
        self.free.push(index);
    }

    /// Splice a new node immediately after the cursor and advance the
    /// cursor onto it.
    ///
    /// A vacant cursor means the list is empty: the node becomes the
    /// sole element and head, tail and cursor all land on it. The
    /// caller always performs the first insertion of a merge as a
    /// right-insert.
    pub fn insert_right_of(&mut self, cursor: &mut SuggestCursor, info: MovieInfo) {
        let node = self.alloc(info);
        match cursor.0 {
            None => {
                debug_assert!(self.head.is_none(), "right-insert cursor lost its anchor");
                self.head = Some(node);
                self.tail = Some(node);
            }
            Some(at) => {
                let after = self.slots[at].next;
                self.slots[node].prev = Some(at);
                self.slots[node].next = after;
                self.slots[at].next = Some(node);
                match after {
                    Some(q) => self.slots[q].prev = Some(node),
                    None => self.tail = Some(node),
                }
            }
        }
        cursor.0 = Some(node);
        self.len += 1;
    }

    /// Splice a new node immediately before the cursor and advance the
    /// cursor onto it.
    ///
    /// The vacant-cursor case is deliberately asymmetric with
    /// [`SuggestionList::insert_right_of`]: it happens when a prior
    /// right-insert created the sole element after the tail cursor was
    /// anchored, so the node attaches as that element's successor and
    /// becomes the new tail.
    pub fn insert_left_of(&mut self, cursor: &mut SuggestCursor, info: MovieInfo) {
        match cursor.0 {
            None => match self.head {
                Some(head) => {
                    let node = self.alloc(info);
                    let after = self.slots[head].next;
                    self.slots[node].prev = Some(head);
                    self.slots[node].next = after;
                    self.slots[head].next = Some(node);
                    match after {
                        Some(q) => self.slots[q].prev = Some(node),
                        None => self.tail = Some(node),
                    }
                    cursor.0 = Some(node);
                    self.len += 1;
                }
                None => {
                    let node = self.alloc(info);
                    self.head = Some(node);
                    self.tail = Some(node);
                    cursor.0 = Some(node);
                    self.len += 1;
                }
            },
            Some(at) => {
                let node = self.alloc(info);
                let before = self.slots[at].prev;
                self.slots[node].next = Some(at);
                self.slots[node].prev = before;
                self.slots[at].prev = Some(node);
                match before {
                    Some(q) => self.slots[q].next = Some(node),
                    None => self.head = Some(node),
                }
                cursor.0 = Some(node);
                self.len += 1;
            }
        }
    }

    /// O(1) append at the tail. Used when building a filter-merge run.
    pub fn push_back(&mut self, info: MovieInfo) {
        let node = self.alloc(info);
        match self.tail {
            Some(tail) => {
                self.slots[node].prev = Some(tail);
                self.slots[tail].next = Some(node);
            }
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Splice a freshly built list onto the tail of this one.
    ///
    /// Filter-merge results are always appended after any existing
    /// suggestions, never interleaved with them.
    pub fn append(&mut self, other: SuggestionList) {
        let mut walk = other.head;
        while let Some(index) = walk {
            let slot = other.slots[index];
            self.push_back(slot.info);
            walk = slot.next;
        }
    }

    /// Remove the first node carrying `id`, restoring all neighbor
    /// links. Returns whether a removal happened.
    pub fn remove_by_id(&mut self, id: MovieId) -> bool {
        let mut walk = self.head;
        while let Some(index) = walk {
            if self.slots[index].info.id == id {
                self.unlink(index);
                return true;
            }
            walk = self.slots[index].next;
        }
        false
    }

    fn unlink(&mut self, index: SlotIndex) {
        let Slot { prev, next, .. } = self.slots[index];
        // Four splice cases: sole element, head, tail, interior.
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.release(index);
        self.len -= 1;
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.iter().any(|info| info.id == id)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate head to tail.
    pub fn iter(&self) -> SuggestionIter<'_> {
        SuggestionIter {
            list: self,
            walk: self.head,
            forward: true,
        }
    }

    /// Iterate tail to head, following the back-links.
    pub fn iter_rev(&self) -> SuggestionIter<'_> {
        SuggestionIter {
            list: self,
            walk: self.tail,
            forward: false,
        }
    }
}

/// Iterator over a [`SuggestionList`] in either direction.
pub struct SuggestionIter<'a> {
    list: &'a SuggestionList,
    walk: Option<SlotIndex>,
    forward: bool,
}

impl<'a> Iterator for SuggestionIter<'a> {
    type Item = MovieInfo;

    fn next(&mut self) -> Option<MovieInfo> {
        let index = self.walk?;
        let slot = &self.list.slots[index];
        self.walk = if self.forward { slot.next } else { slot.prev };
        Some(slot.info)
    }
}
