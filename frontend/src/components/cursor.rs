/// Position pointer into a non-empty sequence.
///
/// Moves wrap around both ends so the index is always inside `0..len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Cursor at the first item, or `None` for an empty sequence.
    pub fn new(len: usize) -> Option<Self> {
        Self::starting_at(len, 0)
    }

    /// Cursor at `index`. An out-of-range start falls back to the first item.
    pub fn starting_at(len: usize, index: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let index = if index < len { index } else { 0 };
        Some(Self { index, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether navigation controls are worth showing.
    pub fn has_many(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jumps to `index`; out-of-range targets leave the cursor where it is.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_has_no_cursor() {
        assert_eq!(Cursor::new(0), None);
        assert_eq!(Cursor::starting_at(0, 3), None);
    }

    #[test]
    fn next_len_times_is_identity() {
        for len in 1..=7 {
            for start in 0..len {
                let mut cursor = Cursor::starting_at(len, start).unwrap();
                for _ in 0..len {
                    cursor.next();
                }
                assert_eq!(cursor.index(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn prev_and_next_are_inverse() {
        for len in 1..=7 {
            for start in 0..len {
                let mut cursor = Cursor::starting_at(len, start).unwrap();
                cursor.prev();
                cursor.next();
                assert_eq!(cursor.index(), start);
                cursor.next();
                cursor.prev();
                assert_eq!(cursor.index(), start);
            }
        }
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut cursor = Cursor::new(4).unwrap();
        cursor.prev();
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut cursor = Cursor::new(4).unwrap();
        assert!(cursor.go_to(2));
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.go_to(4));
        assert!(!cursor.go_to(usize::MAX));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn single_item_moves_are_noops() {
        let mut cursor = Cursor::new(1).unwrap();
        cursor.next();
        assert_eq!(cursor.index(), 0);
        cursor.prev();
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.has_many());
    }

    #[test]
    fn out_of_range_start_falls_back_to_first() {
        assert_eq!(Cursor::starting_at(3, 9).unwrap().index(), 0);
    }
}
