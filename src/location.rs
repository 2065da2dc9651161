//! Line/column bookkeeping. Grounded on the `lineno`/`linepos`/`lineadj`/
//! `linecon`/`start_lineno`/`start_colno` fields of `struct json_stream` in
//! `libpdjson5.c`: column is not stored directly, it is computed lazily from
//! the current byte position minus the position the line started at, minus
//! an adjustment for UTF-8 continuation bytes already seen on that line (so
//! that column counts characters, not bytes). `start_lineno`/`start_colno`
//! snapshot the position at the start of whatever token or event is
//! currently being recognized, since an event (a long string, say) can span
//! many bytes and many lazily-computed columns by the time it finishes.

#[derive(Debug)]
pub struct Location {
    lineno: u64,
    line_start_pos: usize,
    continuation_adjust: u64,
    pub start_lineno: u64,
    pub start_colno: u64,
}

impl Location {
    pub fn new() -> Self {
        Location {
            lineno: 1,
            line_start_pos: 0,
            continuation_adjust: 0,
            start_lineno: 1,
            start_colno: 1,
        }
    }

    pub fn lineno(&self) -> u64 {
        self.lineno
    }

    /// 1-based column of `pos`, given everything seen on the current line so
    /// far.
    pub fn column(&self, pos: usize) -> u64 {
        (pos as u64)
            .saturating_sub(self.line_start_pos as u64)
            .saturating_sub(self.continuation_adjust)
            + 1
    }

    /// Record that a newline was just consumed ending at byte position `pos`
    /// (i.e. the position right after the newline sequence).
    pub fn note_newline(&mut self, pos: usize) {
        self.lineno += 1;
        self.line_start_pos = pos;
        self.continuation_adjust = 0;
    }

    /// Record that a UTF-8 continuation byte was just consumed, so it does
    /// not count towards the column of subsequent bytes on this line.
    pub fn note_continuation_byte(&mut self) {
        self.continuation_adjust += 1;
    }

    /// Snapshot the current position as the start of the token/event about
    /// to be recognized at byte position `pos`.
    pub fn snapshot_start(&mut self, pos: usize) {
        self.start_lineno = self.lineno;
        self.start_colno = self.column(pos);
    }

    /// Discard the token-start snapshot, e.g. because an error was just
    /// latched partway through a token rather than at its first byte.
    /// `lineno()`/`start_colno` callers should fall back to the live
    /// position instead once this has been called.
    pub fn invalidate_start(&mut self) {
        self.start_colno = 0;
    }

    /// Whether the token-start snapshot is still valid.
    pub fn has_start_snapshot(&self) -> bool {
        self.start_colno != 0
    }

    pub fn reset(&mut self) {
        *self = Location::new();
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_at_line_one_column_one() {
        let loc = Location::new();
        assert_eq!(loc.lineno(), 1);
        assert_eq!(loc.column(0), 1);
    }

    #[test]
    fn column_advances_with_position() {
        let loc = Location::new();
        assert_eq!(loc.column(3), 4);
    }

    #[test]
    fn newline_resets_column_and_bumps_lineno() {
        let mut loc = Location::new();
        loc.note_newline(5);
        assert_eq!(loc.lineno(), 2);
        assert_eq!(loc.column(5), 1);
        assert_eq!(loc.column(7), 3);
    }

    #[test]
    fn continuation_bytes_do_not_count_towards_column() {
        let mut loc = Location::new();
        loc.note_continuation_byte();
        loc.note_continuation_byte();
        assert_eq!(loc.column(2), 1);
    }

    #[test]
    fn snapshot_captures_start_of_token() {
        let mut loc = Location::new();
        loc.note_newline(4);
        loc.snapshot_start(6);
        assert_eq!(loc.start_lineno, 2);
        assert_eq!(loc.start_colno, 3);
    }

    #[test]
    fn invalidate_start_clears_the_snapshot() {
        let mut loc = Location::new();
        loc.snapshot_start(5);
        assert!(loc.has_start_snapshot());
        loc.invalidate_start();
        assert!(!loc.has_start_snapshot());
    }
}
