use pretty_assertions::assert_eq;

use super::*;

const SRC: &[u8] = b"first\nsecond line\n\nlast";

#[test]
fn bounds_of_each_line() {
    assert_eq!(line_bounds(SRC, 0), (0, 5));
    assert_eq!(line_bounds(SRC, 3), (0, 5));
    assert_eq!(line_bounds(SRC, 6), (6, 17));
    assert_eq!(line_bounds(SRC, 18), (18, 18));
    assert_eq!(line_bounds(SRC, 19), (19, 23));
}

#[test]
fn offset_on_newline_belongs_to_its_line() {
    assert_eq!(line_bounds(SRC, 5), (0, 5));
    assert_eq!(line_text(SRC, 5), b"first");
}

#[test]
fn end_of_input_is_on_last_line() {
    assert_eq!(line_bounds(SRC, 23), (19, 23));
    assert_eq!(column(SRC, 23), 5);
    assert_eq!(line_bounds(b"abc\n", 4), (4, 4));
    assert_eq!(line_from_offset(b"abc\n", 4), 2);
}

#[test]
fn offsets_past_the_end_are_clamped() {
    assert_eq!(line_bounds(SRC, 1000), (19, 23));
    assert_eq!(line_from_offset(SRC, 1000), 4);
}

#[test]
fn columns_are_one_based() {
    assert_eq!(column(SRC, 0), 1);
    assert_eq!(column(SRC, 4), 5);
    assert_eq!(column(SRC, 6), 1);
    assert_eq!(column(SRC, 13), 8);
}

#[test]
fn line_numbers() {
    assert_eq!(line_from_offset(SRC, 0), 1);
    assert_eq!(line_from_offset(SRC, 6), 2);
    assert_eq!(line_from_offset(SRC, 18), 3);
    assert_eq!(line_from_offset(SRC, 20), 4);
}

#[test]
fn empty_source() {
    assert_eq!(line_bounds(b"", 0), (0, 0));
    assert_eq!(column(b"", 0), 1);
    assert_eq!(line_from_offset(b"", 0), 1);
}

#[test]
fn digit_counts() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(999), 3);
    assert_eq!(digit_count(1000), 4);
}
