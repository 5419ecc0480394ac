//! Tests for the shape matrix, cell states and shape row parsing

#[cfg(test)]
mod tests {
    use brickwall::{WallError, WallInput};
    use brickwall::io::input::LineReader;
    use brickwall::spatial::shape::parse_shape;
    use brickwall::spatial::{Cell, WallDimensions, WallShape};
    use std::io::Cursor;

    const fn dims(width: usize, height: usize) -> WallDimensions {
        WallDimensions { width, height }
    }

    fn parse(text: &str, width: usize, height: usize) -> Result<WallShape, WallError> {
        let mut reader = LineReader::new(Cursor::new(text), "<test>");
        parse_shape(&mut reader, dims(width, height))
    }

    // Tests rows are read in row-major order
    // Verified by transposing the array shape
    #[test]
    fn test_parse_row_major() {
        let shape = parse("101\n011\n", 3, 2).unwrap();

        assert_eq!(shape.cell(0, 0), Some(Cell::NeedsBrick));
        assert_eq!(shape.cell(0, 1), Some(Cell::Empty));
        assert_eq!(shape.cell(1, 0), Some(Cell::Empty));
        assert_eq!(shape.cell(1, 2), Some(Cell::NeedsBrick));
        assert_eq!(shape.cell(2, 0), None);
        assert_eq!(shape.needs_brick_count(), 4);
        assert!(!shape.is_complete());
        assert_eq!(shape.to_string(), "101\n011");
    }

    // Tests only the declared number of rows is consumed
    // Verified by reading until end of input
    #[test]
    fn test_parse_stops_after_height_rows() {
        let mut reader = LineReader::new(Cursor::new("11\n00\n2\n"), "<test>");
        let shape = parse_shape(&mut reader, dims(2, 2)).unwrap();

        assert_eq!(shape.height(), 2);
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("2"));
    }

    // Tests a wall without '1' cells is already complete
    // Verified by counting empty cells as needing bricks
    #[test]
    fn test_all_empty_shape_is_complete() {
        let shape = parse("000\n", 3, 1).unwrap();
        assert_eq!(shape.needs_brick_count(), 0);
        assert!(shape.is_complete());
    }

    // Tests rows of the wrong length are rejected
    // Verified by allowing shorter rows
    #[test]
    fn test_parse_rejects_wrong_row_length() {
        for text in ["11\n", "1111\n", "\n"] {
            let error = parse(text, 3, 1).unwrap_err();
            match error {
                WallError::MalformedInput { line, reason } => {
                    assert_eq!(line, 1);
                    assert!(reason.contains("exactly 3 characters"));
                }
                other => unreachable!("Expected MalformedInput, got {other:?}"),
            }
        }
    }

    // Tests characters other than '0' and '1' are rejected
    // Verified by accepting any digit
    #[test]
    fn test_parse_rejects_other_characters() {
        for text in ["102\n", "1 1\n", "1a1\n"] {
            let error = parse(text, 3, 1).unwrap_err();
            match error {
                WallError::MalformedInput { reason, .. } => {
                    assert!(reason.contains("'0' and '1'"));
                }
                other => unreachable!("Expected MalformedInput, got {other:?}"),
            }
        }
    }

    // Tests premature end of input is reported on the missing row's line
    // Verified by returning a partially filled shape
    #[test]
    fn test_parse_rejects_missing_rows() {
        let error = parse("11\n", 2, 3).unwrap_err();
        match error {
            WallError::MalformedInput { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 3 wall rows"));
            }
            other => unreachable!("Expected MalformedInput, got {other:?}"),
        }
    }

    // Tests huge declared dimensions fail on the first missing row without allocating
    // Verified by reserving width * height cells before reading rows
    #[test]
    fn test_huge_dimensions_without_rows() {
        let error = WallInput::from_text("2000000000 2000000000\n").unwrap_err();
        assert!(matches!(error, WallError::MalformedInput { line: 2, .. }));

        let error = parse("", 2_000_000_000, 2_000_000_000).unwrap_err();
        assert!(matches!(error, WallError::MalformedInput { line: 1, .. }));
    }

    // Tests multi-byte characters count as single characters
    // Verified by comparing the byte length instead
    #[test]
    fn test_row_length_counts_characters() {
        let error = parse("1é\n", 3, 1).unwrap_err();
        match error {
            WallError::MalformedInput { reason, .. } => {
                assert!(reason.contains("exactly 3 characters"));
            }
            other => unreachable!("Expected MalformedInput, got {other:?}"),
        }
    }

    // Tests building from flags checks the buffer length
    // Verified by truncating extra flags silently
    #[test]
    fn test_from_flags() {
        let shape = WallShape::from_flags(dims(2, 1), vec![true, false]).unwrap();
        assert_eq!(shape.dimensions(), dims(2, 1));
        assert_eq!(shape.cell(0, 1), Some(Cell::Empty));

        assert!(WallShape::from_flags(dims(2, 1), vec![true]).is_err());
        assert!(WallShape::from_flags(dims(0, 1), vec![]).is_err());
    }

    // Tests cell character mapping
    // Verified by mapping '0' to NeedsBrick
    #[test]
    fn test_cell_chars() {
        assert_eq!(Cell::from_shape_char('1'), Some(Cell::NeedsBrick));
        assert_eq!(Cell::from_shape_char('0'), Some(Cell::Empty));
        assert_eq!(Cell::from_shape_char('#'), None);
        assert_eq!(Cell::Filled.as_char(), '#');
        assert_eq!(Cell::NeedsBrick.as_char(), '1');
    }
}
