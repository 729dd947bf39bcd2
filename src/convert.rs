use std::convert::TryFrom;

/// Converts a signed grid coordinate to an index into an axis of length
/// `len`.
///
/// Returns `None` for negative coordinates and for coordinates that do not
/// fall below `len`.
pub fn to_index(n: i32, len: usize) -> Option<usize> {
    usize::try_from(n).ok().filter(|&idx| idx < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_coordinates_inside_axis() {
        assert_eq!(to_index(0, 1), Some(0));
        assert_eq!(to_index(9, 10), Some(9));
    }

    #[test]
    fn rejects_negative_and_past_the_end() {
        assert_eq!(to_index(-1, 10), None);
        assert_eq!(to_index(10, 10), None);
        assert_eq!(to_index(0, 0), None);
    }
}
