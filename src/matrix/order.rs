//! Storage order for matrix buffers

/// Physical layout of a matrix buffer, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Row-major (C-style): elements of a row are contiguous
    #[default]
    RowMajor,
    /// Column-major (Fortran-style): elements of a column are contiguous
    ColumnMajor,
}

impl Order {
    /// The opposite storage order
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::RowMajor => Self::ColumnMajor,
            Self::ColumnMajor => Self::RowMajor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_row_major() {
        assert_eq!(Order::default(), Order::RowMajor);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Order::RowMajor.flipped(), Order::ColumnMajor);
        assert_eq!(Order::ColumnMajor.flipped(), Order::RowMajor);
    }
}
