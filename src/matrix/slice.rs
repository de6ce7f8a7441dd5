use alloc::vec::Vec;

use super::Matrix;

impl<T> Matrix<T> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use bidiag::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// View the tail of row `i`, from column `col_start` onward, as a slice.
    ///
    /// Rows are contiguous in row-major storage, so this is a true view.
    ///
    /// ```
    /// use bidiag::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row_as_slice(0, 0), &[1.0, 2.0, 3.0]);
    /// assert_eq!(m.row_as_slice(1, 1), &[5.0, 6.0]);
    /// ```
    #[inline]
    pub fn row_as_slice(&self, i: usize, col_start: usize) -> &[T] {
        let start = i * self.ncols + col_start;
        &self.data[start..(i + 1) * self.ncols]
    }

    /// View the tail of row `i`, from column `col_start` onward, mutably.
    #[inline]
    pub fn row_as_mut_slice(&mut self, i: usize, col_start: usize) -> &mut [T] {
        let start = i * self.ncols + col_start;
        let end = (i + 1) * self.ncols;
        &mut self.data[start..end]
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Copy> Matrix<T> {
    /// Gather the tail of column `j`, from row `row_start` downward, into a `Vec`.
    ///
    /// Columns are strided in row-major storage, so this is a copy, not a view.
    ///
    /// ```
    /// use bidiag::Matrix;
    /// let m = Matrix::from_rows(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.col_to_vec(1, 0), vec![2.0, 4.0, 6.0]);
    /// assert_eq!(m.col_to_vec(0, 1), vec![3.0, 5.0]);
    /// ```
    pub fn col_to_vec(&self, j: usize, row_start: usize) -> Vec<T> {
        (row_start..self.nrows)
            .map(|i| self.data[i * self.ncols + j])
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_as_slice_tail() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row_as_slice(0, 1), &[2.0, 3.0]);
        assert_eq!(m.row_as_slice(1, 2), &[6.0]);
    }

    #[test]
    fn row_as_mut_slice_writes_through() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.row_as_mut_slice(1, 1)[0] = 9.0;
        assert_eq!(m[(1, 1)], 9.0);
    }

    #[test]
    fn col_to_vec_strided() {
        let m = Matrix::from_rows(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.col_to_vec(0, 0), vec![1.0, 3.0, 5.0]);
        assert_eq!(m.col_to_vec(1, 2), vec![6.0]);
    }
}
