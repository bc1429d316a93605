//! Longest common subsequence alignment.
//!
//! Backtracking walks from the bottom-right corner. Equal units always take
//! the diagonal, so a repeated unit is matched at its last possible
//! position. On a mismatch the walk moves up (skipping a unit of `a`) when
//! `table[i-1][j] >= table[i][j-1]`, else left (skipping a unit of `b`).

/// Dynamic-programming table of LCS lengths.
///
/// `get(i, j)` is the LCS length of the first `i` units of `a` and the first
/// `j` units of `b`. Cells are `u32`; callers bound inputs well below
/// `u32::MAX` units.
#[derive(Debug, Clone)]
pub struct LcsTable {
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// Build the `(a.len() + 1) x (b.len() + 1)` table.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + j - 1] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + j - 1])
                };
            }
        }

        Self { cols, cells }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j] as usize
    }

    /// Number of cells a table for inputs of these lengths holds.
    pub fn cell_count(a_len: usize, b_len: usize) -> usize {
        (a_len + 1).saturating_mul(b_len + 1)
    }

    /// Length of the LCS of the full inputs.
    pub fn length(&self) -> usize {
        // At least one cell exists even for two empty inputs.
        self.cells[self.cells.len() - 1] as usize
    }
}

/// Matched index pairs `(index_in_a, index_in_b)` of one LCS, in ascending
/// order.
pub fn align<T: PartialEq>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let table = LcsTable::build(a, b);
    let mut pairs = Vec::with_capacity(table.length());

    let mut i = a.len();
    let mut j = b.len();
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    pairs.reverse();
    pairs
}

/// Length of the longest common subsequence.
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    LcsTable::build(a, b).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length(&chars(""), &chars("")), 0);
        assert_eq!(lcs_length(&chars("abc"), &chars("")), 0);
        assert_eq!(lcs_length(&chars("ABCDE"), &chars("ACE")), 3);
        assert_eq!(lcs_length(&chars("ABCBDAB"), &chars("BDCABA")), 4);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(LcsTable::cell_count(0, 0), 1);
        assert_eq!(LcsTable::cell_count(4, 2), 15);
        assert_eq!(LcsTable::cell_count(usize::MAX, 1), usize::MAX);
    }

    #[test]
    fn test_table_cells() {
        let table = LcsTable::build(&chars("AB"), &chars("B"));
        assert_eq!(table.get(0, 0), 0);
        assert_eq!(table.get(1, 1), 0);
        assert_eq!(table.get(2, 1), 1);
        assert_eq!(table.length(), 1);
    }

    #[test]
    fn test_align_subsequence() {
        let pairs = align(&chars("ABCDE"), &chars("ACE"));
        assert_eq!(pairs, vec![(0, 0), (2, 1), (4, 2)]);
    }

    #[test]
    fn test_align_tie_moves_up() {
        // "AB" vs "BA": either A or B can be matched. The walk moves up on
        // ties, so B in `a` is skipped and A is matched.
        assert_eq!(align(&chars("AB"), &chars("BA")), vec![(0, 1)]);
    }

    #[test]
    fn test_align_repeated_units() {
        // Only one of the two "a"s can match; the diagonal takes the last one.
        assert_eq!(align(&chars("aa"), &chars("a")), vec![(1, 0)]);
    }

    #[test]
    fn test_align_empty_inputs() {
        assert!(align(&chars(""), &chars("abc")).is_empty());
        assert!(align(&chars("abc"), &chars("")).is_empty());
    }

    #[test]
    fn test_pairs_are_strictly_increasing() {
        let a = chars("the cat sat on the mat");
        let b = chars("a cat on a mat");
        let pairs = align(&a, &b);
        assert_eq!(pairs.len(), lcs_length(&a, &b));
        for window in pairs.windows(2) {
            assert!(window[0].0 < window[1].0);
            assert!(window[0].1 < window[1].1);
        }
    }
}
