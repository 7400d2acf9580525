//! Longest-common-subsequence diff
//!
//! Classic dynamic programming over two token sequences. `table[i][j]` holds
//! the LCS length of `a[..i]` and `b[..j]`; the edit script is recovered by
//! backtracking from `(m, n)`. Time and memory are both O(m·n), callers must
//! bound their inputs.

use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }
}

pub trait DiffAlgorithm<'d, T> {
    type Table;
    type EditScript;

    fn compute_table(&self) -> Self::Table;
    fn backtrack(&self) -> Self::EditScript;
    fn diff(&self) -> Self::EditScript;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Table = Vec<Vec<usize>>;
    type EditScript = Vec<Edit<T>>;

    fn compute_table(&self) -> Self::Table {
        let (m, n) = (self.a.len(), self.b.len());
        let mut table = vec![vec![0; n + 1]; m + 1];

        for i in 1..=m {
            for j in 1..=n {
                table[i][j] = if self.a[i - 1] == self.b[j - 1] {
                    table[i - 1][j - 1] + 1
                } else {
                    table[i - 1][j].max(table[i][j - 1])
                };
            }
        }

        table
    }

    /// Edit script in reverse order, as walked from `(m, n)` back to `(0, 0)`
    fn backtrack(&self) -> Self::EditScript {
        let table = self.compute_table();
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut edits = Vec::with_capacity(i.max(j));

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.a[i - 1] == self.b[j - 1] {
                edits.push(Edit::Equal {
                    value: self.a[i - 1].clone(),
                });
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
                // ties consume from b first
                edits.push(Edit::Insert {
                    value: self.b[j - 1].clone(),
                });
                j -= 1;
            } else {
                edits.push(Edit::Delete {
                    value: self.a[i - 1].clone(),
                });
                i -= 1;
            }
        }

        edits
    }

    fn diff(&self) -> Self::EditScript {
        let mut edits = self.backtrack();
        edits.reverse();
        edits
    }
}
