use super::board::COLS;

/// One flag per column, true when the column may be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionMask([bool; COLS]);

impl ActionMask {
    /// Every column legal.
    pub fn all() -> Self {
        ActionMask([true; COLS])
    }

    /// No column legal.
    pub fn none() -> Self {
        ActionMask([false; COLS])
    }

    /// Only `col` legal.
    pub fn only(col: usize) -> Self {
        Self::from_fn(|c| c == col)
    }

    pub fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        ActionMask(std::array::from_fn(f))
    }

    /// Build a mask from 0/1 flags as environments usually hand them out.
    pub fn from_flags(flags: [u8; COLS]) -> Self {
        Self::from_fn(|col| flags[col] != 0)
    }

    pub fn is_legal(&self, col: usize) -> bool {
        col < COLS && self.0[col]
    }

    /// Legal columns in ascending order.
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.0[col])
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.columns().collect()
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&legal| legal).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl From<[bool; COLS]> for ActionMask {
    fn from(flags: [bool; COLS]) -> Self {
        ActionMask(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_columns() {
        let mask = ActionMask::all();
        assert_eq!(mask.to_vec(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(mask.count(), 7);
    }

    #[test]
    fn test_some_columns() {
        let mask = ActionMask::from_flags([0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(mask.to_vec(), vec![1, 3, 5]);
        assert!(mask.is_legal(3));
        assert!(!mask.is_legal(0));
    }

    #[test]
    fn test_out_of_range_is_never_legal() {
        assert!(!ActionMask::all().is_legal(7));
    }

    #[test]
    fn test_only_and_none() {
        assert_eq!(ActionMask::only(6).to_vec(), vec![6]);
        assert!(ActionMask::none().is_empty());
    }
}
