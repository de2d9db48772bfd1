/// `DISTINCT` / `TOP (n)` prefix of the column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSelection {
    pub distinct: bool,
    pub top: Option<u64>,
}

impl RowSelection {
    pub fn is_empty(&self) -> bool {
        !self.distinct && self.top.is_none()
    }
}
