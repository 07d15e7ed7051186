/// A single position of a [`Grid`](crate::grid::Grid).
///
/// A cell's identity is its coordinate. Cells never move and never outlive the grid that owns
/// them, so they carry no reference back to it: neighbors are looked up through the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,

    /// State of the current generation
    alive: bool,

    /// State staged for the next generation. Only meaningful while the grid is advancing.
    alive_next: bool,
}

impl Cell {
    pub(crate) const fn new(x: usize, y: usize, alive: bool) -> Self {
        Self {
            x,
            y,
            alive,
            alive_next: false,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn pos(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn stage(&mut self, alive_next: bool) {
        self.alive_next = alive_next;
    }

    pub(crate) fn commit(&mut self) {
        self.alive = self.alive_next;
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn fields() {
        let cell = Cell::new(5, 8, true);

        assert_eq!(cell.x(), 5);
        assert_eq!(cell.y(), 8);
        assert_eq!(cell.pos(), (5, 8));
        assert!(cell.is_alive());
    }

    #[test]
    fn staged_state_is_invisible_until_commit() {
        let mut cell = Cell::new(0, 0, false);

        cell.stage(true);
        assert!(!cell.is_alive());

        cell.commit();
        assert!(cell.is_alive());
    }
}
