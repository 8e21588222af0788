use crate::boggle::position::Position;

/// The cells and letters of one DFS branch. Each step hands the child branch
/// its own extended copy, so returning from a branch needs no undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    positions: Vec<Position>,
    letters: String,
}

impl SearchPath {
    pub fn new() -> SearchPath {
        Default::default()
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }

    pub fn extended(&self, position: Position, letter: char) -> SearchPath {
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(position);
        let mut letters = self.letters.clone();
        letters.push(letter);
        SearchPath { positions, letters }
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of cells visited.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Position>) {
        (self.letters, self.positions)
    }
}

#[cfg(test)]
mod tests {
    use crate::boggle::{Position, SearchPath};

    #[test]
    fn extending_leaves_parent_untouched() {
        let parent = SearchPath::new().extended(Position::new(0, 0), 'r');
        let child = parent.extended(Position::new(0, 1), 'o');

        assert_eq!(parent.letters(), "r");
        assert_eq!(parent.len(), 1);
        assert_eq!(child.letters(), "ro");
        assert!(child.contains(&Position::new(0, 0)));
        assert!(!parent.contains(&Position::new(0, 1)));
    }

    #[test]
    fn siblings_do_not_share_cells() {
        let parent = SearchPath::new().extended(Position::new(1, 1), 'b');
        let left = parent.extended(Position::new(1, 0), 'r');
        let right = parent.extended(Position::new(1, 2), 'a');

        assert!(!left.contains(&Position::new(1, 2)));
        assert!(!right.contains(&Position::new(1, 0)));
        assert_eq!(right.into_parts(), ("ba".to_string(), vec![Position::new(1, 1), Position::new(1, 2)]));
    }
}
