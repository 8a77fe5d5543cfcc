use quickcheck::Arbitrary;

/// Whether the edges of a graph have a direction.  Fixed when the graph is
/// created.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    Directed,
    #[default]
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

impl From<bool> for Directedness {
    /// Converts a `directed` flag into a `Directedness`.
    fn from(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

impl Arbitrary for Directedness {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        bool::arbitrary(g).into()
    }
}
