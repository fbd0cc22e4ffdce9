use super::game::Game;
use super::refine::Refinement;
use super::tree::Vertex;
use crate::Probability;
use crate::Utility;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// where a node sits in its expansion lifecycle. terminal nodes never
/// transition further; the others advance only during selection's
/// expansion step. a non-terminal node with neither pending moves nor
/// children is a rules-contract breach surfaced by the search loop, not
/// classified here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unexpanded,
    Partial,
    Full,
    Terminal,
}

/// a node is a cheap read-only view: an index plus a graph reference.
/// holding the graph reference makes navigation free, and keeping the view
/// immutable means inspection can never disturb the statistics.
#[derive(Debug)]
pub struct Node<'tree, G: Game> {
    index: NodeIndex,
    graph: &'tree DiGraph<Vertex<G>, G::E>,
}

impl<G: Game> Clone for Node<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<G: Game> Copy for Node<'_, G> {}

impl<'tree, G: Game> From<(NodeIndex, &'tree DiGraph<Vertex<G>, G::E>)> for Node<'tree, G> {
    fn from((index, graph): (NodeIndex, &'tree DiGraph<Vertex<G>, G::E>)) -> Self {
        Self { index, graph }
    }
}

impl<'tree, G: Game> Node<'tree, G> {
    pub fn spawn(&self, index: NodeIndex) -> Node<'tree, G> {
        Self::from((index, self.graph))
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn state(&self) -> &'tree G {
        self.weight().state()
    }
    pub fn turn(&self) -> G::T {
        self.weight().turn()
    }
    pub fn visits(&self) -> usize {
        self.weight().visits()
    }
    pub fn wins(&self) -> Utility {
        self.weight().wins()
    }
    pub fn pending(&self) -> &'tree [G::E] {
        self.weight().pending()
    }

    /// navigational methods

    pub fn parent(&self) -> Option<Node<'tree, G>> {
        self.graph
            .neighbors_directed(self.index, Incoming)
            .next()
            .map(|index| self.spawn(index))
    }
    pub fn children(&self) -> Vec<Node<'tree, G>> {
        self.graph
            .neighbors_directed(self.index, Outgoing)
            .map(|index| self.spawn(index))
            .collect()
    }
    /// the move that produced this node. None at the root.
    pub fn incoming(&self) -> Option<&'tree G::E> {
        self.graph
            .edges_directed(self.index, Incoming)
            .next()
            .map(|edge| edge.weight())
    }
    pub fn follow(&self, edge: &G::E) -> Option<Node<'tree, G>> {
        self.graph
            .edges_directed(self.index, Outgoing)
            .find(|e| e.weight() == edge)
            .map(|e| self.spawn(e.target()))
    }

    pub fn phase(&self) -> Phase {
        match (
            self.state().over(),
            self.pending().len(),
            self.children().len(),
        ) {
            (true, _, _) => Phase::Terminal,
            (_, 0, _) => Phase::Full,
            (_, _, 0) => Phase::Unexpanded,
            (_, _, _) => Phase::Partial,
        }
    }

    /// observed value in [0, 1] from this node's own mover's perspective.
    /// the base is wins / visits; a child reached by a refinement move is a
    /// sharper read on the same decision point, so its perspective-adjusted
    /// rate replaces the base whenever it beats it.
    ///
    /// # Panics
    ///
    /// on an unvisited node. callers must only rate visited nodes.
    pub fn rate<R: Refinement<G::E>>(&self, refinement: &R) -> Probability {
        assert!(self.visits() > 0, "rate() requires a visited node");
        let base = self.wins() / self.visits() as Probability;
        self.children()
            .iter()
            .filter(|child| refinement.refines(child.incoming().expect("child has incoming edge")))
            .map(|child| self.versus(child, refinement))
            .fold(base, Probability::max)
    }

    /// a child's rate seen from this node's mover's perspective.
    pub fn versus<R: Refinement<G::E>>(&self, child: &Self, refinement: &R) -> Probability {
        match child.turn() == self.turn() {
            true => child.rate(refinement),
            false => 1. - child.rate(refinement),
        }
    }

    fn weight(&self) -> &'tree Vertex<G> {
        self.graph.node_weight(self.index).expect("valid node index")
    }
}

impl<G: Game> std::fmt::Display for Node<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "N{}", self.index.index())
    }
}
