use super::game::Game;
use super::node::Node;
use crate::Utility;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// one position's record: the resolved snapshot cached once at creation,
/// the legal moves not yet expanded into children, the cached mover, and
/// the visit/win statistics. wins accumulate from this record's own
/// mover's perspective, so 0 <= wins <= visits at all times.
#[derive(Debug, Clone)]
pub struct Vertex<G: Game> {
    state: G,
    pending: Vec<G::E>,
    turn: G::T,
    visits: usize,
    wins: Utility,
}

impl<G: Game> Vertex<G> {
    /// snapshot a state into a fresh record. terminal states pend nothing
    /// and are never expanded.
    pub fn new(state: G) -> Self {
        let pending = match state.over() {
            true => vec![],
            false => state.legal(),
        };
        let turn = state.turn();
        Self {
            state,
            pending,
            turn,
            visits: 0,
            wins: 0.,
        }
    }
    pub fn state(&self) -> &G {
        &self.state
    }
    pub fn turn(&self) -> G::T {
        self.turn
    }
    pub fn visits(&self) -> usize {
        self.visits
    }
    pub fn wins(&self) -> Utility {
        self.wins
    }
    pub fn pending(&self) -> &[G::E] {
        &self.pending
    }

    /// take the next unexpanded move, in rules-engine order.
    pub(crate) fn expand(&mut self) -> Option<G::E> {
        match self.pending.is_empty() {
            true => None,
            false => Some(self.pending.remove(0)),
        }
    }
    /// put a move back at the front of the queue after a failed iteration.
    pub(crate) fn restore(&mut self, edge: G::E) {
        self.pending.insert(0, edge);
    }
    /// one completed statistical update of unit weight.
    pub(crate) fn record(&mut self, value: Utility) {
        assert!((0. ..=1.).contains(&value), "update value in [0, 1]");
        self.visits += 1;
        self.wins += value;
    }
    /// overwrite the snapshot with the authoritative post-move state during
    /// tree reuse. statistics survive untouched.
    pub(crate) fn rebind(&mut self, state: G, pending: Vec<G::E>) {
        self.turn = state.turn();
        self.state = state;
        self.pending = pending;
    }
}

/// the tree is a wrapper around a petgraph::graph::DiGraph. each vertex
/// stores one position record; each edge stores the move from parent to
/// child. links are graph indices rather than owning pointers, so cutting
/// a subtree on reuse is re-rooting the live-index set into a fresh graph
/// and letting the dead slots drop with the old one.
#[derive(Debug)]
pub struct Tree<G: Game> {
    graph: DiGraph<Vertex<G>, G::E>,
    root: NodeIndex,
}

impl<G: Game> Tree<G> {
    /// seed a fresh tree from a fully resolved root state.
    pub fn seed(state: G) -> Self {
        let mut graph = DiGraph::default();
        let root = graph.add_node(Vertex::new(state));
        Self { graph, root }
    }
    pub fn root(&self) -> NodeIndex {
        self.root
    }
    /// get a Node view by index.
    pub fn at(&self, index: NodeIndex) -> Node<'_, G> {
        Node::from((index, &self.graph))
    }
    /// get all Node views in the tree.
    pub fn all(&self) -> impl Iterator<Item = Node<'_, G>> {
        self.graph.node_indices().map(|n| self.at(n))
    }
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    /// child of `index` reached by `edge`, if it has been expanded.
    pub fn follow(&self, index: NodeIndex, edge: &G::E) -> Option<NodeIndex> {
        self.graph
            .edges_directed(index, Outgoing)
            .find(|e| e.weight() == edge)
            .map(|e| e.target())
    }

    pub(crate) fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.graph.neighbors_directed(index, Incoming).next()
    }
    pub(crate) fn weight(&self, index: NodeIndex) -> &Vertex<G> {
        self.graph.node_weight(index).expect("valid node index")
    }
    pub(crate) fn weight_mut(&mut self, index: NodeIndex) -> &mut Vertex<G> {
        self.graph.node_weight_mut(index).expect("valid node index")
    }
    /// link a fresh child under `parent` via `edge`.
    pub(crate) fn grow(&mut self, parent: NodeIndex, edge: G::E, vertex: Vertex<G>) -> NodeIndex {
        let child = self.graph.add_node(vertex);
        let _ = self.graph.add_edge(parent, child, edge);
        child
    }
    /// drop a node from the graph. only ever called on the newest node, so
    /// surviving indices are untouched by petgraph's swap-remove.
    pub(crate) fn prune(&mut self, index: NodeIndex) {
        let _ = self.graph.remove_node(index);
    }
    /// extract the subtree under `promoted` into a fresh tree rooted at the
    /// authoritative post-move state. children whose moves are no longer
    /// legal against that state are dropped; every surviving record keeps
    /// its statistics bitwise.
    pub(crate) fn reroot(&self, promoted: NodeIndex, state: G) -> Self {
        let legal = match state.over() {
            true => vec![],
            false => state.legal(),
        };
        let retained = self
            .graph
            .edges_directed(promoted, Outgoing)
            .map(|e| (*e.weight(), e.target()))
            .filter(|(edge, _)| legal.contains(edge))
            .collect::<Vec<_>>();
        let pending = legal
            .iter()
            .copied()
            .filter(|e| !retained.iter().any(|(kept, _)| kept == e))
            .collect::<Vec<_>>();
        let mut graph = DiGraph::default();
        let mut vertex = self.weight(promoted).clone();
        vertex.rebind(state, pending);
        let root = graph.add_node(vertex);
        let mut todo = retained
            .into_iter()
            .map(|(edge, index)| (root, edge, index))
            .collect::<Vec<_>>();
        while let Some((parent, edge, index)) = todo.pop() {
            let copy = graph.add_node(self.weight(index).clone());
            let _ = graph.add_edge(parent, copy, edge);
            todo.extend(
                self.graph
                    .edges_directed(index, Outgoing)
                    .map(|e| (copy, *e.weight(), e.target())),
            );
        }
        Self { graph, root }
    }
}
