use super::determinize::Determinizer;
use super::determinize::Known;
use super::error::SearchError;
use super::game::Game;
use super::line::Line;
use super::line::Milestone;
use super::node::Node;
use super::oracle::Agnostic;
use super::oracle::Oracle;
use super::refine::Distinct;
use super::refine::Refinement;
use super::rollout::Rollout;
use super::rollout::Uniform;
use super::settings::Settings;
use super::tree::Tree;
use super::tree::Vertex;
use crate::Probability;
use crate::Utility;
use petgraph::graph::NodeIndex;
use std::time::Duration;
use std::time::Instant;

/// what one call to run() accomplished.
#[derive(Debug, Clone, Copy)]
pub struct Search {
    pub iterations: usize,
    pub elapsed: Duration,
}

/// the search engine. owns the tree, the determinizer, and the playout
/// collaborators. the caller constructs it from a (possibly partially
/// hidden) root state, calls run() with budgets, queries rates() or
/// advice() to pick a move, and calls shrink() after the real game
/// advances so the relevant subtree carries its statistics forward
/// instead of being rebuilt from scratch.
pub struct Engine<G, D = Known, P = Uniform, O = Agnostic, R = Distinct>
where
    G: Game,
    D: Determinizer<G>,
    P: Rollout<G>,
    O: Oracle<G>,
    R: Refinement<G::E>,
{
    tree: Tree<G>,
    determinizer: D,
    rollout: P,
    oracle: O,
    refinement: R,
}

impl<G: Game> Engine<G> {
    /// default collaborators: an already-resolved root, uniform playouts,
    /// an indifferent oracle, and no refinement classes.
    pub fn new(root: G) -> Self {
        Self::from((root, Known, Uniform::default(), Agnostic, Distinct))
    }
}

impl<G, D, P, O, R> From<(G, D, P, O, R)> for Engine<G, D, P, O, R>
where
    G: Game,
    D: Determinizer<G>,
    P: Rollout<G>,
    O: Oracle<G>,
    R: Refinement<G::E>,
{
    /// resolve hidden information once, then seed the tree.
    fn from((root, determinizer, rollout, oracle, refinement): (G, D, P, O, R)) -> Self {
        Self {
            tree: Tree::seed(determinizer.resolve(root)),
            determinizer,
            rollout,
            oracle,
            refinement,
        }
    }
}

impl<G, D, P, O, R> Engine<G, D, P, O, R>
where
    G: Game,
    D: Determinizer<G>,
    P: Rollout<G>,
    O: Oracle<G>,
    R: Refinement<G::E>,
{
    pub fn tree(&self) -> &Tree<G> {
        &self.tree
    }
    pub fn root(&self) -> Node<'_, G> {
        self.tree.at(self.tree.root())
    }

    /// the search loop: select a leaf, evaluate it with playouts, propagate
    /// the averaged value, repeat. budgets are checked once per completed
    /// iteration, never mid-iteration, so even zero budgets complete one
    /// iteration and the root is always queryable afterwards. statistics
    /// from completed iterations survive any error; a failed iteration
    /// leaves no trace.
    pub fn run(&mut self, settings: &Settings) -> Result<Search, SearchError> {
        log::debug!(
            "search begins {}",
            serde_json::to_string(settings).expect("settings serialize")
        );
        let start = Instant::now();
        let mut iterations = 0;
        loop {
            let leaf = self.select(self.tree.root(), settings)?;
            match self.evaluate(leaf, settings) {
                Ok(value) => self.propagate(leaf, value),
                Err(e) => {
                    self.retract(leaf);
                    return Err(e);
                }
            }
            iterations += 1;
            if iterations >= settings.simulations {
                break;
            }
            if settings.budget.is_some_and(|budget| start.elapsed() >= budget) {
                break;
            }
        }
        let search = Search {
            iterations,
            elapsed: start.elapsed(),
        };
        log::debug!(
            "search ends after {} iterations in {:?} over {} nodes",
            search.iterations,
            search.elapsed,
            self.tree.len()
        );
        Ok(search)
    }

    /// carry the tree across one real, externally chosen move. when the
    /// move matches an expanded child, that child is promoted to root: its
    /// snapshot is overwritten by the authoritative post-move state, its
    /// legality is recomputed against it, children whose moves are no
    /// longer legal are dropped, and every surviving statistic is
    /// preserved. an unexplored move is not an error: the tree is
    /// discarded and rebuilt through the determinizer.
    pub fn shrink(&mut self, edge: G::E, state: G) {
        match self.tree.follow(self.tree.root(), &edge) {
            Some(child) => {
                self.tree = self.tree.reroot(child, state);
                log::debug!("promoted {:?} subtree of {} nodes", edge, self.tree.len());
            }
            None => {
                self.tree = Tree::seed(self.determinizer.resolve(state));
                log::debug!("rebuilt root after unexplored {:?}", edge);
            }
        }
    }

    /// perspective-adjusted win rates of the root's expanded children.
    pub fn rates(&self) -> Vec<(G::E, Probability)> {
        let root = self.root();
        root.children()
            .into_iter()
            .map(|child| {
                (
                    *child.incoming().expect("child has incoming edge"),
                    root.versus(&child, &self.refinement),
                )
            })
            .collect()
    }

    /// the best move by observed rate, once anything has been explored.
    pub fn advice(&self) -> Option<G::E> {
        self.rates()
            .into_iter()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).expect("rates are finite"))
            .map(|(edge, _)| edge)
    }

    /// the best-rate walk from the root, for inspection only. stops after
    /// `depth` steps or at the first node without children.
    pub fn principal(&self, depth: usize) -> Line<G::E> {
        let mut steps = vec![];
        let mut node = self.root();
        for _ in 0..depth {
            let best = node.children().into_iter().max_by(|a, b| {
                node.versus(a, &self.refinement)
                    .partial_cmp(&node.versus(b, &self.refinement))
                    .expect("rates are finite")
            });
            match best {
                None => break,
                Some(child) => {
                    steps.push(Milestone {
                        edge: *child.incoming().expect("child has incoming edge"),
                        rate: node.versus(&child, &self.refinement),
                        wins: child.wins(),
                        visits: child.visits(),
                    });
                    node = child;
                }
            }
        }
        Line::from(steps)
    }

    /// tree descent. the first unexpanded move at any node is split off
    /// immediately as this iteration's leaf (expand on first visit). fully
    /// expanded interior nodes descend into their highest-scoring child.
    /// terminal nodes are their own leaf and get re-evaluated as such.
    fn select(&mut self, index: NodeIndex, settings: &Settings) -> Result<NodeIndex, SearchError> {
        if let Some(edge) = self.tree.weight_mut(index).expand() {
            let mut state = self.tree.weight(index).state().clone();
            state.apply(edge);
            return Ok(self.tree.grow(index, edge, Vertex::new(state)));
        }
        let next = {
            let node = self.tree.at(index);
            match (node.state().over(), node.children()) {
                (true, _) => None,
                (false, children) if children.is_empty() => {
                    return Err(SearchError::RulesContract);
                }
                (false, children) => children
                    .into_iter()
                    .map(|child| (child.index(), self.score(&node, &child, settings)))
                    .max_by(|(_, a), (_, b)| a.partial_cmp(b).expect("scores are finite"))
                    .map(|(best, _)| Some(best))
                    .expect("nonempty children"),
            }
        };
        match next {
            None => Ok(index),
            Some(best) => self.select(best, settings),
        }
    }

    /// the selection score: perspective-adjusted win rate plus an
    /// exploration bonus that grows with parent visits and decays with
    /// child visits.
    fn score(&self, node: &Node<'_, G>, child: &Node<'_, G>, settings: &Settings) -> Probability {
        let rate = node.versus(child, &self.refinement);
        let bonus = settings.exploration * (node.visits() as Probability).sqrt()
            / (child.visits() as Probability + 1.);
        rate + bonus
    }

    /// average `playouts` independent simulations from the leaf into a
    /// single unit-weight value in [0, 1], expressed from the leaf mover's
    /// perspective.
    fn evaluate(&mut self, leaf: NodeIndex, settings: &Settings) -> Result<Utility, SearchError> {
        let playouts = settings.playouts.max(1);
        let mut total = 0.;
        for _ in 0..playouts {
            total += self.playout(leaf, settings)?;
        }
        Ok(total / playouts as Utility)
    }

    /// one simulation: walk the rollout policy to termination or the
    /// horizon. finished games score 1 when the leaf's mover won, else 0;
    /// truncated games fall back to the oracle, flipped onto the leaf
    /// mover's perspective when the cutoff state belongs to the opponent.
    fn playout(&mut self, leaf: NodeIndex, settings: &Settings) -> Result<Utility, SearchError> {
        let perspective = self.tree.weight(leaf).turn();
        let mut state = self.tree.weight(leaf).state().clone();
        let mut depth = 0;
        while !state.over() {
            if settings.horizon.is_some_and(|horizon| depth >= horizon) {
                let value = self.oracle.value(&state)?;
                return Ok(match state.turn() == perspective {
                    true => value,
                    false => 1. - value,
                });
            }
            let legal = state.legal();
            if legal.is_empty() {
                return Err(SearchError::RulesContract);
            }
            let choice = self.rollout.choose(&state, &legal)?;
            state.apply(choice);
            depth += 1;
        }
        Ok(match state.leader() == Some(perspective) {
            true => 1.,
            false => 0.,
        })
    }

    /// walk the value back to the root with unit weight. every ancestor's
    /// visit count grows by one; the value mass lands as-is on ancestors
    /// sharing the leaf's mover and complemented on the others.
    fn propagate(&mut self, leaf: NodeIndex, value: Utility) {
        let perspective = self.tree.weight(leaf).turn();
        let mut cursor = Some(leaf);
        while let Some(index) = cursor {
            let vertex = self.tree.weight_mut(index);
            match vertex.turn() == perspective {
                true => vertex.record(value),
                false => vertex.record(1. - value),
            }
            cursor = self.tree.parent(index);
        }
    }

    /// a failed iteration must leave completed statistics untouched: a
    /// leaf expanded earlier in the same iteration is unlinked and its
    /// move goes back to the front of its parent's pending queue.
    fn retract(&mut self, leaf: NodeIndex) {
        if self.tree.weight(leaf).visits() > 0 {
            return;
        }
        if let Some(parent) = self.tree.parent(leaf) {
            let edge = *self
                .tree
                .at(leaf)
                .incoming()
                .expect("non-root has incoming edge");
            self.tree.weight_mut(parent).restore(edge);
            self.tree.prune(leaf);
        }
    }
}
