//! Arena-backed Aho-Corasick automaton.
//!
//! Terms are inserted through [`AutomatonBuilder`]; [`AutomatonBuilder::build`]
//! consumes the builder, computes failure and output links, and yields an
//! immutable [`Automaton`]. Searching an unbuilt trie is therefore not
//! expressible.

use std::collections::VecDeque;

use comention_core::types::collections::SmallVec4;
use comention_core::types::EntityId;

use super::boundaries::WordBoundaries;
use super::types::{Match, MatcherSettings};

type NodeIndex = u32;

const ROOT: NodeIndex = 0;

#[derive(Debug, Clone)]
struct Node {
    label: u8,
    /// Sorted by label.
    children: SmallVec4<(u8, NodeIndex)>,
    parent: Option<NodeIndex>,
    fail: NodeIndex,
    /// Nearest terminal node on the failure chain, excluding this node.
    output: Option<NodeIndex>,
    depth: u32,
    entity: Option<EntityId>,
}

impl Node {
    fn new(label: u8, parent: Option<NodeIndex>, depth: u32) -> Self {
        Self {
            label,
            children: SmallVec4::new(),
            parent,
            fail: ROOT,
            output: None,
            depth,
            entity: None,
        }
    }

    fn child(&self, byte: u8) -> Option<NodeIndex> {
        self.children
            .binary_search_by_key(&byte, |&(label, _)| label)
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

fn fold(byte: u8, settings: &MatcherSettings) -> u8 {
    if settings.case_sensitive {
        byte
    } else {
        byte.to_ascii_lowercase()
    }
}

/// Mutable trie under construction.
#[derive(Debug, Clone)]
pub struct AutomatonBuilder {
    settings: MatcherSettings,
    nodes: Vec<Node>,
    terms: usize,
}

impl AutomatonBuilder {
    pub fn new(settings: MatcherSettings) -> Self {
        Self {
            settings,
            nodes: vec![Node::new(0, None, 0)],
            terms: 0,
        }
    }

    pub fn settings(&self) -> MatcherSettings {
        self.settings
    }

    /// Insert `term` for `entity`.
    ///
    /// Returns `false` and leaves the trie untouched for an empty term, so
    /// the root never becomes terminal. Inserting the same term again
    /// replaces its entity (last write wins).
    pub fn add(&mut self, entity: EntityId, term: &str) -> bool {
        if term.is_empty() {
            return false;
        }

        let mut current = ROOT;
        for &raw in term.as_bytes() {
            let byte = fold(raw, &self.settings);
            let node = &self.nodes[current as usize];
            current = match node.children.binary_search_by_key(&byte, |&(label, _)| label) {
                Ok(pos) => node.children[pos].1,
                Err(pos) => {
                    let next = self.nodes.len() as NodeIndex;
                    let depth = node.depth + 1;
                    self.nodes.push(Node::new(byte, Some(current), depth));
                    self.nodes[current as usize].children.insert(pos, (byte, next));
                    next
                }
            };
        }

        let terminal = &mut self.nodes[current as usize];
        if terminal.entity.is_none() {
            self.terms += 1;
        } else if terminal.entity != Some(entity) {
            tracing::trace!(term, previous = ?terminal.entity, %entity, "term reassigned");
        }
        terminal.entity = Some(entity);
        true
    }

    /// Number of distinct terms inserted so far.
    pub fn term_count(&self) -> usize {
        self.terms
    }

    /// Compute failure and output links breadth-first and freeze the trie.
    pub fn build(mut self) -> Automaton {
        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        queue.extend(self.nodes[ROOT as usize].children.iter().map(|&(_, c)| c));

        while let Some(index) = queue.pop_front() {
            let node = &self.nodes[index as usize];
            queue.extend(node.children.iter().map(|&(_, c)| c));

            let fail = match node.parent {
                None | Some(ROOT) => ROOT,
                Some(parent) => {
                    let label = node.label;
                    let mut candidate = self.nodes[parent as usize].fail;
                    loop {
                        if let Some(next) = self.nodes[candidate as usize].child(label) {
                            break next;
                        }
                        if candidate == ROOT {
                            break ROOT;
                        }
                        candidate = self.nodes[candidate as usize].fail;
                    }
                }
            };

            let target = &self.nodes[fail as usize];
            let output = if fail != ROOT && target.entity.is_some() {
                Some(fail)
            } else {
                target.output
            };

            let node = &mut self.nodes[index as usize];
            node.fail = fail;
            node.output = output;
        }

        tracing::debug!(
            nodes = self.nodes.len(),
            terms = self.terms,
            case_sensitive = self.settings.case_sensitive,
            "automaton built"
        );

        Automaton {
            settings: self.settings,
            nodes: self.nodes,
            terms: self.terms,
        }
    }
}

/// Immutable, `Sync` matcher over a fixed term set.
#[derive(Debug, Clone)]
pub struct Automaton {
    settings: MatcherSettings,
    nodes: Vec<Node>,
    terms: usize,
}

impl Automaton {
    pub fn settings(&self) -> MatcherSettings {
        self.settings
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }

    /// All matches of the term set in `text`, in order of their end offset.
    pub fn search(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        self.search_with_boundaries(text, None, &mut matches);
        matches
    }

    /// Append the matches in `text` to `out`.
    ///
    /// When word boundaries are enforced, `boundaries` is used if given
    /// (it must describe `text`) and computed otherwise. It is ignored when
    /// enforcement is off.
    pub fn search_with_boundaries(
        &self,
        text: &str,
        boundaries: Option<&WordBoundaries>,
        out: &mut Vec<Match>,
    ) {
        if self.is_empty() {
            return;
        }

        let owned;
        let filter = if self.settings.word_boundaries {
            match boundaries {
                Some(table) => Some(table),
                None => {
                    owned = WordBoundaries::new(text);
                    Some(&owned)
                }
            }
        } else {
            None
        };

        let mut state = ROOT;
        for (i, &raw) in text.as_bytes().iter().enumerate() {
            state = self.next_state(state, fold(raw, &self.settings));

            let node = &self.nodes[state as usize];
            let mut hit = if node.entity.is_some() { Some(state) } else { node.output };
            while let Some(index) = hit {
                let terminal = &self.nodes[index as usize];
                if let Some(entity) = terminal.entity {
                    let start = i + 1 - terminal.depth as usize;
                    if filter.map_or(true, |table| table.accepts(start, i)) {
                        out.push(Match::new(entity, start, i));
                    }
                }
                hit = terminal.output;
            }
        }
    }

    fn next_state(&self, mut state: NodeIndex, byte: u8) -> NodeIndex {
        loop {
            let node = &self.nodes[state as usize];
            if let Some(next) = node.child(byte) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = node.fail;
        }
    }
}
