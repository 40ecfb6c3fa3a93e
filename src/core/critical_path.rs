//! Critical path analyzer - longest root-to-terminal chain through the task graph
//!
//! Each root (a task declaring no dependencies) is expanded depth-first. At every
//! branch the successor suffix with the most nodes wins, first one on ties. The root
//! whose path has the largest summed duration becomes the critical path.
//!
//! A three-colour pass over every task first finds the edges that close a loop,
//! whether or not a root can reach them. Those edges are set aside and the first
//! loop is reported; the path search then runs on the remaining acyclic graph,
//! caching one (next node, length) pair per task.

use super::graph::TaskGraph;
use super::task::TaskId;
use std::collections::HashSet;

/// Result of critical path analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// The graph has no dependency loop
    Acyclic(Vec<TaskId>),
    /// A dependency loop exists; `path` ignores the edges that close loops
    CycleDetected {
        path: Vec<TaskId>,
        /// Ids from the repeated node to the task that points back to it
        cycle: Vec<TaskId>,
    },
}

impl PathOutcome {
    /// The critical path, root first
    pub fn path(&self) -> &[TaskId] {
        match self {
            Self::Acyclic(path) | Self::CycleDetected { path, .. } => path,
        }
    }

    pub fn cycle(&self) -> Option<&[TaskId]> {
        match self {
            Self::Acyclic(_) => None,
            Self::CycleDetected { cycle, .. } => Some(cycle),
        }
    }

    pub fn into_path(self) -> Vec<TaskId> {
        match self {
            Self::Acyclic(path) | Self::CycleDetected { path, .. } => path,
        }
    }
}

/// Stack frame of an iterative depth-first walk
struct Frame {
    node: usize,
    next_successor: usize,
}

impl Frame {
    fn new(node: usize) -> Self {
        Self {
            node,
            next_successor: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    White,
    Grey,
    Black,
}

/// Loop-closing edges of the whole graph plus the first loop found
fn find_back_edges(successors: &[Vec<usize>]) -> (HashSet<(usize, usize)>, Option<Vec<usize>>) {
    let mut colour = vec![Colour::White; successors.len()];
    let mut back_edges = HashSet::new();
    let mut cycle = None;

    for start in 0..successors.len() {
        if colour[start] != Colour::White {
            continue;
        }
        colour[start] = Colour::Grey;
        let mut stack = vec![Frame::new(start)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let Some(&next) = successors[node].get(frame.next_successor) else {
                colour[node] = Colour::Black;
                stack.pop();
                continue;
            };
            frame.next_successor += 1;

            match colour[next] {
                Colour::White => {
                    colour[next] = Colour::Grey;
                    stack.push(Frame::new(next));
                }
                Colour::Grey => {
                    back_edges.insert((node, next));
                    if cycle.is_none() {
                        let from = stack.iter().position(|f| f.node == next).unwrap_or_default();
                        cycle = Some(stack[from..].iter().map(|f| f.node).collect());
                    }
                }
                Colour::Black => {}
            }
        }
    }

    (back_edges, cycle)
}

/// Computes the critical path of a [`TaskGraph`]
pub struct CriticalPathAnalyzer<'a> {
    graph: &'a TaskGraph,
    /// Successor lists by arena index, loop-closing edges removed
    successors: Vec<Vec<usize>>,
    /// Best successor per node once resolved
    next: Vec<Option<usize>>,
    /// Node count of the longest path from each node; 0 while unresolved
    length: Vec<usize>,
    cycle: Option<Vec<usize>>,
}

impl<'a> CriticalPathAnalyzer<'a> {
    pub fn new(graph: &'a TaskGraph) -> Self {
        let all: Vec<Vec<usize>> = graph
            .tasks()
            .iter()
            .map(|task| graph.successors(task.id).iter().map(|s| s.index()).collect())
            .collect();

        let (back_edges, cycle) = find_back_edges(&all);
        if let Some(cycle) = &cycle {
            let members: Vec<String> = cycle.iter().map(|&i| TaskId::from_index(i).to_string()).collect();
            log::warn!("Dependency cycle: {}", members.join(" -> "));
        }

        let successors = all
            .into_iter()
            .enumerate()
            .map(|(node, succ)| {
                succ.into_iter()
                    .filter(|&s| !back_edges.contains(&(node, s)))
                    .collect()
            })
            .collect();
        let len = graph.len();

        Self {
            graph,
            successors,
            next: vec![None; len],
            length: vec![0; len],
            cycle,
        }
    }

    /// Run the analysis
    pub fn analyze(mut self) -> PathOutcome {
        let graph = self.graph;
        let mut best: Option<(u64, Vec<usize>)> = None;

        for root in graph.tasks().iter().filter(|task| task.is_root()) {
            let path = self.longest_from(root.id.index());
            let total = self.total_duration(&path);
            log::debug!("Root {} -> {} tasks, {} days", root.id, path.len(), total);

            // Strictly greater, so ties keep the earlier root
            let better = best
                .as_ref()
                .map_or(true, |(best_total, _)| total > *best_total);
            if better {
                best = Some((total, path));
            }
        }

        let path: Vec<TaskId> = best
            .map(|(_, path)| path.into_iter().map(TaskId::from_index).collect())
            .unwrap_or_default();

        match self.cycle {
            None => PathOutcome::Acyclic(path),
            Some(cycle) => PathOutcome::CycleDetected {
                path,
                cycle: cycle.into_iter().map(TaskId::from_index).collect(),
            },
        }
    }

    fn total_duration(&self, path: &[usize]) -> u64 {
        path.iter()
            .map(|&i| u64::from(self.graph.tasks()[i].duration))
            .sum()
    }

    /// Longest (by node count) path starting at `start`, start included
    fn longest_from(&mut self, start: usize) -> Vec<usize> {
        self.resolve(start);

        let mut path = Vec::with_capacity(self.length[start]);
        let mut current = Some(start);
        while let Some(node) = current {
            path.push(node);
            current = self.next[node];
        }
        path
    }

    /// Fill `next` and `length` for every node reachable from `start`
    fn resolve(&mut self, start: usize) {
        if self.length[start] > 0 {
            return;
        }
        let mut stack = vec![Frame::new(start)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            if let Some(&next) = self.successors[node].get(frame.next_successor) {
                frame.next_successor += 1;
                if self.length[next] == 0 {
                    stack.push(Frame::new(next));
                }
                continue;
            }

            // All successors resolved: first one with the most nodes wins
            stack.pop();
            let mut best: Option<usize> = None;
            for &succ in &self.successors[node] {
                if best.map_or(true, |b| self.length[succ] > self.length[b]) {
                    best = Some(succ);
                }
            }
            self.next[node] = best;
            self.length[node] = 1 + best.map_or(0, |b| self.length[b]);
        }
    }
}

/// Convenience wrapper around [`CriticalPathAnalyzer`]
pub fn analyze(graph: &TaskGraph) -> PathOutcome {
    CriticalPathAnalyzer::new(graph).analyze()
}
