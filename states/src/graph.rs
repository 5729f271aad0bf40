use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first is the start node, last is the end node
    route: Vec<T>,
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, rest)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in rest {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph. An edge `from -> to` means `to` reads `from`.
#[derive(Debug)]
pub struct Graph<Node, Edge = ()>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    nodes: BTreeSet<Node>,
    routes: Vec<(Node, Edge, Node)>,

    route_cache: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node, Edge> Default for Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node, Edge> Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            routes: Vec::new(),
            route_cache: BTreeMap::new(),
        }
    }

    /// Register a node that may have no edges at all.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    pub fn route_to(&mut self, from: Node, to: Node, via: Edge) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.routes.push((from, via, to));
        self.route_cache.clear();
    }

    fn in_degrees(&self) -> BTreeMap<Node, usize> {
        let mut in_degrees: BTreeMap<Node, usize> =
            self.nodes.iter().map(|node| (*node, 0)).collect();

        for (_from, _via, to) in &self.routes {
            *in_degrees.entry(*to).or_insert(0) += 1;
        }

        in_degrees
    }

    /// Kahn's algorithm. Returns every node, dependencies before dependents.
    ///
    /// Among nodes that are ready at the same time the smallest (by `Ord`) comes first, so the
    /// order is stable for a given graph.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degrees = self.in_degrees();
        let mut order = Vec::with_capacity(in_degrees.len());

        while !in_degrees.is_empty() {
            let Some(node) = in_degrees
                .iter()
                .find(|(_, degree)| **degree == 0)
                .map(|(node, _)| *node)
            else {
                let remaining: Vec<Node> = in_degrees.keys().copied().collect();
                let cycle = self.find_cycle(&remaining).unwrap_or_default();
                return Err(TopologyError::CycleDetected(DepRoute { route: cycle }));
            };

            in_degrees.remove(&node);
            for connected in self.direct_connected_nodes(node)? {
                if let Some(degree) = in_degrees.get_mut(&connected) {
                    *degree -= 1;
                }
            }
            order.push(node);
        }

        Ok(order)
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        // Iterative DFS restricted to the nodes left over by the topological sort.
        let mut visited = BTreeSet::new();
        let mut path_set = BTreeSet::new();
        let mut path = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        let neighbors_within = |node: Node| {
            self.direct_connected_nodes(node)
                .unwrap_or_default()
                .into_iter()
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter()
        };

        for &start_node in nodes {
            if visited.contains(&start_node) {
                continue;
            }

            stack.push((start_node, neighbors_within(start_node)));
            visited.insert(start_node);
            path_set.insert(start_node);
            path.push(start_node);

            while let Some((current_node, neighbors)) = stack.last_mut() {
                if let Some(neighbor) = neighbors.next() {
                    if path_set.contains(&neighbor) {
                        let pos = path.iter().position(|&x| x == neighbor)?;
                        let mut cycle = path[pos..].to_vec();
                        cycle.push(neighbor);
                        return Some(cycle);
                    } else if !visited.contains(&neighbor) {
                        visited.insert(neighbor);
                        path_set.insert(neighbor);
                        path.push(neighbor);
                        stack.push((neighbor, neighbors_within(neighbor)));
                    }
                } else {
                    let node_to_remove = *current_node;
                    stack.pop();
                    path_set.remove(&node_to_remove);
                    path.pop();
                }
            }
        }
        None
    }

    /// Every node that transitively depends on `node`.
    pub fn connected(&mut self, node: Node) -> impl Iterator<Item = &Node> {
        self.route_cache
            .entry(node)
            .or_insert_with(|| Self::connected_nodes(&self.routes, node))
            .iter()
    }

    fn direct_connected_nodes(&self, node: Node) -> Result<BTreeSet<Node>, TopologyError<Node>> {
        let mut collected = BTreeSet::new();

        for (from, _via, to) in &self.routes {
            if from == &node && !collected.insert(*to) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![node, *to],
                }));
            }
        }

        Ok(collected)
    }

    fn connected_nodes(routes: &[(Node, Edge, Node)], node: Node) -> BTreeSet<Node> {
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for (from, _via, to) in routes {
                // `insert` refuses nodes seen before, so a cycle cannot loop forever here.
                if from == &current && collected.insert(*to) {
                    queue.push_back(*to);
                }
            }
        }

        collected
    }
}
