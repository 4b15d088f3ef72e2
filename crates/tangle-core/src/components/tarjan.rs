//! Strongly connected components via Tarjan's single-pass low-link DFS.
//!
//! The traversal keeps an explicit frame stack instead of recursing, so
//! stack depth stays bounded on path-shaped graphs with millions of nodes.
//! Component ids come out in an algorithm-defined order (reverse
//! topological); the caller canonicalizes them before exposure.

use fixedbitset::FixedBitSet;

use crate::graph::Graph;

const UNVISITED: usize = usize::MAX;

/// One suspended DFS visit: the node and how many of its out-edges have
/// already been explored.
struct Frame {
    node: usize,
    next_child: usize,
}

/// Raw SCC assignment: `(component per node, component count)`.
///
/// Ids are *not* canonical; see [`super::strong_components`] for the
/// deterministic relabeling.
pub(super) fn strong_component_ids(g: &Graph) -> (Vec<usize>, usize) {
    let n = g.node_count();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut component = vec![UNVISITED; n];
    let mut on_stack = FixedBitSet::with_capacity(n);
    let mut scc_stack: Vec<usize> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();

    let mut next_index = 0usize;
    let mut component_count = 0usize;

    for root in 0..n {
        if index[root] != UNVISITED {
            continue;
        }

        index[root] = next_index;
        lowlink[root] = next_index;
        next_index += 1;
        scc_stack.push(root);
        on_stack.insert(root);
        frames.push(Frame {
            node: root,
            next_child: 0,
        });

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;
            let out = g.out_edges(v);

            if frame.next_child < out.len() {
                let w = out[frame.next_child].node;
                frame.next_child += 1;

                if index[w] == UNVISITED {
                    index[w] = next_index;
                    lowlink[w] = next_index;
                    next_index += 1;
                    scc_stack.push(w);
                    on_stack.insert(w);
                    frames.push(Frame {
                        node: w,
                        next_child: 0,
                    });
                } else if on_stack.contains(w) {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            // All children explored: fold the low-link into the parent and
            // pop a component if v is its root.
            frames.pop();
            if let Some(parent) = frames.last() {
                let p = parent.node;
                lowlink[p] = lowlink[p].min(lowlink[v]);
            }
            if lowlink[v] == index[v] {
                while let Some(w) = scc_stack.pop() {
                    on_stack.set(w, false);
                    component[w] = component_count;
                    if w == v {
                        break;
                    }
                }
                component_count += 1;
            }
        }
    }

    (component, component_count)
}
