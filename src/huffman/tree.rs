use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use crate::code_table::CodeTable;
use crate::prefix_code::{leaf_codeword, CodingError};
use crate::probability::{Probability, ProbabilityModel, Symbol};

#[derive(Clone, Copy, Debug)]
enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
struct Node {
    probability: Probability,
    index: usize,
    kind: NodeKind,
}

/// Huffman merge tree stored as an arena.
///
/// Leaves occupy the first indices in the order of the probability model,
/// every merge appends one inner node, and the root is the last node
/// created. Nodes are never changed once pushed.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

// Heap order: probability first, then arena index. Leaves compare by input
// position and merged nodes always lose ties against older nodes.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(probabilities: &ProbabilityModel) -> Result<HuffmanTree, CodingError> {
        probabilities.validate()?;

        let mut heap = BinaryHeap::new();
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * probabilities.len() - 1);
        for entry in probabilities.iter() {
            let node = Node {
                probability: entry.probability,
                index: nodes.len(),
                kind: NodeKind::Leaf {
                    symbol: entry.symbol,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }

        // the first node taken becomes the left child
        while let (Some(Reverse(t1)), Some(Reverse(t2))) = (heap.pop(), heap.pop()) {
            let node = Node {
                probability: t1.probability + t2.probability,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: t1.index,
                    right: t2.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }

        // validate() guarantees at least one leaf, so the loop above ends with
        // the root as the last node pushed
        let root_index = nodes.len() - 1;
        Ok(HuffmanTree { nodes, root_index })
    }

    pub fn leaf_count(&self) -> usize {
        (self.nodes.len() + 1) / 2
    }

    pub fn root_probability(&self) -> Probability {
        self.nodes[self.root_index].probability
    }

    /// Walks the tree depth first, appending '0' for every left and '1' for
    /// every right descent.
    pub fn code_table(&self) -> CodeTable {
        let mut table = Vec::with_capacity(self.leaf_count());
        fill_table(&mut table, self, self.root_index, String::new());
        table.into_iter().collect()
    }
}

fn fill_table(
    table: &mut Vec<(Symbol, String)>,
    tree: &HuffmanTree,
    node_index: usize,
    current_path: String,
) {
    match tree.nodes[node_index].kind {
        NodeKind::Leaf { symbol } => table.push((symbol, leaf_codeword(&current_path))),
        NodeKind::Inner { left, right } => {
            fill_table(table, tree, left, format!("{}0", current_path));
            fill_table(table, tree, right, format!("{}1", current_path));
        }
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn first_visible_column(line: &str) -> usize {
    line.chars().position(|c| c != ' ').unwrap_or(0)
}

fn center_column(line: &str) -> usize {
    (first_visible_column(line) * 2 + line.trim().chars().count()) / 2
}

// Node & Tree visualization
impl Node {
    fn get_string(&self, tree: &HuffmanTree) -> Vec<String> {
        match self.kind {
            NodeKind::Leaf { symbol } => {
                vec![format!("({:?},{:.3})", symbol, self.probability)]
            }
            NodeKind::Inner { left, right } => {
                let left_box = tree.nodes[left].get_string(tree);
                let right_box = tree.nodes[right].get_string(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = center_column(&left_box[0]);
                let right_pos = center_column(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                let depth = std::cmp::max(left_box.len(), right_box.len());
                for i in 0..depth {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.nodes[self.root_index].get_string(self).iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
