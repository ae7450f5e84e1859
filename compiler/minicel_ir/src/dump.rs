//! Binary AST dump for offline inspection.
//!
//! Layout (bincode 1.x, fixed-width little-endian integers):
//!
//! ```text
//! [root: u64][node_count: u64][node_count × Expr]
//! ```
//!
//! Each node record is a `u32` variant tag followed by its payload. The
//! format is a debug artifact with no compatibility guarantees.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{Expr, ExprArena, ExprId};

/// Error writing or reading an AST dump.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("root {root} is out of range (arena holds {len} nodes)")]
    RootOutOfRange { root: u64, len: usize },
    #[error("node {node} references {child:?}, which is not an earlier node")]
    DanglingIndex { node: usize, child: ExprId },
    #[error("malformed AST dump: {0}")]
    Encoding(#[from] bincode::Error),
}

#[derive(Serialize)]
struct AstDumpRef<'a> {
    root: u64,
    nodes: &'a [Expr],
}

#[derive(Deserialize)]
struct AstDump {
    root: u64,
    nodes: Vec<Expr>,
}

impl ExprArena {
    /// Write the whole arena with `root` marked as the entry point.
    pub fn dump<W: Write>(&self, root: ExprId, writer: W) -> Result<(), DumpError> {
        if self.try_get(root).is_none() {
            return Err(DumpError::RootOutOfRange {
                root: u64::from(root.raw()),
                len: self.len(),
            });
        }
        let dump = AstDumpRef {
            root: u64::from(root.raw()),
            nodes: self.as_slice(),
        };
        bincode::serialize_into(writer, &dump)?;
        Ok(())
    }

    /// Read a dump written by [`dump`](Self::dump), returning the arena and
    /// its root.
    ///
    /// Every child index must point at an earlier node, which is what
    /// append-only allocation guarantees.
    pub fn load<R: Read>(reader: R) -> Result<(ExprArena, ExprId), DumpError> {
        let AstDump { root, nodes } = bincode::deserialize_from(reader)?;

        for (node, expr) in nodes.iter().enumerate() {
            if let Some(child) = expr.children().find(|child| child.index() >= node) {
                return Err(DumpError::DanglingIndex { node, child });
            }
        }

        let root_id = u32::try_from(root)
            .ok()
            .map(ExprId::new)
            .filter(|id| id.index() < nodes.len());
        let Some(root_id) = root_id else {
            return Err(DumpError::RootOutOfRange {
                root,
                len: nodes.len(),
            });
        };

        Ok((ExprArena::from_exprs(nodes), root_id))
    }
}
