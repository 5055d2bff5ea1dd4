//! AI behavior-tree closure.
//!
//! An iterative worklist over an explicit visited set, not recursive
//! accumulation: `visited` strictly grows each round and the id domain is
//! finite, so the loop terminates on any input, cyclic graphs included.

use std::collections::{BTreeSet, HashSet};

use futures::future::try_join_all;

use gamedata_types::{AiCollection, AiNode, ResolveError};

use gamedata_store::ChildTable;

use crate::assemble::rows_of;
use crate::engine::Ctx;

fn jump_targets(nodes: &[AiNode], visited: &HashSet<i32>) -> BTreeSet<i32> {
    nodes
        .iter()
        .filter_map(AiNode::jump_target)
        .filter(|target| !visited.contains(target))
        .collect()
}

/// Fixed-point closure from `root_id`. The root fetch is strict (NotFound
/// when no node carries the id); frontier fetches are tolerant, and a missing
/// jump target simply contributes nothing.
pub(crate) async fn assemble_collection(
    ctx: &Ctx<'_>,
    root_id: i32,
    is_field_ai: bool,
) -> Result<AiCollection, ResolveError> {
    let table = if is_field_ai {
        ChildTable::AiField
    } else {
        ChildTable::AiSvt
    };

    let main_ais: Vec<AiNode> = rows_of(ctx, table, root_id).await?;
    if main_ais.is_empty() {
        return Err(ResolveError::NotFound("ai"));
    }

    let mut visited: HashSet<i32> = HashSet::from([root_id]);
    let mut frontier = jump_targets(&main_ais, &visited);
    let mut related_ais: Vec<AiNode> = Vec::new();

    while !frontier.is_empty() {
        let batches = try_join_all(
            frontier
                .iter()
                .map(|&ai_id| rows_of::<AiNode>(ctx, table, ai_id)),
        )
        .await?;
        visited.extend(frontier.iter().copied());

        let fetched: Vec<AiNode> = batches.into_iter().flatten().collect();
        frontier = jump_targets(&fetched, &visited);
        related_ais.extend(fetched);
    }

    Ok(AiCollection {
        main_ais,
        related_ais,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: i32, jump: i32) -> AiNode {
        AiNode {
            id,
            idx: 0,
            priority: 0,
            probability: 100,
            cond: 0,
            vals: vec![],
            avals: vec![jump],
            info_text: String::new(),
        }
    }

    #[test]
    fn jump_targets_skip_visited_and_non_positive() {
        let nodes = vec![node(1, 200), node(1, 0), node(1, -5), node(1, 300)];
        let visited = HashSet::from([300]);
        let frontier = jump_targets(&nodes, &visited);
        assert_eq!(frontier.into_iter().collect::<Vec<_>>(), vec![200]);
    }

    #[test]
    fn jump_targets_deduplicate() {
        let nodes = vec![node(1, 200), node(2, 200)];
        let frontier = jump_targets(&nodes, &HashSet::new());
        assert_eq!(frontier.len(), 1);
    }
}
