//! AI behavior-tree types.

use serde::{Deserialize, Serialize};

/// One behavior-tree entry. Several nodes share an id; each node is one
/// candidate action, and `avals[0] > 0` is a jump to another AI id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiNode {
    pub id: i32,
    pub idx: i32,
    pub priority: i32,
    pub probability: i32,
    pub cond: i32,
    pub vals: Vec<i32>,
    pub avals: Vec<i32>,
    pub info_text: String,
}

impl AiNode {
    /// The jump target of this node's action, if any.
    pub fn jump_target(&self) -> Option<i32> {
        match self.avals.first() {
            Some(&target) if target > 0 => Some(target),
            _ => None,
        }
    }
}

/// A root node set plus every node transitively reachable via jumps, each
/// related id visited exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiCollection {
    pub main_ais: Vec<AiNode>,
    pub related_ais: Vec<AiNode>,
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
    fn positive_avals_head_is_a_jump() {
        assert_eq!(node(1, 200).jump_target(), Some(200));
    }

    #[test]
    fn zero_and_negative_are_no_jump() {
        assert_eq!(node(1, 0).jump_target(), None);
        assert_eq!(node(1, -1).jump_target(), None);
    }

    #[test]
    fn empty_avals_is_no_jump() {
        let mut n = node(1, 0);
        n.avals.clear();
        assert_eq!(n.jump_target(), None);
    }
}
