//! Shortest-path search between two skills.
//!
//! Connection edges are traversed as undirected here: a learning path may
//! walk an edge against its stored direction. The adjacency queries in
//! [`crate::queries`] keep full directionality; the relaxation exists only
//! in the undirected variable-length pattern below, never in stored data.

use neo4rs::query;

use skillmap_core::types::SkillRef;

use crate::client::{GraphClient, GraphError};

/// Depth cap for path search. Paths needing more hops are reported as "no
/// path found" rather than searched for without bound.
pub const MAX_PATH_HOPS: u32 = 10;

impl GraphClient {
    /// Find the fewest-hop path between two skills, by name.
    ///
    /// Returns the ordered node sequence from start to end inclusive. Missing
    /// endpoints, no route within [`MAX_PATH_HOPS`], and disconnected
    /// components all yield an empty vec; ties between equal-length paths are
    /// broken by the store. A search from a skill to itself is the 0-hop path
    /// `[start]` when the skill exists.
    pub async fn find_learning_path(
        &self,
        start_skill: &str,
        end_skill: &str,
    ) -> Result<Vec<SkillRef>, GraphError> {
        if start_skill == end_skill {
            return match self.get_skill_info(start_skill).await? {
                Some(info) => Ok(vec![SkillRef {
                    id: info.id,
                    name: start_skill.to_string(),
                }]),
                None => Ok(Vec::new()),
            };
        }

        let cypher = format!(
            "MATCH path = (s1:Skill {{name: $start_skill}})
                          -[:SKILL_CONNECTION*1..{MAX_PATH_HOPS}]-
                          (s2:Skill {{name: $end_skill}})
             WITH path ORDER BY length(path) ASC LIMIT 1
             UNWIND nodes(path) AS n
             RETURN n.id AS id, n.name AS name"
        );

        let q = query(&cypher)
            .param("start_skill", start_skill.to_string())
            .param("end_skill", end_skill.to_string());

        let path = self.collect_skill_refs(q).await?;
        tracing::debug!(
            start = start_skill,
            end = end_skill,
            hops = path.len().saturating_sub(1),
            "Learning path search finished"
        );
        Ok(path)
    }
}
