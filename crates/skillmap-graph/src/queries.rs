//! Read operations over the skill roadmap graph.
//!
//! Every operation here is a straight lookup or adjacency query; the
//! variable-length path search lives in [`crate::paths`]. Absent skills are
//! reported as `None`/empty collections, never as errors.

use neo4rs::query;

use skillmap_core::types::{
    skill_id_for_name, LearningNode, RoadmapEdge, Skill, SkillConnection, SkillConnections,
    SkillInfo, SkillRef, SkillRoadmap, SkillSummary,
};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    // ── Single Skill Lookups ─────────────────────────────────────

    /// Resolve a skill name to its stored id and display order.
    pub async fn get_skill_info(&self, skill_name: &str) -> Result<Option<SkillInfo>, GraphError> {
        let q = query(
            "MATCH (s:Skill {name: $skill_name})
             RETURN s.id AS id, s.order_index AS order_index
             LIMIT 1",
        )
        .param("skill_name", skill_name.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(Some(SkillInfo {
                id: column(&row, "id")?,
                order_index: column(&row, "order_index")?,
            })),
            None => Ok(None),
        }
    }

    /// Get a single skill by its stored id, with the synthesized description.
    pub async fn get_skill_by_id(&self, skill_id: &str) -> Result<Option<Skill>, GraphError> {
        let q = query(
            "MATCH (s:Skill {id: $id})
             RETURN s.id AS id, s.name AS name, s.order_index AS order_index
             LIMIT 1",
        )
        .param("id", skill_id.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(Some(Skill::from_stored(
                column(&row, "id")?,
                column(&row, "name")?,
                column(&row, "order_index")?,
            ))),
            None => Ok(None),
        }
    }

    // ── List Queries ─────────────────────────────────────────────

    /// List all skills, ascending by display order. Empty store → empty vec.
    pub async fn list_all_skills(&self) -> Result<Vec<SkillSummary>, GraphError> {
        let q = query(
            "MATCH (s:Skill)
             RETURN s.id AS id, s.name AS name, s.order_index AS order_index
             ORDER BY s.order_index",
        );

        let rows = self.query_rows(q).await?;
        let mut skills = Vec::with_capacity(rows.len());
        for row in rows {
            skills.push(SkillSummary {
                id: column(&row, "id")?,
                name: column(&row, "name")?,
                order_index: column(&row, "order_index")?,
            });
        }
        Ok(skills)
    }

    // ── Adjacency Queries ────────────────────────────────────────

    /// Skills with a connection edge *into* the given skill (its
    /// prerequisites). Row order is store-determined.
    pub async fn get_skill_prerequisites(
        &self,
        skill_id: &str,
    ) -> Result<Vec<SkillRef>, GraphError> {
        let q = query(
            "MATCH (pre:Skill)-[:SKILL_CONNECTION]->(s:Skill {id: $id})
             RETURN pre.id AS id, pre.name AS name",
        )
        .param("id", skill_id.to_string());

        self.collect_skill_refs(q).await
    }

    /// Skills reachable via one outgoing connection edge (what this skill
    /// unlocks). Row order is store-determined.
    pub async fn get_skill_next_skills(
        &self,
        skill_id: &str,
    ) -> Result<Vec<SkillRef>, GraphError> {
        let q = query(
            "MATCH (s:Skill {id: $id})-[:SKILL_CONNECTION]->(next:Skill)
             RETURN next.id AS id, next.name AS name",
        )
        .param("id", skill_id.to_string());

        self.collect_skill_refs(q).await
    }

    /// Name-based prerequisite lookup with best-effort degrade.
    ///
    /// Callers of this operation prefer an empty answer over a failure, so an
    /// unresolved name or a store fault both degrade to an empty vec. The
    /// degrade is logged at warn so store outages stay visible; it is a local
    /// fallback at this call site, not a blanket failure-suppression policy.
    pub async fn get_skill_prerequisites_by_name(&self, skill_name: &str) -> Vec<SkillRef> {
        let info = match self.get_skill_info(skill_name).await {
            Ok(Some(info)) => info,
            Ok(None) => {
                tracing::warn!(skill = skill_name, "Skill not found, no prerequisites");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(skill = skill_name, error = %e, "Prerequisite name resolution failed");
                return Vec::new();
            }
        };

        match self.get_skill_prerequisites(&info.id).await {
            Ok(skills) => skills,
            Err(e) => {
                tracing::warn!(skill = skill_name, error = %e, "Prerequisite query failed");
                Vec::new()
            }
        }
    }

    /// Skills connected to the named skill, split by edge direction.
    pub async fn get_skill_connections(
        &self,
        skill_name: &str,
    ) -> Result<SkillConnections, GraphError> {
        let skill_id = skill_id_for_name(skill_name);

        let outgoing_q = query(
            "MATCH (s:Skill {id: $skill_id})-[:SKILL_CONNECTION]->(connected:Skill)
             RETURN connected.name AS name",
        )
        .param("skill_id", skill_id.clone());

        let incoming_q = query(
            "MATCH (connected:Skill)-[:SKILL_CONNECTION]->(s:Skill {id: $skill_id})
             RETURN connected.name AS name",
        )
        .param("skill_id", skill_id);

        let outgoing = self.collect_names(outgoing_q).await?;
        let incoming = self.collect_names(incoming_q).await?;

        Ok(SkillConnections { incoming, outgoing })
    }

    /// Dump every skill-to-skill connection with the constant decoration
    /// fields (`relationship_type`, `weight`).
    pub async fn get_all_skill_connections(&self) -> Result<Vec<SkillConnection>, GraphError> {
        let q = query(
            "MATCH (from:Skill)-[:SKILL_CONNECTION]->(to:Skill)
             RETURN from.id AS from_skill, to.id AS to_skill",
        );

        let rows = self.query_rows(q).await?;
        let mut connections = Vec::with_capacity(rows.len());
        for row in rows {
            connections.push(SkillConnection::new(
                column(&row, "from_skill")?,
                column(&row, "to_skill")?,
            ));
        }
        Ok(connections)
    }

    // ── Composite Reads ──────────────────────────────────────────

    /// The complete roadmap for the named skill: its learning nodes sorted by
    /// name, and the prerequisite edges whose endpoints both belong to it.
    pub async fn get_skill_roadmap(
        &self,
        skill_name: &str,
    ) -> Result<Option<SkillRoadmap>, GraphError> {
        let skill_id = skill_id_for_name(skill_name);

        let info_q = query(
            "MATCH (s:Skill {id: $skill_id})
             RETURN s.name AS name, s.order_index AS order_index
             LIMIT 1",
        )
        .param("skill_id", skill_id.clone());

        let Some(info_row) = self.query_one(info_q).await? else {
            return Ok(None);
        };
        let name: String = column(&info_row, "name")?;
        let order_index: i64 = column(&info_row, "order_index")?;

        let nodes_q = query(
            "MATCH (s:Skill {id: $skill_id})<-[:BELONGS_TO]-(n:LearningNode)
             RETURN n.id AS id, n.name AS name, n.description AS description
             ORDER BY n.name",
        )
        .param("skill_id", skill_id.clone());

        let rows = self.query_rows(nodes_q).await?;
        let mut nodes = Vec::with_capacity(rows.len());
        for row in rows {
            nodes.push(LearningNode {
                id: column(&row, "id")?,
                name: column(&row, "name")?,
                description: column(&row, "description")?,
            });
        }

        let edges_q = query(
            "MATCH (s:Skill {id: $skill_id})<-[:BELONGS_TO]-(from:LearningNode)
                   -[:PREREQUISITE]->(to:LearningNode)-[:BELONGS_TO]->(s)
             RETURN from.id AS from_id, to.id AS to_id",
        )
        .param("skill_id", skill_id);

        let rows = self.query_rows(edges_q).await?;
        let mut edges = Vec::with_capacity(rows.len());
        for row in rows {
            edges.push(RoadmapEdge::new(
                column(&row, "from_id")?,
                column(&row, "to_id")?,
            ));
        }

        Ok(Some(SkillRoadmap {
            skill: name,
            order_index,
            nodes,
            edges,
        }))
    }

    // ── Row Collection Helpers ───────────────────────────────────

    /// Collect rows shaped as `id, name` into skill references.
    pub(crate) async fn collect_skill_refs(
        &self,
        q: neo4rs::Query,
    ) -> Result<Vec<SkillRef>, GraphError> {
        let rows = self.query_rows(q).await?;
        let mut refs = Vec::with_capacity(rows.len());
        for row in rows {
            refs.push(SkillRef {
                id: column(&row, "id")?,
                name: column(&row, "name")?,
            });
        }
        Ok(refs)
    }

    /// Collect rows shaped as a single `name` column.
    async fn collect_names(&self, q: neo4rs::Query) -> Result<Vec<String>, GraphError> {
        let rows = self.query_rows(q).await?;
        let mut names = Vec::with_capacity(rows.len());
        for row in rows {
            names.push(column(&row, "name")?);
        }
        Ok(names)
    }
}

/// Extract a named column from a row.
pub(crate) fn column<T: serde::de::DeserializeOwned>(
    row: &neo4rs::Row,
    name: &str,
) -> Result<T, GraphError> {
    row.get::<T>(name)
        .map_err(|e| GraphError::Serialization(format!("Failed to read column {name}: {e}")))
}
