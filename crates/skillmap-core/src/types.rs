//! Domain types for the skill roadmap graph.
//!
//! Skills are top-level topics connected by directed `SKILL_CONNECTION`
//! edges ("prerequisite-of" at skill granularity). Each skill owns a set of
//! finer-grained learning nodes linked by `PREREQUISITE` edges that form a
//! DAG within the skill.

use serde::{Deserialize, Serialize};

/// Relationship type reported for every skill-to-skill connection.
pub const RELATIONSHIP_PREREQUISITE: &str = "prerequisite";

/// Audience type reported for every roadmap edge.
pub const AUDIENCE_GENERAL: &str = "general";

/// Weight reported for every skill-to-skill connection.
pub const CONNECTION_WEIGHT: i64 = 1;

/// Derive the stable skill id from its display name.
///
/// The seeded dataset stores ids produced by this same rule, so a derived id
/// and a stored id for one skill are interchangeable. This function is the
/// only place the rule lives; name-based lookups must resolve through it or
/// through a store query, never by rebuilding the string inline.
pub fn skill_id_for_name(name: &str) -> String {
    format!("skill_{}", name.replace(' ', "_"))
}

/// Synthesize the display description for a skill.
///
/// Descriptions are not persisted for skills; they are generated on read.
pub fn skill_description(name: &str) -> String {
    format!("Learn {name} skills and concepts")
}

/// Minimal skill reference: id + name.
///
/// Used for adjacency results and path nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRef {
    pub id: String,
    pub name: String,
}

/// Name-resolution result: the stored id and display ordering of a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub id: String,
    pub order_index: i64,
}

/// A skill row as returned by the ordered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSummary {
    pub id: String,
    pub name: String,
    pub order_index: i64,
}

/// A fully shaped skill, including the synthesized description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub order_index: i64,
}

impl Skill {
    /// Shape a stored skill row, synthesizing the description from the name.
    pub fn from_stored(id: String, name: String, order_index: i64) -> Self {
        let description = skill_description(&name);
        Self {
            id,
            name,
            description,
            order_index,
        }
    }
}

/// A fine-grained concept belonging to exactly one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningNode {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A prerequisite edge between two learning nodes of the same skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEdge {
    #[serde(rename = "from")]
    pub from_id: String,
    #[serde(rename = "to")]
    pub to_id: String,
    pub audience_type: String,
}

impl RoadmapEdge {
    pub fn new(from_id: String, to_id: String) -> Self {
        Self {
            from_id,
            to_id,
            audience_type: AUDIENCE_GENERAL.to_string(),
        }
    }
}

/// The complete roadmap for one skill: its learning nodes and their
/// prerequisite edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRoadmap {
    pub skill: String,
    pub order_index: i64,
    pub nodes: Vec<LearningNode>,
    pub edges: Vec<RoadmapEdge>,
}

/// Skills connected to a given skill, split by edge direction.
///
/// Connections are asymmetric: incoming edges mark prerequisites of this
/// skill, outgoing edges mark skills it unlocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillConnections {
    pub incoming: Vec<String>,
    pub outgoing: Vec<String>,
}

/// One skill-to-skill edge from the full connection dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillConnection {
    pub from_skill: String,
    pub to_skill: String,
    pub relationship_type: String,
    pub weight: i64,
}

impl SkillConnection {
    /// Build a connection record with the constant decoration fields.
    pub fn new(from_skill: String, to_skill: String) -> Self {
        Self {
            from_skill,
            to_skill,
            relationship_type: RELATIONSHIP_PREREQUISITE.to_string(),
            weight: CONNECTION_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_id_derivation() {
        assert_eq!(skill_id_for_name("Rust"), "skill_Rust");
        assert_eq!(
            skill_id_for_name("Systems Programming"),
            "skill_Systems_Programming"
        );
        assert_eq!(
            skill_id_for_name("Data Structures and Algorithms"),
            "skill_Data_Structures_and_Algorithms"
        );
    }

    #[test]
    fn test_skill_description_synthesis() {
        assert_eq!(
            skill_description("Rust"),
            "Learn Rust skills and concepts"
        );
    }

    #[test]
    fn test_skill_from_stored_synthesizes_description() {
        let skill = Skill::from_stored("skill_Rust".to_string(), "Rust".to_string(), 3);
        assert_eq!(skill.id, "skill_Rust");
        assert_eq!(skill.description, "Learn Rust skills and concepts");
        assert_eq!(skill.order_index, 3);
    }

    #[test]
    fn test_connection_constant_fields() {
        let conn = SkillConnection::new("skill_A".to_string(), "skill_B".to_string());
        assert_eq!(conn.relationship_type, "prerequisite");
        assert_eq!(conn.weight, 1);
    }

    #[test]
    fn test_roadmap_edge_serializes_with_from_to_keys() {
        let edge = RoadmapEdge::new("n1".to_string(), "n2".to_string());
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["from"], "n1");
        assert_eq!(json["to"], "n2");
        assert_eq!(json["audience_type"], "general");
    }
}
