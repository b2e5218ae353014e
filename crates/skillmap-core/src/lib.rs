//! skillmap-core: Shared domain types for the Skillmap roadmap graph.
//!
//! This crate provides the record shapes exchanged between the graph access
//! layer and the HTTP surface:
//! - Skill and learning-node records
//! - Skill-to-skill connection shapes
//! - The per-skill roadmap (nodes + prerequisite edges)
//! - The deterministic id derivation and description synthesis rules

pub mod types;

pub use types::{
    skill_description, skill_id_for_name, LearningNode, RoadmapEdge, Skill, SkillConnection,
    SkillConnections, SkillInfo, SkillRef, SkillRoadmap, SkillSummary,
};
