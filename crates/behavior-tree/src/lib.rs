//! General behavior tree model with structural analysis and normalization.
//!
//! A behavior tree arbitrates and sequences external skills. This crate
//! holds the tree itself as an immutable value and the pure passes over it:
//!
//! - **Model**: [`Btree`] and its non-empty children list [`Forest`], generic
//!   over a skill universe implementing [`SkillRef`]
//! - **Analysis**: [`count_skills`] and friends in [`analysis`]
//! - **Normalization**: [`normalize`], a bottom-up rewrite that removes
//!   single-child `Sequence`/`Fallback` nodes and double negations
//! - **Evaluation**: a stateless reference [`Behavior::tick`] over a
//!   [`SkillDispatcher`], used to check that normalization keeps tick
//!   results unchanged
//!
//! # Architecture
//!
//! - [`tree`]: [`Btree`], [`Forest`], [`NodeKind`], [`DecKind`]
//! - [`builder`]: short constructors, plus the [`forest!`] macro
//! - [`status`]: [`Status`] (Success, Failure, Running)
//! - [`composite`], [`decorator`]: tick semantics per node kind
//! - [`dispatch`]: [`SkillDispatcher`] and the [`DummySkills`] test dispatcher
//! - [`config`], [`error`]: traversal limits and error types
//!
//! The recursive passes use one stack frame per tree level. Use the
//! `*_checked` variants with a [`TreeConfig`] for untrusted input.

pub mod analysis;
pub mod behavior;
pub mod builder;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod dispatch;
pub mod error;
pub mod normalize;
pub mod skill;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use analysis::{count_skills, count_skills_checked, count_skills_forest, depth, node_count};
pub use behavior::Behavior;
pub use config::TreeConfig;
pub use dispatch::{DummySkills, SkillDispatcher};
pub use error::{DispatchError, TreeError};
pub use normalize::{is_normal, normalize, normalize_checked, normalize_forest};
pub use skill::SkillRef;
pub use status::Status;
pub use tree::{Btree, DecKind, Forest, ForestIter, NodeKind};
