//! Quill - A local-first CLI for a personal research-blog site
//!
//! Quill presents a directory of front-matter-annotated markdown
//! posts as a queryable content index, and ships the site's
//! interactive SAT widgets (formula explorer, phase-transition curve,
//! growth comparison) as terminal features.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{
    Assignment, Catalog, Clause, ClauseStatus, Formula, FormulaEntry, Literal, Post, PostMeta,
    TransitionCurve, VarState,
};
