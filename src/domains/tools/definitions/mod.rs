//! Tool definitions module.
//!
//! One file per tool. Shared parameter types and result helpers live in
//! `common.rs`.

pub mod ai_detail;
pub mod ai_simple;
pub mod all_simple;
pub mod common;
pub mod entities_simple;
pub mod enums_simple;

pub use ai_detail::GetAiDetailTool;
pub use ai_simple::GetAiSimpleTool;
pub use all_simple::GetAllSimpleTool;
pub use common::{NoParams, QuestionParams};
pub use entities_simple::GetEntitiesSimpleTool;
pub use enums_simple::GetEnumsSimpleTool;
