//! Horror Engine: procedural horror-short scripts.
//!
//! Turns a theme, an intensity, a target duration, and a style into a fully
//! populated story: title, hook, synopsis, scenes with narration and cues,
//! a narrator voice profile, and production notes. Generation is a pure
//! function of the request and a [`core::seed::StorySeed`].

pub mod core;
pub mod schema;

pub use crate::core::generator::{craft_horror_story, StoryGenerator};
pub use crate::core::seed::StorySeed;
pub use crate::schema::request::{HorrorStoryRequest, Style};
pub use crate::schema::story::{HorrorScene, HorrorStory};
