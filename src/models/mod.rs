//! Scheduling domain models.
//!
//! Provides the data types shared by the optimizer and its collaborators:
//! item scores on the input side, solutions on the output side.
//!
//! # Domain Mappings
//!
//! | tv-schedule-ga | TV programming | Playlist | Exhibition |
//! |----------------|----------------|----------|------------|
//! | Item | Program | Track | Exhibit |
//! | Score | Rating | Popularity | Visitor interest |
//! | Solution | Daily schedule | Play order | Tour route |

mod schedule;
mod score_table;

pub use schedule::{GenerationStats, Slot, Solution};
pub use score_table::{Item, ScoreTable};
