pub mod episode;
pub mod unit;

pub use episode::EpisodeRecord;
pub use unit::{DisplayUnit, IconDirective, LinkUnit};
