pub mod labels;
pub mod logic;
pub mod selection;
pub mod timeline;

pub use logic::{latest_station, Status};
pub use selection::{Auswahl, Selected};
