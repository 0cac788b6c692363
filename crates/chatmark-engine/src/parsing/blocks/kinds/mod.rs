//! Block kinds. Each type owns the syntax knowledge (markers, patterns) of
//! one block kind; the dispatcher and builder never hardcode a marker.

pub mod block_quote;
pub mod checklist;
pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod step_flow;
pub mod table;

pub use block_quote::BlockQuote;
pub use checklist::Checklist;
pub use code_fence::CodeFence;
pub use divider::Divider;
pub use heading::Heading;
pub use list::List;
pub use paragraph::Paragraph;
pub use step_flow::StepFlow;
pub use table::Table;
