pub mod broad_phase;
pub mod collision_detection;
pub mod error;
pub mod quadtree;
pub mod record_array;

pub use broad_phase::BroadPhase;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, ElementIndex, NodeInfo, NodeVisitor, QuadTree, TreeStats};
pub use record_array::RecordArray;
