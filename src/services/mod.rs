//! Service modules

pub mod assignment;
pub mod directory;
pub mod tree;

pub use assignment::{
    AssignmentOutcome, AssignmentPartition, AssignmentService, create_assignment_service,
    partition,
};
pub use directory::{
    DirectoryCard, DirectoryGroup, DirectoryListing, DirectoryService, create_directory_service,
};
pub use tree::{SpecialtyNode, build_tree, decode_entities};
