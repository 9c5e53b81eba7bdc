/// Visitor entity module
pub mod visitor;

pub use visitor::Entity as Visitor;
