pub mod cycle;
pub mod typing;
pub mod wizard;
