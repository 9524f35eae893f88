pub mod cards;
pub mod form;
