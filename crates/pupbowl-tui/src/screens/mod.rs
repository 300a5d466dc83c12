pub mod add_form;
pub mod roster;
