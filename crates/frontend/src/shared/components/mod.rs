pub mod multiple_tags;
pub mod placeholder;
pub mod submit_button;
pub mod table_checkbox;
pub mod wizard_stepper;
