pub mod lazy_component;
pub mod present;
pub mod run;
