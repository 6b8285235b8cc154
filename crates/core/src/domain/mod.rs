pub mod configuration;
pub mod project;
pub mod quotation;
pub mod quote;
pub mod template;
