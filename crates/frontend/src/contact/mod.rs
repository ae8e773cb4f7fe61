mod form;
pub mod validate;

pub use form::ContactPage;
