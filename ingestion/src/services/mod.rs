pub mod emitter;
pub mod form;

pub use emitter::write_artifact;
pub use form::load_form_state;
