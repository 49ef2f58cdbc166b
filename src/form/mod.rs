//! # Product Form
//!
//! Text inputs, their validation rules, and the add/edit submit flow.

pub mod editor;
pub mod validator;

pub use editor::{EditMode, Mutation, ProductEditor, SubmitError, Submitted};
pub use validator::{Field, FieldErrors, ProductForm};
