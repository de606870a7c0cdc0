//! Conversion of marked-up archive lines to plain reading text.
//!
//! The archive format annotates the literary text inline: reading glosses,
//! editorial layout instructions, repetition marks. This module deletes that
//! markup while leaving the text itself, quotation marks included,
//! untouched.

pub mod annotations;

pub use annotations::{strip_annotations, strip_layout_marks, strip_ruby_markup};
