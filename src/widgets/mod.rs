// Reusable UI widgets

pub mod toast;

pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
