//! UI module - reusable widgets shared by the form and the results table

pub mod components;
