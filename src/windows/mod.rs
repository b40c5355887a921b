//! Secondary application windows.

pub mod options;
