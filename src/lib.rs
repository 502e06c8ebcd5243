//! # Macro Language
//!
//! A small line-oriented scripting language for synthetic mouse and
//! keyboard input and screen color checks.
//!
//! ```text
//! #loop
//! getcolor:c,100,200
//! colorsmatch:c,"#00FF00","#08"
//! goto:ready
//! wait:250
//! goto:loop
//! #ready
//! autopress:enter
//! ```
//!
//! The [`mach::Runtime`] runs scripts against any [`mach::Automation`]
//! backend and reports output and errors as [`mach::Event`]s.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
