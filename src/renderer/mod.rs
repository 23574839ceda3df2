//! SVG renderer for the arm diagram
//!
//! This module takes a DiagramGeometry and produces an SVG string
//! with CSS classes and palette variables for styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_arm_diagram, render_arm_diagram_with_stylesheet};
