//! Sleevies - measurement geometry for a guided sleeve pattern wizard
//!
//! This library turns the raw text a user types into the wizard (arm lengths,
//! bust, sleeve cap size, ease) into validated measurements, a proportional
//! arm diagram, and the derived pattern parameters the later steps need.
//!
//! # Example
//!
//! ```rust
//! use sleevies::render;
//!
//! let svg = render(r#"
//!     [arm]
//!     shoulder_to_elbow = "13"
//!     shoulder_to_wrist = "24"
//! "#).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("13 inches"));
//! ```

pub mod ease;
pub mod error;
pub mod geometry;
pub mod measurement;
pub mod renderer;
pub mod session;
pub mod sleeve_cap;
pub mod stylesheet;
pub mod wizard;

pub use ease::{resolve_ease, EaseChoice, EaseError, EaseSpec, EffectiveEase, SeamAllowance};
pub use error::SessionError;
pub use geometry::{compute_elbow_position, DiagramConfig, DiagramGeometry, ElbowPosition};
pub use measurement::{
    parse_measurement, resolve_working_measurement, Measurement, MeasurementField, MeasurementSet,
    UnitSystem,
};
pub use renderer::{render_arm_diagram, render_arm_diagram_with_stylesheet, SvgConfig};
pub use session::{load_session, SessionFile};
pub use sleeve_cap::{resolve_sleeve_cap, SleeveCapDerivation, SleeveCapMode, SleeveCapSpec};
pub use wizard::{PatternSummary, PatternType, WizardSession, WizardStep};

use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while loading the session
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Diagram geometry configuration
    pub diagram: DiagramConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagram configuration
    pub fn with_diagram(mut self, config: DiagramConfig) -> Self {
        self.diagram = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render a TOML session to an arm diagram SVG with default configuration
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML session to an arm diagram SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use sleevies::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new().with_svg(SvgConfig::default().with_annotations(false));
/// let svg = render_with_config("units = \"cm\"", config).unwrap();
/// assert!(svg.contains("<svg"));
/// assert!(!svg.contains("61 cm"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let session = load_session(source)?;
    Ok(render_session(&session, &config))
}

/// Render the arm diagram of an in-memory session
pub fn render_session(session: &WizardSession, config: &RenderConfig) -> String {
    let geometry = session.diagram(&config.diagram);
    tracing::debug!(
        shoulder_x = geometry.shoulder_x,
        elbow_x = geometry.elbow.x,
        wrist_x = geometry.wrist_x,
        used_fallback = geometry.elbow.used_fallback,
        "computed arm diagram"
    );
    render_arm_diagram_with_stylesheet(&geometry, &config.svg, &config.stylesheet)
}
