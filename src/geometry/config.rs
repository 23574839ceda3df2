//! Configuration for the arm diagram geometry

/// Fixed canvas and anchor settings for the arm schematic
///
/// All coordinates live in a normalized space: the canvas is `canvas_width`
/// units wide, the shoulder is anchored `anchor_margin` from the right edge and
/// the wrist `anchor_margin` from the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    /// Width of the normalized canvas
    pub canvas_width: f64,

    /// Height of the normalized canvas
    pub canvas_height: f64,

    /// Distance of the shoulder and wrist anchors from the canvas edges
    pub anchor_margin: f64,

    /// Thickness of the drawn arm
    pub arm_width: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            canvas_width: 100.0,
            canvas_height: 50.0,
            anchor_margin: 8.0,
            arm_width: 8.0,
        }
    }
}

impl DiagramConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the anchor margin
    pub fn with_anchor_margin(mut self, margin: f64) -> Self {
        self.anchor_margin = margin;
        self
    }

    /// Set the arm thickness
    pub fn with_arm_width(mut self, width: f64) -> Self {
        self.arm_width = width;
        self
    }

    /// Shoulder anchor x-coordinate (right side of the canvas)
    pub fn shoulder_x(&self) -> f64 {
        self.canvas_width - self.anchor_margin
    }

    /// Wrist anchor x-coordinate (left side of the canvas)
    pub fn wrist_x(&self) -> f64 {
        self.anchor_margin
    }

    /// Drawn length of the arm between the anchors
    pub fn arm_length(&self) -> f64 {
        self.shoulder_x() - self.wrist_x()
    }

    /// Vertical center line of the arm
    pub fn arm_center_y(&self) -> f64 {
        self.canvas_height / 2.0
    }
}
