use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// GeoDocument
// ────────────────────────────────────────────────────────────────────────────

/// A parsed `geogebra.xml`: the construction plus the size of the graphics
/// view at the time the file was saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoDocument {
    /// `<euclidianView><size/>` of the first graphics view, if present.
    pub file_size: Option<ViewSize>,
    pub construction: Construction,
}

/// Width and height of a graphics view in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: i32,
    pub height: i32,
}

impl ViewSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Construction
// ────────────────────────────────────────────────────────────────────────────

/// Element table of a construction.
///
/// The construction owns every element. Iteration follows document order,
/// which is also the tie-break order when widgets share a coordinate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Construction {
    elements: IndexMap<String, GeoElement>,
}

impl Construction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, replacing any previous element with the same label.
    pub fn insert(&mut self, element: GeoElement) -> Option<GeoElement> {
        self.elements.insert(element.label.clone(), element)
    }

    pub fn get(&self, label: &str) -> Option<&GeoElement> {
        self.elements.get(label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut GeoElement> {
        self.elements.get_mut(label)
    }

    pub fn elements(&self) -> impl Iterator<Item = &GeoElement> {
        self.elements.values()
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut GeoElement> {
        self.elements.values_mut()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Slider data of the element with this label, if it is a slider.
    pub fn slider(&self, label: &str) -> Option<&Slider> {
        self.get(label).and_then(GeoElement::as_slider)
    }

    /// Button data of the element with this label, if it is a button.
    pub fn button(&self, label: &str) -> Option<&Button> {
        self.get(label).and_then(GeoElement::as_button)
    }
}

impl FromIterator<GeoElement> for Construction {
    fn from_iter<T: IntoIterator<Item = GeoElement>>(iter: T) -> Self {
        let mut c = Construction::new();
        for e in iter {
            c.insert(e);
        }
        c
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeoElement
// ────────────────────────────────────────────────────────────────────────────

/// A single labelled element of a construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoElement {
    pub label: String,
    pub kind: ElementKind,
}

/// The element kinds the screen adjuster cares about. Everything else is
/// kept as [`ElementKind::Other`] with its XML `type` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    /// A numeric value; `Some` when it is shown as a slider.
    Numeric { slider: Option<Slider> },
    Button(Button),
    /// Input boxes share button geometry but are never repositioned.
    InputBox(Button),
    Other { type_name: String },
}

impl GeoElement {
    pub fn slider(label: impl Into<String>, slider: Slider) -> Self {
        Self {
            label: label.into(),
            kind: ElementKind::Numeric {
                slider: Some(slider),
            },
        }
    }

    pub fn button(label: impl Into<String>, button: Button) -> Self {
        Self {
            label: label.into(),
            kind: ElementKind::Button(button),
        }
    }

    pub fn other(label: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ElementKind::Other {
                type_name: type_name.into(),
            },
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match &self.kind {
            ElementKind::Numeric { slider } => slider.as_ref(),
            _ => None,
        }
    }

    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        match &mut self.kind {
            ElementKind::Numeric { slider } => slider.as_mut(),
            _ => None,
        }
    }

    /// Only real buttons; input boxes return `None`.
    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            ElementKind::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match &mut self.kind {
            ElementKind::Button(b) => Some(b),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Widgets
// ────────────────────────────────────────────────────────────────────────────

/// On-screen slider handle of a numeric element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub x: f64,
    pub y: f64,
    /// Length of the slider track in pixels.
    pub width: f64,
    pub horizontal: bool,
    /// Anchored to the screen rather than to real-world coordinates.
    pub fixed: bool,
}

impl Slider {
    pub fn horizontal(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: 200.0,
            horizontal: true,
            fixed: true,
        }
    }

    pub fn vertical(x: f64, y: f64) -> Self {
        Self {
            horizontal: false,
            ..Self::horizontal(x, y)
        }
    }

    pub fn set_location(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

/// A clickable widget placed at an absolute screen location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Button {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> crate::geometry::Rect {
        crate::geometry::Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_location(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
