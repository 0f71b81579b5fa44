//! Interactive handles recognized by hit testing.

use crate::line::Endpoint;

/// Which part of an annotation sits under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HandleKind {
    #[default]
    None,
    /// The line itself; dragging it moves the whole annotation.
    Body,
    StartPoint,
    EndPoint,
    CornerTopLeft,
    CornerTopRight,
    CornerBottomLeft,
    CornerBottomRight,
    EdgeTop,
    EdgeBottom,
    EdgeLeft,
    EdgeRight,
}

impl HandleKind {
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::CornerTopLeft | Self::CornerTopRight | Self::CornerBottomLeft | Self::CornerBottomRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(self, Self::EdgeTop | Self::EdgeBottom | Self::EdgeLeft | Self::EdgeRight)
    }

    /// Corners and edges: handles that resize the shared rectangle size.
    pub fn is_rect_handle(self) -> bool {
        self.is_corner() || self.is_edge()
    }

    pub fn endpoint(self) -> Option<Endpoint> {
        match self {
            Self::StartPoint => Some(Endpoint::Start),
            Self::EndPoint => Some(Endpoint::End),
            _ => None,
        }
    }

    /// Sign of the local x coordinate that drives the width, if this handle
    /// resizes horizontally.
    pub fn width_sign(self) -> Option<f64> {
        match self {
            Self::EdgeRight | Self::CornerTopRight | Self::CornerBottomRight => Some(1.0),
            Self::EdgeLeft | Self::CornerTopLeft | Self::CornerBottomLeft => Some(-1.0),
            _ => None,
        }
    }

    /// Sign of the local y coordinate that drives the height, if this handle
    /// resizes vertically. Local -y is the top.
    pub fn height_sign(self) -> Option<f64> {
        match self {
            Self::EdgeBottom | Self::CornerBottomLeft | Self::CornerBottomRight => Some(1.0),
            Self::EdgeTop | Self::CornerTopLeft | Self::CornerTopRight => Some(-1.0),
            _ => None,
        }
    }
}

/// Result of a hit test: the handle and, for rectangle handles, the index
/// of the rectangle that owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hit {
    pub handle: HandleKind,
    pub rect_index: Option<usize>,
}

impl Hit {
    pub const NONE: Hit = Hit {
        handle: HandleKind::None,
        rect_index: None,
    };

    pub fn line(handle: HandleKind) -> Self {
        Self {
            handle,
            rect_index: None,
        }
    }

    pub fn rect(handle: HandleKind, index: usize) -> Self {
        Self {
            handle,
            rect_index: Some(index),
        }
    }

    pub fn is_none(&self) -> bool {
        self.handle == HandleKind::None
    }
}
