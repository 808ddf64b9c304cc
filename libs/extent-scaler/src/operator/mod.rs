//! # Dim Vertices Operator
//!
//! Editor-agnostic binding of the scaler. An embedding editor implements
//! [`EditorHost`] and [`SelectableMesh`]; [`DimVertices::execute`] then
//! brackets the core call with the mode switch the editor needs.
//!
//! ## Flow
//!
//! 1. Remember the current mode and switch to object mode
//! 2. Gather the selected vertices of every selected object
//! 3. Run [`scale_to_extent`] over that flattened selection
//! 4. Restore the remembered mode, whatever the outcome

use tracing::debug;

use crate::core::{point::Positioned, vec3::Vec3};
use crate::ops::scale_to_extent::{scale_to_extent, Outcome, ScaleRequest};

// =============================================================================
// HOST TYPES
// =============================================================================

/// Interaction mode of the host editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Object mode; vertex positions are writable.
    Object,
    /// Mesh edit mode.
    Edit,
    /// Any other host mode, kept by name so it can be restored.
    Other(String),
}

impl EditorMode {
    /// Maps a host context name to a mode.
    ///
    /// The context reports mesh editing as `EDIT_MESH` while the mode setter
    /// expects `EDIT`; both map to [`EditorMode::Edit`].
    ///
    /// # Examples
    /// ```
    /// use extent_scaler::EditorMode;
    /// assert_eq!(EditorMode::from_context_name("EDIT_MESH"), EditorMode::Edit);
    /// assert_eq!(EditorMode::from_context_name("OBJECT"), EditorMode::Object);
    /// ```
    pub fn from_context_name(name: &str) -> Self {
        match name {
            "OBJECT" => EditorMode::Object,
            "EDIT" | "EDIT_MESH" => EditorMode::Edit,
            other => EditorMode::Other(other.to_string()),
        }
    }

    /// Name accepted by the host mode setter.
    pub fn as_str(&self) -> &str {
        match self {
            EditorMode::Object => "OBJECT",
            EditorMode::Edit => "EDIT",
            EditorMode::Other(name) => name,
        }
    }
}

/// A mesh vertex with its selection state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshVertex {
    /// Vertex coordinate.
    pub co: Vec3,
    /// Whether the vertex is part of the current selection.
    pub select: bool,
}

impl MeshVertex {
    /// Creates a vertex.
    #[must_use]
    pub fn new(co: Vec3, select: bool) -> Self {
        Self { co, select }
    }
}

impl Positioned for MeshVertex {
    fn position(&self) -> Vec3 {
        self.co
    }

    fn set_position(&mut self, position: Vec3) {
        self.co = position;
    }
}

/// An object whose vertices can be selected and moved.
pub trait SelectableMesh {
    /// All vertices of the object, selected or not.
    fn vertices_mut(&mut self) -> &mut [MeshVertex];
}

/// The editor side of the binding.
pub trait EditorHost {
    /// Object type handed out for the current selection.
    type Object: SelectableMesh;

    /// Current interaction mode.
    fn mode(&self) -> EditorMode;

    /// Switches the interaction mode.
    fn set_mode(&mut self, mode: EditorMode);

    /// Currently selected objects.
    fn selected_objects_mut(&mut self) -> Vec<&mut Self::Object>;
}

// =============================================================================
// OPERATOR
// =============================================================================

/// "Dim Vertices": scale selected vertices to a certain dimension.
///
/// # Examples
/// ```
/// use extent_scaler::{
///     Axis, DimVertices, EditorHost, EditorMode, MeshVertex, Outcome, ScaleRequest,
///     SelectableMesh, Vec3,
/// };
///
/// struct Object(Vec<MeshVertex>);
///
/// impl SelectableMesh for Object {
///     fn vertices_mut(&mut self) -> &mut [MeshVertex] {
///         &mut self.0
///     }
/// }
///
/// struct Scene {
///     mode: EditorMode,
///     objects: Vec<Object>,
/// }
///
/// impl EditorHost for Scene {
///     type Object = Object;
///     fn mode(&self) -> EditorMode {
///         self.mode.clone()
///     }
///     fn set_mode(&mut self, mode: EditorMode) {
///         self.mode = mode;
///     }
///     fn selected_objects_mut(&mut self) -> Vec<&mut Object> {
///         self.objects.iter_mut().collect()
///     }
/// }
///
/// let mut scene = Scene {
///     mode: EditorMode::Edit,
///     objects: vec![Object(vec![
///         MeshVertex::new(Vec3::ZERO, true),
///         MeshVertex::new(Vec3::new(2.0, 0.0, 0.0), true),
///     ])],
/// };
///
/// let op = DimVertices::new(ScaleRequest::new(4.0, Axis::X));
/// assert_eq!(op.execute(&mut scene), Outcome::Finished);
/// assert_eq!(scene.mode, EditorMode::Edit);
/// assert_eq!(scene.objects[0].0[1].co, Vec3::new(3.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DimVertices {
    /// Parameters collected by the host dialog.
    pub request: ScaleRequest,
}

impl DimVertices {
    /// Identifier buttons and menu entries refer to.
    pub const ID: &'static str = "object.dim_vertices";

    /// Display name in the host interface.
    pub const LABEL: &'static str = "Dim Vertices";

    /// Operator configured with `request`.
    #[must_use]
    pub fn new(request: ScaleRequest) -> Self {
        Self { request }
    }

    /// Scales the selected vertices of all selected objects.
    ///
    /// The host is switched to object mode for the duration of the call and
    /// returned to its previous mode before this returns.
    pub fn execute<H: EditorHost>(&self, host: &mut H) -> Outcome {
        let previous = host.mode();
        let switched = previous != EditorMode::Object;
        if switched {
            debug!(from = previous.as_str(), "switching to object mode");
            host.set_mode(EditorMode::Object);
        }

        let outcome = {
            let mut selection: Vec<&mut MeshVertex> = host
                .selected_objects_mut()
                .into_iter()
                .flat_map(|object| object.vertices_mut().iter_mut())
                .filter(|vertex| vertex.select)
                .collect();
            scale_to_extent(selection.as_mut_slice(), &self.request)
        };

        if switched {
            debug!(to = previous.as_str(), "restoring editor mode");
            host.set_mode(previous);
        }

        outcome
    }
}
