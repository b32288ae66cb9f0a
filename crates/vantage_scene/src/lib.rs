//! Scene-graph model for the Vantage editor core.
//!
//! Provides the object graph the interaction core mutates: nodes with
//! parent/child links, transforms, and per-resource ownership rules for
//! geometry, materials, and textures.
//!
//! ## Ownership policy
//!
//! Resource sharing on duplication is an explicit contract, not an accident
//! of clone semantics:
//!
//! - **Geometry** is shared by reference (`Arc`), never copied.
//! - **Materials** are copied per duplicate and marked dirty, so edits to a
//!   duplicate never bleed into the source.
//! - **Textures** are copied per duplicate and marked dirty, but the pixel
//!   *source* behind them stays shared.

mod object;
mod resources;
mod scene;

pub use object::{ObjectId, ObjectKind, SceneObject, Transform};
pub use resources::{Geometry, Material, Texture, TextureSource};
pub use scene::{Scene, SceneError, SceneResult};
