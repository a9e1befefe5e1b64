/*!
# Frustum 3D Engine

Geometry core for camera-relative viewing-frustum boundaries.

Everything in the core is a pure, synchronous computation over `f64`
values: calls either return a value or fail immediately with an
[`Error`](frustum3d::Error). The core never touches windows, input or
drawing; a render loop calls into it once per frame or per interaction.

## Architecture

- **math**: `Point3`/`Vector3`, `distance`, `RotationAxis`, `rotate`
- **camera**: `Camera`, `FrustumSolver` (skew offsets and boundary lines),
  `FrustumLine`, `FrustumEdges`
- **log**: replaceable logger routed through `Engine`

## Example

```
use frustum_3d_engine::frustum3d::camera::build_frustum_line;
use frustum_3d_engine::frustum3d::math::{rotate, RotationAxis};
use frustum_3d_engine::glam::DVec3;

let turned = rotate(DVec3::X, 90.0, RotationAxis::Z);
assert!(turned.abs_diff_eq(DVec3::Y, 1e-12));

let line = build_frustum_line(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO)?;
assert_eq!(line.point_at(0.0), DVec3::new(0.0, 0.0, 10.0));
# Ok::<(), frustum_3d_engine::frustum3d::Error>(())
```
*/

// Internal modules
mod config;
mod engine;
mod error;
pub mod camera;
pub mod log;
pub mod math;

// Main frustum3d namespace module
pub mod frustum3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Numeric tolerances
    pub use crate::config::GeometryConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Points, axes and rotation
    pub mod math {
        pub use crate::math::*;
    }

    // Camera, solver and boundary lines
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
