pub mod bits;
pub mod linalg;
pub mod error;
pub mod config;
pub mod basis_map;
pub mod embed;
pub mod state;
pub mod apply;
pub mod gate;
pub mod matrix_gate;
pub mod circuit;

pub use basis_map::LocalBasisMap;
pub use circuit::{put, Circuit, PositionedGate};
pub use config::{ApplyStrategy, EmbedConfig};
pub use embed::{create_gate_matrix, GateMatrixBuilder};
pub use error::{EmbedError, Result};
pub use gate::Gate;
pub use matrix_gate::MatrixGate;
pub use state::State;
