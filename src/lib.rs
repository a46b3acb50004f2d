//! Range-query leakage-abuse attack simulator
//!
//! Simulates an adversary that watches an encrypted multi-dimensional
//! range-search scheme answer box queries and sees nothing but opaque
//! record identifiers — which records co-occur in which responses. From
//! that co-occurrence structure alone, the attack reconstructs the
//! secret ordering of the grid's coordinates along each axis.
//!
//! Pipeline:
//! 1. [`grid`] — enumerate every grid point and every box-query response
//! 2. [`leakage`] — prime-cardinality inclusion filter + random subsampling
//! 3. [`tokenize`] — replace points with unique random surrogate labels
//! 4. [`cluster`] — group responses into independent 1D slices by token overlap
//! 5. [`reconstruct`] — solve each slice's contiguity constraints into an order
//! 6. [`validate`] — score the recovered orders against ground truth
//!
//! Reconstruction is best-effort by construction: responses are randomly
//! subsampled, orientation of each recovered row is undecidable, and the
//! constraint structure drops constraints it cannot honor. Scoring
//! reports both an exact-match verdict and a per-edge accuracy in [0,1].

pub mod arrangement;
pub mod attack;
pub mod cluster;
pub mod grid;
pub mod leakage;
pub mod reconstruct;
pub mod tokenize;
pub mod validate;
