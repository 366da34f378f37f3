//! City Simulation Library
//!
//! Procedural city layout generation (roads, parks, fountain, buildings)
//! plus a headless traffic simulation layer. The core runs without any
//! renderer; a frontend only needs read access to the generated data.

pub mod simulation;
