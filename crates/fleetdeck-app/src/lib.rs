// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod columns;
pub mod forms;
pub mod ids;
pub mod model;
pub mod screen;
pub mod state;

pub use columns::*;
pub use forms::*;
pub use ids::*;
pub use model::*;
pub use screen::*;
pub use state::*;
