// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod column;
pub mod debounce;
pub mod filter;
pub mod fuzzy;
pub mod page;
pub mod query;
pub mod sort;
pub mod value;

pub use column::*;
pub use debounce::*;
pub use filter::*;
pub use fuzzy::*;
pub use page::*;
pub use query::*;
pub use sort::*;
pub use value::*;
