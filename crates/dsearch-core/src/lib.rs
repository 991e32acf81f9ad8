#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod collection;
pub mod config;
pub mod error;
pub mod matcher;
pub mod record;
pub mod resolver;

pub use collection::RecordCollection;
pub use error::{Error, Result};
pub use record::{Record, Value};
pub use resolver::{Dataset, Page, Role, Section};
