//! # forge-engine: Validation, Synthesis and the Object Handler
//!
//! - [`PropertyResolver`] validates one property and resolves its type,
//!   synthesizing stored dependencies on demand.
//! - [`ClassValidator`] validates a whole shape, resolving its properties
//!   in parallel.
//! - [`synthesize`] turns a validated [`ClassSpec`] into a [`LiveType`];
//!   [`Instance`] values enforce member visibility.
//! - [`TypeRegistry`] holds the currently published live types.
//! - [`ObjectHandler`] is the CRUD façade over all of the above and the
//!   declaration store.

pub mod error;
pub mod handler;
pub mod instance;
pub mod registry;
pub mod resolver;
pub mod spec;
pub mod synth;
pub mod validator;

pub use error::{AccessError, HandlerError, SynthesisError};
pub use handler::ObjectHandler;
pub use instance::{Instance, Value};
pub use registry::TypeRegistry;
pub use resolver::{PropertyResolver, ResolutionChain};
pub use spec::{ClassSpec, PropertySpec, TypeReference};
pub use synth::{synthesize, LiveType};
pub use validator::ClassValidator;
