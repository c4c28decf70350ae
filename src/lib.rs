pub mod app;
pub mod calc;
pub mod config;
pub mod error;
pub mod format;
pub mod headless;
pub mod logging;
pub mod model;
pub mod state;
pub mod ui;
pub mod validate;

pub use calc::calculate;
pub use error::{ConfigError, FieldError};
pub use model::{CalculationResult, Field, FormInput, Mode, ParsedInput};
pub use state::{reduce, Action, FormState, Phase};
pub use validate::{parse, validate, ValidationErrors};
