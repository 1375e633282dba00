//! Domain layer: strong types, field bookkeeping and invariants (no I/O).

mod field;
mod record;
mod validation;
mod value;
mod vars;

pub(crate) use field::{opt_bool, opt_f64, opt_i64, opt_str, opt_str_list, required};
pub use field::FieldError;
pub use record::{EntityData, LoadState};
pub use validation::ValidationError;
pub use value::{ApiKey, Params, VarName};
pub use vars::CustomVars;
