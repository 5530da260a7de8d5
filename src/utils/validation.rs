use crate::error::{Error, Result};
use validator::Validate;

/// Runs the derived validation and reports every failing field by its
/// environment variable name, in the order given by `fields`.
pub fn validate_present<T: Validate>(val: &T, fields: &[(&'static str, &'static str)]) -> Result<()> {
    let errors = match val.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };
    let failed = errors.field_errors();
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(field, _)| failed.contains_key(field))
        .map(|(_, var)| *var)
        .collect();
    Err(Error::MissingInput(missing))
}
