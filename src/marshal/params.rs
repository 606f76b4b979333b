//! Solver settings extraction.

use log::trace;

use crate::error::{BridgeError, Result};
use crate::host::HostRecord;
use crate::real::Real;

/// Solver configuration for one solve call.
///
/// [`extract_settings`] only overwrites fields that are present in the
/// host record; everything else keeps whatever the caller seeded it
/// with. `Default` carries the solver family's stock values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings<T> {
    /// Relative stopping tolerance.
    pub rel_tol: T,
    /// Absolute stopping tolerance.
    pub abs_tol: T,
    /// Penalty (step-size) parameter.
    pub rho: T,
    /// Iteration cap.
    pub max_iter: u32,
    /// Suppress solver progress output.
    pub quiet: bool,
}

impl<T: Real> Default for Settings<T> {
    fn default() -> Self {
        Settings {
            rel_tol: T::from_f64(1e-3),
            abs_tol: T::from_f64(1e-4),
            rho: T::one(),
            max_iter: 2500,
            quiet: false,
        }
    }
}

/// Scalar parameter fields recognized in a host settings record.
const PARAM_FIELDS: [&str; 5] = ["rel_tol", "abs_tol", "rho", "max_iter", "quiet"];

/// Copy present parameter fields from a host record into `settings`.
///
/// Each of the five recognized fields is handled independently: an
/// absent field leaves the current value untouched; a present field must
/// be a numeric 1x1 scalar (`DimensionMismatch` otherwise, naming the
/// field). Checking is fail-fast: the first offending field aborts the
/// extraction, and unrecognized fields are ignored.
///
/// Target conversions follow the configuration members: real values for
/// the tolerances and `rho`, truncation to `u32` for `max_iter`, and
/// nonzero-means-true for `quiet`.
pub fn extract_settings<T: Real>(rec: &HostRecord, settings: &mut Settings<T>) -> Result<()> {
    for field in PARAM_FIELDS {
        let Some(arr) = rec.get(field) else {
            continue;
        };
        let class = arr.class_id();
        if !class.is_numeric() {
            return Err(BridgeError::UnsupportedType {
                field: field.into(),
                class,
            });
        }
        if !arr.is_scalar() {
            let (rows, cols) = arr.dims();
            return Err(BridgeError::DimensionMismatch {
                field: field.into(),
                expected: "1x1".into(),
                got: format!("{rows}x{cols}"),
            });
        }
        let value: f64 = arr.data().project(0);
        trace!("setting {field} = {value}");
        match field {
            "rel_tol" => settings.rel_tol = T::from_f64(value),
            "abs_tol" => settings.abs_tol = T::from_f64(value),
            "rho" => settings.rho = T::from_f64(value),
            "max_iter" => settings.max_iter = value as u32,
            "quiet" => settings.quiet = value != 0.0,
            _ => unreachable!("field list and match arms must agree"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ClassId, HostArray, HostData};

    #[test]
    fn test_default_settings() {
        let settings = Settings::<f64>::default();
        assert_eq!(settings.rel_tol, 1e-3);
        assert_eq!(settings.abs_tol, 1e-4);
        assert_eq!(settings.rho, 1.0);
        assert_eq!(settings.max_iter, 2500);
        assert!(!settings.quiet);
    }

    #[test]
    fn test_empty_record_leaves_defaults_untouched() {
        let mut settings = Settings::<f64>::default();
        extract_settings(&HostRecord::new(), &mut settings).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_present_fields_overwrite() {
        let rec = HostRecord::new()
            .with("rel_tol", HostArray::scalar(1e-6))
            .with("max_iter", HostArray::new(1, 1, HostData::Int32(vec![10])))
            .with("quiet", HostArray::new(1, 1, HostData::Logical(vec![true])));
        let mut settings = Settings::<f64>::default();
        extract_settings(&rec, &mut settings).unwrap();
        assert_eq!(settings.rel_tol, 1e-6);
        assert_eq!(settings.max_iter, 10);
        assert!(settings.quiet);
        // untouched
        assert_eq!(settings.abs_tol, 1e-4);
        assert_eq!(settings.rho, 1.0);
    }

    #[test]
    fn test_non_scalar_field_is_fatal_and_leaves_settings() {
        let rec = HostRecord::new().with("rho", HostArray::col_vec(vec![1.0, 2.0]));
        let mut settings = Settings::<f64>::default();
        let err = extract_settings(&rec, &mut settings).unwrap_err();
        assert_eq!(
            err,
            BridgeError::DimensionMismatch {
                field: "rho".into(),
                expected: "1x1".into(),
                got: "2x1".into(),
            }
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_non_numeric_field_is_fatal() {
        let rec =
            HostRecord::new().with("quiet", HostArray::new(1, 1, HostData::Char("yes".into())));
        let mut settings = Settings::<f32>::default();
        let err = extract_settings(&rec, &mut settings).unwrap_err();
        assert_eq!(
            err,
            BridgeError::UnsupportedType {
                field: "quiet".into(),
                class: ClassId::Char,
            }
        );
    }

    #[test]
    fn test_unrecognized_fields_are_ignored() {
        let rec = HostRecord::new().with("verbose", HostArray::scalar(1.0));
        let mut settings = Settings::<f64>::default();
        extract_settings(&rec, &mut settings).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
