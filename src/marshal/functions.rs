//! Function-descriptor population.
//!
//! A graph-form objective is separable: the solver consumes one
//! [`FunctionObj`] per row of the coefficient matrix for the `f` terms
//! and one per column for the `g` terms. The host supplies each sequence
//! as a record with a required `kind` selector and optional coefficient
//! fields `a` through `e`, where each present field is either a 1x1
//! scalar broadcast across every term or a vector with exactly one entry
//! per term.
//!
//! All shape and class validation completes before the first descriptor
//! is built, so a malformed record never produces a partial sequence.

use log::debug;

use crate::error::{BridgeError, Result};
use crate::host::{HostData, HostRecord};
use crate::real::Real;

/// Base function selector for one objective term.
///
/// The numeric codes are part of the host contract and must not be
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunctionKind {
    /// `|x|`
    Abs = 0,
    /// `e^x`
    Exp = 1,
    /// Huber loss.
    Huber = 2,
    /// `x`
    Identity = 3,
    /// Indicator of `0 <= x <= 1`.
    IndBox01 = 4,
    /// Indicator of `x == 0`.
    IndEq0 = 5,
    /// Indicator of `x >= 0`.
    IndGe0 = 6,
    /// Indicator of `x <= 0`.
    IndLe0 = 7,
    /// `log(1 + e^x)`
    Logistic = 8,
    /// `max(0, -x)`
    MaxNeg0 = 9,
    /// `max(0, x)`
    MaxPos0 = 10,
    /// `x log(x)`
    NegEntr = 11,
    /// `-log(x)`
    NegLog = 12,
    /// `1 / x`
    Recipr = 13,
    /// `x^2`
    Square = 14,
    /// `0`
    #[default]
    Zero = 15,
}

impl FunctionKind {
    /// Numeric code the host uses to select this kind.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a host-side numeric selector.
    ///
    /// Only exact integral codes in range are accepted; NaN, fractional
    /// and out-of-range values return `None`.
    pub fn from_code(code: f64) -> Option<Self> {
        if !code.is_finite() || code.fract() != 0.0 {
            return None;
        }
        match code as i64 {
            0 => Some(FunctionKind::Abs),
            1 => Some(FunctionKind::Exp),
            2 => Some(FunctionKind::Huber),
            3 => Some(FunctionKind::Identity),
            4 => Some(FunctionKind::IndBox01),
            5 => Some(FunctionKind::IndEq0),
            6 => Some(FunctionKind::IndGe0),
            7 => Some(FunctionKind::IndLe0),
            8 => Some(FunctionKind::Logistic),
            9 => Some(FunctionKind::MaxNeg0),
            10 => Some(FunctionKind::MaxPos0),
            11 => Some(FunctionKind::NegEntr),
            12 => Some(FunctionKind::NegLog),
            13 => Some(FunctionKind::Recipr),
            14 => Some(FunctionKind::Square),
            15 => Some(FunctionKind::Zero),
            _ => None,
        }
    }
}

/// One term of a separable objective: a kind selector and five real
/// coefficients.
///
/// Consumed read-only by the solver; built once per solve call and
/// discarded when the call returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionObj<T> {
    /// Base function selector.
    pub kind: FunctionKind,
    /// Shape coefficient, host field `a`.
    pub a: T,
    /// Shape coefficient, host field `b`.
    pub b: T,
    /// Shape coefficient, host field `c`.
    pub c: T,
    /// Shape coefficient, host field `d`.
    pub d: T,
    /// Leading multiplier for the whole term, host field `e`.
    pub scale: T,
}

impl<T: Real> Default for FunctionObj<T> {
    fn default() -> Self {
        FunctionObj {
            kind: FunctionKind::default(),
            a: T::zero(),
            b: T::one(),
            c: T::zero(),
            d: T::zero(),
            scale: T::one(),
        }
    }
}

/// Coefficient slot a host field resolves into.
#[derive(Debug, Clone, Copy)]
enum Slot {
    A,
    B,
    C,
    D,
    Scale,
}

/// Host coefficient fields and the slots they populate. Field `e`
/// carries the term's leading scale.
const COEFF_FIELDS: [(&str, Slot); 5] = [
    ("a", Slot::A),
    ("b", Slot::B),
    ("c", Slot::C),
    ("d", Slot::D),
    ("e", Slot::Scale),
];

fn assign<T>(obj: &mut FunctionObj<T>, slot: Slot, value: T) {
    match slot {
        Slot::A => obj.a = value,
        Slot::B => obj.b = value,
        Slot::C => obj.c = value,
        Slot::D => obj.d = value,
        Slot::Scale => obj.scale = value,
    }
}

/// How a host field contributes to the descriptor sequence.
enum FieldSource<'a, T> {
    /// Field absent; the descriptor default stands.
    Absent,
    /// 1x1 scalar, broadcast to every descriptor.
    Constant(T),
    /// One entry per descriptor, consumed positionally.
    PerElement(&'a HostData),
}

/// Resolve a record field to its presence-tagged source.
///
/// Present fields must be numeric and shaped 1x1, `n`x1 or 1x`n`; either
/// vector orientation is accepted.
fn resolve_source<'a, T: Real>(
    rec: &'a HostRecord,
    rec_name: &str,
    field: &str,
    n: usize,
) -> Result<FieldSource<'a, T>> {
    let Some(arr) = rec.get(field) else {
        return Ok(FieldSource::Absent);
    };
    let class = arr.class_id();
    if !class.is_numeric() {
        return Err(BridgeError::UnsupportedType {
            field: format!("{rec_name}.{field}"),
            class,
        });
    }
    if arr.is_scalar() {
        return Ok(FieldSource::Constant(arr.data().project(0)));
    }
    let (rows, cols) = arr.dims();
    if (rows == n && cols == 1) || (rows == 1 && cols == n) {
        Ok(FieldSource::PerElement(arr.data()))
    } else {
        Err(BridgeError::DimensionMismatch {
            field: format!("{rec_name}.{field}"),
            expected: format!("1x1, {n}x1 or 1x{n}"),
            got: format!("{rows}x{cols}"),
        })
    }
}

fn decode_kind(code: f64, rec_name: &str) -> Result<FunctionKind> {
    FunctionKind::from_code(code).ok_or_else(|| BridgeError::UnknownFunctionKind {
        field: format!("{rec_name}.kind"),
        code,
    })
}

/// Kind selectors after validation: one shared, or one per descriptor.
enum Kinds {
    Constant(FunctionKind),
    PerElement(Vec<FunctionKind>),
}

/// Build `n` function descriptors from a host record.
///
/// `rec_name` names the record in diagnostics (`"f"` or `"g"`). The
/// `kind` field is required; coefficient fields `a`-`e` are optional.
/// A scalar field is broadcast to every descriptor, a vector field is
/// consumed positionally (descriptor `i` gets element `i`), and an
/// absent field keeps the fixed default `(scale=1, a=0, b=1, c=0, d=0)`.
/// Descriptors are produced in index order `0..n-1`, aligned with the
/// rows (for `f`) or columns (for `g`) of the coefficient matrix.
///
/// A present field with a non-numeric class is rejected with
/// `UnsupportedType` rather than letting not-a-number values seep into
/// the solver input.
pub fn populate<T: Real>(rec_name: &str, rec: &HostRecord, n: usize) -> Result<Vec<FunctionObj<T>>> {
    let kinds = match resolve_source::<T>(rec, rec_name, "kind", n)? {
        FieldSource::Absent => {
            return Err(BridgeError::MissingRequiredField {
                field: format!("{rec_name}.kind"),
            });
        }
        FieldSource::Constant(code) => Kinds::Constant(decode_kind(code.into_f64(), rec_name)?),
        FieldSource::PerElement(data) => {
            let mut kinds = Vec::with_capacity(n);
            for i in 0..n {
                kinds.push(decode_kind(data.project::<f64>(i), rec_name)?);
            }
            Kinds::PerElement(kinds)
        }
    };

    // Fold every broadcast scalar into one base descriptor; remember the
    // vector fields for the per-element pass.
    let mut base = FunctionObj::<T>::default();
    let mut per_elem: Vec<(Slot, &HostData)> = Vec::new();
    for (field, slot) in COEFF_FIELDS {
        match resolve_source::<T>(rec, rec_name, field, n)? {
            FieldSource::Absent => {}
            FieldSource::Constant(value) => assign(&mut base, slot, value),
            FieldSource::PerElement(data) => per_elem.push((slot, data)),
        }
    }
    if let Kinds::Constant(kind) = kinds {
        base.kind = kind;
    }

    debug!(
        "populating {} {} descriptors ({} per-element coefficient fields)",
        n,
        rec_name,
        per_elem.len()
    );

    let mut objs = Vec::with_capacity(n);
    for i in 0..n {
        let mut obj = base;
        if let Kinds::PerElement(ref kinds) = kinds {
            obj.kind = kinds[i];
        }
        for &(slot, data) in &per_elem {
            assign(&mut obj, slot, data.project(i));
        }
        objs.push(obj);
    }
    Ok(objs)
}
