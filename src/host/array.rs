//! Tagged host arrays and numeric projection.
//!
//! A [`HostArray`] is what the host passes across the boundary: a dense
//! 2-D buffer in the host's native column-major layout, tagged with a
//! class identifying its element representation. Storage is a sum type
//! with one variant per representation, so decoding is an exhaustive
//! match rather than a switch over an integer class id: adding a host
//! class is a compile-time-checked change, and the non-numeric branches
//! stay explicit instead of hiding behind a wildcard.

use std::fmt;

use crate::real::Real;

/// Class tag identifying a host buffer's element representation.
///
/// The numeric classes decode to values; the remaining classes decode to
/// the not-a-number sentinel wherever a numeric value is demanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassId {
    /// Double-precision float.
    Double,
    /// Single-precision float.
    Single,
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Boolean.
    Logical,
    /// Text.
    Char,
    /// Cell array of nested arrays.
    Cell,
    /// Struct-like record.
    Struct,
    /// Function reference.
    FunctionHandle,
    /// Unrecognized class.
    Unknown,
    /// No data.
    Void,
}

impl ClassId {
    /// Whether buffers of this class decode to numeric values.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ClassId::Double
                | ClassId::Single
                | ClassId::Int8
                | ClassId::Uint8
                | ClassId::Int16
                | ClassId::Uint16
                | ClassId::Int32
                | ClassId::Uint32
                | ClassId::Int64
                | ClassId::Uint64
                | ClassId::Logical
        )
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassId::Double => "double",
            ClassId::Single => "single",
            ClassId::Int8 => "int8",
            ClassId::Uint8 => "uint8",
            ClassId::Int16 => "int16",
            ClassId::Uint16 => "uint16",
            ClassId::Int32 => "int32",
            ClassId::Uint32 => "uint32",
            ClassId::Int64 => "int64",
            ClassId::Uint64 => "uint64",
            ClassId::Logical => "logical",
            ClassId::Char => "char",
            ClassId::Cell => "cell",
            ClassId::Struct => "struct",
            ClassId::FunctionHandle => "function_handle",
            ClassId::Unknown => "unknown",
            ClassId::Void => "void",
        };
        write!(f, "{name}")
    }
}

/// Element storage for a host array, one variant per class.
#[derive(Debug, Clone, PartialEq)]
pub enum HostData {
    /// Double-precision elements.
    Double(Vec<f64>),
    /// Single-precision elements.
    Single(Vec<f32>),
    /// Signed 8-bit elements.
    Int8(Vec<i8>),
    /// Unsigned 8-bit elements.
    Uint8(Vec<u8>),
    /// Signed 16-bit elements.
    Int16(Vec<i16>),
    /// Unsigned 16-bit elements.
    Uint16(Vec<u16>),
    /// Signed 32-bit elements.
    Int32(Vec<i32>),
    /// Unsigned 32-bit elements.
    Uint32(Vec<u32>),
    /// Signed 64-bit elements.
    Int64(Vec<i64>),
    /// Unsigned 64-bit elements.
    Uint64(Vec<u64>),
    /// Boolean elements.
    Logical(Vec<bool>),
    /// Text.
    Char(String),
    /// Nested arrays.
    Cell(Vec<HostArray>),
    /// Nested record.
    Struct(Box<crate::host::HostRecord>),
    /// Function reference, by name.
    FunctionHandle(String),
    /// Unrecognized payload.
    Unknown,
    /// No payload.
    Void,
}

impl HostData {
    /// Class tag for this storage.
    pub fn class_id(&self) -> ClassId {
        match self {
            HostData::Double(_) => ClassId::Double,
            HostData::Single(_) => ClassId::Single,
            HostData::Int8(_) => ClassId::Int8,
            HostData::Uint8(_) => ClassId::Uint8,
            HostData::Int16(_) => ClassId::Int16,
            HostData::Uint16(_) => ClassId::Uint16,
            HostData::Int32(_) => ClassId::Int32,
            HostData::Uint32(_) => ClassId::Uint32,
            HostData::Int64(_) => ClassId::Int64,
            HostData::Uint64(_) => ClassId::Uint64,
            HostData::Logical(_) => ClassId::Logical,
            HostData::Char(_) => ClassId::Char,
            HostData::Cell(_) => ClassId::Cell,
            HostData::Struct(_) => ClassId::Struct,
            HostData::FunctionHandle(_) => ClassId::FunctionHandle,
            HostData::Unknown => ClassId::Unknown,
            HostData::Void => ClassId::Void,
        }
    }

    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        match self {
            HostData::Double(v) => v.len(),
            HostData::Single(v) => v.len(),
            HostData::Int8(v) => v.len(),
            HostData::Uint8(v) => v.len(),
            HostData::Int16(v) => v.len(),
            HostData::Uint16(v) => v.len(),
            HostData::Int32(v) => v.len(),
            HostData::Uint32(v) => v.len(),
            HostData::Int64(v) => v.len(),
            HostData::Uint64(v) => v.len(),
            HostData::Logical(v) => v.len(),
            HostData::Char(s) => s.chars().count(),
            HostData::Cell(v) => v.len(),
            HostData::Struct(_) | HostData::FunctionHandle(_) => 1,
            HostData::Unknown | HostData::Void => 0,
        }
    }

    /// Whether this storage holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode element `idx` as a value of the working type `T`.
    ///
    /// Numeric variants cast with `as`-style semantics, the same
    /// conversion the host itself applies. Every non-numeric variant
    /// yields the IEEE not-a-number sentinel; projection never fails and
    /// never reads out of a variant's own storage. Keeping `idx` within
    /// the element count is the caller's contract; a violation panics on
    /// the slice index, it does not corrupt memory.
    pub fn project<T: Real>(&self, idx: usize) -> T {
        match self {
            HostData::Double(v) => T::from_f64(v[idx]),
            HostData::Single(v) => T::from_f64(f64::from(v[idx])),
            HostData::Int8(v) => T::from_f64(f64::from(v[idx])),
            HostData::Uint8(v) => T::from_f64(f64::from(v[idx])),
            HostData::Int16(v) => T::from_f64(f64::from(v[idx])),
            HostData::Uint16(v) => T::from_f64(f64::from(v[idx])),
            HostData::Int32(v) => T::from_f64(f64::from(v[idx])),
            HostData::Uint32(v) => T::from_f64(f64::from(v[idx])),
            HostData::Int64(v) => T::from_f64(v[idx] as f64),
            HostData::Uint64(v) => T::from_f64(v[idx] as f64),
            HostData::Logical(v) => {
                if v[idx] {
                    T::one()
                } else {
                    T::zero()
                }
            }
            HostData::Char(_)
            | HostData::Cell(_)
            | HostData::Struct(_)
            | HostData::FunctionHandle(_)
            | HostData::Unknown
            | HostData::Void => T::nan(),
        }
    }
}

/// A dense 2-D host buffer: shape plus tagged element storage.
///
/// Elements are stored in column-major order, the host's native layout.
#[derive(Debug, Clone, PartialEq)]
pub struct HostArray {
    rows: usize,
    cols: usize,
    data: HostData,
}

impl HostArray {
    /// Create an array from column-major storage.
    ///
    /// # Panics
    ///
    /// Panics if a numeric storage's length does not equal
    /// `rows * cols`. Shape and storage disagreeing is a programming
    /// error on the host side of the boundary, not a runtime condition.
    pub fn new(rows: usize, cols: usize, data: HostData) -> Self {
        if data.class_id().is_numeric() {
            assert_eq!(
                data.len(),
                rows * cols,
                "storage length must equal rows * cols"
            );
        }
        HostArray { rows, cols, data }
    }

    /// 1x1 double-precision scalar.
    pub fn scalar(value: f64) -> Self {
        HostArray::new(1, 1, HostData::Double(vec![value]))
    }

    /// 1x1 single-precision scalar.
    pub fn scalar_single(value: f32) -> Self {
        HostArray::new(1, 1, HostData::Single(vec![value]))
    }

    /// `n`x1 double-precision column vector.
    pub fn col_vec(values: Vec<f64>) -> Self {
        let n = values.len();
        HostArray::new(n, 1, HostData::Double(values))
    }

    /// 1x`n` double-precision row vector.
    pub fn row_vec(values: Vec<f64>) -> Self {
        let n = values.len();
        HostArray::new(1, n, HostData::Double(values))
    }

    /// `rows`x`cols` double-precision matrix from column-major storage.
    pub fn matrix(rows: usize, cols: usize, col_major: Vec<f64>) -> Self {
        HostArray::new(rows, cols, HostData::Double(col_major))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total element count.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether this is a 1x1 array.
    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// Class tag of the element storage.
    pub fn class_id(&self) -> ClassId {
        self.data.class_id()
    }

    /// Element storage.
    pub fn data(&self) -> &HostData {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostRecord;

    #[test]
    fn test_every_numeric_class_projects_exactly() {
        let cases: Vec<(HostData, f64)> = vec![
            (HostData::Double(vec![1.5]), 1.5),
            (HostData::Single(vec![0.25f32]), 0.25),
            (HostData::Int8(vec![-7]), -7.0),
            (HostData::Uint8(vec![200]), 200.0),
            (HostData::Int16(vec![-3000]), -3000.0),
            (HostData::Uint16(vec![60000]), 60000.0),
            (HostData::Int32(vec![-100_000]), -100_000.0),
            (HostData::Uint32(vec![4_000_000]), 4_000_000.0),
            (HostData::Int64(vec![-1_000_000_000]), -1_000_000_000.0),
            (HostData::Uint64(vec![1_000_000_000]), 1_000_000_000.0),
            (HostData::Logical(vec![true]), 1.0),
        ];
        for (data, expected) in cases {
            assert!(data.class_id().is_numeric());
            assert_eq!(data.project::<f64>(0), expected, "class {}", data.class_id());
            assert_eq!(
                data.project::<f32>(0),
                expected as f32,
                "class {}",
                data.class_id()
            );
        }
    }

    #[test]
    fn test_logical_false_projects_to_zero() {
        let data = HostData::Logical(vec![false, true]);
        assert_eq!(data.project::<f64>(0), 0.0);
        assert_eq!(data.project::<f64>(1), 1.0);
    }

    #[test]
    fn test_every_non_numeric_class_projects_to_nan() {
        let cases = vec![
            HostData::Char("abc".into()),
            HostData::Cell(vec![HostArray::scalar(1.0)]),
            HostData::Struct(Box::new(HostRecord::new())),
            HostData::FunctionHandle("square".into()),
            HostData::Unknown,
            HostData::Void,
        ];
        for data in cases {
            assert!(!data.class_id().is_numeric());
            assert!(data.project::<f64>(0).is_nan(), "class {}", data.class_id());
            assert!(data.project::<f32>(0).is_nan(), "class {}", data.class_id());
        }
    }

    #[test]
    fn test_projection_indexes_positionally() {
        let data = HostData::Int32(vec![10, 20, 30]);
        assert_eq!(data.project::<f64>(2), 30.0);
    }

    #[test]
    fn test_scalar_and_vector_shapes() {
        assert!(HostArray::scalar(3.0).is_scalar());
        let v = HostArray::col_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.dims(), (3, 1));
        let v = HostArray::row_vec(vec![1.0, 2.0]);
        assert_eq!(v.dims(), (1, 2));
        assert_eq!(v.numel(), 2);
    }

    #[test]
    #[should_panic(expected = "storage length must equal rows * cols")]
    fn test_shape_storage_disagreement_panics() {
        HostArray::new(2, 2, HostData::Double(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_class_display_names() {
        assert_eq!(ClassId::Double.to_string(), "double");
        assert_eq!(ClassId::FunctionHandle.to_string(), "function_handle");
    }
}
