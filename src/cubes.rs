use std::fmt;

/// What `cubes_list` hands back: the squares of every integer in the
/// half-open range [xmin, xmax), or one of the two legacy error codes.
#[derive(Clone, Debug, PartialEq)]
pub enum CubesResult {
    Cubes(Vec<i64>),
    RangeOrder, // code 1
    NotInteger, // code 2
}

impl CubesResult {
    /// The legacy sentinel code, 0 on success.
    pub fn code(&self) -> i32 {
        match self {
            CubesResult::Cubes(_) => 0,
            CubesResult::RangeOrder => 1,
            CubesResult::NotInteger => 2,
        }
    }

    pub fn cubes(&self) -> Option<&[i64]> {
        match self {
            CubesResult::Cubes(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for CubesResult {
    // renders like the script output: the list on success, the bare code on error
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubesResult::Cubes(v) => {
                write!(f, "[")?;
                for (i, x) in v.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", x)?;
                }
                write!(f, "]")
            }
            other => write!(f, "{}", other.code()),
        }
    }
}

/// Squares of every integer i with xmin <= i < xmax.
///
/// By default, xmin is 0. Bounds come in as f64 so fractional input can be
/// rejected with an explicit integrality check instead of being truncated.
pub fn cubes_list(xmax: f64, xmin: Option<f64>) -> CubesResult {
    let xmin = xmin.unwrap_or(0.0);

    // check if xmax > xmin
    if xmax < xmin {
        println!("Error Xmax < Xmin");
        return CubesResult::RangeOrder;
    }

    // check if both values are integers
    if xmax.fract() != 0.0 || xmin.fract() != 0.0 {
        println!("Error Xmax or Xmin are not integers");
        return CubesResult::NotInteger;
    }

    let (lo, hi) = (xmin as i64, xmax as i64);
    CubesResult::Cubes((lo..hi).map(|i| i * i).collect())
}
