use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Deref, Div, Mul, Sub, SubAssign};

const MM_PER_INCH: f32 = 25.4;
const PT_PER_INCH: f32 = 72.0;

/// A length in millimetres, the unit layout is done in
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm(pub f32);

/// A length in PDF points (1/72 of an inch), the unit fonts are sized in
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pt(pub f32);

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 / MM_PER_INCH * PT_PER_INCH)
    }
}

impl From<Pt> for Mm {
    fn from(value: Pt) -> Self {
        Mm(value.0 / PT_PER_INCH * MM_PER_INCH)
    }
}

macro_rules! impl_unit_ops {
    ($unit:ident) => {
        impl Deref for $unit {
            type Target = f32;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Add for $unit {
            type Output = $unit;

            fn add(self, rhs: $unit) -> Self::Output {
                $unit(self.0 + rhs.0)
            }
        }

        impl Sub for $unit {
            type Output = $unit;

            fn sub(self, rhs: $unit) -> Self::Output {
                $unit(self.0 - rhs.0)
            }
        }

        impl AddAssign for $unit {
            fn add_assign(&mut self, rhs: $unit) {
                self.0 += rhs.0;
            }
        }

        impl SubAssign for $unit {
            fn sub_assign(&mut self, rhs: $unit) {
                self.0 -= rhs.0;
            }
        }

        impl Mul<f32> for $unit {
            type Output = $unit;

            fn mul(self, rhs: f32) -> Self::Output {
                $unit(self.0 * rhs)
            }
        }

        impl Div<f32> for $unit {
            type Output = $unit;

            fn div(self, rhs: f32) -> Self::Output {
                $unit(self.0 / rhs)
            }
        }
    };
}

impl_unit_ops!(Mm);
impl_unit_ops!(Pt);

impl Mm {
    pub fn max(self, other: Mm) -> Mm {
        if other > self {
            other
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_convert_between_units() {
        let pt: Pt = Mm(25.4).into();
        assert!((pt.0 - 72.0).abs() < 0.001);

        let mm: Mm = Pt(72.0).into();
        assert!((mm.0 - 25.4).abs() < 0.001);
    }

    #[test]
    fn can_do_arithmetic() {
        let mut y = Mm(10.0);
        y += Mm(5.0);
        y -= Mm(2.5);
        assert_eq!(y, Mm(12.5));
        assert_eq!(Mm(3.0) * 2.0, Mm(6.0));
        assert_eq!(Pt(8.0) / 2.0, Pt(4.0));
        assert!(Mm(1.0) < Mm(1.5));
    }
}
