//! Macros for implementing arithmetic traits on field element types.

/// Implements `Add`, `Sub` and `Mul` (with their assigning forms) and `Neg`
/// for a Montgomery element type whose context is reachable through a
/// `field()` method and whose limbs live in a `v` field.
macro_rules! impl_mont_ops {
    ($elem:ident) => {
        impl<'a> core::ops::Add<&$elem<'a>> for &$elem<'a> {
            type Output = $elem<'a>;

            #[inline]
            fn add(self, rhs: &$elem<'a>) -> $elem<'a> {
                $elem {
                    v: self.field().add(&self.v, &rhs.v),
                    ..*self
                }
            }
        }

        impl<'a> core::ops::Sub<&$elem<'a>> for &$elem<'a> {
            type Output = $elem<'a>;

            #[inline]
            fn sub(self, rhs: &$elem<'a>) -> $elem<'a> {
                $elem {
                    v: self.field().sub(&self.v, &rhs.v),
                    ..*self
                }
            }
        }

        impl<'a> core::ops::Mul<&$elem<'a>> for &$elem<'a> {
            type Output = $elem<'a>;

            #[inline]
            fn mul(self, rhs: &$elem<'a>) -> $elem<'a> {
                $elem {
                    v: self.field().mul(&self.v, &rhs.v),
                    ..*self
                }
            }
        }

        impl<'a> core::ops::Neg for &$elem<'a> {
            type Output = $elem<'a>;

            #[inline]
            fn neg(self) -> $elem<'a> {
                $elem {
                    v: self.field().neg(&self.v),
                    ..*self
                }
            }
        }

        impl subtle::ConstantTimeEq for $elem<'_> {
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                subtle::ConstantTimeEq::ct_eq(&self.v[..], &other.v[..])
            }
        }

        impl subtle::ConditionallySelectable for $elem<'_> {
            fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
                Self {
                    v: subtle::ConditionallySelectable::conditional_select(&a.v, &b.v, choice),
                    ..*a
                }
            }
        }

        impl zeroize::Zeroize for $elem<'_> {
            fn zeroize(&mut self) {
                zeroize::Zeroize::zeroize(&mut self.v);
            }
        }

        impl core::fmt::Debug for $elem<'_> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($elem), "({:#x})"), self.to_vint())
            }
        }

        impl_ref_ops!($elem);
    };
}

/// Given `&T op &T` and `-&T`, implements the owned and mixed operand forms,
/// the assigning operators, equality and `Neg` on owned values.
macro_rules! impl_ref_ops {
    ($elem:ident) => {
        impl_ref_ops!(@binop $elem, Add, add, AddAssign, add_assign);
        impl_ref_ops!(@binop $elem, Sub, sub, SubAssign, sub_assign);
        impl_ref_ops!(@binop $elem, Mul, mul, MulAssign, mul_assign);

        impl<'a> core::ops::Neg for $elem<'a> {
            type Output = $elem<'a>;

            #[inline]
            fn neg(self) -> $elem<'a> {
                -&self
            }
        }

        impl PartialEq for $elem<'_> {
            fn eq(&self, other: &Self) -> bool {
                subtle::ConstantTimeEq::ct_eq(self, other).into()
            }
        }

        impl Eq for $elem<'_> {}
    };

    (@binop $elem:ident, $op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) => {
        impl<'a> core::ops::$op<$elem<'a>> for $elem<'a> {
            type Output = $elem<'a>;

            #[inline]
            fn $op_fn(self, rhs: $elem<'a>) -> $elem<'a> {
                <&$elem<'a> as core::ops::$op<&$elem<'a>>>::$op_fn(&self, &rhs)
            }
        }

        impl<'a> core::ops::$op<&$elem<'a>> for $elem<'a> {
            type Output = $elem<'a>;

            #[inline]
            fn $op_fn(self, rhs: &$elem<'a>) -> $elem<'a> {
                <&$elem<'a> as core::ops::$op<&$elem<'a>>>::$op_fn(&self, rhs)
            }
        }

        impl<'a> core::ops::$op<$elem<'a>> for &$elem<'a> {
            type Output = $elem<'a>;

            #[inline]
            fn $op_fn(self, rhs: $elem<'a>) -> $elem<'a> {
                <&$elem<'a> as core::ops::$op<&$elem<'a>>>::$op_fn(self, &rhs)
            }
        }

        impl<'a> core::ops::$assign<$elem<'a>> for $elem<'a> {
            #[inline]
            fn $assign_fn(&mut self, rhs: $elem<'a>) {
                *self = <&$elem<'a> as core::ops::$op<&$elem<'a>>>::$op_fn(self, &rhs);
            }
        }

        impl<'a> core::ops::$assign<&$elem<'a>> for $elem<'a> {
            #[inline]
            fn $assign_fn(&mut self, rhs: &$elem<'a>) {
                *self = <&$elem<'a> as core::ops::$op<&$elem<'a>>>::$op_fn(self, rhs);
            }
        }
    };
}
