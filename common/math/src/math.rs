#![no_std]

use core::cmp::Ordering;

use common_constants::{BPS, BPS_PRECISION, RAY, RAY_PRECISION, WAD_PRECISION};
use common_errors::ERROR_MATH_OVERFLOW;

multiversx_sc::imports!();

/// Fixed-point helpers shared by the pool, the comptroller and the rate model.
///
/// Every operation works on the raw units of both operands before rescaling, so no precision
/// is dropped until the final truncation to the requested `precision`.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b` truncated to `precision`.
    fn mul_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let product = a.into_raw_units() * b.into_raw_units();
        self.rescale_raw_floor(product, a.scale() + b.scale(), precision)
    }

    /// `a / b` truncated to `precision`. Fails on a zero divisor.
    fn div_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (numerator, denominator) = self.div_operands(a, b, precision);
        self.to_decimal(numerator / denominator, precision)
    }

    /// `a / b` rounded up to `precision`. Fails on a zero divisor.
    fn div_ceil(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (numerator, denominator) = self.div_operands(a, b, precision);
        let quotient = (numerator + &denominator - 1u64) / denominator;
        self.to_decimal(quotient, precision)
    }

    fn div_operands(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> (BigUint, BigUint) {
        require!(
            b.into_raw_units() > &BigUint::zero(),
            ERROR_MATH_OVERFLOW
        );

        let numerator = a.into_raw_units() * &self.pow10(precision + b.scale());
        let denominator = b.into_raw_units() * &self.pow10(a.scale());
        (numerator, denominator)
    }

    /// `a - b`, failing instead of going below zero. Both operands must share a scale.
    fn sub_or_fail(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(a >= b, ERROR_MATH_OVERFLOW);
        a.clone() - b.clone()
    }

    /// `a - b` clamped at zero. Both operands must share a scale.
    fn sub_saturating(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a > b {
            a.clone() - b.clone()
        } else {
            self.to_decimal(BigUint::zero(), a.scale())
        }
    }

    fn rescale_raw_floor(
        &self,
        raw_value: BigUint,
        old_precision: NumDecimals,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let rescaled = match new_precision.cmp(&old_precision) {
            Ordering::Equal => raw_value,
            Ordering::Less => raw_value / self.pow10(old_precision - new_precision),
            Ordering::Greater => raw_value * self.pow10(new_precision - old_precision),
        };
        self.to_decimal(rescaled, new_precision)
    }

    fn pow10(&self, exponent: NumDecimals) -> BigUint {
        BigUint::from(10u64).pow(exponent as u32)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_ray(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn to_decimal_bps(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn ray(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn bps(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(BPS), BPS_PRECISION)
    }

    fn wad_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn ray_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(BigUint::zero())
    }

    fn bps_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_bps(BigUint::zero())
    }
}
