// pf-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, MassDensity as UomMassDensity, Power as UomPower,
    Pressure as UomPressure, Ratio as UomRatio, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn lps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_second;
    VolumeRate::new::<liter_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn watt(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    use super::*;

    /// Standard gravity (m/s²)
    pub const G0_MPS2: f64 = 9.806_65;

    /// Standard atmospheric pressure (kPa)
    pub const P_ATM_KPA: f64 = 101.325;

    /// Conversion factor mmHg → kPa
    pub const MMHG_TO_KPA: f64 = 0.133_322;

    /// Conversion factor kW → HP
    pub const KW_PER_HP: f64 = 0.746;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }

    #[inline]
    pub fn p_atm() -> Pressure {
        kpa(P_ATM_KPA)
    }
}
