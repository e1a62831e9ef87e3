//! Size classes - canonical (radius, mass) profiles
//!
//! Radius is in plane units (`PLANE_WIDTH` = 100): small 1, medium 1.5,
//! large 2. Heavier classes spawn slower via a smaller `speed_scale`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Side length of the square simulation domain `[0, PLANE_WIDTH]^2`
pub const PLANE_WIDTH: f64 = 100.0;

/// Absolute tolerance used when matching a particle against a profile
pub const PROFILE_EPSILON: f64 = 1e-6;

/// Colors are packed as 0xAABBGGRR (canvas ImageData byte order)
pub const COLOR_SMALL: u32 = 0xFF3C14DC;
pub const COLOR_MEDIUM: u32 = 0xFF32CD32;
pub const COLOR_LARGE: u32 = 0xFFE16941;
/// Used for particles that belong to no size class
pub const COLOR_UNCLASSIFIED: u32 = 0xFF808080;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small = 0,
    Medium = 1,
    Large = 2,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    pub fn key(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "small" => Some(SizeClass::Small),
            "medium" => Some(SizeClass::Medium),
            "large" => Some(SizeClass::Large),
            _ => None,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(SizeClass::Small),
            1 => Some(SizeClass::Medium),
            2 => Some(SizeClass::Large),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn canonical_profile(self) -> SizeProfile {
        match self {
            SizeClass::Small => SizeProfile {
                radius: 1.0,
                mass: 1.0,
                speed_scale: 0.5,
                color: COLOR_SMALL,
            },
            SizeClass::Medium => SizeProfile {
                radius: 1.5,
                mass: 2.0,
                speed_scale: 0.375,
                color: COLOR_MEDIUM,
            },
            SizeClass::Large => SizeProfile {
                radius: 2.0,
                mass: 3.0,
                speed_scale: 0.25,
                color: COLOR_LARGE,
            },
        }
    }
}

/// Shape, inertia and spawn-speed settings of one size class
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeProfile {
    pub radius: f64,
    pub mass: f64,
    /// Spawn velocity components are drawn from `[0, radius * speed_scale]`
    pub speed_scale: f64,
    pub color: u32,
}

impl SizeProfile {
    /// Upper bound of each spawned velocity component
    #[inline]
    pub fn max_spawn_speed(&self) -> f64 {
        self.radius * self.speed_scale
    }

    #[inline]
    pub fn matches(&self, radius: f64, mass: f64) -> bool {
        (self.radius - radius).abs() <= PROFILE_EPSILON
            && (self.mass - mass).abs() <= PROFILE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_profiles() {
        let small = SizeClass::Small.canonical_profile();
        assert_eq!((small.radius, small.mass), (1.0, 1.0));
        assert_eq!(small.max_spawn_speed(), 0.5);

        let medium = SizeClass::Medium.canonical_profile();
        assert_eq!((medium.radius, medium.mass), (1.5, 2.0));
        assert_eq!(medium.max_spawn_speed(), 0.5625);

        let large = SizeClass::Large.canonical_profile();
        assert_eq!((large.radius, large.mass), (2.0, 3.0));
        assert_eq!(large.max_spawn_speed(), 0.5);
    }

    #[test]
    fn keys_and_ids_round_trip() {
        for class in SizeClass::ALL {
            assert_eq!(SizeClass::from_key(class.key()), Some(class));
            assert_eq!(SizeClass::from_id(class as u8), Some(class));
        }
        assert_eq!(SizeClass::from_key("huge"), None);
        assert_eq!(SizeClass::from_id(3), None);
    }

    #[test]
    fn matching_is_epsilon_tolerant() {
        let small = SizeClass::Small.canonical_profile();
        assert!(small.matches(1.0, 1.0));
        assert!(small.matches(1.0 + 1e-9, 1.0 - 1e-9));
        assert!(!small.matches(1.01, 1.0));
        assert!(!small.matches(1.0, 2.0));
    }
}
